#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod base64;
pub mod errors;
pub mod http_client;
pub mod maybe_known;
pub mod validation;
