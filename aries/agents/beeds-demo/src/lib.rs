//! Issuer (`boe`) and holder (`beed_user`) runners of the BEEDS demo. The
//! issuer hands out single-use out-of-band invitations, the holder consumes
//! them.

#[macro_use]
extern crate log;

pub mod agent;
pub mod error;
pub mod handlers;
pub mod storage;
pub mod utils;

pub use error::*;
