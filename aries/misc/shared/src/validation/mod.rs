pub mod did;
pub mod url;
pub mod verkey;
