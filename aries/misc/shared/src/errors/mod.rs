pub mod http_error;
pub mod validation;
