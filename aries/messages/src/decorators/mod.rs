//! Module containing the message decorators used by the out-of-band protocol, such as `~timing`.

pub mod timing;
