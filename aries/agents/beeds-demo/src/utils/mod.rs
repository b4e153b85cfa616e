pub mod did_key;
pub mod prompt;
pub mod qr;
