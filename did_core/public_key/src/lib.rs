mod did_key;
mod error;
mod key;
mod key_type;

pub use did_key::DID_KEY_PREFIX;
pub use error::PublicKeyError;
pub use key::Key;
pub use key_type::KeyType;
