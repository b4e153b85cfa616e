use thiserror::Error;

use crate::KeyType;

#[derive(Debug, Error)]
pub enum PublicKeyError {
    #[error("Base 58 decoding error")]
    Base58DecodingError(#[from] bs58::decode::Error),
    #[error("Multibase decoding error")]
    MultibaseDecodingError(#[from] multibase::Error),
    #[error("Malformed multicodec prefix: {0}")]
    MulticodecPrefixError(unsigned_varint::decode::Error),
    #[error("Unsupported multicodec descriptor: {0}")]
    UnsupportedMulticodecDescriptor(u64),
    #[error("Invalid key length for {key_type}: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        key_type: KeyType,
        expected: usize,
        actual: usize,
    },
    #[error("Not a did:key identifier: {0}")]
    NotDidKey(String),
}

impl From<unsigned_varint::decode::Error> for PublicKeyError {
    fn from(error: unsigned_varint::decode::Error) -> Self {
        Self::MulticodecPrefixError(error)
    }
}
