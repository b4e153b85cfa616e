use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::PublicKeyError;

/// Key types that may appear as recipient or routing keys of a DIDComm v1 service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    Ed25519,
    X25519,
}

impl KeyType {
    /// Code from the [multicodec table](<https://github.com/multiformats/multicodec/blob/master/table.csv>).
    pub const fn multicodec_code(self) -> u64 {
        match self {
            KeyType::Ed25519 => 0xed,
            KeyType::X25519 => 0xec,
        }
    }

    pub const fn key_len(self) -> usize {
        match self {
            KeyType::Ed25519 | KeyType::X25519 => 32,
        }
    }
}

impl TryFrom<u64> for KeyType {
    type Error = PublicKeyError;

    fn try_from(code: u64) -> Result<Self, Self::Error> {
        [KeyType::Ed25519, KeyType::X25519]
            .into_iter()
            .find(|key_type| key_type.multicodec_code() == code)
            .ok_or(PublicKeyError::UnsupportedMulticodecDescriptor(code))
    }
}

impl Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            KeyType::Ed25519 => "Ed25519",
            KeyType::X25519 => "X25519",
        };
        f.write_str(name)
    }
}
