use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::KeyType;
use crate::error::PublicKeyError;

/// Raw public key bytes tagged with their [`KeyType`]. The byte length always
/// matches the key type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    key_type: KeyType,
    key: Vec<u8>,
}

impl Key {
    /// Accepts either the raw key or the key prefixed with the multicodec
    /// code of `key_type`.
    pub fn new(key: Vec<u8>, key_type: KeyType) -> Result<Self, PublicKeyError> {
        match without_multicodec_prefix(&key, key_type) {
            Some(raw) => Self::sized(key_type, raw.to_vec()),
            None => Self::sized(key_type, key),
        }
    }

    pub fn from_fingerprint(fingerprint: &str) -> Result<Self, PublicKeyError> {
        let (_base, bytes) = multibase::decode(fingerprint)?;
        let (code, raw) = unsigned_varint::decode::u64(&bytes)?;
        Self::sized(KeyType::try_from(code)?, raw.to_vec())
    }

    pub fn from_base58(base58: &str, key_type: KeyType) -> Result<Self, PublicKeyError> {
        Self::sized(key_type, bs58::decode(base58).into_vec()?)
    }

    fn sized(key_type: KeyType, key: Vec<u8>) -> Result<Self, PublicKeyError> {
        if key.len() != key_type.key_len() {
            return Err(PublicKeyError::InvalidKeyLength {
                key_type,
                expected: key_type.key_len(),
                actual: key.len(),
            });
        }
        Ok(Self { key_type, key })
    }

    pub fn key_type(&self) -> &KeyType {
        &self.key_type
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn multicodec_prefixed_key(&self) -> Vec<u8> {
        let mut buffer = unsigned_varint::encode::u64_buffer();
        let code = unsigned_varint::encode::u64(self.key_type.multicodec_code(), &mut buffer);
        [code, self.key.as_slice()].concat()
    }

    /// Multibase (base58btc) encoding of the multicodec prefixed key, as used
    /// in `did:key` identifiers.
    pub fn fingerprint(&self) -> String {
        multibase::encode(multibase::Base::Base58Btc, self.multicodec_prefixed_key())
    }

    pub fn base58(&self) -> String {
        bs58::encode(&self.key).into_string()
    }
}

fn without_multicodec_prefix(bytes: &[u8], key_type: KeyType) -> Option<&[u8]> {
    if bytes.len() == key_type.key_len() {
        return None;
    }
    match unsigned_varint::decode::u64(bytes) {
        Ok((code, raw)) if code == key_type.multicodec_code() => Some(raw),
        _ => None,
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base58())
    }
}
