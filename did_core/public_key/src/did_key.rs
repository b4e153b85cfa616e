use crate::{error::PublicKeyError, Key};

pub const DID_KEY_PREFIX: &str = "did:key:";

impl Key {
    /// Parses a `did:key` identifier, with or without a key fragment
    /// (`did:key:z6Mk...#z6Mk...`), into the public key it encodes.
    pub fn from_did_key(did: &str) -> Result<Self, PublicKeyError> {
        let Some(method_specific_id) = did.strip_prefix(DID_KEY_PREFIX) else {
            return Err(PublicKeyError::NotDidKey(did.to_owned()));
        };
        let fingerprint = match method_specific_id.split_once('#') {
            Some((fingerprint, _fragment)) => fingerprint,
            None => method_specific_id,
        };
        if !fingerprint.starts_with('z') {
            return Err(PublicKeyError::NotDidKey(did.to_owned()));
        }
        Self::from_fingerprint(fingerprint)
    }

    pub fn did_key(&self) -> String {
        format!("{DID_KEY_PREFIX}{}", self.fingerprint())
    }
}
