use public_key::{Key, KeyType, PublicKeyError, DID_KEY_PREFIX};

use crate::errors::validation::{ValidationError, ValidationErrorKind, ValidationResult};

pub fn validate_verkey(verkey: &str) -> ValidationResult<String> {
    match Key::from_base58(verkey, KeyType::Ed25519) {
        Ok(_) => Ok(verkey.to_string()),
        Err(PublicKeyError::Base58DecodingError(err)) => Err(ValidationError::from_msg(
            ValidationErrorKind::NotBase58,
            format!("Verkey is not valid base58, details: {err}"),
        )),
        Err(err) => Err(ValidationError::from_msg(
            ValidationErrorKind::InvalidVerkey,
            format!("Invalid verkey: {err}"),
        )),
    }
}

/// Validates a key reference as found in `recipientKeys` / `routingKeys`:
/// either a `did:key` identifier or a raw base58 ed25519 verkey.
pub fn validate_key_reference(key_ref: &str) -> ValidationResult<Key> {
    if key_ref.starts_with(DID_KEY_PREFIX) {
        Key::from_did_key(key_ref).map_err(|err| {
            ValidationError::from_msg(
                ValidationErrorKind::InvalidVerkey,
                format!("Invalid did:key reference {key_ref}: {err}"),
            )
        })
    } else {
        validate_verkey(key_ref)?;
        Key::from_base58(key_ref, KeyType::Ed25519).map_err(|err| {
            ValidationError::from_msg(ValidationErrorKind::InvalidVerkey, err.to_string())
        })
    }
}
