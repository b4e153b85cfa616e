use regex::Regex;

use crate::errors::validation::{ValidationError, ValidationErrorKind, ValidationResult};

const UNQUALIFIED_DID_LEN: usize = 16;

lazy_static! {
    static ref QUALIFIED_DID: Regex =
        Regex::new("^did:([a-z0-9]+):([a-zA-Z0-9:._%-]+)(#.*)?$").expect("unexpected regex error occurred.");
}

pub fn is_fully_qualified(entity: &str) -> bool {
    QUALIFIED_DID.is_match(entity)
}

/// Validates a DID given as an out-of-band service: either fully qualified
/// (`did:<method>:<id>`, optionally with a fragment) or an unqualified Indy
/// DID, the base58 encoding of 16 bytes.
pub fn validate_did(did: &str) -> ValidationResult<String> {
    if is_fully_qualified(did) {
        return Ok(did.to_string());
    }

    let decoded = bs58::decode(did).into_vec().map_err(|err| {
        ValidationError::from_msg(
            ValidationErrorKind::NotBase58,
            format!("DID {did} is neither qualified nor base58: {err}"),
        )
    })?;
    if decoded.len() != UNQUALIFIED_DID_LEN {
        return Err(ValidationError::from_msg(
            ValidationErrorKind::InvalidDid,
            format!(
                "Unqualified DID {did} decodes to {} bytes, expected {UNQUALIFIED_DID_LEN}",
                decoded.len()
            ),
        ));
    }
    Ok(did.to_string())
}
