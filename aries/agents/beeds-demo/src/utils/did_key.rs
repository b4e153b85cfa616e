use ed25519_dalek::SigningKey;
use public_key::{Key, KeyType};
use rand::rngs::OsRng;

use crate::error::AgentResult;

/// Generates a fresh ed25519 key pair. Returns the signing key and the
/// `did:key` of its verifying half, as advertised in `recipientKeys`.
pub fn generate_did_key() -> AgentResult<(SigningKey, String)> {
    let signing_key = SigningKey::generate(&mut OsRng);
    let verkey = Key::new(
        signing_key.verifying_key().to_bytes().to_vec(),
        KeyType::Ed25519,
    )?;
    Ok((signing_key, verkey.did_key()))
}
