use std::fmt;

/// Why a DID, key or endpoint found in a message was rejected.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ValidationErrorKind {
    #[error("Invalid DID")]
    InvalidDid,
    #[error("Invalid verkey")]
    InvalidVerkey,
    #[error("Value needs to be base58")]
    NotBase58,
    #[error("Invalid URL")]
    InvalidUrl,
}

#[derive(Debug, thiserror::Error)]
#[error("{kind}: {msg}")]
pub struct ValidationError {
    msg: String,
    kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn from_msg<D>(kind: ValidationErrorKind, msg: D) -> ValidationError
    where
        D: fmt::Display,
    {
        ValidationError {
            msg: msg.to_string(),
            kind,
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
