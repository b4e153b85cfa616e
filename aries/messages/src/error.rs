use std::{error::Error, fmt, num::ParseIntError};

use shared::errors::validation::ValidationError;
use thiserror::Error as ThisError;

/// Errors raised while resolving a message `@type` into a [`crate::msg_types::Protocol`]
/// and message kind.
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum MsgTypeError {
    #[error("Unknown message type prefix: {0}")]
    UnknownPrefix(String),
    #[error("Unknown protocol name: {0}")]
    UnknownProtocol(String),
    #[error("Unsupported version {major}.{minor} of protocol {protocol}")]
    UnsupportedVersion {
        protocol: &'static str,
        major: u8,
        minor: u8,
    },
    #[error("Unknown message kind: {0}")]
    UnknownKind(String),
    #[error("Message type part not found: {0}")]
    PartNotFound(&'static str),
    #[error("Could not parse protocol version: {0}")]
    InvalidVersion(#[from] ParseIntError),
}

impl MsgTypeError {
    pub fn not_found(part: &'static str) -> Self {
        Self::PartNotFound(part)
    }

    pub fn unknown_protocol(name: String) -> Self {
        Self::UnknownProtocol(name)
    }

    pub fn unknown_prefix(prefix: String) -> Self {
        Self::UnknownPrefix(prefix)
    }

    pub fn unknown_kind(kind: String) -> Self {
        Self::UnknownKind(kind)
    }

    pub fn unsupported_version(protocol: &'static str, major: u8, minor: u8) -> Self {
        Self::UnsupportedVersion {
            protocol,
            major,
            minor,
        }
    }
}

pub type MsgTypeResult<T> = Result<T, MsgTypeError>;

#[derive(Copy, Clone, Eq, PartialEq, Debug, ThisError)]
pub enum MessagesErrorKind {
    #[error("Invalid JSON string")]
    InvalidJson,
    #[error("Unable to serialize")]
    SerializationError,
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("Value is not valid base64url")]
    Base64Decoding,
    #[error("Invalid out-of-band invitation")]
    InvalidInvitation,
    #[error("Invitation has expired")]
    StaleInvitation,
    #[error("Invitation does not list any handshake protocol")]
    MissingHandshake,
    #[error("Invitation does not list any service")]
    MissingService,
    #[error("Service does not list any recipient key")]
    MissingRecipientKey,
    #[error("Invalid recipient or routing key")]
    InvalidRecipientKey,
    #[error("Invalid service endpoint")]
    InvalidServiceEndpoint,
    #[error("Invalid DID")]
    InvalidDid,
    #[error("Action not supported")]
    ActionNotSupported,
}

#[derive(Debug, ThisError)]
pub struct MessagesError {
    msg: String,
    kind: MessagesErrorKind,
}

impl fmt::Display for MessagesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error: {}\n", self.msg)?;
        let mut current = self.source();
        while let Some(cause) = current {
            writeln!(f, "Caused by:\n\t{cause}")?;
            current = cause.source();
        }
        Ok(())
    }
}

impl MessagesError {
    pub fn from_msg<D>(kind: MessagesErrorKind, msg: D) -> MessagesError
    where
        D: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        MessagesError {
            msg: msg.to_string(),
            kind,
        }
    }

    pub fn kind(&self) -> MessagesErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl From<serde_json::Error> for MessagesError {
    fn from(err: serde_json::Error) -> Self {
        MessagesError::from_msg(
            MessagesErrorKind::InvalidJson,
            format!("Cannot deserialize out of band message: {err}"),
        )
    }
}

impl From<url::ParseError> for MessagesError {
    fn from(err: url::ParseError) -> Self {
        MessagesError::from_msg(MessagesErrorKind::InvalidUrl, err.to_string())
    }
}

impl From<base64::DecodeError> for MessagesError {
    fn from(err: base64::DecodeError) -> Self {
        MessagesError::from_msg(MessagesErrorKind::Base64Decoding, err.to_string())
    }
}

impl From<MsgTypeError> for MessagesError {
    fn from(err: MsgTypeError) -> Self {
        MessagesError::from_msg(MessagesErrorKind::ActionNotSupported, err.to_string())
    }
}

impl From<ValidationError> for MessagesError {
    fn from(err: ValidationError) -> Self {
        use shared::errors::validation::ValidationErrorKind;

        let kind = match err.kind() {
            ValidationErrorKind::InvalidDid => MessagesErrorKind::InvalidDid,
            ValidationErrorKind::InvalidVerkey | ValidationErrorKind::NotBase58 => {
                MessagesErrorKind::InvalidRecipientKey
            }
            ValidationErrorKind::InvalidUrl => MessagesErrorKind::InvalidServiceEndpoint,
        };
        MessagesError::from_msg(kind, err.msg().to_owned())
    }
}

pub type MessagesResult<T> = Result<T, MessagesError>;
