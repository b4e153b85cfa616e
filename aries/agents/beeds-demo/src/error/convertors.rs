use std::convert::From;

use messages::error::{MessagesError, MessagesErrorKind};
use shared::errors::http_error::HttpError;

use crate::error::*;

impl From<MessagesError> for AgentError {
    fn from(err: MessagesError) -> AgentError {
        let kind = match err.kind() {
            MessagesErrorKind::SerializationError => AgentErrorKind::SerializationError,
            _ => AgentErrorKind::InvalidInvitation,
        };
        error!("Messages Error: {}", err.msg());
        let message = format!("Messages Error: {}", err.msg());
        AgentError { message, kind }
    }
}

impl From<serde_json::Error> for AgentError {
    fn from(serde_err: serde_json::Error) -> AgentError {
        let kind = AgentErrorKind::SerializationError;
        let message = format!("(De)serialization failed; err: {:?}", serde_err.to_string());
        AgentError { message, kind }
    }
}

impl From<HttpError> for AgentError {
    fn from(err: HttpError) -> Self {
        let kind = AgentErrorKind::LedgerUnreachable;
        let message = format!("HttpError; err: {:?}", err.msg());
        AgentError { message, kind }
    }
}

impl From<public_key::PublicKeyError> for AgentError {
    fn from(err: public_key::PublicKeyError) -> Self {
        let kind = AgentErrorKind::KeyError;
        let message = format!("PublicKeyError; err: {:?}", err.to_string());
        AgentError { message, kind }
    }
}

impl From<std::io::Error> for AgentError {
    fn from(err: std::io::Error) -> Self {
        let kind = AgentErrorKind::IoError;
        let message = format!("IoError; err: {:?}", err.to_string());
        AgentError { message, kind }
    }
}

impl From<qrcode::types::QrError> for AgentError {
    fn from(err: qrcode::types::QrError) -> Self {
        let kind = AgentErrorKind::SerializationError;
        let message = format!("QrError; err: {:?}", err.to_string());
        AgentError { message, kind }
    }
}

impl From<url::ParseError> for AgentError {
    fn from(err: url::ParseError) -> Self {
        let kind = AgentErrorKind::ConfigError;
        let message = format!("UrlParseError; err: {:?}", err.to_string());
        AgentError { message, kind }
    }
}
