use thiserror::Error;

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum AgentErrorKind {
    #[error("Ledger network is unreachable")]
    LedgerUnreachable,
    #[error("Invalid out-of-band invitation")]
    InvalidInvitation,
    #[error("Invitation has already been consumed")]
    InvitationAlreadyConsumed,
    #[error("Revocation mode requires a prior run of the issuer in the same ledger session")]
    RevocationOutOfOrder,
    #[error("Object not found")]
    NotFound,
    #[error("Unable to lock storage")]
    LockError,
    #[error("I/O error")]
    IoError,
    #[error("Serialization error")]
    SerializationError,
    #[error("Invalid configuration")]
    ConfigError,
    #[error("Key generation failed")]
    KeyError,
}
