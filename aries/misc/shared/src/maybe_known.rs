use serde::{Deserialize, Serialize};

/// Enum used to encapsulate `string-like` types which may
/// have variants we haven't implement yet.
///
/// Deserialization will be first attempted to the [`MaybeKnown::Known`] variant
/// and then, if that fails, to the [`MaybeKnown::Unknown`] variant.
///
/// E.g: a handshake protocol advertised in an invitation which might represent
/// a new protocol or simply a new major version.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MaybeKnown<T, U = String> {
    Known(T),
    Unknown(U),
}

impl<T, U> MaybeKnown<T, U> {
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn known(&self) -> Option<&T> {
        match self {
            Self::Known(v) => Some(v),
            Self::Unknown(_) => None,
        }
    }
}
