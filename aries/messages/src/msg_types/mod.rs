//! Message type resolution: the `@type` of a DIDComm v1 message is made of a
//! [`Protocol`] (name and semver version) followed by a message kind, e.g:
//! `https://didcomm.org/out-of-band/1.1/invitation`.

pub mod protocols;
pub mod registry;
pub mod traits;

use std::{fmt::Display, str::FromStr};

use derive_more::From;
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

use self::{
    protocols::{
        connection::{ConnectionType, ConnectionTypeV1},
        did_exchange::{DidExchangeType, DidExchangeTypeV1},
        out_of_band::{OutOfBandType, OutOfBandTypeV1},
    },
    traits::ProtocolName,
};
use crate::error::{MsgTypeError, MsgTypeResult};

/// Type representing all protocols that are currently supported.
///
/// They are composed from protocol names, protocol major versions and protocol minor versions.
/// The protocol message kind types, while linked to their respective protocol versions,
/// are treated adjacently to this enum.
#[derive(Clone, Copy, Debug, From, PartialEq, Eq, Hash)]
pub enum Protocol {
    OutOfBandType(OutOfBandType),
    DidExchangeType(DidExchangeType),
    ConnectionType(ConnectionType),
}

/// Utility macro to avoid harder to read and error prone calling
/// of the version resolution method on the correct type.
macro_rules! match_protocol {
    ($type:ident, $protocol:expr, $major:expr, $minor:expr) => {
        if $protocol == $type::PROTOCOL {
            return Ok(Self::$type($type::try_from_version_parts($major, $minor)?));
        }
    };
}

impl Protocol {
    pub const DID_COM_ORG_PREFIX: &'static str = "https://didcomm.org";
    pub const DID_SOV_PREFIX: &'static str = "did:sov:BzCbsNYhMrjHiqZDTUASHg;spec";

    /// Tries to construct a [`Protocol`] from parts, resolving the minor version
    /// against the protocol registry.
    ///
    /// # Errors:
    ///
    /// An error is returned if the protocol name is unknown or no compatible
    /// version is supported.
    pub fn from_parts(protocol: &str, major: u8, minor: u8) -> MsgTypeResult<Self> {
        match_protocol!(OutOfBandType, protocol, major, minor);
        match_protocol!(DidExchangeType, protocol, major, minor);
        match_protocol!(ConnectionType, protocol, major, minor);

        Err(MsgTypeError::unknown_protocol(protocol.to_owned()))
    }

    /// Returns the parts that this [`Protocol`] is comprised of.
    pub fn as_parts(&self) -> (&'static str, u8, u8) {
        match &self {
            Self::OutOfBandType(v) => v.as_protocol_parts(),
            Self::DidExchangeType(v) => v.as_protocol_parts(),
            Self::ConnectionType(v) => v.as_protocol_parts(),
        }
    }

    /// Whether this protocol can be offered in the `handshake_protocols` of an invitation.
    pub fn is_handshake(&self) -> bool {
        matches!(self, Self::DidExchangeType(_) | Self::ConnectionType(_))
    }

    /// Steps the provided iterator of parts and returns the string slice element.
    ///
    /// # Errors:
    ///
    /// Will return an error if the iterator returns [`None`].
    fn next_part<'a, I>(iter: &mut I, name: &'static str) -> MsgTypeResult<&'a str>
    where
        I: Iterator<Item = &'a str>,
    {
        iter.next().ok_or_else(|| MsgTypeError::not_found(name))
    }
}

impl From<OutOfBandTypeV1> for Protocol {
    fn from(value: OutOfBandTypeV1) -> Self {
        Self::OutOfBandType(OutOfBandType::V1(value))
    }
}

impl From<DidExchangeTypeV1> for Protocol {
    fn from(value: DidExchangeTypeV1) -> Self {
        Self::DidExchangeType(DidExchangeType::V1(value))
    }
}

impl From<ConnectionTypeV1> for Protocol {
    fn from(value: ConnectionTypeV1) -> Self {
        Self::ConnectionType(ConnectionType::V1(value))
    }
}

impl Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = Self::DID_COM_ORG_PREFIX;
        let (protocol, major, minor) = self.as_parts();
        write!(f, "{prefix}/{protocol}/{major}.{minor}")
    }
}

impl FromStr for Protocol {
    type Err = MsgTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The rest of the type is segmented by forward slashes, but the prefix
        // itself is stripped first since the HTTPS one contains slashes as well.
        let rest = if let Some(rest) = s.strip_prefix(Self::DID_COM_ORG_PREFIX) {
            rest
        } else if let Some(rest) = s.strip_prefix(Self::DID_SOV_PREFIX) {
            rest
        } else {
            return Err(MsgTypeError::unknown_prefix(s.to_owned()));
        };

        let mut iter = rest.split('/');

        // Skip the empty segment preceding the first slash.
        if Protocol::next_part(&mut iter, "prefix separator")? != "" {
            return Err(MsgTypeError::unknown_prefix(s.to_owned()));
        }

        let protocol_name = Protocol::next_part(&mut iter, "protocol name")?;
        let version = Protocol::next_part(&mut iter, "protocol version")?;

        if iter.next().is_some() {
            return Err(MsgTypeError::unknown_protocol(s.to_owned()));
        }

        let mut version_iter = version.split('.');

        let major = Protocol::next_part(&mut version_iter, "protocol major version")?.parse()?;
        let minor = Protocol::next_part(&mut version_iter, "protocol minor version")?.parse()?;

        Protocol::from_parts(protocol_name, major, minor)
    }
}

impl TryFrom<&str> for Protocol {
    type Error = MsgTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

impl<'de> Deserialize<'de> for Protocol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let protocol_str = String::deserialize(deserializer)?;
        Protocol::from_str(&protocol_str).map_err(D::Error::custom)
    }
}

impl Serialize for Protocol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let prefix = Self::DID_COM_ORG_PREFIX;
        let (protocol, major, minor) = self.as_parts();
        format_args!("{prefix}/{protocol}/{major}.{minor}").serialize(serializer)
    }
}

/// A fully qualified message type. Used to determine what kind of message
/// some JSON holds before deserializing it into the concrete struct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageType<'a> {
    /// The [`Protocol`] part of the message type (e.g: `https://didcomm.org/out-of-band/1.1`)
    pub protocol: Protocol,
    /// The message kind of the specific protocol (e.g: `invitation`)
    pub kind: &'a str,
}

impl<'a> TryFrom<&'a str> for MessageType<'a> {
    type Error = MsgTypeError;

    fn try_from(msg_type_str: &'a str) -> Result<Self, Self::Error> {
        // Split (from the right) at the first '/'.
        // The first element will be the string repr of the protocol
        // while the second will be the message kind.
        let Some((protocol_str, kind)) = msg_type_str.rsplit_once('/') else {
            return Err(MsgTypeError::not_found("message kind"));
        };

        let protocol = Protocol::from_str(protocol_str)?;
        Ok(Self { protocol, kind })
    }
}

impl Display for MessageType<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.protocol, self.kind)
    }
}
