use derive_more::From;
use strum_macros::{AsRefStr, EnumString};

use crate::{
    error::{MsgTypeError, MsgTypeResult},
    msg_types::{
        registry::get_supported_version,
        traits::{MajorVersion, ProtocolName},
    },
};

/// The legacy `connections` handshake (RFC 0160), still advertised by older agents.
#[derive(Copy, Clone, Debug, From, PartialEq, Eq, Hash)]
pub enum ConnectionType {
    V1(ConnectionTypeV1),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConnectionTypeV1 {
    V1_0,
}

impl ConnectionTypeV1 {
    pub fn new_v1_0() -> Self {
        Self::V1_0
    }
}

impl MajorVersion for ConnectionTypeV1 {
    const MAJOR: u8 = 1;

    fn try_from_minor(minor: u8) -> MsgTypeResult<Self> {
        match minor {
            0 => Ok(Self::V1_0),
            _ => Err(MsgTypeError::unsupported_version(
                ConnectionType::PROTOCOL,
                Self::MAJOR,
                minor,
            )),
        }
    }

    fn minor(&self) -> u8 {
        0
    }
}

impl ProtocolName for ConnectionType {
    const PROTOCOL: &'static str = "connections";

    fn try_from_version_parts(major: u8, minor: u8) -> MsgTypeResult<Self> {
        let resolved = get_supported_version(Self::PROTOCOL, major, minor)
            .ok_or_else(|| MsgTypeError::unsupported_version(Self::PROTOCOL, major, minor))?;

        match major {
            ConnectionTypeV1::MAJOR => ConnectionTypeV1::try_from_minor(resolved).map(Self::V1),
            _ => Err(MsgTypeError::unsupported_version(Self::PROTOCOL, major, minor)),
        }
    }

    fn as_protocol_parts(&self) -> (&'static str, u8, u8) {
        let (major, minor) = match self {
            Self::V1(v) => v.as_version_parts(),
        };
        (Self::PROTOCOL, major, minor)
    }
}

#[derive(Copy, Clone, Debug, AsRefStr, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum ConnectionTypeV1Kind {
    Invitation,
    Request,
    Response,
    ProblemReport,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{misc::test_utils, msg_types::Protocol};

    #[test]
    fn test_protocol_connections() {
        test_utils::test_serde(
            Protocol::from(ConnectionTypeV1::new_v1_0()),
            json!("https://didcomm.org/connections/1.0"),
        )
    }

    #[test]
    fn test_version_resolution_connections() {
        test_utils::test_msg_type_resolution(
            "https://didcomm.org/connections/1.7",
            ConnectionTypeV1::new_v1_0(),
        )
    }

    #[test]
    fn test_msg_type_request() {
        test_utils::test_msg_type(
            "https://didcomm.org/connections/1.0",
            "request",
            ConnectionTypeV1::new_v1_0(),
        )
    }
}
