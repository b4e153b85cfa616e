use derive_more::From;
use strum_macros::{AsRefStr, EnumString};

use crate::{
    error::{MsgTypeError, MsgTypeResult},
    msg_types::{
        registry::get_supported_version,
        traits::{MajorVersion, ProtocolName},
    },
};

#[derive(Copy, Clone, Debug, From, PartialEq, Eq, Hash)]
pub enum DidExchangeType {
    V1(DidExchangeTypeV1),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DidExchangeTypeV1 {
    V1_0,
    V1_1,
}

impl DidExchangeTypeV1 {
    pub fn new_v1_0() -> Self {
        Self::V1_0
    }

    pub fn new_v1_1() -> Self {
        Self::V1_1
    }
}

impl MajorVersion for DidExchangeTypeV1 {
    const MAJOR: u8 = 1;

    fn try_from_minor(minor: u8) -> MsgTypeResult<Self> {
        match minor {
            0 => Ok(Self::V1_0),
            1 => Ok(Self::V1_1),
            _ => Err(MsgTypeError::unsupported_version(
                DidExchangeType::PROTOCOL,
                Self::MAJOR,
                minor,
            )),
        }
    }

    fn minor(&self) -> u8 {
        match self {
            Self::V1_0 => 0,
            Self::V1_1 => 1,
        }
    }
}

impl ProtocolName for DidExchangeType {
    const PROTOCOL: &'static str = "didexchange";

    fn try_from_version_parts(major: u8, minor: u8) -> MsgTypeResult<Self> {
        let resolved = get_supported_version(Self::PROTOCOL, major, minor)
            .ok_or_else(|| MsgTypeError::unsupported_version(Self::PROTOCOL, major, minor))?;

        match major {
            DidExchangeTypeV1::MAJOR => DidExchangeTypeV1::try_from_minor(resolved).map(Self::V1),
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
pub enum DidExchangeTypeV1Kind {
    Request,
    Response,
    ProblemReport,
    Complete,
}
