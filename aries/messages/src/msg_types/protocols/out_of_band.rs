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
pub enum OutOfBandType {
    V1(OutOfBandTypeV1),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OutOfBandTypeV1 {
    V1_0,
    V1_1,
}

impl OutOfBandTypeV1 {
    pub fn new_v1_0() -> Self {
        Self::V1_0
    }

    pub fn new_v1_1() -> Self {
        Self::V1_1
    }
}

impl MajorVersion for OutOfBandTypeV1 {
    const MAJOR: u8 = 1;

    fn try_from_minor(minor: u8) -> MsgTypeResult<Self> {
        match minor {
            0 => Ok(Self::V1_0),
            1 => Ok(Self::V1_1),
            _ => Err(MsgTypeError::unsupported_version(
                OutOfBandType::PROTOCOL,
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

impl ProtocolName for OutOfBandType {
    const PROTOCOL: &'static str = "out-of-band";

    fn try_from_version_parts(major: u8, minor: u8) -> MsgTypeResult<Self> {
        let resolved = get_supported_version(Self::PROTOCOL, major, minor)
            .ok_or_else(|| MsgTypeError::unsupported_version(Self::PROTOCOL, major, minor))?;

        match major {
            OutOfBandTypeV1::MAJOR => OutOfBandTypeV1::try_from_minor(resolved).map(Self::V1),
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

/// Message kinds of the out-of-band protocol, identical across its 1.x versions.
#[derive(Copy, Clone, Debug, AsRefStr, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum OutOfBandTypeV1Kind {
    Invitation,
    HandshakeReuse,
    HandshakeReuseAccepted,
}
