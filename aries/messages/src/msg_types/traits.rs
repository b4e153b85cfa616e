use crate::error::MsgTypeResult;

/// Implemented by each protocol type, binding the protocol name used in
/// message types (e.g: `out-of-band`) to its supported versions.
pub trait ProtocolName: Sized {
    const PROTOCOL: &'static str;

    fn try_from_version_parts(major: u8, minor: u8) -> MsgTypeResult<Self>;

    fn as_protocol_parts(&self) -> (&'static str, u8, u8);
}

/// Implemented by the major version enums of each protocol.
pub trait MajorVersion: Sized + Copy {
    const MAJOR: u8;

    fn try_from_minor(minor: u8) -> MsgTypeResult<Self>;

    fn minor(&self) -> u8;

    fn as_version_parts(&self) -> (u8, u8) {
        (Self::MAJOR, self.minor())
    }
}
