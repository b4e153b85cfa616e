use std::collections::HashMap;

use lazy_static::lazy_static;

use super::Protocol;
use crate::msg_types::protocols::{
    connection::ConnectionTypeV1, did_exchange::DidExchangeTypeV1, out_of_band::OutOfBandTypeV1,
};

type RegistryMap = HashMap<(&'static str, u8), Vec<RegistryEntry>>;

/// An entry in the protocol registry.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    /// The [`Protocol`] instance corresponding to this entry
    pub protocol: Protocol,
    /// The minor version of in numeric (for easier semver resolution),
    pub minor: u8,
    /// A [`String`] representation of the *pid*
    pub str_pid: String,
}

fn map_insert(map: &mut RegistryMap, protocol: Protocol) {
    let (protocol_name, major, minor) = protocol.as_parts();

    let str_pid = format!(
        "{}/{}/{}.{}",
        Protocol::DID_COM_ORG_PREFIX,
        protocol_name,
        major,
        minor
    );
    let entry = RegistryEntry {
        protocol,
        minor,
        str_pid,
    };

    map.entry((protocol_name, major)).or_default().push(entry);
}

lazy_static! {
    /// The protocol registry, used as a baseline for the protocols and versions
    /// that an agent supports along with semver resolution.
    ///
    /// Keys are comprised of the protocol name and major version while
    /// the values are [`RegistryEntry`] instances, ordered by minor version.
    pub static ref PROTOCOL_REGISTRY: RegistryMap = {
        let mut m = HashMap::new();
        map_insert(&mut m, OutOfBandTypeV1::new_v1_0().into());
        map_insert(&mut m, OutOfBandTypeV1::new_v1_1().into());
        map_insert(&mut m, DidExchangeTypeV1::new_v1_0().into());
        map_insert(&mut m, DidExchangeTypeV1::new_v1_1().into());
        map_insert(&mut m, ConnectionTypeV1::new_v1_0().into());
        m
    };
}

/// Looks into the protocol registry for (in order):
/// * the exact protocol version requested
/// * the maximum minor version of a protocol less than the minor version requested (e.g: requesting
///   1.7 should yield 1.6).
pub fn get_supported_version(name: &'static str, major: u8, minor: u8) -> Option<u8> {
    PROTOCOL_REGISTRY
        .get(&(name, major))
        .and_then(|v| v.iter().rev().map(|r| r.minor).find(|v| *v <= minor))
}

/// Returns the string identifiers of every registered protocol version,
/// e.g: `https://didcomm.org/didexchange/1.1`.
pub fn supported_pids() -> Vec<&'static str> {
    let mut pids: Vec<_> = PROTOCOL_REGISTRY
        .values()
        .flatten()
        .map(|entry| entry.str_pid.as_str())
        .collect();
    pids.sort_unstable();
    pids
}
