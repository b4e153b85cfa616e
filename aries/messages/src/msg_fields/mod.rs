//! Module containing the fields of the messages of the implemented protocols.

pub mod protocols;
