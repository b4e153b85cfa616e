#![allow(clippy::module_inception)]
#![allow(clippy::new_without_default)]

//! DIDComm v1 message types and the out-of-band invitation message, as
//! exchanged between the BEEDS issuer and holder agents.

#[macro_use]
extern crate log;

pub mod decorators;
pub mod error;
pub mod misc;
pub mod msg_fields;
pub mod msg_types;

pub use msg_fields::protocols::out_of_band::{
    decode_invitation_details,
    invitation::{Invitation, InvitationContent, InvitationDecorators, OobService},
    service::AriesService,
    OobGoalCode,
};
