pub mod receiver;
pub mod sender;

use messages::{
    msg_types::{
        protocols::did_exchange::{DidExchangeType, DidExchangeTypeV1},
        Protocol,
    },
    AriesService, Invitation, OobGoalCode, OobService,
};

use self::{receiver::OutOfBandReceiver, sender::OutOfBandSender};
use crate::{
    error::*,
    storage::invitation_store::{InvitationState, InvitationStore},
    utils::did_key::generate_did_key,
};

const ISSUER_GOAL: &str = "Issue a BEEDS credential";

/// Creates invitations on the issuer side and tracks received invitations
/// on the holder side.
#[derive(Debug)]
pub struct ServiceOutOfBand {
    label: String,
    service_endpoint: String,
    invitations: InvitationStore,
}

impl ServiceOutOfBand {
    pub fn new(label: &str, service_endpoint: &str) -> Self {
        Self {
            label: label.to_owned(),
            service_endpoint: service_endpoint.to_owned(),
            invitations: InvitationStore::new("out-of-band"),
        }
    }

    /// Builds a single-use invitation carrying a freshly generated recipient
    /// key, and keeps it as created.
    pub fn create_invitation(&self) -> AgentResult<OutOfBandSender> {
        let (_signing_key, recipient_key) = generate_did_key()?;
        let service = AriesService::builder()
            .id("#inline".to_owned())
            .recipient_keys(vec![recipient_key])
            .service_endpoint(self.service_endpoint.clone())
            .build();

        let sender = OutOfBandSender::create()
            .set_label(&self.label)
            .set_goal_code(OobGoalCode::IssueVC)
            .set_goal(ISSUER_GOAL)
            .append_service(&OobService::AriesService(service))
            .append_handshake_protocol(Protocol::DidExchangeType(DidExchangeType::V1(
                DidExchangeTypeV1::new_v1_0(),
            )))?;
        sender.validate()?;

        self.invitations
            .insert(sender.oob.clone(), InvitationState::Created)?;
        info!("Created invitation {}", sender.get_id());
        Ok(sender)
    }

    /// Decodes and validates pasted invitation details and records the
    /// invitation as received. Receiving an invitation that was already
    /// consumed fails.
    pub fn receive_invitation(&self, details: &str) -> AgentResult<OutOfBandReceiver> {
        let receiver = OutOfBandReceiver::create_from_details(details)?;
        let id = receiver.get_id();

        if self.invitations.contains_key(&id) {
            if self.invitations.state(&id)? == InvitationState::Consumed {
                return Err(AgentError::from_msg(
                    AgentErrorKind::InvitationAlreadyConsumed,
                    &format!("Invitation {id} has already been consumed"),
                ));
            }
        } else {
            self.invitations
                .insert(receiver.oob.clone(), InvitationState::Received)?;
        }
        Ok(receiver)
    }

    /// Marks the invitation as used. Succeeds once per invitation id.
    pub fn consume_invitation(&self, invitation_id: &str) -> AgentResult<Invitation> {
        let invitation = self.invitations.consume(invitation_id)?;
        info!("Consumed invitation {invitation_id}");
        Ok(invitation)
    }
}
