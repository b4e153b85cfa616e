use messages::Invitation;

use super::{agent_storage_inmem::AgentStorageInMem, AgentStorage};
use crate::error::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvitationState {
    /// Created by this agent, waiting for an invitee.
    Created,
    /// Received from an inviter, not yet acted upon.
    Received,
    /// Used to start a handshake. Never acted upon again.
    Consumed,
}

#[derive(Clone, Debug)]
pub struct InvitationRecord {
    pub invitation: Invitation,
    pub state: InvitationState,
}

/// In-memory invitation records keyed by `@id`, each consumed at most once.
#[derive(Debug)]
pub struct InvitationStore {
    records: AgentStorageInMem<InvitationRecord>,
}

impl InvitationStore {
    pub fn new(name: &str) -> Self {
        Self {
            records: AgentStorageInMem::new(name),
        }
    }

    pub fn insert(&self, invitation: Invitation, state: InvitationState) -> AgentResult<String> {
        let id = invitation.id.to_string();
        self.records
            .insert(&id, InvitationRecord { invitation, state })
    }

    pub fn state(&self, id: &str) -> AgentResult<InvitationState> {
        Ok(self.records.get(id)?.state)
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Marks the invitation as consumed and returns it. Fails with
    /// [`AgentErrorKind::InvitationAlreadyConsumed`] on any later call for the same id.
    pub fn consume(&self, id: &str) -> AgentResult<Invitation> {
        self.records.update(id, |record| match record.state {
            InvitationState::Consumed => Err(AgentError::from_msg(
                AgentErrorKind::InvitationAlreadyConsumed,
                &format!("Invitation {id} has already been consumed"),
            )),
            InvitationState::Created | InvitationState::Received => {
                record.state = InvitationState::Consumed;
                Ok(record.invitation.clone())
            }
        })
    }
}
