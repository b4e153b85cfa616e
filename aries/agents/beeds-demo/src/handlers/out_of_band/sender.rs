use std::fmt::Display;

use messages::{
    msg_types::Protocol, Invitation, InvitationContent, InvitationDecorators, OobGoalCode,
    OobService,
};
use shared::maybe_known::MaybeKnown;
use url::Url;
use uuid::Uuid;

use crate::error::*;

#[derive(Debug, PartialEq, Clone)]
pub struct OutOfBandSender {
    pub oob: Invitation,
}

impl OutOfBandSender {
    pub fn create() -> Self {
        let content = InvitationContent::builder().services(Vec::new()).build();
        let decorators = InvitationDecorators::default();

        Self {
            oob: Invitation::builder()
                .id(Uuid::new_v4())
                .content(content)
                .decorators(decorators)
                .build(),
        }
    }

    pub fn set_label(mut self, label: &str) -> Self {
        self.oob.content.label = Some(label.to_string());
        self
    }

    pub fn set_goal_code(mut self, goal_code: OobGoalCode) -> Self {
        self.oob.content.goal_code = Some(MaybeKnown::Known(goal_code));
        self
    }

    pub fn set_goal(mut self, goal: &str) -> Self {
        self.oob.content.goal = Some(goal.to_string());
        self
    }

    pub fn append_service(mut self, service: &OobService) -> Self {
        self.oob.content.services.push(service.clone());
        self
    }

    pub fn get_id(&self) -> String {
        self.oob.id.to_string()
    }

    pub fn append_handshake_protocol(mut self, protocol: Protocol) -> AgentResult<Self> {
        if !protocol.is_handshake() {
            return Err(AgentError::from_msg(
                AgentErrorKind::InvalidInvitation,
                &format!("Protocol {protocol} is not a handshake protocol"),
            ));
        }

        self.oob
            .content
            .handshake_protocols
            .get_or_insert_with(Vec::new)
            .push(MaybeKnown::Known(protocol));
        Ok(self)
    }

    /// Validates the invitation as an invitee would, so that nothing
    /// unusable is handed out.
    pub fn validate(&self) -> AgentResult<()> {
        Ok(self.oob.validate()?)
    }

    pub fn invitation_to_json_string(&self) -> AgentResult<String> {
        Ok(self.oob.to_json_string()?)
    }

    pub fn invitation_to_url(&self, domain_path: &str) -> AgentResult<Url> {
        Ok(self.oob.to_url(domain_path)?)
    }
}

impl Display for OutOfBandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.oob.to_json_string() {
            Ok(json) => write!(f, "{json}"),
            Err(_) => Err(std::fmt::Error),
        }
    }
}
