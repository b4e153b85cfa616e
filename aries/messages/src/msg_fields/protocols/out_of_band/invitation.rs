use chrono::Utc;
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use shared::{maybe_known::MaybeKnown, validation::did::validate_did};
use typed_builder::TypedBuilder;
use uuid::Uuid;

use super::{service::AriesService, OobGoalCode};
use crate::{
    decorators::timing::Timing,
    error::{MessagesError, MessagesErrorKind, MessagesResult, MsgTypeError},
    misc::MimeType,
    msg_types::{
        protocols::out_of_band::{OutOfBandType, OutOfBandTypeV1, OutOfBandTypeV1Kind},
        MessageType, Protocol,
    },
};

/// The `@type` of an invitation. Keeps the out-of-band minor version the
/// invitation was created or received with, so re-serialization is lossless.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvitationMsgType(pub OutOfBandTypeV1);

impl Default for InvitationMsgType {
    fn default() -> Self {
        Self(OutOfBandTypeV1::new_v1_1())
    }
}

impl Serialize for InvitationMsgType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let protocol = Protocol::from(self.0);
        let kind = OutOfBandTypeV1Kind::Invitation.as_ref();
        format_args!("{protocol}/{kind}").serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for InvitationMsgType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let msg_type_str = String::deserialize(deserializer)?;
        let msg_type = MessageType::try_from(msg_type_str.as_str()).map_err(D::Error::custom)?;

        let Protocol::OutOfBandType(OutOfBandType::V1(version)) = msg_type.protocol else {
            return Err(D::Error::custom(format!(
                "expected an out-of-band message type, found {msg_type_str}"
            )));
        };

        match msg_type.kind.parse::<OutOfBandTypeV1Kind>() {
            Ok(OutOfBandTypeV1Kind::Invitation) => Ok(Self(version)),
            _ => Err(D::Error::custom(MsgTypeError::unknown_kind(
                msg_type.kind.to_string(),
            ))),
        }
    }
}

/// Struct representing the out-of-band `invitation` message, as defined in
/// [RFC 0434](<https://github.com/hyperledger/aries-rfcs/blob/main/features/0434-outofband/README.md>).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct Invitation {
    #[serde(rename = "@type")]
    #[builder(default)]
    pub msg_type: InvitationMsgType,
    #[serde(rename = "@id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub content: InvitationContent,
    #[serde(flatten)]
    #[builder(default)]
    pub decorators: InvitationDecorators,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct InvitationContent {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_code: Option<MaybeKnown<OobGoalCode>>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<Vec<MaybeKnown<MimeType>>>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handshake_protocols: Option<Vec<MaybeKnown<Protocol>>>,
    pub services: Vec<OobService>,
    #[builder(default, setter(strip_option))]
    #[serde(rename = "requests~attach")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_attach: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Clone, TypedBuilder)]
pub struct InvitationDecorators {
    #[builder(default, setter(strip_option))]
    #[serde(rename = "~timing")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,
}

/// A service an invitee can use to reach the inviter: either an inline
/// service block or a DID whose document lists the service.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum OobService {
    AriesService(AriesService),
    Did(String),
}

impl OobService {
    pub fn validate(&self) -> MessagesResult<()> {
        match self {
            Self::AriesService(service) => service.validate(),
            Self::Did(did) => validate_did(did).map(|_| ()).map_err(|err| {
                MessagesError::from_msg(MessagesErrorKind::InvalidDid, err.msg().to_owned())
            }),
        }
    }
}

impl Invitation {
    /// Checks that the invitation can be acted upon by an invitee: at least one
    /// handshake protocol, at least one inline service, well formed keys and
    /// endpoints for every inline service, and no `~timing.expires_time` in the past.
    ///
    /// DID services are syntax checked only. Resolving them is out of reach, so
    /// an invitation listing nothing but DIDs leaves the invitee no endpoint.
    pub fn validate(&self) -> MessagesResult<()> {
        trace!("Invitation::validate >>> id: {}", self.id);

        match &self.content.handshake_protocols {
            Some(protocols) if !protocols.is_empty() => {}
            _ => {
                return Err(MessagesError::from_msg(
                    MessagesErrorKind::MissingHandshake,
                    format!("Invitation {} lists no handshake protocol", self.id),
                ))
            }
        }

        if self.content.services.is_empty() {
            return Err(MessagesError::from_msg(
                MessagesErrorKind::MissingService,
                format!("Invitation {} lists no service", self.id),
            ));
        }

        for service in &self.content.services {
            service.validate()?;
        }

        if self.aries_services().next().is_none() {
            return Err(MessagesError::from_msg(
                MessagesErrorKind::MissingService,
                format!("Invitation {} lists no inline service", self.id),
            ));
        }

        if let Some(timing) = &self.decorators.timing {
            if timing.is_expired_at(Utc::now()) {
                return Err(MessagesError::from_msg(
                    MessagesErrorKind::StaleInvitation,
                    format!(
                        "Invitation {} expired at {:?}",
                        self.id, timing.expires_time
                    ),
                ));
            }
        }

        Ok(())
    }

    /// The first handshake protocol of the invitation this agent knows, in the
    /// inviter's order of preference.
    pub fn preferred_handshake(&self) -> Option<Protocol> {
        self.content
            .handshake_protocols
            .iter()
            .flatten()
            .filter_map(MaybeKnown::known)
            .find(|protocol| protocol.is_handshake())
            .copied()
    }

    /// The inline services of the invitation, skipping DID services.
    pub fn aries_services(&self) -> impl Iterator<Item = &AriesService> {
        self.content.services.iter().filter_map(|service| match service {
            OobService::AriesService(service) => Some(service),
            OobService::Did(_) => None,
        })
    }

    pub fn to_json_string(&self) -> MessagesResult<String> {
        serde_json::to_string(self).map_err(|err| {
            MessagesError::from_msg(
                MessagesErrorKind::SerializationError,
                format!("Cannot serialize out of band invitation: {err}"),
            )
        })
    }

    pub fn from_json_str(oob_data: &str) -> MessagesResult<Self> {
        Ok(serde_json::from_str(oob_data)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration};
    use serde_json::json;

    use super::*;
    use crate::{
        misc::test_utils::{self, OptDateTimeRfc3339},
        msg_types::protocols::{connection::ConnectionTypeV1, did_exchange::DidExchangeTypeV1},
    };

    const SAMPLE_INVITATION: &str = r##"{
        "@type": "https://didcomm.org/out-of-band/1.0/invitation",
        "@id": "9109c998-f26a-4dbd-8200-33c805e6af03",
        "handshake_protocols": ["https://didcomm.org/didexchange/1.0"],
        "label": "boe.agent",
        "services": [
            {
                "id": "#inline",
                "type": "did-communication",
                "recipientKeys": ["did:key:z6MkmjY8GnV5i9YTDtPETC2uUAW6ejw3nk5mXF5yci5ab7th"],
                "serviceEndpoint": "http://172.17.0.1:8020"
            }
        ]
    }"##;

    const RECIPIENT_KEY: &str = "did:key:z6MkmjY8GnV5i9YTDtPETC2uUAW6ejw3nk5mXF5yci5ab7th";

    fn inline_service(recipient_keys: Vec<String>, endpoint: &str) -> OobService {
        OobService::AriesService(
            AriesService::builder()
                .id("#inline".to_owned())
                .recipient_keys(recipient_keys)
                .service_endpoint(endpoint.to_owned())
                .build(),
        )
    }

    fn make_invitation(content: InvitationContent) -> Invitation {
        Invitation::builder()
            .id(Uuid::parse_str("9109c998-f26a-4dbd-8200-33c805e6af03").unwrap())
            .content(content)
            .build()
    }

    fn didexchange_v1_0() -> Vec<MaybeKnown<Protocol>> {
        vec![MaybeKnown::Known(DidExchangeTypeV1::new_v1_0().into())]
    }

    #[test]
    fn test_sample_invitation() {
        let invitation = Invitation::from_json_str(SAMPLE_INVITATION).unwrap();

        assert_eq!(
            invitation.id.to_string(),
            "9109c998-f26a-4dbd-8200-33c805e6af03"
        );

        let protocols = invitation.content.handshake_protocols.as_ref().unwrap();
        assert_eq!(protocols.len(), 1);
        assert_eq!(
            serde_json::to_value(&protocols[0]).unwrap(),
            json!("https://didcomm.org/didexchange/1.0")
        );

        assert_eq!(invitation.content.services.len(), 1);
        let service = invitation.aries_services().next().unwrap();
        assert_eq!(service.service_endpoint, "http://172.17.0.1:8020");

        assert_eq!(invitation.msg_type, InvitationMsgType(OutOfBandTypeV1::new_v1_0()));
        invitation.validate().unwrap();
    }

    #[test]
    fn test_sample_invitation_is_preserved() {
        let invitation = Invitation::from_json_str(SAMPLE_INVITATION).unwrap();
        let expected: Value = serde_json::from_str(SAMPLE_INVITATION).unwrap();

        test_utils::test_serde(invitation, expected);
    }

    #[test]
    fn test_minimal_invitation() {
        let content = InvitationContent::builder()
            .services(vec![OobService::Did("did:sov:LjgpST2rjsoxYegQDRm7EL".to_owned())])
            .build();
        let invitation = make_invitation(content);

        let expected = json!({
            "@type": "https://didcomm.org/out-of-band/1.1/invitation",
            "@id": "9109c998-f26a-4dbd-8200-33c805e6af03",
            "services": ["did:sov:LjgpST2rjsoxYegQDRm7EL"]
        });

        test_utils::test_serde(invitation, expected);
    }

    #[test]
    fn test_extended_invitation() {
        let timing = Timing::builder().out_time(DateTime::default()).build();
        let content = InvitationContent::builder()
            .label("boe.agent".to_owned())
            .goal_code(MaybeKnown::Known(OobGoalCode::IssueVC))
            .goal("To issue a BEEDS credential".to_owned())
            .accept(vec![
                MaybeKnown::Known(MimeType::Aip1),
                MaybeKnown::Unknown("didcomm/aip3".to_owned()),
            ])
            .handshake_protocols(vec![
                MaybeKnown::Known(DidExchangeTypeV1::new_v1_0().into()),
                MaybeKnown::Known(ConnectionTypeV1::new_v1_0().into()),
            ])
            .services(vec![inline_service(
                vec![RECIPIENT_KEY.to_owned()],
                "http://172.17.0.1:8020",
            )])
            .build();
        let decorators = InvitationDecorators::builder().timing(timing.clone()).build();
        let invitation = Invitation::builder()
            .id(Uuid::parse_str("9109c998-f26a-4dbd-8200-33c805e6af03").unwrap())
            .content(content)
            .decorators(decorators)
            .build();

        let expected = json!({
            "@type": "https://didcomm.org/out-of-band/1.1/invitation",
            "@id": "9109c998-f26a-4dbd-8200-33c805e6af03",
            "label": "boe.agent",
            "goal_code": "issue-vc",
            "goal": "To issue a BEEDS credential",
            "accept": ["didcomm/aip1", "didcomm/aip3"],
            "handshake_protocols": [
                "https://didcomm.org/didexchange/1.0",
                "https://didcomm.org/connections/1.0"
            ],
            "services": [{
                "id": "#inline",
                "type": "did-communication",
                "recipientKeys": [RECIPIENT_KEY],
                "serviceEndpoint": "http://172.17.0.1:8020"
            }],
            "~timing": {
                "out_time": OptDateTimeRfc3339(&timing.out_time)
            }
        });

        test_utils::test_serde(invitation, expected);
    }

    #[test]
    fn test_legacy_prefix_is_normalized() {
        let json = SAMPLE_INVITATION
            .replace("https://didcomm.org", "did:sov:BzCbsNYhMrjHiqZDTUASHg;spec");
        let invitation = Invitation::from_json_str(&json).unwrap();
        let reserialized = invitation.to_json_string().unwrap();

        assert!(reserialized.contains("\"https://didcomm.org/out-of-band/1.0/invitation\""));
        assert!(reserialized.contains("\"https://didcomm.org/didexchange/1.0\""));
    }

    #[test]
    fn test_unknown_handshake_protocol_is_kept() {
        let json = SAMPLE_INVITATION.replace(
            "https://didcomm.org/didexchange/1.0\"]",
            "https://didcomm.org/didexchange/2.0\", \"https://didcomm.org/didexchange/1.0\"]",
        );
        let invitation = Invitation::from_json_str(&json).unwrap();
        let protocols = invitation.content.handshake_protocols.as_ref().unwrap();

        assert_eq!(
            protocols[0],
            MaybeKnown::Unknown("https://didcomm.org/didexchange/2.0".to_owned())
        );
        assert_eq!(
            invitation.preferred_handshake(),
            Some(DidExchangeTypeV1::new_v1_0().into())
        );
    }

    #[test]
    fn test_wrong_message_type_is_rejected() {
        let json = SAMPLE_INVITATION.replace("1.0/invitation", "1.0/handshake-reuse");
        let err = Invitation::from_json_str(&json).unwrap_err();
        assert_eq!(err.kind(), MessagesErrorKind::InvalidJson);
        assert!(err.msg().contains("Unknown message kind: handshake-reuse"));

        let json = SAMPLE_INVITATION.replace("out-of-band/1.0", "didexchange/1.0");
        assert!(Invitation::from_json_str(&json).is_err());
    }

    #[test]
    fn test_malformed_id_is_rejected() {
        let json = SAMPLE_INVITATION.replace("9109c998-f26a", "not-a-uuid");
        let err = Invitation::from_json_str(&json).unwrap_err();
        assert_eq!(err.kind(), MessagesErrorKind::InvalidJson);
    }

    #[test]
    fn test_missing_handshake_protocols() {
        let content = InvitationContent::builder()
            .services(vec![inline_service(
                vec![RECIPIENT_KEY.to_owned()],
                "http://172.17.0.1:8020",
            )])
            .build();
        let err = make_invitation(content).validate().unwrap_err();
        assert_eq!(err.kind(), MessagesErrorKind::MissingHandshake);

        let content = InvitationContent::builder()
            .handshake_protocols(vec![])
            .services(vec![inline_service(
                vec![RECIPIENT_KEY.to_owned()],
                "http://172.17.0.1:8020",
            )])
            .build();
        let err = make_invitation(content).validate().unwrap_err();
        assert_eq!(err.kind(), MessagesErrorKind::MissingHandshake);
    }

    #[test]
    fn test_missing_services() {
        let content = InvitationContent::builder()
            .handshake_protocols(didexchange_v1_0())
            .services(vec![])
            .build();
        let err = make_invitation(content).validate().unwrap_err();
        assert_eq!(err.kind(), MessagesErrorKind::MissingService);
    }

    #[test]
    fn test_did_only_services_are_rejected() {
        let content = InvitationContent::builder()
            .handshake_protocols(didexchange_v1_0())
            .services(vec![OobService::Did("did:sov:LjgpST2rjsoxYegQDRm7EL".to_owned())])
            .build();
        let err = make_invitation(content).validate().unwrap_err();
        assert_eq!(err.kind(), MessagesErrorKind::MissingService);
    }

    #[test]
    fn test_did_service_next_to_inline_service() {
        let content = InvitationContent::builder()
            .handshake_protocols(didexchange_v1_0())
            .services(vec![
                OobService::Did("did:sov:LjgpST2rjsoxYegQDRm7EL".to_owned()),
                inline_service(vec![RECIPIENT_KEY.to_owned()], "http://172.17.0.1:8020"),
            ])
            .build();
        make_invitation(content).validate().unwrap();
    }

    #[test]
    fn test_missing_recipient_keys() {
        let content = InvitationContent::builder()
            .handshake_protocols(didexchange_v1_0())
            .services(vec![inline_service(vec![], "http://172.17.0.1:8020")])
            .build();
        let err = make_invitation(content).validate().unwrap_err();
        assert_eq!(err.kind(), MessagesErrorKind::MissingRecipientKey);
    }

    #[test]
    fn test_invalid_service_endpoint() {
        let content = InvitationContent::builder()
            .handshake_protocols(didexchange_v1_0())
            .services(vec![inline_service(
                vec![RECIPIENT_KEY.to_owned()],
                "172.17.0.1:8020",
            )])
            .build();
        let err = make_invitation(content).validate().unwrap_err();
        assert_eq!(err.kind(), MessagesErrorKind::InvalidServiceEndpoint);
    }

    #[test]
    fn test_invalid_did_service() {
        let content = InvitationContent::builder()
            .handshake_protocols(didexchange_v1_0())
            .services(vec![OobService::Did("did-sov-not-base58-*".to_owned())])
            .build();
        let err = make_invitation(content).validate().unwrap_err();
        assert_eq!(err.kind(), MessagesErrorKind::InvalidDid);
    }

    #[test]
    fn test_stale_invitation() {
        let timing = Timing::builder()
            .expires_time(Utc::now() - Duration::hours(1))
            .build();
        let content = InvitationContent::builder()
            .handshake_protocols(didexchange_v1_0())
            .services(vec![inline_service(
                vec![RECIPIENT_KEY.to_owned()],
                "http://172.17.0.1:8020",
            )])
            .build();
        let mut invitation = make_invitation(content);
        invitation.decorators.timing = Some(timing);

        let err = invitation.validate().unwrap_err();
        assert_eq!(err.kind(), MessagesErrorKind::StaleInvitation);
    }
}
