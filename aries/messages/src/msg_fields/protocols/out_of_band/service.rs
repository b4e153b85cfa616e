use serde::{Deserialize, Serialize};
use shared::{
    maybe_known::MaybeKnown,
    validation::{url::validate_service_endpoint, verkey::validate_key_reference},
};
use typed_builder::TypedBuilder;
use url::Url;

use crate::{
    error::{MessagesError, MessagesErrorKind, MessagesResult},
    misc::MimeType,
};

/// Inline service block of an out-of-band invitation, as used by DIDComm v1 agents.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct AriesService {
    pub id: String,
    #[serde(rename = "type")]
    #[builder(default = AriesService::SERVICE_TYPE.to_owned())]
    pub service_type: String,
    #[serde(default)]
    pub recipient_keys: Vec<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routing_keys: Vec<String>,
    // Kept verbatim: parsing into `Url` would append a trailing slash to bare hosts.
    pub service_endpoint: String,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "is_zero")]
    pub priority: u32,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<Vec<MaybeKnown<MimeType>>>,
}

fn is_zero(priority: &u32) -> bool {
    *priority == 0
}

impl AriesService {
    pub const SERVICE_TYPE: &'static str = "did-communication";

    pub fn endpoint_url(&self) -> MessagesResult<Url> {
        Url::parse(&self.service_endpoint).map_err(|err| {
            MessagesError::from_msg(
                MessagesErrorKind::InvalidServiceEndpoint,
                format!(
                    "Service {} has a malformed endpoint {}: {err}",
                    self.id, self.service_endpoint
                ),
            )
        })
    }

    pub fn validate(&self) -> MessagesResult<()> {
        if self.recipient_keys.is_empty() {
            return Err(MessagesError::from_msg(
                MessagesErrorKind::MissingRecipientKey,
                format!("Service {} lists no recipient key", self.id),
            ));
        }

        for key in self.recipient_keys.iter().chain(self.routing_keys.iter()) {
            validate_key_reference(key).map_err(|err| {
                MessagesError::from_msg(MessagesErrorKind::InvalidRecipientKey, err.msg().to_owned())
            })?;
        }

        validate_service_endpoint(&self.endpoint_url()?)?;
        Ok(())
    }
}
