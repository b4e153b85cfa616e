use std::time::Duration;

use messages::{
    decode_invitation_details,
    msg_types::{registry::supported_pids, Protocol},
    AriesService, Invitation,
};
use tokio::{net::TcpStream, time::timeout};

use crate::error::*;

const ENDPOINT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, PartialEq, Clone)]
pub struct OutOfBandReceiver {
    pub oob: Invitation,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EndpointStatus {
    pub endpoint: String,
    pub reachable: bool,
}

impl OutOfBandReceiver {
    /// Decodes invitation details as pasted by a user (an `oob=` or `c_i=`
    /// URL, a base64url payload or raw JSON) and checks the invitation is
    /// usable.
    pub fn create_from_details(details: &str) -> AgentResult<Self> {
        trace!("OutOfBandReceiver::create_from_details >>> details: {details}");
        let oob = decode_invitation_details(details)?;
        oob.validate()?;
        Ok(Self { oob })
    }

    pub fn get_id(&self) -> String {
        self.oob.id.to_string()
    }

    pub fn preferred_handshake(&self) -> AgentResult<Protocol> {
        for protocol in self.oob.content.handshake_protocols.iter().flatten() {
            if !protocol.is_known() {
                debug!("Invitation {} offers unknown protocol {:?}", self.oob.id, protocol);
            }
        }
        self.oob.preferred_handshake().ok_or_else(|| {
            AgentError::from_msg(
                AgentErrorKind::InvalidInvitation,
                &format!(
                    "Invitation {} offers no handshake protocol this agent supports ({})",
                    self.oob.id,
                    supported_pids().join(", ")
                ),
            )
        })
    }

    pub fn service_endpoints(&self) -> Vec<String> {
        self.oob
            .aries_services()
            .map(|service| service.service_endpoint.clone())
            .collect()
    }

    /// Opens a TCP connection to every inline service endpoint.
    pub async fn probe_endpoints(&self) -> Vec<EndpointStatus> {
        let mut statuses = Vec::new();
        for service in self.oob.aries_services() {
            let reachable = probe_endpoint(service).await;
            statuses.push(EndpointStatus {
                endpoint: service.service_endpoint.clone(),
                reachable,
            });
        }
        statuses
    }
}

async fn probe_endpoint(service: &AriesService) -> bool {
    let Ok(url) = service.endpoint_url() else {
        return false;
    };
    let (Some(host), Some(port)) = (url.host_str(), url.port_or_known_default()) else {
        return false;
    };
    match timeout(ENDPOINT_PROBE_TIMEOUT, TcpStream::connect((host, port))).await {
        Ok(Ok(_)) => true,
        Ok(Err(err)) => {
            debug!("Endpoint {} refused connection: {err}", service.service_endpoint);
            false
        }
        Err(_) => {
            debug!("Endpoint {} timed out", service.service_endpoint);
            false
        }
    }
}
