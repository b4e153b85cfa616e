use std::sync::Arc;

use super::agent_config::{DemoConfig, Role};
use crate::{
    agent::agent_struct::Agent,
    error::AgentResult,
    handlers::{ledger::ServiceLedger, out_of_band::ServiceOutOfBand, session::SessionStore},
};

impl Agent {
    pub fn initialize(config: DemoConfig, role: Role) -> AgentResult<Self> {
        config.validate()?;

        let service_endpoint = match role {
            Role::Boe { .. } => config.issuer_endpoint(),
            Role::BeedUser => config.holder_endpoint(),
        };
        info!(
            "Initializing {:?} agent, ledger {}, service endpoint {}",
            role, config.ledger_url, service_endpoint
        );

        let ledger = ServiceLedger::new(config.ledger_url.clone(), config.genesis_url()?);
        let sessions = SessionStore::new(config.session_path());
        let out_of_band = ServiceOutOfBand::new(&config.label, &service_endpoint);

        Ok(Self {
            config: Arc::new(config),
            ledger: Arc::new(ledger),
            sessions: Arc::new(sessions),
            out_of_band: Arc::new(out_of_band),
        })
    }
}
