use std::sync::Arc;

use super::agent_config::DemoConfig;
use crate::{
    error::AgentResult,
    handlers::{
        ledger::{LedgerInfo, ServiceLedger},
        out_of_band::ServiceOutOfBand,
        session::SessionStore,
    },
};

#[derive(Clone, Debug)]
pub struct Agent {
    pub(super) config: Arc<DemoConfig>,
    pub(super) ledger: Arc<ServiceLedger>,
    pub(super) sessions: Arc<SessionStore>,
    pub(super) out_of_band: Arc<ServiceOutOfBand>,
}

impl Agent {
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn sessions(&self) -> Arc<SessionStore> {
        self.sessions.clone()
    }

    pub fn out_of_band(&self) -> Arc<ServiceOutOfBand> {
        self.out_of_band.clone()
    }

    /// Identity of the ledger the agent runs against, probing it unless the
    /// check is disabled.
    pub async fn ledger_info(&self) -> AgentResult<LedgerInfo> {
        if self.config.skip_ledger_check {
            warn!("Skipping ledger check for {}", self.ledger.ledger_url());
            Ok(self.ledger.unprobed())
        } else {
            self.ledger.probe().await
        }
    }
}
