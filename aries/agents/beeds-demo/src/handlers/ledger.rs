use serde::{Deserialize, Serialize};
use shared::http_client;
use url::Url;

use crate::error::*;

/// Identity of the ledger network the demo runs against: its URL and a
/// digest of the genesis transactions it serves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerInfo {
    pub ledger_url: Url,
    pub genesis_digest: String,
}

#[derive(Debug)]
pub struct ServiceLedger {
    ledger_url: Url,
    genesis_url: Url,
}

impl ServiceLedger {
    pub fn new(ledger_url: Url, genesis_url: Url) -> Self {
        Self {
            ledger_url,
            genesis_url,
        }
    }

    pub fn ledger_url(&self) -> &Url {
        &self.ledger_url
    }

    /// Fetches the genesis transactions. Fails with
    /// [`AgentErrorKind::LedgerUnreachable`] if the ledger does not answer
    /// or serves an empty genesis.
    pub async fn probe(&self) -> AgentResult<LedgerInfo> {
        debug!("Probing ledger at {}", self.genesis_url);
        let genesis = http_client::get_text(&self.genesis_url)
            .await
            .map_err(|err| {
                AgentError::from_msg(
                    AgentErrorKind::LedgerUnreachable,
                    &format!(
                        "Ledger at {} is unreachable, is the network running? {}",
                        self.ledger_url,
                        err.msg()
                    ),
                )
            })?;
        if genesis.trim().is_empty() {
            return Err(AgentError::from_msg(
                AgentErrorKind::LedgerUnreachable,
                &format!("Ledger at {} served an empty genesis", self.ledger_url),
            ));
        }
        let info = LedgerInfo {
            ledger_url: self.ledger_url.clone(),
            genesis_digest: sha256::digest(genesis.trim()),
        };
        info!(
            "Ledger {} is up, genesis digest {}",
            info.ledger_url, info.genesis_digest
        );
        Ok(info)
    }

    /// Ledger identity used when probing is disabled. Stays stable across
    /// runs against the same URL.
    pub fn unprobed(&self) -> LedgerInfo {
        LedgerInfo {
            ledger_url: self.ledger_url.clone(),
            genesis_digest: sha256::digest(self.ledger_url.as_str()),
        }
    }
}
