use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use url::Url;

use super::ledger::LedgerInfo;
use crate::error::*;

/// Issuer runs recorded against one ledger network. Revocation mode is only
/// available once the issuer has run without it in the same session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSession {
    pub ledger_url: Url,
    pub genesis_digest: String,
    pub boe_runs: u32,
    pub revocation_enabled: bool,
}

impl LedgerSession {
    pub fn new(ledger: &LedgerInfo) -> Self {
        Self {
            ledger_url: ledger.ledger_url.clone(),
            genesis_digest: ledger.genesis_digest.clone(),
            boe_runs: 0,
            revocation_enabled: false,
        }
    }

    pub fn belongs_to(&self, ledger: &LedgerInfo) -> bool {
        self.ledger_url == ledger.ledger_url && self.genesis_digest == ledger.genesis_digest
    }

    /// Records an issuer start. A run with `revocation` set fails with
    /// [`AgentErrorKind::RevocationOutOfOrder`] unless a plain run came first.
    pub fn record_boe_run(&mut self, revocation: bool) -> AgentResult<()> {
        if revocation {
            if self.boe_runs == 0 {
                return Err(AgentError::from_msg(
                    AgentErrorKind::RevocationOutOfOrder,
                    &format!(
                        "Run `boe` without --revocation against {} first",
                        self.ledger_url
                    ),
                ));
            }
            self.revocation_enabled = true;
        } else {
            self.boe_runs += 1;
        }
        Ok(())
    }
}

/// JSON file holding the current [`LedgerSession`].
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the session recorded for `ledger`, or a fresh one if none was
    /// recorded or the ledger has been restarted with a different genesis.
    pub fn load(&self, ledger: &LedgerInfo) -> AgentResult<LedgerSession> {
        if !self.path.exists() {
            debug!("No session file at {}", self.path.display());
            return Ok(LedgerSession::new(ledger));
        }
        let contents = fs::read_to_string(&self.path)?;
        let session: LedgerSession = serde_json::from_str(&contents)?;
        if session.belongs_to(ledger) {
            Ok(session)
        } else {
            info!(
                "Ledger {} changed since the last run, starting a new session",
                ledger.ledger_url
            );
            Ok(LedgerSession::new(ledger))
        }
    }

    /// Writes a sibling temp file and renames it over the session file, so an
    /// interrupted save leaves the previous session intact.
    pub fn save(&self, session: &LedgerSession) -> AgentResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let staged = self.staging_path();
        fs::write(&staged, serde_json::to_string_pretty(session)?)?;
        fs::rename(&staged, &self.path)?;
        trace!("Saved session {:?} to {}", session, self.path.display());
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut staged = self.path.clone().into_os_string();
        staged.push(".tmp");
        PathBuf::from(staged)
    }

    /// Loads the session, records an issuer run and persists the result.
    /// Nothing is written when the run is rejected.
    pub fn begin_boe_run(&self, ledger: &LedgerInfo, revocation: bool) -> AgentResult<LedgerSession> {
        let mut session = self.load(ledger)?;
        session.record_boe_run(revocation)?;
        self.save(&session)?;
        Ok(session)
    }
}
