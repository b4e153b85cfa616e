use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::error::*;

pub const DEFAULT_LEDGER_URL: &str = "http://localhost:9000";
pub const DEFAULT_DOCKER_HOST: &str = "172.17.0.1";
pub const DEFAULT_BOE_PORT: u16 = 8020;
pub const DEFAULT_BEED_USER_PORT: u16 = 8030;
pub const DEFAULT_LABEL: &str = "boe.agent";
pub const DEFAULT_STATE_DIR: &str = ".beeds";

const SESSION_FILE: &str = "session.json";

#[derive(Debug, Parser)]
#[command(name = "run_demo")]
#[command(version)]
#[command(about = "Runs the BEEDS issuer (boe) or holder (beed_user) side of the invitation exchange")]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,
    #[command(subcommand)]
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Role {
    #[command(name = "boe")]
    #[command(about = "Issuer agent: creates out-of-band invitations")]
    Boe {
        /// Run in revocation mode. Requires a prior run without it on the same ledger.
        #[arg(long)]
        revocation: bool,
    },
    #[command(name = "beed_user")]
    #[command(about = "Holder agent: consumes an out-of-band invitation")]
    BeedUser,
}

#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    #[arg(long, global = true, env = "LEDGER_URL", default_value = DEFAULT_LEDGER_URL)]
    pub ledger_url: Url,
    #[arg(long, global = true, env = "DOCKERHOST", default_value = DEFAULT_DOCKER_HOST)]
    pub docker_host: String,
    #[arg(long, global = true, env = "BOE_PORT", default_value_t = DEFAULT_BOE_PORT)]
    pub boe_port: u16,
    #[arg(long, global = true, env = "BEED_USER_PORT", default_value_t = DEFAULT_BEED_USER_PORT)]
    pub beed_user_port: u16,
    #[arg(long, global = true, env = "BOE_LABEL", default_value = DEFAULT_LABEL)]
    pub label: String,
    #[arg(long, global = true, env = "BEEDS_STATE_DIR", default_value = DEFAULT_STATE_DIR)]
    pub state_dir: PathBuf,
    /// Do not probe the ledger before starting.
    #[arg(long, global = true)]
    pub skip_ledger_check: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    pub ledger_url: Url,
    pub docker_host: String,
    pub boe_port: u16,
    pub beed_user_port: u16,
    pub label: String,
    pub state_dir: PathBuf,
    pub skip_ledger_check: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            ledger_url: Url::parse(DEFAULT_LEDGER_URL).expect("unexpected default ledger URL error occurred."),
            docker_host: DEFAULT_DOCKER_HOST.to_owned(),
            boe_port: DEFAULT_BOE_PORT,
            beed_user_port: DEFAULT_BEED_USER_PORT,
            label: DEFAULT_LABEL.to_owned(),
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            skip_ledger_check: false,
        }
    }
}

impl From<ConfigArgs> for DemoConfig {
    fn from(args: ConfigArgs) -> Self {
        Self {
            ledger_url: args.ledger_url,
            docker_host: args.docker_host,
            boe_port: args.boe_port,
            beed_user_port: args.beed_user_port,
            label: args.label,
            state_dir: args.state_dir,
            skip_ledger_check: args.skip_ledger_check,
        }
    }
}

impl DemoConfig {
    /// Service endpoint advertised in the issuer's invitations, as seen from
    /// the holder's container network.
    pub fn issuer_endpoint(&self) -> String {
        format!("http://{}:{}", self.docker_host, self.boe_port)
    }

    /// Service endpoint of the holder agent.
    pub fn holder_endpoint(&self) -> String {
        format!("http://{}:{}", self.docker_host, self.beed_user_port)
    }

    pub fn genesis_url(&self) -> AgentResult<Url> {
        Ok(self.ledger_url.join("genesis")?)
    }

    pub fn session_path(&self) -> PathBuf {
        self.state_dir.join(SESSION_FILE)
    }

    pub fn validate(&self) -> AgentResult<()> {
        if !matches!(self.ledger_url.scheme(), "http" | "https") {
            return Err(AgentError::from_msg(
                AgentErrorKind::ConfigError,
                &format!("Ledger URL must be http(s), got {}", self.ledger_url),
            ));
        }
        if self.docker_host.trim().is_empty() {
            return Err(AgentError::from_msg(
                AgentErrorKind::ConfigError,
                "Docker host must not be empty",
            ));
        }
        if self.label.trim().is_empty() {
            return Err(AgentError::from_msg(
                AgentErrorKind::ConfigError,
                "Agent label must not be empty",
            ));
        }
        Url::parse(&self.issuer_endpoint())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();

        assert_eq!(config.issuer_endpoint(), "http://172.17.0.1:8020");
        assert_eq!(config.holder_endpoint(), "http://172.17.0.1:8030");
        assert_eq!(
            config.genesis_url().unwrap().as_str(),
            "http://localhost:9000/genesis"
        );
        assert_eq!(config.session_path(), PathBuf::from(".beeds/session.json"));
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_boe_with_revocation() {
        let cli = Cli::try_parse_from([
            "run_demo",
            "boe",
            "--revocation",
            "--docker-host",
            "host.docker.internal",
        ])
        .unwrap();

        assert_eq!(cli.role, Role::Boe { revocation: true });
        let config = DemoConfig::from(cli.config);
        assert_eq!(config.issuer_endpoint(), "http://host.docker.internal:8020");
    }

    #[test]
    fn test_parse_beed_user() {
        let cli = Cli::try_parse_from([
            "run_demo",
            "--ledger-url",
            "http://127.0.0.1:9000/",
            "beed_user",
            "--skip-ledger-check",
        ])
        .unwrap();

        assert_eq!(cli.role, Role::BeedUser);
        assert!(cli.config.skip_ledger_check);
        assert_eq!(cli.config.ledger_url.as_str(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!(Cli::try_parse_from(["run_demo", "faber"]).is_err());
        assert!(Cli::try_parse_from(["run_demo", "beed_user", "--revocation"]).is_err());
    }

    #[test]
    fn test_invalid_ledger_scheme() {
        let config = DemoConfig {
            ledger_url: Url::parse("ftp://localhost:9000").unwrap(),
            ..Default::default()
        };
        assert_eq!(
            config.validate().unwrap_err().kind(),
            AgentErrorKind::ConfigError
        );
    }
}
