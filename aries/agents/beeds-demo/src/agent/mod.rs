mod agent_config;
mod agent_struct;
mod init;

pub use agent_config::{
    Cli, ConfigArgs, DemoConfig, Role, DEFAULT_BEED_USER_PORT, DEFAULT_BOE_PORT,
    DEFAULT_DOCKER_HOST, DEFAULT_LABEL, DEFAULT_LEDGER_URL, DEFAULT_STATE_DIR,
};
pub use agent_struct::Agent;
