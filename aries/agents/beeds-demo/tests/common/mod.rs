#![allow(dead_code)]

pub mod prelude {
    pub use anyhow::Result;
    pub use log::info;
}

pub mod test_setup {
    pub fn setup_env_logging() {
        let env = env_logger::Env::default().default_filter_or("info");
        env_logger::init_from_env(env);
    }
}

pub mod test_ledger {
    use mockito::{Mock, ServerGuard};

    pub const GENESIS: &str = r#"{"reqSignature":{},"txn":{"data":{"data":{"alias":"Node1","client_ip":"172.17.0.1","client_port":9702}}}}"#;

    pub async fn mock_genesis(server: &mut ServerGuard, genesis: &str) -> Mock {
        server
            .mock("GET", "/genesis")
            .with_status(200)
            .with_body(genesis)
            .create_async()
            .await
    }
}

pub mod test_agent {
    use std::{io::Cursor, path::Path};

    use beeds_demo::{
        agent::{Agent, DemoConfig, Role},
        utils::prompt::Prompt,
    };
    use url::Url;

    pub type ScriptedPrompt = Prompt<Cursor<Vec<u8>>, Vec<u8>>;

    pub fn demo_config(ledger_url: &str, state_dir: &Path) -> DemoConfig {
        DemoConfig {
            ledger_url: Url::parse(ledger_url).unwrap(),
            state_dir: state_dir.to_path_buf(),
            ..Default::default()
        }
    }

    pub fn agent(ledger_url: &str, state_dir: &Path, role: Role) -> Agent {
        Agent::initialize(demo_config(ledger_url, state_dir), role).unwrap()
    }

    pub fn scripted_prompt(lines: &[&str]) -> ScriptedPrompt {
        let mut input = lines.join("\n");
        input.push('\n');
        Prompt::new(Cursor::new(input.into_bytes()), Vec::new())
    }

    pub fn output_of(prompt: ScriptedPrompt) -> String {
        String::from_utf8(prompt.into_output()).unwrap()
    }
}
