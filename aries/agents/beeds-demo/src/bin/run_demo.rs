use beeds_demo::{
    agent::{Agent, Cli, DemoConfig, Role},
    utils::prompt::Prompt,
    AgentResult,
};
use clap::Parser;
use log::{error, info};
use tokio::io::{stdin, stdout, BufReader};

#[tokio::main]
async fn main() {
    load_dot_env();
    setup_logging();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AgentResult<()> {
    let config = DemoConfig::from(cli.config);
    let agent = Agent::initialize(config, cli.role)?;
    let mut prompt = Prompt::new(BufReader::new(stdin()), stdout());

    match cli.role {
        Role::Boe { revocation } => {
            info!("Starting up boe ⚙️");
            agent.run_boe(revocation, &mut prompt).await?;
        }
        Role::BeedUser => {
            info!("Starting up beed_user ⚙️");
            agent.run_beed_user(&mut prompt).await?;
        }
    }
    Ok(())
}

fn setup_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);
}

fn load_dot_env() {
    let _ = dotenvy::dotenv();
}
