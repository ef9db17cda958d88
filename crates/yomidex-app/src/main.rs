use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use yomidex_config::Config;
use yomidex_config::logging::{LogConfig, LogFormat};

pub mod cli;
pub mod commands;
pub mod state;


use self::cli::Cli;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::new();
    cli.apply(&mut config);

    init_tracing(&config.log);

    let state = AppState::new(config);
    run(&state, cli).await
}

pub async fn run(state: &AppState, cli: Cli) -> anyhow::Result<()> {
    state.load_configured().await?;

    let output = commands::execute(state, cli.command).await?;
    let rendered = serde_json::to_string_pretty(&output).context("failed to render output")?;
    println!("{rendered}");

    Ok(())
}

/// Logs go to stderr so stdout stays valid JSON
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
