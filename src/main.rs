//! contas-api server binary

use anyhow::Result;
use clap::Parser;
use contas::prelude::*;
use std::path::PathBuf;

/// REST service for financial entries guarded by a shared API token
#[derive(Parser, Debug)]
#[command(name = "contas-api", version)]
struct Cli {
    /// YAML configuration file
    #[arg(long, env = "CONTAS_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Address to listen on (overrides the config file)
    #[arg(long = "bind", env = "CONTAS_BIND_ADDR", value_name = "ADDR")]
    bind_addr: Option<String>,

    /// Accepted x-api-token value (overrides the config file)
    #[arg(long, env = "CONTAS_API_TOKEN", value_name = "TOKEN", hide_env_values = true)]
    api_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ServiceConfig::from_yaml_file(path)?,
        None => ServiceConfig::default(),
    }
    .with_overrides(cli.bind_addr, cli.api_token);

    tracing::info!(
        bind_addr = %config.bind_addr,
        seeded = config.seed.len(),
        "starting contas-api"
    );

    ServerBuilder::from_config(&config)?
        .serve(&config.bind_addr)
        .await
}
