use anyhow::Result;
use clap::Parser;

use client_bootstrap::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Some(config) = cli.config {
        std::env::set_var("LIGHTCHURCH_CONFIG", config);
    }

    client_bootstrap::cli::run(cli.command).await
}
