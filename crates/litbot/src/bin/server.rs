//! litbot server binary
//!
//! Run with: cargo run -p litbot --bin litbot-server -- --config litbot.toml

use clap::Parser;
use litbot::{config::LitbotConfig, server::LitbotServer};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "litbot-server", version, about = "Literature discussion server")]
struct Args {
    /// TOML configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "litbot=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => LitbotConfig::from_file(path)?,
        None => LitbotConfig::default(),
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Configuration loaded");
    tracing::info!("  - Reference corpus: {}", config.storage.corpus_path.display());
    tracing::info!("  - Interaction log: {}", config.storage.log_path.display());
    tracing::info!("  - Reflection file: {}", config.storage.reflection_path.display());

    let server = LitbotServer::new(config)?;

    println!("\nServer starting...");
    println!("  Page: http://{}/", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("  API Info: http://{}/api/info", server.address());
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
