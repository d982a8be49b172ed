//! # tblparse
//!
//! Detects logical table blocks inside spreadsheet sheets.
//!
//! ## Architecture
//!
//! This is Layer 3, the command-line binary that ties together:
//! - tblparse-core: Core types and configuration
//! - tblparse-detector: Block detection, structure analysis and extraction
//! - tblparse-session: Sheet readers and the upload pipeline

use clap::Parser;
use tblparse::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    // Initialize logging; RUST_LOG takes precedence over the config file
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("tblparse v{} starting", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout().lock();
    cli.run(&config, &mut stdout).await.map_err(|e| {
        tracing::error!("{:#}", e);
        e
    })
}
