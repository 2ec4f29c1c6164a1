//! # express
//!
//! Command-line front end for the express sound queue: decode `.SND` data
//! and replay files through a queue with its maintenance timer.

mod cli;
mod decode;
mod simulate;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use express_core::QueueConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "express=info,express_queue=debug".into()),
        )
        .init();

    let args = Args::parse();
    info!("Starting express v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Decode {
            input,
            output,
            volume,
        } => {
            decode::run(&input, &output, volume)?;
        }
        Command::Simulate {
            files,
            ticks,
            config,
        } => {
            let config = QueueConfig::load_or_default(config.as_deref())?;
            let report = simulate::run(&files, ticks, &config)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Config { config } => {
            let config = QueueConfig::load_or_default(config.as_deref())?;
            if let Some(path) = QueueConfig::default_path() {
                info!("Default config location: {}", path.display());
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
