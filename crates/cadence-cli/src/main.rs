//! Cadence CLI - productivity modeling from editor activity logs
//!
//! Usage:
//!   cadence train --log LOG --model MODEL              Train a model
//!   cadence insights --model MODEL --log LOG --output PLOT
//!   cadence inspect --model MODEL                      Show artifact metadata

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Train { log, model } => commands::cmd_train(&log, &model),
        Commands::Insights { model, log, output } => commands::cmd_insights(&model, &log, &output),
        Commands::Inspect { model } => commands::cmd_inspect(&model),
    }
}
