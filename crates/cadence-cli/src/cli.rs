//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Cadence - model and chart coding productivity by day and hour
#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Productivity modeling from editor activity logs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Train a decision-tree model from a productivity log
    Train {
        /// Productivity log JSON file
        #[arg(long)]
        log: PathBuf,

        /// Where to write the trained model artifact
        #[arg(long)]
        model: PathBuf,
    },

    /// Render a predicted-productivity time series plot
    Insights {
        /// Trained model artifact
        #[arg(long)]
        model: PathBuf,

        /// Productivity log JSON file
        #[arg(long)]
        log: PathBuf,

        /// Where to write the plot image (extension selects the format)
        #[arg(long)]
        output: PathBuf,
    },

    /// Show metadata for a trained model artifact
    Inspect {
        /// Trained model artifact
        #[arg(long)]
        model: PathBuf,
    },
}
