//! Command-line interface for pack-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **identify**: Identify the five cards in a pack screenshot
//! - **sets**: List the set names the resolver understands
//! - **serve**: Start the HTTP identification server
//!
//! ## Usage
//!
//! ```text
//! # Identify cards; prints a JSON report
//! pack-solver identify godpack.webp "Genetic Apex"
//!
//! # Use a reference library outside ./images or ../images
//! pack-solver identify godpack.webp "Shining Revelry" --images-dir /data/cards
//!
//! # Human-readable output
//! pack-solver identify godpack.webp "Eevee Grove" --format text
//!
//! # Start the server
//! pack-solver serve --port 3000
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::report::IdentificationReport;

pub mod identify;
pub mod sets;

/// Usage line reported when arguments cannot be parsed
pub const USAGE: &str = "Usage: pack-solver identify <PACK_IMAGE> <SET_NAME>";

#[derive(Parser, Debug)]
#[command(name = "pack-solver")]
#[command(version)]
#[command(about = "Identify the cards in a trading-card pack screenshot")]
#[command(
    long_about = "pack-solver cuts the five cards out of a pack screenshot and matches each one against a library of reference card images for the pack's set.\n\nReference images are read from images/<SET_CODE>/ under the current directory or its parent."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Identify the cards in a pack screenshot
    Identify(identify::IdentifyArgs),

    /// List known set names and their codes
    Sets,

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Directory containing one folder of reference images per set code
    #[arg(long)]
    pub images_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Build the failure report printed for unparseable arguments.
#[must_use]
pub fn usage_error_report(error: &clap::Error) -> IdentificationReport {
    let rendered = error.render().to_string();
    let reason = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .trim();

    if reason.is_empty() {
        IdentificationReport::failure(USAGE)
    } else {
        IdentificationReport::failure(format!("{reason}. {USAGE}"))
    }
}
