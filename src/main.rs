//! # tdfcycle
//!
//! A command-line tool for duty-cycle diagnostics of Bruker timsTOF
//! acquisitions, read from the `analysis.tdf` metadata store.
//!
//! ## Usage
//!
//! ```bash
//! # Analyze the whole run
//! tdfcycle analyze sample.d/analysis.tdf
//!
//! # Analyze a frame window and export the report as JSON
//! tdfcycle analyze sample.d/analysis.tdf --frame-id-low 100 --frame-id-high 5000 --json report.json
//!
//! # Show store summary
//! tdfcycle info sample.d/analysis.tdf
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Analyze {
            file,
            frame_id_low,
            frame_id_high,
            json,
            config,
        } => cli::analyze::run(file, frame_id_low, frame_id_high, json, config),
        Commands::Info { file } => cli::info::run(file),
    }
}
