use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod analyze;
pub mod config;
pub mod info;

/// tdfcycle - Duty-Cycle Diagnostics for Bruker TimsTOF Acquisitions
#[derive(Parser)]
#[command(name = "tdfcycle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze duty-cycle timing of an analysis.tdf store
    Analyze {
        /// Path to the analysis.tdf file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Lowest frame id to include (defaults to the first frame)
        #[arg(long, value_name = "ID")]
        frame_id_low: Option<i64>,

        /// Highest frame id to include (defaults to the last frame)
        #[arg(long, value_name = "ID")]
        frame_id_high: Option<i64>,

        /// Write the full report as JSON to this path
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,

        /// Read defaults from a TOML config file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Display summary information about an analysis.tdf store
    Info {
        /// Path to the analysis.tdf file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}
