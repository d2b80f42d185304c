//! TOML configuration file support for power users.
//!
//! Instead of passing CLI flags, users can specify settings in a config file:
//!
//! ```toml
//! # tdfcycle.toml
//! [analysis]
//! frame_id_low = 100
//! frame_id_high = 5000
//! ```
//!
//! Flags given on the command line take precedence over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for tdfcycle.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Analysis-specific settings.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Configuration for the analyze command.
#[derive(Debug, Default, Deserialize)]
pub struct AnalysisConfig {
    /// Lowest frame id to include.
    pub frame_id_low: Option<i64>,

    /// Highest frame id to include.
    pub frame_id_high: Option<i64>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
