//! Error types for duty-cycle analysis.

use thiserror::Error;

use crate::tdf::TdfError;

/// Errors that can occur during a duty-cycle analysis run.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Requested frame-id range has its bounds reversed
    #[error("Invalid frame range: high bound {high} is below low bound {low}")]
    InvalidRange {
        /// Requested lower bound
        low: i64,
        /// Requested upper bound
        high: i64,
    },

    /// No frames exist in the resolved range
    #[error("Empty frame range: {0}")]
    EmptyRange(String),

    /// A constant instrument setting is absent from the store
    #[error("Missing instrument setting: {0}")]
    MissingSetting(String),

    /// A constant instrument setting has more than one distinct value,
    /// indicating a corrupt or heterogeneous acquisition
    #[error("Ambiguous instrument setting '{name}': {distinct} distinct values")]
    AmbiguousSetting {
        /// Permanent name of the setting
        name: String,
        /// Number of distinct values found
        distinct: usize,
    },

    /// Instrument settings yield an expected frame period of zero, leaving
    /// the deviation statistics undefined
    #[error("Degenerate instrument settings: {0}")]
    DegenerateSettings(String),

    /// Error from the underlying store
    #[error("TDF store error: {0}")]
    Store(#[from] TdfError),
}

impl AnalyzerError {
    /// Lift a store error, surfacing setting lookups as analyzer variants.
    pub(crate) fn from_setting_lookup(err: TdfError) -> Self {
        match err {
            TdfError::SettingMissing(name) => AnalyzerError::MissingSetting(name),
            TdfError::SettingAmbiguous { name, distinct } => {
                AnalyzerError::AmbiguousSetting { name, distinct }
            }
            other => AnalyzerError::Store(other),
        }
    }
}
