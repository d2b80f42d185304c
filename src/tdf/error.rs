//! Error types for analysis.tdf store access.

use thiserror::Error;

/// Errors that can occur while opening or querying an `analysis.tdf` store.
#[derive(Error, Debug)]
pub enum TdfError {
    /// Path does not exist or is not a plain file
    #[error("Invalid TDF path: {0}")]
    InvalidPath(String),

    /// No input bytes were provided to materialize a store from
    #[error("Missing TDF input: {0}")]
    MissingInput(String),

    /// A table required by the analysis.tdf schema is absent
    #[error("Missing required table: {0}")]
    MissingTable(String),

    /// A named instrument setting has no value anywhere in the store
    #[error("Instrument setting '{0}' is absent from the store")]
    SettingMissing(String),

    /// A supposedly constant instrument setting resolved to multiple values
    #[error("Instrument setting '{name}' has {distinct} distinct values, expected exactly one")]
    SettingAmbiguous {
        /// Permanent name of the setting
        name: String,
        /// Number of distinct values found
        distinct: usize,
    },

    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
