//! Instrument settings expected to be constant across an acquisition.

use crate::tdf::{TdfStore, PROP_EXTRACT_TRIGGER_TIME, PROP_QUENCH_TIME_SET};

use super::error::AnalyzerError;

/// The three global settings that fix the theoretical frame period.
///
/// Each is resolved through a distinct-value query over the whole store;
/// anything other than exactly one value is a hard error, since a varying
/// "constant" indicates a corrupt or heterogeneous acquisition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentSettings {
    /// Mobility scans per frame (`Frames.NumScans`)
    pub num_scans: i64,
    /// Digitizer trigger interval per scan, microseconds
    pub trigger_extract_us: f64,
    /// Collision-cell quench time, milliseconds
    pub quench_time_ms: f64,
}

impl InstrumentSettings {
    /// Resolve all three settings from the store.
    pub fn resolve(store: &TdfStore) -> Result<Self, AnalyzerError> {
        let trigger_extract_us = store
            .distinct_property_value(PROP_EXTRACT_TRIGGER_TIME)
            .map_err(AnalyzerError::from_setting_lookup)?;
        let num_scans = store
            .distinct_num_scans()
            .map_err(AnalyzerError::from_setting_lookup)?;
        let quench_time_ms = store
            .distinct_property_value(PROP_QUENCH_TIME_SET)
            .map_err(AnalyzerError::from_setting_lookup)?;

        Ok(Self {
            num_scans,
            trigger_extract_us,
            quench_time_ms,
        })
    }

    /// Theoretical floor on per-frame duration, in seconds:
    /// `num_scans × trigger_µs × 1e-6 + quench_ms × 1e-3`.
    pub fn expected_frame_period(&self) -> Result<f64, AnalyzerError> {
        let period = self.num_scans as f64 * self.trigger_extract_us * 1e-6
            + self.quench_time_ms * 1e-3;
        if period == 0.0 {
            return Err(AnalyzerError::DegenerateSettings(format!(
                "expected frame period is zero (NumScans={}, {}={} us, {}={} ms)",
                self.num_scans,
                PROP_EXTRACT_TRIGGER_TIME,
                self.trigger_extract_us,
                PROP_QUENCH_TIME_SET,
                self.quench_time_ms,
            )));
        }
        Ok(period)
    }
}
