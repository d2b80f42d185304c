//! Duty-cycle analysis over an `analysis.tdf` store.
//!
//! [`DutyCycleAnalyzer`] turns the raw frame and property tables into a
//! [`DutyCycleReport`]: consecutive frame-time deltas, precursor-selection
//! and frame-submission series, the theoretical frame period implied by the
//! instrument settings, whole-store empty-frame counts, and cadence deviation
//! statistics. The analysis is a one-shot, read-only, deterministic
//! transformation; feeding the same store and range twice yields an equal
//! report.
//!
//! # Example
//!
//! ```no_run
//! use tdfcycle::analyzer::{analyze, FrameRange};
//! use tdfcycle::tdf::TdfStore;
//!
//! let store = TdfStore::open("sample.d/analysis.tdf")?;
//! let report = analyze(&store, FrameRange::default())?;
//!
//! println!("{report}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod settings;
pub mod stats;


pub use error::AnalyzerError;
pub use settings::InstrumentSettings;

use log::debug;

use crate::report::{DutyCycleReport, EmptyFrameCounts, TimingSeries};
use crate::tdf::{
    TdfStore, MSMS_TYPE_MS1, MSMS_TYPE_MSMS, PROP_PRECSEL_COMPLETE_TIME,
    PROP_TIMING_SUBMIT_FRAME,
};

/// An inclusive frame-id window; unset bounds default to the store's
/// minimum and maximum frame id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameRange {
    /// Inclusive lower bound, or `None` for the first frame in the store
    pub low: Option<i64>,
    /// Inclusive upper bound, or `None` for the last frame in the store
    pub high: Option<i64>,
}

impl FrameRange {
    /// A range with optional bounds.
    pub fn new(low: Option<i64>, high: Option<i64>) -> Self {
        Self { low, high }
    }

    /// A fully bounded range.
    pub fn bounded(low: i64, high: i64) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
        }
    }

    /// Reject reversed bounds before any query runs.
    fn validate(&self) -> Result<(), AnalyzerError> {
        if let (Some(low), Some(high)) = (self.low, self.high) {
            if high < low {
                return Err(AnalyzerError::InvalidRange { low, high });
            }
        }
        Ok(())
    }
}

/// Computes duty-cycle diagnostics for one frame-id range.
pub struct DutyCycleAnalyzer {
    range: FrameRange,
}

impl DutyCycleAnalyzer {
    /// An analyzer over the full frame range of the store.
    pub fn new() -> Self {
        Self::with_range(FrameRange::default())
    }

    /// An analyzer over an explicit frame range.
    pub fn with_range(range: FrameRange) -> Self {
        Self { range }
    }

    /// Run the analysis against a store.
    pub fn analyze(&self, store: &TdfStore) -> Result<DutyCycleReport, AnalyzerError> {
        self.range.validate()?;

        let Some((min_id, max_id)) = store.frame_id_bounds()? else {
            return Err(AnalyzerError::EmptyRange(
                "store contains no frames".to_string(),
            ));
        };
        let low = self.range.low.unwrap_or(min_id);
        let high = self.range.high.unwrap_or(max_id);

        let frames_in_range = store.frame_count_between(low, high)?;
        if frames_in_range == 0 {
            return Err(AnalyzerError::EmptyRange(format!(
                "no frames with ids between {low} and {high} (store spans {min_id}..={max_id})"
            )));
        }
        debug!("analyzing {frames_in_range} frames, ids {low}..={high}");

        let settings = InstrumentSettings::resolve(store)?;
        let expected_frame_period = settings.expected_frame_period()?;
        debug!(
            "expected frame period {expected_frame_period:.6} s (NumScans={})",
            settings.num_scans
        );

        let (tic_ids, tic_values) = store.ms1_tic(low, high)?;
        let (frame_ids, frame_times) = store.frame_times(low, high)?;
        let deltas = stats::consecutive_deltas(&frame_times);

        let (precsel_ids, precsel_values) =
            store.property_series(PROP_PRECSEL_COMPLETE_TIME)?;
        let (submit_ids, submit_values) = store.property_series(PROP_TIMING_SUBMIT_FRAME)?;

        // Instrument-health signal, deliberately not range-restricted.
        let empty_frames = EmptyFrameCounts {
            ms1: store.empty_frame_count(MSMS_TYPE_MS1)?,
            ms2: store.empty_frame_count(MSMS_TYPE_MSMS)?,
        };

        let deviation = stats::deviation_from_deltas(&deltas, expected_frame_period);

        // The delta at index i belongs to the leading frame of the pair.
        let delta_ids = frame_ids[..frame_ids.len().saturating_sub(1)].to_vec();

        Ok(DutyCycleReport {
            sample_name: store.sample_name()?,
            acquired_at: store.acquisition_time()?,
            frame_id_low: low,
            frame_id_high: high,
            frames_in_range: frames_in_range as usize,
            expected_frame_period,
            ms1_tic: TimingSeries::new(tic_ids, tic_values),
            frame_deltas: TimingSeries::new(delta_ids, deltas),
            precursor_selection: TimingSeries::new(precsel_ids, precsel_values),
            frame_submission: TimingSeries::new(submit_ids, submit_values),
            empty_frames,
            deviation,
        })
    }
}

impl Default for DutyCycleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze a store over a range in one call.
pub fn analyze(store: &TdfStore, range: FrameRange) -> Result<DutyCycleReport, AnalyzerError> {
    DutyCycleAnalyzer::with_range(range).analyze(store)
}
