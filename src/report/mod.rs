//! The duty-cycle report aggregate.
//!
//! [`DutyCycleReport`] is plain data: the analyzer fills it, callers render
//! it however they like (text summary via `Display`, JSON via serde, or a
//! chart in a downstream tool). Nothing here touches the store.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// A time-like series keyed by frame id, stored as parallel arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimingSeries {
    /// Frame ids, ascending
    pub frame_ids: Vec<i64>,
    /// One value per frame id
    pub values: Vec<f64>,
}

impl TimingSeries {
    /// Build a series from parallel id/value arrays.
    pub fn new(frame_ids: Vec<i64>, values: Vec<f64>) -> Self {
        debug_assert_eq!(frame_ids.len(), values.len());
        Self { frame_ids, values }
    }

    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.frame_ids.len()
    }

    /// Whether the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.frame_ids.is_empty()
    }
}

/// Whole-store counts of frames that recorded zero peaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyFrameCounts {
    /// Empty MS1 survey frames
    pub ms1: i64,
    /// Empty MS/MS frames
    pub ms2: i64,
}

/// Deviation of observed frame cadence from the expected frame period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviationStats {
    /// Mean absolute deviation as a fraction of the expected period
    pub mean_abs_fraction: f64,
    /// Mean signed deviation as a fraction of the expected period
    pub mean_signed_fraction: f64,
    /// Mean signed deviation in seconds
    pub mean_signed_seconds: f64,
}

/// Duty-cycle diagnostics for one acquisition, over one frame-id range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutyCycleReport {
    /// Sample name from GlobalMetadata, if recorded
    pub sample_name: Option<String>,
    /// Acquisition start timestamp, if recorded and parseable
    pub acquired_at: Option<DateTime<FixedOffset>>,
    /// Resolved lower frame-id bound
    pub frame_id_low: i64,
    /// Resolved upper frame-id bound
    pub frame_id_high: i64,
    /// Number of frames inside the resolved range
    pub frames_in_range: usize,
    /// Theoretical frame period in seconds, from instrument settings
    pub expected_frame_period: f64,
    /// MS1 total-ion-current per survey frame in range
    pub ms1_tic: TimingSeries,
    /// Consecutive frame time deltas; `frame_ids[i]` is the leading frame
    /// of pair `i`, so the series is one shorter than the frame count
    pub frame_deltas: TimingSeries,
    /// Precursor-selection + scheduling times, whole store
    pub precursor_selection: TimingSeries,
    /// Frame-submission timestamps, whole store
    pub frame_submission: TimingSeries,
    /// Whole-store empty-frame counts
    pub empty_frames: EmptyFrameCounts,
    /// Cadence deviation summary; `None` when the range holds fewer than
    /// two frames
    pub deviation: Option<DeviationStats>,
}

impl fmt::Display for DutyCycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Duty Cycle Report")?;
        writeln!(f, "=================")?;
        if let Some(name) = &self.sample_name {
            writeln!(f, "Sample:            {name}")?;
        }
        if let Some(ts) = &self.acquired_at {
            writeln!(f, "Acquired:          {}", ts.to_rfc3339())?;
        }
        writeln!(
            f,
            "Frames:            {} (ids {}..={})",
            self.frames_in_range, self.frame_id_low, self.frame_id_high
        )?;
        writeln!(
            f,
            "Expected period:   {:.6} s",
            self.expected_frame_period
        )?;
        writeln!(
            f,
            "Empty frames:      {} MS1, {} MS/MS (whole store)",
            self.empty_frames.ms1, self.empty_frames.ms2
        )?;
        writeln!(f, "MS1 TIC points:    {}", self.ms1_tic.len())?;
        writeln!(f, "PrecSel points:    {}", self.precursor_selection.len())?;
        writeln!(f, "Submission points: {}", self.frame_submission.len())?;
        match &self.deviation {
            Some(dev) => {
                writeln!(
                    f,
                    "Mean |deviation|:  {:.2}% of expected period",
                    dev.mean_abs_fraction * 100.0
                )?;
                writeln!(
                    f,
                    "Mean deviation:    {:+.2}% ({:+.6} s)",
                    dev.mean_signed_fraction * 100.0,
                    dev.mean_signed_seconds
                )?;
            }
            None => {
                writeln!(f, "Mean deviation:    n/a (fewer than two frames in range)")?;
            }
        }
        Ok(())
    }
}
