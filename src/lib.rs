//! # tdfcycle - Duty-Cycle Diagnostics for Bruker TimsTOF Acquisitions
//!
//! `tdfcycle` opens a Bruker timsTOF `analysis.tdf` metadata store (the
//! SQLite database inside every `.d` acquisition directory) read-only and
//! computes duty-cycle diagnostics: how the observed frame cadence compares
//! to the frame period the instrument settings theoretically allow.
//!
//! ## What gets computed
//!
//! - **Frame time deltas**: consecutive differences of `Frames.Time` over a
//!   frame-id range, the observed per-frame duration.
//! - **Expected frame period**: `NumScans × Digitizer_ExtractTriggerTime`
//!   plus `Collision_QuenchTime_Set`, the theoretical floor on frame time.
//! - **Scheduling series**: precursor-selection (`PrecSel_CompleteTime`) and
//!   frame-submission (`Timing_SubmitFrame`) timings per frame.
//! - **Instrument health**: whole-store counts of MS1 and MS/MS frames that
//!   recorded zero peaks.
//! - **Deviation statistics**: mean absolute and signed deviation of the
//!   observed cadence from the expected period.
//!
//! The result is a plain [`DutyCycleReport`] aggregate; rendering (text,
//! JSON, charts) is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tdfcycle::analyzer::{analyze, FrameRange};
//! use tdfcycle::tdf::TdfStore;
//!
//! // Open the metadata store read-only
//! let store = TdfStore::open("sample.d/analysis.tdf")?;
//!
//! // Analyze a frame-id window (unset bounds span the whole run)
//! let report = analyze(&store, FrameRange::new(Some(100), Some(5000)))?;
//!
//! println!("expected period: {:.4} s", report.expected_frame_period);
//! if let Some(dev) = &report.deviation {
//!     println!("mean |deviation|: {:.2}%", dev.mean_abs_fraction * 100.0);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Uploaded byte streams work too; the store materializes them into a temp
//! file scoped to the handle:
//!
//! ```rust,no_run
//! use tdfcycle::tdf::TdfStore;
//!
//! let bytes = std::fs::read("analysis.tdf")?;
//! let store = TdfStore::from_bytes(&bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analyzer;
pub mod report;
pub mod tdf;

#[cfg(test)]
pub(crate) mod testutil;

pub use analyzer::{analyze, AnalyzerError, DutyCycleAnalyzer, FrameRange};
pub use report::{DeviationStats, DutyCycleReport, EmptyFrameCounts, TimingSeries};
pub use tdf::{TdfError, TdfStore};
