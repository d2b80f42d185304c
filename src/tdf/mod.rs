//! Bruker TimsTOF metadata store (`analysis.tdf`) access.
//!
//! An `analysis.tdf` file is a plain SQLite database living inside a Bruker
//! `.d` acquisition directory. This module opens it read-only and exposes the
//! fixed query surface the duty-cycle analyzer needs.
//!
//! Tables used:
//!
//! | Table | Contents |
//! |-------|----------|
//! | `Frames` | one row per acquisition frame: `Id`, `Time`, `SummedIntensities`, `MsMsType`, `NumPeaks`, `NumScans` |
//! | `Properties` | sparse per-frame property values, keyed by property id |
//! | `PropertyDefinitions` | property name → id lookup (`PermanentName`) |
//! | `GlobalMetadata` | key/value run metadata (`SampleName`, `AcquisitionDateTime`, ...) |
//!
//! Per-frame timing properties referenced by the analyzer:
//!
//! - `PrecSel_CompleteTime` — precursor selection + scheduling time
//! - `Timing_SubmitFrame` — frame submission timestamp
//! - `Digitizer_ExtractTriggerTime` — per-scan trigger interval, microseconds
//! - `Collision_QuenchTime_Set` — collision-cell quench time, milliseconds
//!
//! # Example
//!
//! ```no_run
//! use tdfcycle::tdf::TdfStore;
//!
//! let store = TdfStore::open("sample.d/analysis.tdf")?;
//! if let Some((low, high)) = store.frame_id_bounds()? {
//!     println!("frames {low}..={high}");
//! }
//! # Ok::<(), tdfcycle::tdf::TdfError>(())
//! ```

pub mod error;
pub mod store;


pub use error::TdfError;
pub use store::TdfStore;

/// `Frames.MsMsType` value for MS1 survey frames.
pub const MSMS_TYPE_MS1: i64 = 0;

/// `Frames.MsMsType` value for MS/MS (PASEF fragmentation) frames.
pub const MSMS_TYPE_MSMS: i64 = 8;

/// Per-frame property holding precursor-selection + scheduling time.
pub const PROP_PRECSEL_COMPLETE_TIME: &str = "PrecSel_CompleteTime";

/// Per-frame property holding the frame-submission timestamp.
pub const PROP_TIMING_SUBMIT_FRAME: &str = "Timing_SubmitFrame";

/// Digitizer trigger interval per scan, in microseconds.
pub const PROP_EXTRACT_TRIGGER_TIME: &str = "Digitizer_ExtractTriggerTime";

/// Collision-cell quench time, in milliseconds.
pub const PROP_QUENCH_TIME_SET: &str = "Collision_QuenchTime_Set";

/// Tables the query surface relies on; verified when a store is opened.
pub(crate) const REQUIRED_TABLES: &[&str] = &[
    "Frames",
    "Properties",
    "PropertyDefinitions",
    "GlobalMetadata",
];
