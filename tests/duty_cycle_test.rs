//! Integration tests for tdfcycle
//!
//! These tests drive the public API end to end against synthetic
//! analysis.tdf stores built on the fly.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tempfile::tempdir;

use tdfcycle::analyzer::{analyze, FrameRange};
use tdfcycle::tdf::TdfStore;

const PROP_PRECSEL: i64 = 1;
const PROP_SUBMIT: i64 = 2;
const PROP_TRIGGER: i64 = 3;
const PROP_QUENCH: i64 = 4;

/// Build a synthetic acquisition of `n` frames with a nominal 0.2 s cadence
/// and a small deterministic jitter. Every third frame is MS1.
fn write_synthetic_store(dir: &Path, n: i64) -> PathBuf {
    let path = dir.join("analysis.tdf");
    let conn = Connection::open(&path).unwrap();

    conn.execute_batch(
        "CREATE TABLE Frames (
             Id INTEGER PRIMARY KEY,
             Time REAL NOT NULL,
             SummedIntensities REAL NOT NULL,
             MsMsType INTEGER NOT NULL,
             NumPeaks INTEGER NOT NULL,
             NumScans INTEGER NOT NULL
         );
         CREATE TABLE Properties (Frame INTEGER, Property INTEGER, Value REAL);
         CREATE TABLE PropertyDefinitions (Id INTEGER PRIMARY KEY, PermanentName TEXT);
         CREATE TABLE GlobalMetadata (key TEXT, value TEXT);",
    )
    .unwrap();

    for (id, name) in [
        (PROP_PRECSEL, "PrecSel_CompleteTime"),
        (PROP_SUBMIT, "Timing_SubmitFrame"),
        (PROP_TRIGGER, "Digitizer_ExtractTriggerTime"),
        (PROP_QUENCH, "Collision_QuenchTime_Set"),
    ] {
        conn.execute(
            "INSERT INTO PropertyDefinitions (Id, PermanentName) VALUES (?1, ?2)",
            params![id, name],
        )
        .unwrap();
    }

    let mut time = 0.0_f64;
    for id in 1..=n {
        // deterministic jitter in [-3, +3] ms
        let jitter = ((id * 37) % 7 - 3) as f64 * 1e-3;
        let is_ms1 = id % 3 == 1;
        conn.execute(
            "INSERT INTO Frames (Id, Time, SummedIntensities, MsMsType, NumPeaks, NumScans)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                id,
                time,
                5e5 + id as f64 * 1e3,
                if is_ms1 { 0 } else { 8 },
                200 + id,
                2_i64,
            ],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO Properties (Frame, Property, Value) VALUES (?1, ?2, ?3)",
            params![id, PROP_TRIGGER, 75_000.0],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO Properties (Frame, Property, Value) VALUES (?1, ?2, ?3)",
            params![id, PROP_QUENCH, 50.0],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO Properties (Frame, Property, Value) VALUES (?1, ?2, ?3)",
            params![id, PROP_SUBMIT, 0.04 + id as f64 * 1e-4],
        )
        .unwrap();
        if is_ms1 {
            conn.execute(
                "INSERT INTO Properties (Frame, Property, Value) VALUES (?1, ?2, ?3)",
                params![id, PROP_PRECSEL, 0.011 + id as f64 * 1e-5],
            )
            .unwrap();
        }
        time += 0.2 + jitter;
    }

    conn.execute(
        "INSERT INTO GlobalMetadata (key, value) VALUES ('SampleName', 'K562_diaPASEF')",
        [],
    )
    .unwrap();

    path
}

#[test]
fn test_full_pipeline_synthetic_run() {
    let dir = tempdir().unwrap();
    let path = write_synthetic_store(dir.path(), 60);
    let store = TdfStore::open(&path).unwrap();

    let report = analyze(&store, FrameRange::default()).unwrap();

    assert_eq!(report.frames_in_range, 60);
    assert_eq!(report.frame_deltas.len(), 59);
    assert!((report.expected_frame_period - 0.2).abs() < 1e-12);
    assert_eq!(report.sample_name.as_deref(), Some("K562_diaPASEF"));
    assert_eq!(report.ms1_tic.len(), 20);
    assert_eq!(report.precursor_selection.len(), 20);
    assert_eq!(report.frame_submission.len(), 60);

    // Jitter is bounded by 3 ms, so deviations stay below 1.5% of 0.2 s
    let dev = report.deviation.expect("59 deltas");
    assert!(dev.mean_abs_fraction < 0.015 + 1e-12);
    assert!(dev.mean_signed_seconds.abs() < 3e-3 + 1e-12);
}

#[test]
fn test_windowed_analysis_matches_frame_subset() {
    let dir = tempdir().unwrap();
    let path = write_synthetic_store(dir.path(), 60);
    let store = TdfStore::open(&path).unwrap();

    let report = analyze(&store, FrameRange::bounded(10, 30)).unwrap();

    assert_eq!(report.frame_id_low, 10);
    assert_eq!(report.frame_id_high, 30);
    assert_eq!(report.frames_in_range, 21);
    assert_eq!(report.frame_deltas.len(), 20);
    assert_eq!(report.frame_deltas.frame_ids.first(), Some(&10));
    assert_eq!(report.frame_deltas.frame_ids.last(), Some(&29));
    assert!(report
        .ms1_tic
        .frame_ids
        .iter()
        .all(|id| (10..=30).contains(id)));
}

#[test]
fn test_byte_stream_store_matches_file_store() {
    let dir = tempdir().unwrap();
    let path = write_synthetic_store(dir.path(), 20);

    let from_file = TdfStore::open(&path).unwrap();
    let from_bytes = TdfStore::from_bytes(&std::fs::read(&path).unwrap()).unwrap();

    let range = FrameRange::bounded(1, 20);
    assert_eq!(
        analyze(&from_file, range).unwrap(),
        analyze(&from_bytes, range).unwrap()
    );
}

#[test]
fn test_json_export_shape() {
    let dir = tempdir().unwrap();
    let path = write_synthetic_store(dir.path(), 10);
    let store = TdfStore::open(&path).unwrap();

    let report = analyze(&store, FrameRange::default()).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();

    assert_eq!(json["frames_in_range"], 10);
    assert_eq!(json["sample_name"], "K562_diaPASEF");
    assert_eq!(json["frame_deltas"]["frame_ids"].as_array().unwrap().len(), 9);
    assert!(json["deviation"]["mean_abs_fraction"].is_f64());
    assert!(json["empty_frames"]["ms1"].is_i64());
}

#[test]
fn test_display_summary_lines() {
    let dir = tempdir().unwrap();
    let path = write_synthetic_store(dir.path(), 10);
    let store = TdfStore::open(&path).unwrap();

    let report = analyze(&store, FrameRange::default()).unwrap();
    let text = report.to_string();

    assert!(text.contains("Duty Cycle Report"));
    assert!(text.contains("K562_diaPASEF"));
    assert!(text.contains("0.200000 s"));
    assert!(text.contains("Mean |deviation|:"));
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod property_tests {
    use proptest::prelude::*;
    use tdfcycle::analyzer::stats::{consecutive_deltas, deviation_from_deltas};

    proptest! {
        /// Delta sequences are always one shorter than the time sequence
        #[test]
        fn test_delta_length(times in prop::collection::vec(0.0_f64..1e4, 2..200)) {
            let deltas = consecutive_deltas(&times);
            prop_assert_eq!(deltas.len(), times.len() - 1);
        }

        /// Each delta reproduces the difference of its neighboring times
        #[test]
        fn test_delta_values(times in prop::collection::vec(0.0_f64..1e4, 2..200)) {
            let deltas = consecutive_deltas(&times);
            for (i, delta) in deltas.iter().enumerate() {
                prop_assert!((delta - (times[i + 1] - times[i])).abs() < 1e-9);
            }
        }

        /// Uniform cadence matching the expected period has zero deviation
        #[test]
        fn test_uniform_cadence_no_deviation(period in 0.01_f64..2.0, n in 2usize..100) {
            let deltas = vec![period; n];
            let stats = deviation_from_deltas(&deltas, period).unwrap();
            prop_assert!(stats.mean_abs_fraction.abs() < 1e-9);
            prop_assert!(stats.mean_signed_seconds.abs() < 1e-9);
        }
    }
}
