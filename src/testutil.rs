//! Shared fixture builders for store-backed tests.
//!
//! Builds small `analysis.tdf` lookalikes in temp directories with the four
//! tables the query surface relies on.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

pub(crate) const PROP_ID_PRECSEL: i64 = 1;
pub(crate) const PROP_ID_SUBMIT: i64 = 2;
pub(crate) const PROP_ID_TRIGGER: i64 = 3;
pub(crate) const PROP_ID_QUENCH: i64 = 4;

/// One `Frames` row for a fixture store.
pub(crate) struct FixtureFrame {
    pub id: i64,
    pub time: f64,
    pub summed_intensities: f64,
    pub ms_ms_type: i64,
    pub num_peaks: i64,
    pub num_scans: i64,
}

pub(crate) fn create_schema(conn: &Connection) {
    conn.execute_batch(
        "CREATE TABLE Frames (
             Id INTEGER PRIMARY KEY,
             Time REAL NOT NULL,
             SummedIntensities REAL NOT NULL,
             MsMsType INTEGER NOT NULL,
             NumPeaks INTEGER NOT NULL,
             NumScans INTEGER NOT NULL
         );
         CREATE TABLE Properties (
             Frame INTEGER NOT NULL,
             Property INTEGER NOT NULL,
             Value REAL
         );
         CREATE TABLE PropertyDefinitions (
             Id INTEGER PRIMARY KEY,
             PermanentName TEXT NOT NULL
         );
         CREATE TABLE GlobalMetadata (
             key TEXT NOT NULL,
             value TEXT NOT NULL
         );",
    )
    .unwrap();
}

pub(crate) fn insert_property_definitions(conn: &Connection) {
    for (id, name) in [
        (PROP_ID_PRECSEL, "PrecSel_CompleteTime"),
        (PROP_ID_SUBMIT, "Timing_SubmitFrame"),
        (PROP_ID_TRIGGER, "Digitizer_ExtractTriggerTime"),
        (PROP_ID_QUENCH, "Collision_QuenchTime_Set"),
    ] {
        conn.execute(
            "INSERT INTO PropertyDefinitions (Id, PermanentName) VALUES (?1, ?2)",
            params![id, name],
        )
        .unwrap();
    }
}

pub(crate) fn insert_frame(conn: &Connection, frame: &FixtureFrame) {
    conn.execute(
        "INSERT INTO Frames (Id, Time, SummedIntensities, MsMsType, NumPeaks, NumScans)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            frame.id,
            frame.time,
            frame.summed_intensities,
            frame.ms_ms_type,
            frame.num_peaks,
            frame.num_scans,
        ],
    )
    .unwrap();
}

pub(crate) fn insert_property(conn: &Connection, frame: i64, property: i64, value: Option<f64>) {
    conn.execute(
        "INSERT INTO Properties (Frame, Property, Value) VALUES (?1, ?2, ?3)",
        params![frame, property, value],
    )
    .unwrap();
}

pub(crate) fn insert_metadata(conn: &Connection, key: &str, value: &str) {
    conn.execute(
        "INSERT INTO GlobalMetadata (key, value) VALUES (?1, ?2)",
        params![key, value],
    )
    .unwrap();
}

/// The reference acquisition: 5 frames with times
/// `[0.0, 0.2, 0.41, 0.59, 0.81]`, alternating MS1/MS-MS, NumScans = 2,
/// trigger 75000 us and quench 50 ms, so the expected frame period is
/// exactly 0.2 s.
pub(crate) fn write_reference_store(dir: &Path) -> PathBuf {
    let path = dir.join("analysis.tdf");
    let conn = Connection::open(&path).unwrap();
    create_schema(&conn);
    insert_property_definitions(&conn);

    let times = [0.0, 0.2, 0.41, 0.59, 0.81];
    for (i, time) in times.iter().enumerate() {
        let id = i as i64 + 1;
        let is_ms1 = id % 2 == 1;
        insert_frame(
            &conn,
            &FixtureFrame {
                id,
                time: *time,
                summed_intensities: 1e6 + id as f64 * 1e4,
                ms_ms_type: if is_ms1 { 0 } else { 8 },
                num_peaks: 100 + id,
                num_scans: 2,
            },
        );
        insert_property(&conn, id, PROP_ID_TRIGGER, Some(75_000.0));
        insert_property(&conn, id, PROP_ID_QUENCH, Some(50.0));
        insert_property(&conn, id, PROP_ID_SUBMIT, Some(0.05 + id as f64 * 1e-3));
        if is_ms1 {
            insert_property(&conn, id, PROP_ID_PRECSEL, Some(0.010 + id as f64 * 1e-3));
        }
    }

    insert_metadata(&conn, "SampleName", "HeLa_200ng");
    insert_metadata(&conn, "AcquisitionDateTime", "2024-03-15T10:30:00.000+01:00");

    path
}
