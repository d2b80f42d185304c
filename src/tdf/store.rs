//! Read-only access to the analysis.tdf SQLite metadata store.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use log::warn;
use rusqlite::{params, Connection, OpenFlags};
use tempfile::NamedTempFile;

use super::error::TdfError;
use super::{MSMS_TYPE_MS1, REQUIRED_TABLES};

/// Read-only handle over an `analysis.tdf` metadata store.
///
/// The handle owns the SQLite connection for the duration of one analysis and
/// releases it (plus any backing temp file) on drop. The store is never
/// written; the connection is opened with read-only flags.
pub struct TdfStore {
    conn: Connection,
    // Keeps a byte-stream-backed store on disk until the handle drops.
    _backing: Option<NamedTempFile>,
}

impl TdfStore {
    /// Open an `analysis.tdf` file read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TdfError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(TdfError::InvalidPath(format!(
                "Path does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(TdfError::InvalidPath(format!(
                "Not a file: {}",
                path.display()
            )));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let store = Self {
            conn,
            _backing: None,
        };
        store.verify_schema()?;
        Ok(store)
    }

    /// Materialize an uploaded byte stream into a temp file and open it.
    ///
    /// The temp file lives exactly as long as the returned handle.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TdfError> {
        if bytes.is_empty() {
            return Err(TdfError::MissingInput(
                "empty byte stream, upload an analysis.tdf file".to_string(),
            ));
        }

        let mut backing = NamedTempFile::new()?;
        backing.write_all(bytes)?;
        backing.flush()?;

        let conn = Connection::open_with_flags(
            backing.path(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let store = Self {
            conn,
            _backing: Some(backing),
        };
        store.verify_schema()?;
        Ok(store)
    }

    /// Check that every table the query surface relies on is present.
    fn verify_schema(&self) -> Result<(), TdfError> {
        for table in REQUIRED_TABLES {
            let found: i64 = self.conn.query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table],
                |row| row.get(0),
            )?;
            if found == 0 {
                return Err(TdfError::MissingTable((*table).to_string()));
            }
        }
        Ok(())
    }

    /// Minimum and maximum frame id, or `None` for a store with no frames.
    pub fn frame_id_bounds(&self) -> Result<Option<(i64, i64)>, TdfError> {
        let bounds: (Option<i64>, Option<i64>) = self.conn.query_row(
            "SELECT MIN(Id), MAX(Id) FROM Frames",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(match bounds {
            (Some(low), Some(high)) => Some((low, high)),
            _ => None,
        })
    }

    /// Total number of frames in the store.
    pub fn frame_count(&self) -> Result<i64, TdfError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM Frames", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Number of frames of one MsMsType.
    pub fn frame_count_of_type(&self, ms_ms_type: i64) -> Result<i64, TdfError> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM Frames WHERE MsMsType = ?1",
            params![ms_ms_type],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Number of frames with ids in `[low, high]`.
    pub fn frame_count_between(&self, low: i64, high: i64) -> Result<i64, TdfError> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM Frames WHERE Id BETWEEN ?1 AND ?2",
            params![low, high],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// `(id, time)` pairs for frames in `[low, high]`, ordered by id.
    pub fn frame_times(&self, low: i64, high: i64) -> Result<(Vec<i64>, Vec<f64>), TdfError> {
        let mut stmt = self.conn.prepare(
            "SELECT Id, Time FROM Frames WHERE Id BETWEEN ?1 AND ?2 ORDER BY Id",
        )?;
        let mut ids = Vec::new();
        let mut times = Vec::new();
        let mut rows = stmt.query(params![low, high])?;
        while let Some(row) = rows.next()? {
            ids.push(row.get(0)?);
            times.push(row.get(1)?);
        }
        Ok((ids, times))
    }

    /// MS1 total-ion-current series: `(id, SummedIntensities)` for survey
    /// frames in `[low, high]`, ordered by id.
    pub fn ms1_tic(&self, low: i64, high: i64) -> Result<(Vec<i64>, Vec<f64>), TdfError> {
        let mut stmt = self.conn.prepare(
            "SELECT Id, SummedIntensities FROM Frames \
             WHERE MsMsType = ?1 AND Id BETWEEN ?2 AND ?3 ORDER BY Id",
        )?;
        let mut ids = Vec::new();
        let mut intensities = Vec::new();
        let mut rows = stmt.query(params![MSMS_TYPE_MS1, low, high])?;
        while let Some(row) = rows.next()? {
            ids.push(row.get(0)?);
            intensities.push(row.get(1)?);
        }
        Ok((ids, intensities))
    }

    /// `(frame_id, value)` pairs for one named per-frame property, resolved
    /// through the PropertyDefinitions lookup, NULL values skipped, ordered
    /// by frame id. The series spans the whole store.
    pub fn property_series(&self, permanent_name: &str) -> Result<(Vec<i64>, Vec<f64>), TdfError> {
        let mut stmt = self.conn.prepare(
            "SELECT f.Id, p.Value FROM Frames f \
             JOIN Properties p ON p.Frame = f.Id \
               AND p.Property = (SELECT Id FROM PropertyDefinitions WHERE PermanentName = ?1) \
               AND p.Value NOT NULL \
             ORDER BY f.Id",
        )?;
        let mut ids = Vec::new();
        let mut values = Vec::new();
        let mut rows = stmt.query(params![permanent_name])?;
        while let Some(row) = rows.next()? {
            ids.push(row.get(0)?);
            values.push(row.get(1)?);
        }
        Ok((ids, values))
    }

    /// Resolve a named property expected to be constant across the whole
    /// acquisition. Exactly one distinct value must exist: zero (or a sole
    /// NULL) yields [`TdfError::SettingMissing`], two or more yield
    /// [`TdfError::SettingAmbiguous`].
    pub fn distinct_property_value(&self, permanent_name: &str) -> Result<f64, TdfError> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT p.Value FROM Properties p \
             WHERE p.Property = (SELECT Id FROM PropertyDefinitions WHERE PermanentName = ?1)",
        )?;
        let mut values: Vec<Option<f64>> = Vec::new();
        let mut rows = stmt.query(params![permanent_name])?;
        while let Some(row) = rows.next()? {
            values.push(row.get(0)?);
        }
        Self::expect_single(permanent_name, &values)
    }

    /// Resolve `Frames.NumScans`, expected constant across the acquisition.
    pub fn distinct_num_scans(&self) -> Result<i64, TdfError> {
        let mut stmt = self.conn.prepare("SELECT DISTINCT NumScans FROM Frames")?;
        let mut values: Vec<Option<i64>> = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            values.push(row.get(0)?);
        }
        Self::expect_single("NumScans", &values)
    }

    fn expect_single<T: Copy>(name: &str, values: &[Option<T>]) -> Result<T, TdfError> {
        match values {
            [] | [None] => Err(TdfError::SettingMissing(name.to_string())),
            [Some(value)] => Ok(*value),
            _ => Err(TdfError::SettingAmbiguous {
                name: name.to_string(),
                distinct: values.len(),
            }),
        }
    }

    /// Count of frames of one MsMsType with no recorded peaks, whole store.
    pub fn empty_frame_count(&self, ms_ms_type: i64) -> Result<i64, TdfError> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM Frames WHERE NumPeaks = 0 AND MsMsType = ?1",
            params![ms_ms_type],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Look up one GlobalMetadata value by key.
    pub fn global_metadata(&self, key: &str) -> Result<Option<String>, TdfError> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM GlobalMetadata WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Sample name recorded by the acquisition software, if any.
    pub fn sample_name(&self) -> Result<Option<String>, TdfError> {
        self.global_metadata("SampleName")
    }

    /// Acquisition start timestamp, if present and parseable.
    pub fn acquisition_time(&self) -> Result<Option<DateTime<FixedOffset>>, TdfError> {
        let Some(raw) = self.global_metadata("AcquisitionDateTime")? else {
            return Ok(None);
        };
        match DateTime::parse_from_rfc3339(&raw) {
            Ok(ts) => Ok(Some(ts)),
            Err(e) => {
                warn!("Unparseable AcquisitionDateTime '{raw}': {e}");
                Ok(None)
            }
        }
    }
}
