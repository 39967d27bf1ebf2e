//! SQLite-backed cost store
//!
//! The `costs` table is synced periodically from the Cost Explorer API by
//! an external job; this module only ever reads ranges from it. One row
//! per observation: unix timestamp, service name, priced amount.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::types::{CostrepError, RawObservation, Result};

use super::TimeSeriesStore;

/// Read-only range queries against the synced SQLite cost database
pub struct SqliteCostStore {
    conn: Connection,
}

impl SqliteCostStore {
    /// Open the database file. Connection failures surface as a single
    /// `DataSource` error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .map_err(|e| CostrepError::DataSource(e.to_string()))?;
        Ok(Self { conn })
    }
}

impl TimeSeriesStore for SqliteCostStore {
    fn query_range(&self, start_unix: i64, end_unix: i64) -> Result<Vec<RawObservation>> {
        let mut stmt = self
            .conn
            .prepare("SELECT ts, service, value FROM costs WHERE ts BETWEEN ?1 AND ?2")
            .map_err(|e| CostrepError::DataSource(e.to_string()))?;

        let rows = stmt
            .query_map(params![start_unix, end_unix], |row| {
                Ok(RawObservation {
                    ts: row.get(0)?,
                    service: row.get(1)?,
                    amount: row.get(2)?,
                })
            })
            .map_err(|e| CostrepError::DataSource(e.to_string()))?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| CostrepError::DataSource(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded_db(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("costs.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE costs (ts INTEGER NOT NULL, service TEXT NOT NULL, value REAL NOT NULL);",
        )
        .unwrap();
        let rows: &[(i64, &str, f64)] = &[
            (100, "AmazonEC2", 1.5),
            (200, "AmazonS3", 0.25),
            (300, "AmazonEC2", 2.0),
            (900, "AWSLambda", 0.1),
        ];
        for (ts, service, value) in rows {
            conn.execute(
                "INSERT INTO costs (ts, service, value) VALUES (?1, ?2, ?3)",
                params![ts, service, value],
            )
            .unwrap();
        }
        path
    }

    #[test]
    fn test_query_range_inclusive_bounds() {
        let dir = TempDir::new().unwrap();
        let store = SqliteCostStore::open(seeded_db(&dir)).unwrap();

        let observations = store.query_range(100, 300).unwrap();
        assert_eq!(observations.len(), 3);
        assert_eq!(observations[0].service, "AmazonEC2");
        assert!((observations[0].amount - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_query_range_empty_window() {
        let dir = TempDir::new().unwrap();
        let store = SqliteCostStore::open(seeded_db(&dir)).unwrap();

        let observations = store.query_range(400, 800).unwrap();
        assert!(observations.is_empty());
    }

    #[test]
    fn test_query_missing_table_is_data_source_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.db");
        Connection::open(&path).unwrap();

        let store = SqliteCostStore::open(&path).unwrap();
        let result = store.query_range(0, 1000);
        assert!(matches!(result, Err(CostrepError::DataSource(_))));
    }
}
