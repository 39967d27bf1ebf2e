//! Cost Explorer CSV export reader

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::types::{CostrepError, Result};

use super::TabularSource;

/// Reader for the CSV file exported from the Cost Explorer console.
///
/// Reads raw string rows; numeric interpretation happens at the engine
/// boundary via [`parse_amount`]. Records that fail CSV decoding are
/// skipped with a warning rather than aborting the whole read.
pub struct CsvExportSource {
    path: PathBuf,
}

impl CsvExportSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl TabularSource for CsvExportSource {
    fn read_rows(&self) -> Result<Vec<Vec<String>>> {
        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            match record {
                Ok(r) => rows.push(r.iter().map(str::to_string).collect()),
                Err(e) => {
                    eprintln!("[costrep] Warning: skipping row {}: {}", idx, e);
                }
            }
        }

        Ok(rows)
    }
}

/// Parse a numeric amount cell.
///
/// Lenient by default: a malformed cell silently reads as `0.0`, matching
/// the upstream export's established behavior. `strict` promotes the
/// failure to a `Parse` error for integrations that cannot tolerate
/// silent data loss.
pub fn parse_amount(cell: &str, strict: bool) -> Result<f64> {
    match cell.trim().parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) if !strict => Ok(0.0),
        Err(_) => Err(CostrepError::Parse(format!(
            "malformed numeric cell: {:?}",
            cell
        ))),
    }
}
