//! Cost data model shared by the report engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date layout used across flags, labels, and the CSV export
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Month layout used for monthly axis labels
pub const MONTH_LAYOUT: &str = "%Y-%m";

/// One raw cost data point from an ingestion source.
///
/// Mirrors a row of the synced `costs` table: unix timestamp,
/// service name, and the priced amount for that instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawObservation {
    pub ts: i64,
    pub service: String,
    pub amount: f64,
}

/// A contiguous calendar-aligned date interval, inclusive on both ends.
///
/// Buckets within one report cover the requested range exactly, in
/// chronological order, with no gaps or overlaps. The first and last
/// bucket of a week partition may span fewer than seven days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bucket {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Bucket {
    /// Axis label, e.g. "2023-01-02-2023-01-08"
    pub fn label(&self) -> String {
        format!(
            "{}-{}",
            self.start.format(DATE_LAYOUT),
            self.end.format(DATE_LAYOUT)
        )
    }

    /// Number of days covered, endpoints included
    pub fn day_span(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Inclusive unix-second bounds for the store query: midnight UTC on
    /// the start day through the last second of the end day.
    pub fn unix_range(&self) -> (i64, i64) {
        let start_ts = self
            .start
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always valid")
            .and_utc()
            .timestamp();
        let end_ts = self
            .end
            .and_hms_opt(23, 59, 59)
            .expect("23:59:59 is always valid")
            .and_utc()
            .timestamp();
        (start_ts, end_ts)
    }
}

/// Per-service costs, one summed slot per bucket, chronologically ordered.
/// `values.len()` always equals the report's bucket count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceCostVector {
    pub service: String,
    pub values: Vec<f64>,
}

impl ServiceCostVector {
    /// Sum across all buckets; used by the abridge filter
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Month-over-month comparison for one service
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonRow {
    pub service: String,
    pub prev_cost: f64,
    pub curr_cost: f64,
    pub delta: f64,
    pub rate_pct: f64,
}

/// Assembled report: rows of string cells, rendered as ", "-joined lines
pub type ReportTable = Vec<Vec<String>>;

/// Column used to rank the monthly report body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortKey {
    /// Sort by the month-over-month delta
    #[default]
    Amount,
    /// Sort by the formatted percentage change
    Rate,
}

/// Per-invocation report settings. Passed explicitly into each engine
/// call; nothing here survives between report runs.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Digits behind the decimal point for amount fields
    pub decimal_precision: usize,
    pub sort_key: SortKey,
    /// Suppress services whose vector sums to exactly zero
    pub abridge_empty_rows: bool,
    /// Fail on malformed numeric cells instead of degrading to 0.0
    pub strict_numeric: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            decimal_precision: 4,
            sort_key: SortKey::Amount,
            abridge_empty_rows: false,
            strict_numeric: false,
        }
    }
}
