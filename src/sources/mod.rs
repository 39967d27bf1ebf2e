//! Ingestion seams: the tabular file export and the synced cost database
//!
//! The engine consumes these through narrow traits so report flows can be
//! driven by in-memory fakes in tests and by other backends later.

mod store;
mod tabular;

pub use store::SqliteCostStore;
pub use tabular::{parse_amount, CsvExportSource};

use crate::types::{RawObservation, Result};

/// An ordered grid of string cells, e.g. a Cost Explorer CSV export.
/// First row is the service-name header ending in the designated total
/// column; remaining rows carry one calendar month each.
pub trait TabularSource {
    fn read_rows(&self) -> Result<Vec<Vec<String>>>;
}

/// Range queries over raw cost observations, keyed by unix seconds.
/// The weekly flow calls this once per computed week bucket; any failure
/// surfaces as a single `DataSource` error and is never retried.
pub trait TimeSeriesStore {
    fn query_range(&self, start_unix: i64, end_unix: i64) -> Result<Vec<RawObservation>>;
}
