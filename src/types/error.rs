use thiserror::Error;

/// costrep error types
#[derive(Error, Debug)]
pub enum CostrepError {
    /// Report range where the start date falls after the end date
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },

    /// Date flag that does not parse as YYYY-MM-DD
    #[error("invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Reducer fed a bucket index outside the computed partition.
    /// Always a caller bug, never recoverable.
    #[error("bucket index {index} out of range for {len} buckets")]
    BucketIndexOutOfRange { index: usize, len: usize },

    /// Failure from the synced cost database (open or query)
    #[error("data source error: {0}")]
    DataSource(String),

    /// Failed to parse CSV structure or, in strict mode, a numeric cell
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for costrep
pub type Result<T> = std::result::Result<T, CostrepError>;
