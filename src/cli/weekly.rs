//! Weekly report flow: partition -> per-bucket store query -> reduce

use std::path::Path;

use crate::services::{CostReducer, DateBucketer, ReportAssembler};
use crate::sources::{SqliteCostStore, TimeSeriesStore};
use crate::types::{ReportConfig, ReportTable, Result};

pub fn run(db: &Path, start_date: &str, end_date: &str, config: &ReportConfig) -> Result<()> {
    let store = SqliteCostStore::open(db)?;
    let table = build_report(&store, start_date, end_date, config)?;
    for line in ReportAssembler::render(&table) {
        println!("{}", line);
    }
    Ok(())
}

/// Build the week-by-week aggregation table over `[start_date, end_date]`.
///
/// The store is queried once per computed week bucket; every observation
/// lands in the slot of the bucket that returned it. Services are emitted
/// sorted by name.
pub fn build_report(
    store: &dyn TimeSeriesStore,
    start_date: &str,
    end_date: &str,
    config: &ReportConfig,
) -> Result<ReportTable> {
    let start = super::parse_date(start_date)?;
    let end = super::parse_date(end_date)?;
    let buckets = DateBucketer::partition_by_week(start, end)?;

    let mut observations = Vec::new();
    for (index, bucket) in buckets.iter().enumerate() {
        let (start_ts, end_ts) = bucket.unix_range();
        for obs in store.query_range(start_ts, end_ts)? {
            observations.push((index, obs.service, obs.amount));
        }
    }

    let reduced = CostReducer::reduce(observations, buckets.len())?;
    let vectors = CostReducer::sorted_vectors(reduced);

    let header = buckets.iter().map(|b| b.label()).collect();
    Ok(ReportAssembler::assemble_weekly(header, &vectors, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CostrepError, RawObservation};

    /// In-memory store: filters a fixed observation list by range
    struct StubStore {
        observations: Vec<RawObservation>,
    }

    impl TimeSeriesStore for StubStore {
        fn query_range(&self, start_unix: i64, end_unix: i64) -> Result<Vec<RawObservation>> {
            Ok(self
                .observations
                .iter()
                .filter(|o| o.ts >= start_unix && o.ts <= end_unix)
                .cloned()
                .collect())
        }
    }

    fn obs(ts: i64, service: &str, amount: f64) -> RawObservation {
        RawObservation {
            ts,
            service: service.to_string(),
            amount,
        }
    }

    // Unix day anchors: 2023-01-02T12:00:00Z and friends
    const JAN_02_NOON: i64 = 1672660800;
    const JAN_05_NOON: i64 = JAN_02_NOON + 3 * 86400;
    const JAN_10_NOON: i64 = JAN_02_NOON + 8 * 86400;

    #[test]
    fn test_weekly_report_buckets_and_sums() {
        let store = StubStore {
            observations: vec![
                obs(JAN_02_NOON, "AmazonEC2", 1.0),
                obs(JAN_05_NOON, "AmazonEC2", 2.0),
                obs(JAN_10_NOON, "AmazonEC2", 4.0),
                obs(JAN_10_NOON, "AmazonS3", 0.5),
            ],
        };
        let config = ReportConfig::default();
        let table = build_report(&store, "2023-01-02", "2023-01-15", &config).unwrap();

        // Two Monday-to-Sunday buckets
        assert_eq!(
            table[0],
            vec![
                "2023-01-02-2023-01-08".to_string(),
                "2023-01-09-2023-01-15".to_string(),
            ]
        );
        // Services sorted by name, week slots summed
        assert_eq!(
            table[1],
            vec!["AmazonEC2".to_string(), "3.0000".to_string(), "4.0000".to_string()]
        );
        assert_eq!(
            table[2],
            vec!["AmazonS3".to_string(), "0.0000".to_string(), "0.5000".to_string()]
        );
    }

    #[test]
    fn test_weekly_report_abridges_zero_services() {
        let store = StubStore {
            observations: vec![
                obs(JAN_02_NOON, "AmazonEC2", 1.0),
                obs(JAN_05_NOON, "Idle", 0.0),
            ],
        };
        let config = ReportConfig {
            abridge_empty_rows: true,
            ..ReportConfig::default()
        };
        let table = build_report(&store, "2023-01-02", "2023-01-08", &config).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table[1][0], "AmazonEC2");
    }

    #[test]
    fn test_weekly_report_no_observations() {
        let store = StubStore {
            observations: vec![],
        };
        let config = ReportConfig::default();
        let table = build_report(&store, "2023-01-02", "2023-01-08", &config).unwrap();
        // Header only; absent services get no synthetic rows
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_weekly_report_invalid_date_flag() {
        let store = StubStore {
            observations: vec![],
        };
        let config = ReportConfig::default();
        assert!(matches!(
            build_report(&store, "02-01-2023", "2023-01-08", &config),
            Err(CostrepError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_weekly_report_reversed_range() {
        let store = StubStore {
            observations: vec![],
        };
        let config = ReportConfig::default();
        assert!(matches!(
            build_report(&store, "2023-01-08", "2023-01-02", &config),
            Err(CostrepError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_weekly_report_store_failure_propagates() {
        struct FailingStore;
        impl TimeSeriesStore for FailingStore {
            fn query_range(&self, _: i64, _: i64) -> Result<Vec<RawObservation>> {
                Err(CostrepError::DataSource("connection refused".into()))
            }
        }

        let config = ReportConfig::default();
        assert!(matches!(
            build_report(&FailingStore, "2023-01-02", "2023-01-08", &config),
            Err(CostrepError::DataSource(_))
        ));
    }
}
