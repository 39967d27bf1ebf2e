//! Fold raw cost observations into per-service bucket vectors

use std::collections::HashMap;

use crate::types::{CostrepError, Result, ServiceCostVector};

/// Reducer from (bucket index, service, amount) observations to
/// per-service cost vectors aligned to the report's buckets.
pub struct CostReducer;

impl CostReducer {
    /// Sum observations into a `service -> values` mapping.
    ///
    /// Each service gets a zero-filled vector of `bucket_count` slots the
    /// first time it is seen; every observation adds into one slot. Pure
    /// per-slot summation, so arrival order never affects the result.
    ///
    /// A bucket index at or past `bucket_count` is a caller bug and fails
    /// the whole reduction rather than dropping data.
    pub fn reduce<I>(observations: I, bucket_count: usize) -> Result<HashMap<String, Vec<f64>>>
    where
        I: IntoIterator<Item = (usize, String, f64)>,
    {
        let mut service_costs: HashMap<String, Vec<f64>> = HashMap::new();

        for (index, service, amount) in observations {
            if index >= bucket_count {
                return Err(CostrepError::BucketIndexOutOfRange {
                    index,
                    len: bucket_count,
                });
            }

            let values = service_costs
                .entry(service)
                .or_insert_with(|| vec![0.0; bucket_count]);
            values[index] += amount;
        }

        Ok(service_costs)
    }

    /// Freeze a reduced mapping into vectors sorted by service name.
    /// Map iteration order is not a contract; the sort makes output
    /// order deterministic.
    pub fn sorted_vectors(service_costs: HashMap<String, Vec<f64>>) -> Vec<ServiceCostVector> {
        let mut vectors: Vec<ServiceCostVector> = service_costs
            .into_iter()
            .map(|(service, values)| ServiceCostVector { service, values })
            .collect();
        vectors.sort_by(|a, b| a.service.cmp(&b.service));
        vectors
    }
}
