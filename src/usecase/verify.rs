use anyhow::{anyhow, Result};

use crate::domain::model::Retailer;
use crate::domain::traits::CityRanker;

/// Check a previously written record sequence: every field in normal form,
/// every adjacent pair in nondecreasing (tier, city, name) order. Returns
/// the record count on success.
pub fn verify_sorted(records: &[Retailer], ranker: &dyn CityRanker) -> Result<usize> {
    for (idx, record) in records.iter().enumerate() {
        if !record.is_normalized() {
            return Err(anyhow!(
                "record {idx} is not normalized (name={:?}, city={:?})",
                record.name,
                record.city
            ));
        }
    }

    for (idx, pair) in records.windows(2).enumerate() {
        let left = pair[0].sort_key(ranker);
        let right = pair[1].sort_key(ranker);
        if left > right {
            return Err(anyhow!(
                "records {idx} and {} are out of tier order: ({}, {}, {}) sorts after ({}, {}, {})",
                idx + 1,
                left.tier,
                left.city,
                left.name,
                right.tier,
                right.city,
                right.name
            ));
        }
    }

    Ok(records.len())
}
