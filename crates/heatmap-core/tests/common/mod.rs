// File: crates/heatmap-core/tests/common/mod.rs
// Purpose: Small deterministic datasets shared by the integration tests.

#![allow(dead_code)]

use heatmap_core::{Dataset, Record};

/// Three years, every month, variance sweeping through all four buckets.
pub fn three_years() -> Dataset {
    let mut records = Vec::new();
    for year in 1900..=1902 {
        for month in 1..=12u32 {
            let variance = (month as f64 - 6.5) * 0.4 + (year - 1900) as f64 * 0.1;
            records.push(Record::new(year, month, variance));
        }
    }
    Dataset::new(8.66, records)
}

pub fn single(year: i32, month: u32, variance: f64) -> Dataset {
    Dataset::new(8.66, vec![Record::new(year, month, variance)])
}
