// File: crates/heatmap-core/src/dataset.rs
// Summary: Temperature document model (base temperature + monthly variance records).

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::types::MONTHS;

/// Chart heading shown above the canvas.
pub const TITLE: &str = "Monthly Global Land-Surface Temperature";

/// One year/month observation. `variance` is the delta (°C) from the base temperature.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    pub month: u32,
    pub variance: f64,
}

impl Record {
    pub const fn new(year: i32, month: u32, variance: f64) -> Self {
        Self { year, month, variance }
    }
}

/// The full document as served by the endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<Record>,
}

impl Dataset {
    pub fn new(base_temperature: f64, monthly_variance: Vec<Record>) -> Self {
        Self { base_temperature, monthly_variance }
    }

    /// Parse a JSON body and validate it. Both the network and file loaders go through here.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, DatasetError> {
        let dataset: Dataset = serde_json::from_slice(bytes)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Checks that the dataset can be charted: at least one record, months in 1..=12.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.monthly_variance.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }
        if let Some(bad) = self
            .monthly_variance
            .iter()
            .find(|r| r.month == 0 || r.month > MONTHS)
        {
            return Err(DatasetError::MonthOutOfRange { year: bad.year, month: bad.month });
        }
        Ok(())
    }

    /// `(minYear, maxYear)` over all records, `None` when empty.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let mut it = self.monthly_variance.iter().map(|r| r.year);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Sub-heading, e.g. "Temperatures from 1753 to 2015. Average is 8.66C".
    pub fn description(&self) -> String {
        match self.year_range() {
            Some((lo, hi)) => format!(
                "Temperatures from {lo} to {hi}. Average is {}C",
                self.base_temperature
            ),
            None => format!("Average is {}C", self.base_temperature),
        }
    }

    pub fn len(&self) -> usize { self.monthly_variance.len() }
    pub fn is_empty(&self) -> bool { self.monthly_variance.is_empty() }
}
