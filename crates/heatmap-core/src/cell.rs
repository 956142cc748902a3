// File: crates/heatmap-core/src/cell.rs
// Summary: Record -> cell descriptor (rectangle, bucket, data attributes, tooltip text).

use crate::bucket::VarianceBucket;
use crate::dataset::Record;
use crate::geometry::RectF;
use crate::scale::{month_name, Scales};

/// One drawable rectangle for one record. Pure data, independent of any backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub record: Record,
    pub rect: RectF,
    pub bucket: VarianceBucket,
    /// `baseTemperature + variance`
    pub temperature: f64,
}

impl Cell {
    pub fn from_record(record: Record, base_temperature: f64, scales: &Scales) -> Self {
        let rect = RectF::from_xywh(
            scales.years.to_px(record.year as f64),
            scales.months.to_px(record.month),
            scales.cell_width,
            scales.cell_height,
        );
        Self {
            record,
            rect,
            bucket: VarianceBucket::classify(record.variance),
            temperature: base_temperature + record.variance,
        }
    }

    /// Zero-based month, as exposed in the `data-month` attribute.
    pub fn data_month(&self) -> u32 {
        self.record.month - 1
    }

    pub fn data_year(&self) -> i32 {
        self.record.year
    }

    /// e.g. "1950 June : 8.16 (-0.5)"
    pub fn tooltip_text(&self) -> String {
        format!(
            "{} {} : {} ({})",
            self.record.year,
            month_name(self.record.month).unwrap_or("?"),
            format_number(self.temperature),
            format_number(self.record.variance),
        )
    }
}

/// Shortest decimal that round-trips, with negative zero printed as "0".
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Builds cells in record order; later records paint over earlier ones.
pub fn build_cells(records: &[Record], base_temperature: f64, scales: &Scales) -> Vec<Cell> {
    records
        .iter()
        .map(|r| Cell::from_record(*r, base_temperature, scales))
        .collect()
}
