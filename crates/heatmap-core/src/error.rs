// File: crates/heatmap-core/src/error.rs
// Summary: Error types for dataset validation and rendering.

use thiserror::Error;

/// Reasons a temperature document cannot become a chart.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("response is not a valid temperature document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset contains no monthly variance records")]
    EmptyDataset,

    #[error("record for year {year} has month {month}, expected 1..=12")]
    MonthOutOfRange { year: i32, month: u32 },
}

/// Failures while producing an image from a built chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode {0}")]
    Encode(&'static str),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}
