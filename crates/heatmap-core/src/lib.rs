// File: crates/heatmap-core/src/lib.rs
// Summary: Core library entry point; dataset model, scales, cells and rendering of the temperature heat map.

pub mod axis;
pub mod bucket;
pub mod cell;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod heatmap;
pub mod legend;
pub mod render;
pub mod scale;
pub mod svg;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::Axis;
pub use bucket::VarianceBucket;
pub use cell::Cell;
pub use dataset::{Dataset, Record};
pub use error::{DatasetError, RenderError};
pub use heatmap::HeatMap;
pub use legend::Legend;
pub use render::{render_error_to_png_bytes, render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions, Renderer};
pub use scale::{MonthScale, Scales, YearScale};
pub use svg::{render_error_svg, render_to_svg, render_to_svg_file};
pub use text::TextShaper;
pub use theme::Theme;
pub use tooltip::{Hover, Tooltip};
pub use types::Layout;
