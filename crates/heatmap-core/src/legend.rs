// File: crates/heatmap-core/src/legend.rs
// Summary: Fixed four-entry color legend.

use crate::bucket::VarianceBucket;
use crate::geometry::RectF;

const SWATCH_X: f32 = 10.0;
const SWATCH_SIZE: f32 = 40.0;
const LABEL_X: f32 = 60.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub bucket: VarianceBucket,
    /// Swatch rectangle relative to the legend origin.
    pub swatch: RectF,
    /// Label baseline anchor relative to the legend origin.
    pub label_at: (f32, f32),
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// Swatches stacked top to bottom, coldest first.
    pub fn standard() -> Self {
        let entries = VarianceBucket::ALL
            .iter()
            .enumerate()
            .map(|(i, &bucket)| {
                let y = i as f32 * SWATCH_SIZE;
                LegendEntry {
                    bucket,
                    swatch: RectF::from_xywh(SWATCH_X, y, SWATCH_SIZE, SWATCH_SIZE),
                    label_at: (LABEL_X, y + SWATCH_SIZE * 0.5),
                    label: bucket.legend_label(),
                }
            })
            .collect();
        Self { entries }
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::standard()
    }
}
