// File: crates/heatmap-core/src/types.rs
// Summary: Shared canvas constants and the chart layout (size + uniform padding).

/// Default canvas width in pixels.
pub const WIDTH: u32 = 1200;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 600;
/// Default padding between canvas edge and plot area, in pixels.
pub const PADDING: u32 = 60;
/// Number of month bands on the vertical axis.
pub const MONTHS: u32 = 12;
/// Height of the strip under the canvas reserved for the legend.
pub const LEGEND_HEIGHT: u32 = 160;

/// Canvas dimensions with a uniform padding around the plot area.
/// Contract: `2 * padding < width` and `2 * padding < height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

impl Layout {
    pub const fn new(width: u32, height: u32, padding: u32) -> Self {
        Self { width, height, padding }
    }

    /// Width of the plot area (`width - 2 * padding`).
    pub fn plot_width(&self) -> f32 {
        self.width.saturating_sub(2 * self.padding) as f32
    }

    /// Height of the plot area (`height - 2 * padding`).
    pub fn plot_height(&self) -> f32 {
        self.height.saturating_sub(2 * self.padding) as f32
    }

    pub fn left(&self) -> f32 { self.padding as f32 }
    pub fn right(&self) -> f32 { self.width.saturating_sub(self.padding) as f32 }
    pub fn top(&self) -> f32 { self.padding as f32 }
    pub fn bottom(&self) -> f32 { self.height.saturating_sub(self.padding) as f32 }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, PADDING)
    }
}
