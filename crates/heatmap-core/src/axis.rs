// File: crates/heatmap-core/src/axis.rs
// Summary: Axis model (bottom year axis, left month axis) with precomputed ticks.

use crate::scale::{month_name, Scales};
use crate::types::Layout;

/// Tick mark length in pixels, measured outward from the axis line.
pub const TICK_SIZE: f32 = 6.0;
/// Gap between tick mark end and label.
pub const TICK_PADDING: f32 = 3.0;
/// Number of year ticks requested from the year scale.
pub const YEAR_TICK_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis, in canvas pixels.
    pub pos: f32,
    pub label: String,
}

/// An axis in canvas coordinates. `offset` is the translate of the axis group:
/// the y of a bottom axis, the x of a left axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    pub orient: Orient,
    pub offset: f32,
    /// Extent of the domain line along the axis.
    pub range: (f32, f32),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn bottom_years(scales: &Scales, layout: &Layout) -> Self {
        let ticks = scales
            .years
            .ticks(YEAR_TICK_COUNT)
            .into_iter()
            .map(|y| Tick { pos: scales.years.to_px(y as f64), label: y.to_string() })
            .collect();
        Self {
            id: "x-axis",
            orient: Orient::Bottom,
            offset: layout.bottom(),
            range: (scales.years.left_px, scales.years.right_px),
            ticks,
        }
    }

    pub fn left_months(scales: &Scales, layout: &Layout) -> Self {
        let ticks = scales
            .months
            .ticks()
            .into_iter()
            .filter_map(|m| {
                month_name(m).map(|name| Tick { pos: scales.months.to_px(m), label: name.to_string() })
            })
            .collect();
        Self {
            id: "y-axis",
            orient: Orient::Left,
            offset: layout.left(),
            range: (scales.months.top_px, scales.months.bottom_px),
            ticks,
        }
    }

    /// Tick mark as a line segment `((x0, y0), (x1, y1))` in canvas pixels.
    pub fn tick_segment(&self, tick: &Tick) -> ((f32, f32), (f32, f32)) {
        match self.orient {
            Orient::Bottom => ((tick.pos, self.offset), (tick.pos, self.offset + TICK_SIZE)),
            Orient::Left => ((self.offset - TICK_SIZE, tick.pos), (self.offset, tick.pos)),
        }
    }

    /// Domain line as a segment in canvas pixels.
    pub fn domain_segment(&self) -> ((f32, f32), (f32, f32)) {
        let (a, b) = self.range;
        match self.orient {
            Orient::Bottom => ((a, self.offset), (b, self.offset)),
            Orient::Left => ((self.offset, a), (self.offset, b)),
        }
    }
}
