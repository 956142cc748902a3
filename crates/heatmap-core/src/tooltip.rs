// File: crates/heatmap-core/src/tooltip.rs
// Summary: Hover tooltip state: shown on pointer-enter over a cell, hidden on pointer-leave.

use crate::cell::Cell;
use crate::heatmap::HeatMap;

/// The single floating text element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub text: String,
    /// Year of the hovered record (the `data-year` of the tooltip).
    pub data_year: Option<i32>,
    /// Pointer position the tooltip is attached to, canvas pixels.
    pub anchor: (f32, f32),
}

impl Tooltip {
    pub fn on_pointer_enter(&mut self, cell: &Cell, at: (f32, f32)) {
        self.visible = true;
        self.text = cell.tooltip_text();
        self.data_year = Some(cell.data_year());
        self.anchor = at;
    }

    /// Text and year are kept; only visibility changes, matching a style toggle.
    pub fn on_pointer_leave(&mut self) {
        self.visible = false;
    }
}

/// Turns raw pointer positions into enter/leave transitions on the tooltip.
#[derive(Clone, Debug, Default)]
pub struct Hover {
    current: Option<usize>,
    tooltip: Tooltip,
}

impl Hover {
    pub fn new() -> Self { Self::default() }

    pub fn tooltip(&self) -> &Tooltip { &self.tooltip }

    /// Index of the hovered cell, if any.
    pub fn current(&self) -> Option<usize> { self.current }

    /// Returns true when the tooltip needs a redraw.
    pub fn pointer_moved(&mut self, heatmap: &HeatMap, x: f32, y: f32) -> bool {
        let hit = heatmap.hit_test(x, y);
        match (self.current, hit) {
            (Some(a), Some(b)) if a == b => {
                self.tooltip.anchor = (x, y);
                true
            }
            (_, Some(b)) => {
                self.tooltip.on_pointer_enter(&heatmap.cells()[b], (x, y));
                self.current = Some(b);
                true
            }
            (Some(_), None) => {
                self.tooltip.on_pointer_leave();
                self.current = None;
                true
            }
            (None, None) => false,
        }
    }

    /// Pointer left the surface entirely.
    pub fn pointer_left(&mut self) -> bool {
        if self.current.take().is_some() {
            self.tooltip.on_pointer_leave();
            true
        } else {
            false
        }
    }
}
