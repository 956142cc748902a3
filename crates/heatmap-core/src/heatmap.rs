// File: crates/heatmap-core/src/heatmap.rs
// Summary: Immutable chart state built once from a loaded dataset; input to every backend.

use crate::axis::Axis;
use crate::cell::{build_cells, Cell};
use crate::dataset::{Dataset, TITLE};
use crate::error::DatasetError;
use crate::legend::Legend;
use crate::scale::Scales;
use crate::types::Layout;

/// Everything needed to draw the chart. Nothing here changes after `build`.
#[derive(Clone, Debug)]
pub struct HeatMap {
    dataset: Dataset,
    layout: Layout,
    scales: Scales,
    cells: Vec<Cell>,
    x_axis: Axis,
    y_axis: Axis,
    legend: Legend,
}

impl HeatMap {
    pub fn build(dataset: Dataset, layout: Layout) -> Result<Self, DatasetError> {
        dataset.validate()?;
        let scales = Scales::from_dataset(&dataset, &layout)?;
        let cells = build_cells(&dataset.monthly_variance, dataset.base_temperature, &scales);
        let x_axis = Axis::bottom_years(&scales, &layout);
        let y_axis = Axis::left_months(&scales, &layout);
        tracing::debug!(cells = cells.len(), "heat map built");
        Ok(Self { dataset, layout, scales, cells, x_axis, y_axis, legend: Legend::standard() })
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn layout(&self) -> &Layout { &self.layout }
    pub fn scales(&self) -> &Scales { &self.scales }
    pub fn cells(&self) -> &[Cell] { &self.cells }
    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }
    pub fn legend(&self) -> &Legend { &self.legend }

    pub fn title(&self) -> &'static str { TITLE }

    pub fn description(&self) -> String {
        self.dataset.description()
    }

    /// Index of the topmost cell under canvas point (x, y).
    /// Cells are a little wider than a year band, so neighbours overlap; the one drawn last wins.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        self.cells.iter().rposition(|c| c.rect.contains(x, y))
    }
}
