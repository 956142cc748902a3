// File: crates/heatmap-core/src/scale.rs
// Summary: Year (X, linear) and month (Y, twelve equal bands) scales derived from a dataset.

use chrono::Month;

use crate::dataset::Dataset;
use crate::error::DatasetError;
use crate::grid::{tick_step, ticks_with_step};
use crate::types::{Layout, MONTHS};

/// Horizontal linear scale: domain [minYear, maxYear + 1] onto [left_px, right_px].
/// The extra year gives the last year a band as wide as the others.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearScale {
    pub left_px: f32,
    pub right_px: f32,
    pub domain_min: f64,
    pub domain_max: f64,
}

impl YearScale {
    pub fn new(min_year: i32, max_year: i32, left_px: f32, right_px: f32) -> Self {
        Self {
            left_px,
            right_px,
            domain_min: min_year as f64,
            domain_max: max_year as f64 + 1.0,
        }
    }

    #[inline]
    pub fn to_px(&self, year: f64) -> f32 {
        let span = self.domain_max - self.domain_min;
        self.left_px + ((year - self.domain_min) / span) as f32 * (self.right_px - self.left_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.domain_max - self.domain_min;
        self.domain_min + ((px - self.left_px) / (self.right_px - self.left_px)) as f64 * span
    }

    /// Integer-year tick values, about `count` of them. Steps never go below one year.
    pub fn ticks(&self, count: usize) -> Vec<i32> {
        let step = tick_step(self.domain_min, self.domain_max, count).max(1.0);
        ticks_with_step(self.domain_min, self.domain_max, step)
            .into_iter()
            .map(|y| y.round() as i32)
            .collect()
    }
}

/// Vertical scale: the year is split into twelve equal bands, January on top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthScale {
    pub top_px: f32,
    pub bottom_px: f32,
}

impl MonthScale {
    pub fn new(top_px: f32, bottom_px: f32) -> Self {
        Self { top_px, bottom_px }
    }

    pub fn band_height(&self) -> f32 {
        (self.bottom_px - self.top_px) / MONTHS as f32
    }

    /// Top edge of the band for `month` (1 = January).
    #[inline]
    pub fn to_px(&self, month: u32) -> f32 {
        self.position_to_px(month as f64 - 1.0)
    }

    /// Maps a fractional position within the year (0.0 = start of January, 12.0 = end of December).
    #[inline]
    pub fn position_to_px(&self, position: f64) -> f32 {
        self.top_px + (position / MONTHS as f64) as f32 * (self.bottom_px - self.top_px)
    }

    /// Month whose band contains `py`, if any.
    pub fn from_px(&self, py: f32) -> Option<u32> {
        if py < self.top_px || py >= self.bottom_px {
            return None;
        }
        Some(((py - self.top_px) / self.band_height()).floor() as u32 + 1)
    }

    /// One tick per band start.
    pub fn ticks(&self) -> Vec<u32> {
        (1..=MONTHS).collect()
    }
}

/// Full English month name, `None` outside 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

/// Both scales plus the constant cell size, computed once from the whole dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub min_year: i32,
    pub max_year: i32,
    pub years: YearScale,
    pub months: MonthScale,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Scales {
    pub fn from_dataset(dataset: &Dataset, layout: &Layout) -> Result<Self, DatasetError> {
        let (min_year, max_year) = dataset.year_range().ok_or(DatasetError::EmptyDataset)?;
        Ok(Self::from_year_range(min_year, max_year, layout))
    }

    pub fn from_year_range(min_year: i32, max_year: i32, layout: &Layout) -> Self {
        let years = YearScale::new(min_year, max_year, layout.left(), layout.right());
        let months = MonthScale::new(layout.top(), layout.bottom());
        // A single distinct year would divide by zero; treat it as a one-year span.
        let year_span = (max_year - min_year).max(1) as f32;
        let cell_width = layout.plot_width() / year_span;
        let cell_height = layout.plot_height() / MONTHS as f32;
        tracing::debug!(min_year, max_year, cell_width, cell_height, "scales built");
        Self { min_year, max_year, years, months, cell_width, cell_height }
    }
}
