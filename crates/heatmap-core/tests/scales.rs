// File: crates/heatmap-core/tests/scales.rs
// Purpose: Year/month scale mapping, ticks, and the constant cell size.

mod common;

use heatmap_core::scale::month_name;
use heatmap_core::{Layout, Scales};

const EPS: f32 = 1e-3;

#[test]
fn year_scale_spans_padded_range() {
    let layout = Layout::default();
    let s = Scales::from_year_range(1753, 2015, &layout);
    assert_eq!(s.years.to_px(1753.0), 60.0);
    assert_eq!(s.years.to_px(2016.0), 1140.0);
    // monotone across the domain
    let mut prev = f32::NEG_INFINITY;
    for year in 1753..=2016 {
        let x = s.years.to_px(year as f64);
        assert!(x >= prev, "x({year}) = {x} < {prev}");
        prev = x;
    }
}

#[test]
fn year_scale_inverts() {
    let s = Scales::from_year_range(1900, 1999, &Layout::default());
    let x = s.years.to_px(1950.0);
    assert!((s.years.from_px(x) - 1950.0).abs() < 1e-3);
}

#[test]
fn month_scale_bands_fill_plot_height() {
    let layout = Layout::default();
    let s = Scales::from_year_range(1900, 1902, &layout);
    let top = s.months.to_px(1);
    let last = s.months.to_px(12);
    assert_eq!(top, 60.0);
    assert!(top < last);
    assert!((last + s.months.band_height() - 540.0).abs() < EPS);
    for m in 1..12 {
        assert!(s.months.to_px(m) < s.months.to_px(m + 1));
    }
}

#[test]
fn month_scale_hit_bands() {
    let s = Scales::from_year_range(1900, 1902, &Layout::default());
    assert_eq!(s.months.from_px(60.0), Some(1));
    assert_eq!(s.months.from_px(99.9), Some(1));
    assert_eq!(s.months.from_px(100.0), Some(2));
    assert_eq!(s.months.from_px(539.0), Some(12));
    assert_eq!(s.months.from_px(540.0), None);
    assert_eq!(s.months.from_px(10.0), None);
}

#[test]
fn cell_size_is_constant() {
    let layout = Layout::default();
    let s = Scales::from_year_range(1753, 2015, &layout);
    assert!((s.cell_width - 1080.0 / 262.0).abs() < EPS);
    assert!((s.cell_height - 40.0).abs() < EPS);
}

#[test]
fn single_year_falls_back_to_full_plot_width() {
    // maxYear == minYear: the (maxYear - minYear) divisor is treated as one year.
    let s = Scales::from_dataset(&common::single(1950, 6, -0.5), &Layout::default()).unwrap();
    assert_eq!(s.min_year, s.max_year);
    assert!((s.cell_width - 1080.0).abs() < EPS);
    assert!(s.cell_width.is_finite());
    assert_eq!(s.years.to_px(1950.0), 60.0);
    assert_eq!(s.years.to_px(1951.0), 1140.0);
}

#[test]
fn empty_dataset_cannot_build_scales() {
    let ds = heatmap_core::Dataset::new(8.66, Vec::new());
    assert!(matches!(
        Scales::from_dataset(&ds, &Layout::default()),
        Err(heatmap_core::DatasetError::EmptyDataset)
    ));
}

#[test]
fn year_ticks_are_nice_integers() {
    let s = Scales::from_year_range(1753, 2015, &Layout::default());
    let ticks = s.years.ticks(10);
    assert_eq!(ticks.first(), Some(&1760));
    assert_eq!(ticks.last(), Some(&2000));
    assert!(ticks.windows(2).all(|w| w[1] - w[0] == 20));
}

#[test]
fn short_spans_tick_every_year() {
    let s = Scales::from_year_range(1900, 1902, &Layout::default());
    assert_eq!(s.years.ticks(10), vec![1900, 1901, 1902, 1903]);
}

#[test]
fn month_names_are_full_english() {
    assert_eq!(month_name(1), Some("January"));
    assert_eq!(month_name(6), Some("June"));
    assert_eq!(month_name(12), Some("December"));
    assert_eq!(month_name(0), None);
    assert_eq!(month_name(13), None);
}

#[test]
fn oversized_padding_saturates_layout_edges() {
    let layout = Layout::new(100, 50, 80);
    assert_eq!(layout.right(), 20.0);
    assert_eq!(layout.bottom(), 0.0);
    assert_eq!(layout.plot_width(), 0.0);
    assert_eq!(layout.plot_height(), 0.0);
}
