// File: crates/heatmap-core/tests/smoke.rs
// Purpose: End-to-end raster renders: PNG file, PNG bytes, RGBA buffer, error placard.

mod common;

use heatmap_core::{render_error_to_png_bytes, render_to_png, render_to_png_bytes, render_to_rgba8, HeatMap, Hover, Layout, RenderOptions, Renderer, Theme};

#[test]
fn render_smoke_png() {
    let hm = HeatMap::build(common::three_years(), Layout::default()).unwrap();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    render_to_png(&hm, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = render_to_png_bytes(&hm, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn rgba_buffer_shape_and_cell_colors() {
    let hm = HeatMap::build(common::three_years(), Layout::default()).unwrap();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, h, stride) = render_to_rgba8(&hm, &opts).expect("rgba render");
    assert_eq!((w, h), (1200, 760));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);

    let at = |x: usize, y: usize| -> [u8; 4] {
        let i = y * stride + x * 4;
        [px[i], px[i + 1], px[i + 2], px[i + 3]]
    };
    // background in the top-left padding
    assert_eq!(at(2, 2), [255, 255, 255, 255]);
    // 1900 January, variance -2.2 -> Cold (SteelBlue)
    assert_eq!(at(100, 80), [70, 130, 180, 255]);
    // first legend swatch, 10 px in and 10 px down from the legend origin
    assert_eq!(at(20, 610), [70, 130, 180, 255]);
}

#[test]
fn tooltip_overlay_changes_pixels() {
    let hm = HeatMap::build(common::three_years(), Layout::default()).unwrap();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let renderer = Renderer::new(opts);
    let (plain, ..) = renderer.rgba8(&hm, None).unwrap();

    let mut hover = Hover::new();
    hover.pointer_moved(&hm, 300.0, 300.0);
    let (with_tip, ..) = renderer.rgba8(&hm, Some(hover.tooltip())).unwrap();
    assert_ne!(plain, with_tip);
}

#[test]
fn error_placard_renders() {
    let opts = RenderOptions { theme: Theme::dark(), ..RenderOptions::default() };
    let bytes = render_error_to_png_bytes("connection refused", &opts).expect("placard");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
