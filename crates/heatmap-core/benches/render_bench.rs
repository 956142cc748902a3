// File: crates/heatmap-core/benches/render_bench.rs
// Summary: Scene build and raster render cost for a full-size (263 years x 12 months) dataset.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heatmap_core::{Dataset, HeatMap, Layout, Record, RenderOptions, Renderer};

fn full_dataset() -> Dataset {
    let mut records = Vec::with_capacity(263 * 12);
    for year in 1753..=2015 {
        for month in 1..=12u32 {
            let t = (year - 1753) as f64 * 12.0 + month as f64;
            records.push(Record::new(year, month, (t * 0.013).sin() * 2.0 + (year - 1753) as f64 * 0.004));
        }
    }
    Dataset::new(8.66, records)
}

fn bench_build(c: &mut Criterion) {
    let ds = full_dataset();
    c.bench_function("build_heatmap", |b| {
        b.iter(|| HeatMap::build(black_box(ds.clone()), Layout::default()).expect("build"))
    });
}

fn bench_render(c: &mut Criterion) {
    let hm = HeatMap::build(full_dataset(), Layout::default()).expect("build");
    let mut group = c.benchmark_group("render");
    for &labels in &[false, true] {
        let renderer = Renderer::new(RenderOptions { draw_labels: labels, ..RenderOptions::default() });
        group.bench_function(format!("png_labels_{labels}"), |b| {
            b.iter(|| black_box(renderer.png_bytes(&hm).expect("png")))
        });
    }
    group.bench_function("svg", |b| {
        let opts = RenderOptions::default();
        b.iter(|| black_box(heatmap_core::render_to_svg(&hm, &opts)))
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_render);
criterion_main!(benches);
