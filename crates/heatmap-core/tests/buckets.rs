// File: crates/heatmap-core/tests/buckets.rs
// Purpose: Variance bucketing boundaries and totality.

use heatmap_core::VarianceBucket::{self, Cold, Cool, Hot, Warm};

#[test]
fn boundaries_follow_first_match_order() {
    assert_eq!(VarianceBucket::classify(-1.0), Cold);
    assert_eq!(VarianceBucket::classify(-0.999), Cool);
    assert_eq!(VarianceBucket::classify(0.0), Cool);
    assert_eq!(VarianceBucket::classify(-0.0), Cool);
    assert_eq!(VarianceBucket::classify(1e-9), Warm);
    assert_eq!(VarianceBucket::classify(0.999), Warm);
    assert_eq!(VarianceBucket::classify(1.0), Hot);
}

#[test]
fn extremes_and_nan() {
    assert_eq!(VarianceBucket::classify(f64::NEG_INFINITY), Cold);
    assert_eq!(VarianceBucket::classify(-6.976), Cold);
    assert_eq!(VarianceBucket::classify(5.228), Hot);
    assert_eq!(VarianceBucket::classify(f64::INFINITY), Hot);
    // NaN fails every comparison and falls into the last branch
    assert_eq!(VarianceBucket::classify(f64::NAN), Hot);
}

#[test]
fn sweep_is_monotone_over_buckets() {
    let order = |b: VarianceBucket| VarianceBucket::ALL.iter().position(|&x| x == b).unwrap();
    let mut prev = 0;
    let mut v = -3.0;
    while v <= 3.0 {
        let idx = order(VarianceBucket::classify(v));
        assert!(idx >= prev, "bucket went backwards at {v}");
        prev = idx;
        v += 0.01;
    }
    assert_eq!(prev, 3);
}

#[test]
fn css_names_and_legend_labels() {
    assert_eq!(Cold.css_name(), "SteelBlue");
    assert_eq!(Cool.css_name(), "LightSteelBlue");
    assert_eq!(Warm.css_name(), "Orange");
    assert_eq!(Hot.css_name(), "Crimson");
    assert_eq!(Cool.legend_label(), "On or Below Average");
}
