// File: crates/heatmap-core/src/grid.rs
// Summary: Tick layout helpers ("nice" 1/2/5 x 10^n steps).

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Step between roughly `count` ticks over [start, stop], rounded to 1, 2 or 5 times a power of ten.
/// Returns 0.0 when no step exists (empty span or count == 0).
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !(stop > start) {
        return 0.0;
    }
    let raw = (stop - start) / count as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Multiples of `step` inside [start, stop], inclusive at both ends.
pub fn ticks_with_step(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(stop >= start) {
        return Vec::new();
    }
    let first = (start / step).ceil() as i64;
    let last = (stop / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}
