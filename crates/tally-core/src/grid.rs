// File: crates/tally-core/src/grid.rs
// Summary: Evenly spaced gridline positions and their y values.

use crate::axis::YRange;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// `(pixel_y, value)` pairs for `intervals + 1` gridlines from `y_top` (range max)
/// down to `y_bottom` (range min).
pub fn gridline_positions(y_top: f32, y_bottom: f32, range: YRange, intervals: usize) -> Vec<(f32, f32)> {
    let steps = intervals + 1;
    let pixels = linspace(y_top as f64, y_bottom as f64, steps);
    let values = linspace(range.max as f64, range.min as f64, steps);
    pixels.into_iter().zip(values).map(|(p, v)| (p as f32, v as f32)).collect()
}
