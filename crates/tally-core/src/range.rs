// File: crates/tally-core/src/range.rs
// Summary: Default y-axis bounds derived from dataset extrema, plus override widening.

use crate::axis::YRange;
use crate::types::Dataset;

/// Default bounds snap outward to multiples of this value.
pub const BOUND_ROUNDING: f32 = 100.0;

fn all_y(datasets: &[Dataset]) -> impl Iterator<Item = f32> + '_ {
    datasets.iter().flat_map(|d| d.points.iter().map(|p| p.y))
}

pub fn max_y(datasets: &[Dataset]) -> Option<f32> {
    all_y(datasets).reduce(f32::max)
}

pub fn min_y(datasets: &[Dataset]) -> Option<f32> {
    all_y(datasets).reduce(f32::min)
}

/// Max y rounded up to the nearest hundred, or 0 when no value is positive.
///
/// Returns `f32::INFINITY` when there are no points at all; callers must treat
/// that as "nothing to render".
pub fn default_upper_bound(datasets: &[Dataset]) -> f32 {
    match max_y(datasets) {
        None => f32::INFINITY,
        Some(v) if v <= 0.0 => 0.0,
        Some(v) => round_up_to_nearest(v, BOUND_ROUNDING),
    }
}

/// Min y rounded down to the nearest hundred, or 0 when no value is negative.
pub fn default_lower_bound(datasets: &[Dataset]) -> f32 {
    match min_y(datasets) {
        None => 0.0,
        Some(v) if v >= 0.0 => 0.0,
        Some(v) => round_down_to_nearest(v, BOUND_ROUNDING),
    }
}

pub fn round_up_to_nearest(value: f32, step: f32) -> f32 {
    (value / step).ceil() * step
}

pub fn round_down_to_nearest(value: f32, step: f32) -> f32 {
    (value / step).floor() * step
}

/// Resolve the y range to draw: the optional overrides (or the defaults),
/// widened to cover the data when the data falls outside them.
///
/// Returns `None` when the datasets hold no points.
pub fn resolve_y_range(
    datasets: &[Dataset],
    min_override: Option<f32>,
    max_override: Option<f32>,
) -> Option<YRange> {
    let data_min = min_y(datasets)?;
    let data_max = max_y(datasets)?;
    let min = min_override.unwrap_or_else(|| default_lower_bound(datasets));
    let max = max_override.unwrap_or_else(|| default_upper_bound(datasets));
    Some(YRange::new(min.min(data_min), max.max(data_max)))
}
