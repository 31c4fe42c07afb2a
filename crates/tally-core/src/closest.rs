// File: crates/tally-core/src/closest.rs
// Summary: Position map (x value -> pixel x) and nearest-value lookup by binary search.

use std::collections::BTreeMap;

/// Distinct x values in ascending order, each with its pixel x position.
///
/// Built once per layout pass; used both for drawing and for touch hit-testing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionMap {
    values: Vec<i64>,
    positions: Vec<f32>,
}

impl PositionMap {
    /// Build from `(x_value, pixel_x)` pairs. Duplicate x values keep the last position.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i64, f32)>) -> Self {
        let sorted: BTreeMap<i64, f32> = pairs.into_iter().collect();
        let (values, positions) = sorted.into_iter().unzip();
        Self { values, positions }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn position_of(&self, x_value: i64) -> Option<f32> {
        self.values.binary_search(&x_value).ok().map(|i| self.positions[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, f32)> + '_ {
        self.values.iter().copied().zip(self.positions.iter().copied())
    }

    pub fn min_position(&self) -> Option<f32> {
        self.positions.iter().copied().reduce(f32::min)
    }

    pub fn max_position(&self) -> Option<f32> {
        self.positions.iter().copied().reduce(f32::max)
    }
}

/// Nearest x value to pixel `x_pixel` in `map`.
pub fn find_nearest(x_pixel: f32, map: &PositionMap) -> Option<i64> {
    find_closest_value(x_pixel, map.positions(), map.values())
}

/// Nearest domain value to `target` given parallel, ascending `positions` and `values`.
///
/// Returns `None` for empty or mismatched inputs. Targets outside the positions
/// clamp to the first/last entry; a target exactly between two positions
/// resolves to the upper one.
pub fn find_closest_value(target: f32, positions: &[f32], values: &[i64]) -> Option<i64> {
    if positions.len() != values.len() || positions.is_empty() {
        return None;
    }
    Some(values[closest_index(positions, target)])
}

fn closest_index(sorted: &[f32], target: f32) -> usize {
    let last = sorted.len() - 1;
    if target.is_nan() || target <= sorted[0] {
        return 0;
    }
    if target >= sorted[last] {
        return last;
    }
    // First index whose position is >= target; 1..=last given the clamps above.
    let upper = sorted.partition_point(|&p| p < target);
    if sorted[upper] == target {
        return upper;
    }
    let lower = upper - 1;
    if target - sorted[lower] >= sorted[upper] - target { upper } else { lower }
}
