// File: crates/tally-core/tests/range.rs
// Purpose: Default y bounds rounding and override widening.

use tally_core::range::{max_y, min_y};
use tally_core::{default_lower_bound, default_upper_bound, resolve_y_range, Color, Dataset, YRange};

fn ds(data: &[(i64, f32)]) -> Dataset {
    Dataset::from_xy(Color::BLACK, data)
}

#[test]
fn all_positive_values_start_at_zero() {
    let data = [ds(&[(0, 120.0), (1, 480.0), (2, 333.0)])];
    assert_eq!(default_lower_bound(&data), 0.0);
    assert_eq!(default_upper_bound(&data), 500.0);
}

#[test]
fn all_negative_values_end_at_zero() {
    let data = [ds(&[(0, -120.0), (1, -480.0)])];
    assert_eq!(default_upper_bound(&data), 0.0);
    assert_eq!(default_lower_bound(&data), -500.0);
}

#[test]
fn mixed_values_round_outward() {
    let data = [ds(&[(0, -1250.0), (1, 300.0)])];
    assert_eq!(default_lower_bound(&data), -1300.0);
    assert_eq!(default_upper_bound(&data), 300.0);
}

#[test]
fn extrema_span_datasets() {
    let data = [ds(&[(0, 5.0)]), ds(&[(0, -7.0), (1, 42.0)])];
    assert_eq!(max_y(&data), Some(42.0));
    assert_eq!(min_y(&data), Some(-7.0));
}

#[test]
fn no_points_yield_sentinel_and_no_range() {
    assert_eq!(default_upper_bound(&[]), f32::INFINITY);
    assert_eq!(default_lower_bound(&[]), 0.0);
    assert_eq!(resolve_y_range(&[], None, None), None);
    assert_eq!(resolve_y_range(&[ds(&[])], Some(0.0), Some(10.0)), None);
}

#[test]
fn narrow_override_is_widened_to_data() {
    let data = [ds(&[(0, -20.0), (1, 250.0)])];
    assert_eq!(resolve_y_range(&data, Some(0.0), Some(100.0)), Some(YRange::new(-20.0, 250.0)));
}

#[test]
fn wide_override_is_kept() {
    let data = [ds(&[(0, 10.0), (1, 20.0)])];
    assert_eq!(resolve_y_range(&data, Some(-50.0), Some(1000.0)), Some(YRange::new(-50.0, 1000.0)));
    assert_eq!(resolve_y_range(&data, None, None), Some(YRange::new(0.0, 100.0)));
}
