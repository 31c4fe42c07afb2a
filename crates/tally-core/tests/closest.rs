// File: crates/tally-core/tests/closest.rs
// Purpose: Nearest-value lookup: exact hits, clamping, tie-breaking and bad input.

use tally_core::{find_closest_value, find_nearest, PositionMap};

fn map() -> PositionMap {
    PositionMap::from_pairs([(10, 0.0), (11, 50.0), (12, 100.0), (13, 150.0)])
}

#[test]
fn exact_position_returns_its_value() {
    let m = map();
    for (value, x) in m.iter() {
        assert_eq!(find_nearest(x, &m), Some(value));
    }
}

#[test]
fn targets_outside_clamp_to_the_ends() {
    let m = map();
    assert_eq!(find_nearest(-500.0, &m), Some(10));
    assert_eq!(find_nearest(10_000.0, &m), Some(13));
}

#[test]
fn ties_go_to_the_upper_neighbor() {
    let m = map();
    assert_eq!(find_nearest(25.0, &m), Some(11));
    assert_eq!(find_nearest(125.0, &m), Some(13));
    assert_eq!(find_nearest(24.9, &m), Some(10));
    assert_eq!(find_nearest(75.1, &m), Some(12));
}

#[test]
fn empty_or_mismatched_inputs_find_nothing() {
    assert_eq!(find_closest_value(3.0, &[], &[]), None);
    assert_eq!(find_closest_value(3.0, &[0.0, 1.0], &[7]), None);
    assert_eq!(find_nearest(3.0, &PositionMap::default()), None);
}

#[test]
fn single_entry_always_wins() {
    assert_eq!(find_closest_value(-1.0, &[5.0], &[42]), Some(42));
    assert_eq!(find_closest_value(99.0, &[5.0], &[42]), Some(42));
}

#[test]
fn large_map_matches_linear_scan() {
    let positions: Vec<f32> = (0..1000).map(|i| i as f32 * 3.0).collect();
    let values: Vec<i64> = (0..1000).collect();
    for target in [0.4f32, 1.5, 1.6, 299.0, 1500.5, 2996.9] {
        let want = positions
            .iter()
            .enumerate()
            .rev()
            .min_by(|a, b| (a.1 - target).abs().total_cmp(&(b.1 - target).abs()))
            .map(|(i, _)| values[i]);
        assert_eq!(find_closest_value(target, &positions, &values), want, "target {target}");
    }
}
