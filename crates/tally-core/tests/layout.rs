// File: crates/tally-core/tests/layout.rs
// Purpose: Layout pass: bounds, scales, label reservation and placement, bars, empty input.

use tally_core::{
    compute_layout, ApproxTextMeasure, CanvasSize, ChartConfig, ChartError, ChartKind, Color, Dataset, TextMeasure,
};

fn bare_config() -> ChartConfig {
    let mut config = ChartConfig::default().without_labels();
    config.horizontal_margin = 0.0;
    config
}

fn scenario() -> Vec<Dataset> {
    vec![Dataset::from_xy(Color::BLACK, &[(0, 100.0), (1, -50.0), (2, 300.0)])]
}

#[test]
fn unlabelled_scenario_maps_range_to_full_canvas() {
    let layout = compute_layout(&scenario(), ChartKind::Line, &bare_config(), CanvasSize::new(300.0, 300.0), &ApproxTextMeasure::default())
        .expect("valid config")
        .expect("has data");

    assert_eq!(layout.y_range().min, -100.0);
    assert_eq!(layout.y_range().max, 300.0);
    assert!((layout.map_y(300.0) - 0.0).abs() < 1e-3);
    assert!((layout.map_y(-100.0) - 300.0).abs() < 1e-3);
    assert_eq!(layout.x_axis, Some(225.0));
    assert_eq!(layout.bounds.x_axis_y, 225.0);
    assert_eq!(layout.x_step(), 150.0);
    assert_eq!(layout.position_map.positions(), &[0.0, 150.0, 300.0]);
    assert_eq!(layout.series[0].points[2].y, 0.0);
    assert!(layout.bar_width.is_none());
}

#[test]
fn layout_is_idempotent() {
    let config = ChartConfig::default();
    let size = CanvasSize::new(320.0, 240.0);
    let a = compute_layout(&scenario(), ChartKind::Line, &config, size, &ApproxTextMeasure::default()).unwrap();
    let b = compute_layout(&scenario(), ChartKind::Line, &config, size, &ApproxTextMeasure::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_input_lays_out_nothing() {
    let m = ApproxTextMeasure::default();
    let size = CanvasSize::new(300.0, 300.0);
    assert_eq!(compute_layout(&[], ChartKind::Line, &ChartConfig::default(), size, &m), Ok(None));
    let hollow = [Dataset::new(Color::BLACK, Vec::new())];
    assert_eq!(compute_layout(&hollow, ChartKind::Bar, &ChartConfig::default(), size, &m), Ok(None));
}

#[test]
fn x_axis_is_omitted_when_zero_is_out_of_range() {
    let data = [Dataset::from_xy(Color::BLACK, &[(0, 150.0), (1, 250.0)])];
    let config = bare_config().with_y_range(Some(100.0), Some(300.0));
    let layout = compute_layout(&data, ChartKind::Line, &config, CanvasSize::new(200.0, 200.0), &ApproxTextMeasure::default())
        .unwrap()
        .unwrap();
    assert_eq!(layout.x_axis, None);
    assert_eq!(layout.bounds.x_axis_y, layout.bounds.y_bottom);
}

#[test]
fn label_space_comes_from_the_longest_label() {
    let data = [Dataset::from_xy(Color::BLACK, &[(0, 1234.0), (1, 2843.0), (2, 15.0)])];
    let m = ApproxTextMeasure::default();
    let config = ChartConfig::default().with_x_label(|x| Some(format!("#{x}")));
    let layout = compute_layout(&data, ChartKind::Line, &config, CanvasSize::new(400.0, 300.0), &m).unwrap().unwrap();

    // Longest y label is "2900" (range max); x labels are all one line tall.
    let y_space = m.measure("2900").width + 8.0;
    let x_space = m.measure("#0").height + 16.0;
    assert!((layout.x_axis_start - (16.0 + y_space)).abs() < 1e-3);
    assert_eq!(layout.bounds.x_start, layout.x_axis_start);
    assert!((layout.bounds.y_bottom - (300.0 - x_space)).abs() < 1e-3);
    assert_eq!(layout.bounds.x_end, 400.0 - 16.0);
}

#[test]
fn crowded_x_labels_never_overlap() {
    let points: Vec<(i64, f32)> = (0..60).map(|i| (i, (i * 10) as f32)).collect();
    let data = [Dataset::from_xy(Color::BLACK, &points)];
    let config = ChartConfig::default().with_x_label(|_| Some("Jan 2020".to_string()));
    let layout = compute_layout(&data, ChartKind::Line, &config, CanvasSize::new(360.0, 300.0), &ApproxTextMeasure::default())
        .unwrap()
        .unwrap();

    assert!(!layout.x_labels.is_empty());
    assert!(layout.x_labels.len() < 60);
    for pair in layout.x_labels.windows(2) {
        let prev_end = pair[0].center.x + pair[0].size.width / 2.0;
        let next_start = pair[1].center.x - pair[1].size.width / 2.0;
        assert!(next_start > prev_end, "{prev_end} vs {next_start}");
    }
}

#[test]
fn short_canvas_skips_crowded_y_labels_but_keeps_gridlines() {
    let data = [Dataset::from_xy(Color::BLACK, &[(0, 10.0), (1, 500.0)])];
    let layout = compute_layout(&data, ChartKind::Line, &ChartConfig::default(), CanvasSize::new(300.0, 40.0), &ApproxTextMeasure::default())
        .unwrap()
        .unwrap();

    assert_eq!(layout.gridlines.len(), 6);
    let labelled = layout.gridlines.iter().filter(|g| g.label.is_some()).count();
    assert!(labelled < 6);
    assert!(layout.gridlines[0].label.is_some(), "top label is always placed");
    assert_eq!(layout.gridlines[0].value, 500.0);
    assert_eq!(layout.gridlines[5].value, 0.0);
}

#[test]
fn bar_layout_reserves_a_slot_past_the_last_value() {
    let data = [Dataset::from_xy(Color::BLACK, &[(0, 10.0), (1, 20.0), (2, 30.0)])];
    let mut config = ChartConfig::default().without_labels();
    config.horizontal_margin = 16.0;
    let layout = compute_layout(&data, ChartKind::Bar, &config, CanvasSize::new(300.0, 300.0), &ApproxTextMeasure::default())
        .unwrap()
        .unwrap();

    assert_eq!(layout.x_range().max, 3);
    assert_eq!(layout.bounds.x_start, 20.0);
    assert_eq!(layout.bounds.x_end, 280.0);
    let step = 260.0 / 3.0;
    assert!((layout.map_x(0) - (20.0 + step / 2.0)).abs() < 1e-3);
    let width = layout.bar_width.expect("bar chart has a bar width");
    assert!((width - (step - 8.0)).abs() < 1e-3);
}

#[test]
fn bar_width_falls_back_and_caps() {
    use tally_core::layout::bar_width;
    use tally_core::{BarConfig, XRange};

    let bar = BarConfig::default();
    assert!((bar_width(0.0, 30.0, XRange::new(0, 10), &bar, 1.0) - 3.0 * 0.66).abs() < 1e-4);
    assert_eq!(bar_width(0.0, 1000.0, XRange::new(0, 2), &bar, 1.0), 90.0);
    assert_eq!(bar_width(0.0, 1000.0, XRange::new(0, 2), &bar, 2.0), 180.0);
}

#[test]
fn highlight_only_marks_datasets_with_the_value() {
    let data = vec![
        Dataset::from_xy(Color::BLACK, &[(0, 100.0), (1, 200.0), (2, 300.0)]),
        Dataset::from_xy(Color::WHITE, &[(0, 50.0), (2, 150.0)]).with_highlight_color(Color::DARK_GRAY),
    ];
    let layout = compute_layout(&data, ChartKind::Line, &bare_config(), CanvasSize::new(300.0, 300.0), &ApproxTextMeasure::default())
        .unwrap()
        .unwrap();

    let h = layout.highlight_at(&data, 1).unwrap();
    assert_eq!(h.x, 150.0);
    assert_eq!(h.markers.len(), 1);
    let h = layout.highlight_at(&data, 2).unwrap();
    assert_eq!(h.markers.len(), 2);
    assert_eq!(h.markers[1].color, Color::DARK_GRAY);
    assert!(layout.highlight_at(&data, 9).is_none());
}

#[test]
fn tiny_canvas_and_bad_config_are_errors() {
    let m = ApproxTextMeasure::default();
    let err = compute_layout(&scenario(), ChartKind::Line, &ChartConfig::default(), CanvasSize::new(10.0, 10.0), &m);
    assert!(matches!(err, Err(ChartError::DegenerateBounds { .. })));

    let mut config = ChartConfig::default();
    config.num_y_intervals = 0;
    let err = compute_layout(&scenario(), ChartKind::Line, &config, CanvasSize::new(300.0, 300.0), &m);
    assert!(matches!(err, Err(ChartError::InvalidConfig(_))));
}

#[test]
fn bar_at_the_largest_x_value_lays_out() {
    let data = vec![Dataset::from_xy(Color::BLACK, &[(i64::MAX, 40.0)])];
    let layout = compute_layout(&data, ChartKind::Bar, &bare_config(), CanvasSize::new(300.0, 300.0), &ApproxTextMeasure::default())
        .unwrap()
        .unwrap();
    assert_eq!(layout.x_range().max, i64::MAX);
    assert_eq!(layout.position_map.values(), &[i64::MAX]);
    assert!(layout.series[0].points[0].x.is_finite());
}
