// File: crates/tally-core/src/layout.rs
// Summary: Pure layout pass: label space, canvas bounds, scales, gridlines, labels and point projection.

use tracing::debug;

use crate::axis::{XRange, YRange};
use crate::chart::ChartKind;
use crate::closest::PositionMap;
use crate::config::{BarConfig, ChartConfig, LabelFormatter};
use crate::error::{ChartError, Result};
use crate::geometry::PositionPoint;
use crate::grid::gridline_positions;
use crate::paint::{Highlight, HighlightMarker};
use crate::range::resolve_y_range;
use crate::scale::{XScale, YScale};
use crate::text::{TextMeasure, TextSize};
use crate::types::{CanvasBounds, CanvasSize, Color, Dataset};

/// Share of the slot a bar takes when the configured margin leaves it too thin.
pub const BAR_FALLBACK_RATIO: f32 = 0.66;

/// Projected points of one dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPositions {
    pub points: Vec<PositionPoint>,
    pub color: Color,
}

/// A label that survived collision avoidance, centered on `center`.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLabel {
    pub text: String,
    pub center: PositionPoint,
    pub size: TextSize,
}

/// Horizontal gridline at pixel `y` for domain `value`, with its y-axis label if placed.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub y: f32,
    pub value: f32,
    pub label: Option<PlacedLabel>,
}

/// Everything needed to draw one frame of a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub kind: ChartKind,
    pub size: CanvasSize,
    pub bounds: CanvasBounds,
    /// Pixel x of the y axis (right edge of the y-label column).
    pub x_axis_start: f32,
    /// Pixel y of the x axis when zero lies inside the y range.
    pub x_axis: Option<f32>,
    pub x_scale: XScale,
    pub y_scale: YScale,
    pub position_map: PositionMap,
    pub series: Vec<SeriesPositions>,
    pub gridlines: Vec<GridLine>,
    pub x_labels: Vec<PlacedLabel>,
    /// Bar width in pixels, bar charts only.
    pub bar_width: Option<f32>,
    pub density: f32,
}

impl Layout {
    pub fn x_step(&self) -> f32 {
        self.x_scale.step
    }

    pub fn y_step(&self) -> f32 {
        self.y_scale.step
    }

    pub fn x_range(&self) -> XRange {
        self.x_scale.range
    }

    pub fn y_range(&self) -> YRange {
        self.y_scale.range
    }

    pub fn map_x(&self, x: i64) -> f32 {
        self.x_scale.to_px(x)
    }

    pub fn map_y(&self, y: f32) -> f32 {
        self.y_scale.to_px(y)
    }

    /// Guide position and per-dataset markers for `x_value`, `None` if no point has that x.
    pub fn highlight_at(&self, datasets: &[Dataset], x_value: i64) -> Option<Highlight> {
        let x = self.position_map.position_of(x_value)?;
        let markers = datasets
            .iter()
            .filter_map(|d| {
                d.point_at(x_value)
                    .map(|p| HighlightMarker { y: self.map_y(p.y), color: d.highlight_color })
            })
            .collect();
        Some(Highlight { x_value, x, markers })
    }
}

/// Lay out `datasets` on a canvas of `size`.
///
/// Returns `Ok(None)` when there is nothing to draw (no datasets or no points).
pub fn compute_layout(
    datasets: &[Dataset],
    kind: ChartKind,
    config: &ChartConfig,
    size: CanvasSize,
    measure: &dyn TextMeasure,
) -> Result<Option<Layout>> {
    config.validate()?;

    let Some(y_range) = resolve_y_range(datasets, config.y_range_min, config.y_range_max) else {
        return Ok(None);
    };
    let all_x = || datasets.iter().flat_map(|d| d.points.iter().map(|p| p.x));
    let Some(data_x) = XRange::of_points(all_x()) else {
        return Ok(None);
    };
    for (i, d) in datasets.iter().enumerate().filter(|(_, d)| !d.is_sorted_by_x()) {
        debug!(dataset = i, points = d.points.len(), "dataset is not sorted by x");
    }
    let x_range = match kind {
        ChartKind::Line => data_x,
        ChartKind::Bar => data_x.extended_by_one(),
    };

    // Reserve room for the longest label on each axis.
    let longest_x = longest_label([x_range.min, x_range.max].into_iter().chain(all_x()), config.x_label.as_ref());
    let all_y = datasets.iter().flat_map(|d| d.points.iter().map(|p| p.y));
    let longest_y = longest_label([y_range.min, y_range.max].into_iter().chain(all_y), config.y_label.as_ref());
    let y_label_space = longest_y
        .map(|s| measure.measure(&s).width + config.px(config.y_label_padding))
        .unwrap_or(0.0);
    let x_label_space = longest_x
        .map(|s| measure.measure(&s).height + config.px(config.x_label_padding))
        .unwrap_or(0.0);

    // Canvas y grows downward: y_top is the top edge.
    let margin = config.px(config.horizontal_margin);
    let axis_gap = config.px(kind.axis_to_graph_margin(config));
    let x_axis_start = margin + y_label_space;
    let x_start = x_axis_start + axis_gap;
    let x_end = size.width - margin - axis_gap;
    let y_top = 0.0;
    let y_bottom = size.height - x_label_space;
    if !(x_start < x_end && y_top < y_bottom) {
        return Err(ChartError::DegenerateBounds { x_start, x_end, y_top, y_bottom });
    }

    let x_scale = XScale::new(x_range, x_start, x_end, kind.x_mapping());
    let y_scale = YScale::new(y_range, y_top, y_bottom);
    let x_axis = y_range.contains(0.0).then(|| y_scale.to_px(0.0));
    let bounds = CanvasBounds { x_start, x_end, y_top, y_bottom, x_axis_y: x_axis.unwrap_or(y_bottom) };

    let label_padding = config.px(config.axis_label_padding);
    let y_label_center_x = (margin + x_axis_start - config.px(config.y_label_padding)) / 2.0;
    let gridlines = place_gridlines(
        gridline_positions(y_top, y_bottom, y_range, config.num_y_intervals),
        config.y_label.as_ref(),
        measure,
        label_padding,
        y_label_center_x,
    );

    let position_map = PositionMap::from_pairs(all_x().map(|x| (x, x_scale.to_px(x))));
    let x_label_center_y = (y_bottom + config.px(config.x_label_padding) + size.height) / 2.0;
    let x_labels = place_x_labels(&position_map, config.x_label.as_ref(), measure, label_padding, x_label_center_y);

    let series = datasets
        .iter()
        .map(|d| SeriesPositions {
            points: d
                .points
                .iter()
                .map(|p| PositionPoint::new(x_scale.to_px(p.x), y_scale.to_px(p.y)))
                .collect(),
            color: d.color,
        })
        .collect();

    let bar_width = match kind {
        ChartKind::Line => None,
        ChartKind::Bar => Some(bar_width(x_start, x_end, x_range, &config.bar, config.density)),
    };

    debug!(
        ?bounds,
        x_step = x_scale.step,
        y_step = y_scale.step,
        y_label_space,
        x_label_space,
        values = position_map.len(),
        "chart layout computed"
    );

    Ok(Some(Layout {
        kind,
        size,
        bounds,
        x_axis_start,
        x_axis,
        x_scale,
        y_scale,
        position_map,
        series,
        gridlines,
        x_labels,
        bar_width,
        density: config.density,
    }))
}

/// Bar width for a slot: the slot minus the margin, capped at the max width; when that
/// falls below the min width, a fixed share of the slot instead.
pub fn bar_width(x_start: f32, x_end: f32, x_range: XRange, bar: &BarConfig, density: f32) -> f32 {
    let slot = (x_end - x_start) / x_range.span();
    let width = slot - bar.horizontal_margin * density;
    if width < bar.min_width * density {
        slot * BAR_FALLBACK_RATIO
    } else {
        width.min(bar.max_width * density)
    }
}

/// Longest formatted label by character count; the first one wins ties.
fn longest_label<T>(values: impl Iterator<Item = T>, formatter: Option<&LabelFormatter<T>>) -> Option<String> {
    let formatter = formatter?;
    values.filter_map(|v| formatter.format(v)).fold(None, |best, s| match best {
        Some(b) if b.chars().count() >= s.chars().count() => Some(b),
        _ => Some(s),
    })
}

/// Walk gridlines top to bottom, placing a label only when it clears the previous one.
fn place_gridlines(
    positions: Vec<(f32, f32)>,
    formatter: Option<&LabelFormatter<f32>>,
    measure: &dyn TextMeasure,
    padding: f32,
    center_x: f32,
) -> Vec<GridLine> {
    let mut previous_end = 0.0f32;
    let mut out = Vec::with_capacity(positions.len());
    for (i, (y, value)) in positions.into_iter().enumerate() {
        let mut label = None;
        if let Some(text) = formatter.and_then(|f| f.format(value)) {
            let size = measure.measure(&text);
            // The top label starts at its own center so it is never dropped.
            let near = if i == 0 { y } else { y - padding - size.height / 2.0 };
            if near >= previous_end {
                previous_end = y + size.height / 2.0;
                label = Some(PlacedLabel { text, center: PositionPoint::new(center_x, y), size });
            }
        }
        out.push(GridLine { y, value, label });
    }
    out
}

/// Walk x values left to right; a label is kept only if its left edge lies strictly past
/// the previous label's right edge (the cursor starts at the canvas edge).
fn place_x_labels(
    position_map: &PositionMap,
    formatter: Option<&LabelFormatter<i64>>,
    measure: &dyn TextMeasure,
    padding: f32,
    center_y: f32,
) -> Vec<PlacedLabel> {
    let Some(formatter) = formatter else {
        return Vec::new();
    };
    let mut previous_end = 0.0f32;
    let mut out = Vec::new();
    for (value, x) in position_map.iter() {
        let Some(text) = formatter.format(value) else { continue };
        let size = measure.measure(&text);
        let near = x - padding - size.width / 2.0;
        if near > previous_end {
            previous_end = x + size.width / 2.0;
            out.push(PlacedLabel { text, center: PositionPoint::new(x, center_y), size });
        }
    }
    out
}
