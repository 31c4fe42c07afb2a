// File: crates/tally-core/src/paint/mod.rs
// Summary: Painter trait with overridable axis/gridline/label drawing, plus highlight data.

pub mod bar;
pub mod line;

pub use bar::BarPainter;
pub use line::{GradientFill, LinePainter, LineStyle};

use crate::canvas::{DrawSurface, Stroke};
use crate::geometry::PositionPoint;
use crate::layout::{GridLine, Layout, PlacedLabel};
use crate::types::Color;

/// Axis and guide line width, in pixels.
pub const GUIDELINE_STROKE_WIDTH: f32 = 4.0;
/// Dash pattern `[on, off]` for gridlines and the highlight guide, in pixels.
pub const GUIDELINE_DASH: [f32; 2] = [10.0, 10.0];
/// Gridline width, in dp.
pub const GRIDLINE_WIDTH: f32 = 1.0;
pub const AXIS_COLOR: Color = Color::DARK_GRAY;

/// One dataset's marker at the highlighted x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightMarker {
    pub y: f32,
    pub color: Color,
}

/// The highlighted x value, its pixel x and a marker per dataset that has a point there.
#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub x_value: i64,
    pub x: f32,
    pub markers: Vec<HighlightMarker>,
}

/// Drawing strategy for a chart. Axis, gridline and label drawing have defaults;
/// points and highlight are specific to the chart style.
pub trait ChartPainter {
    /// Horizontal axis at pixel `y`, only called when zero is inside the y range.
    fn draw_x_axis(&self, surface: &mut dyn DrawSurface, layout: &Layout, y: f32) {
        default_x_axis(surface, layout.x_axis_start, layout.bounds.x_end, y);
    }

    fn draw_y_axis(&self, surface: &mut dyn DrawSurface, layout: &Layout) {
        default_y_axis(surface, layout.bounds.y_top, layout.bounds.y_bottom, layout.x_axis_start);
    }

    fn draw_grid_line(&self, surface: &mut dyn DrawSurface, layout: &Layout, line: &GridLine) {
        default_grid_line(surface, layout.x_axis_start, layout.bounds.x_end, line.y, layout.density);
    }

    fn draw_label(&self, surface: &mut dyn DrawSurface, label: &PlacedLabel) {
        surface.draw_text(&label.text, label.center);
    }

    fn draw_points(&self, surface: &mut dyn DrawSurface, layout: &Layout);

    fn draw_highlight(&self, surface: &mut dyn DrawSurface, layout: &Layout, highlight: &Highlight);
}

pub fn default_x_axis(surface: &mut dyn DrawSurface, x1: f32, x2: f32, y: f32) {
    surface.draw_line(
        PositionPoint::new(x1, y),
        PositionPoint::new(x2, y),
        &Stroke::solid(AXIS_COLOR, GUIDELINE_STROKE_WIDTH),
    );
}

pub fn default_y_axis(surface: &mut dyn DrawSurface, y1: f32, y2: f32, x: f32) {
    surface.draw_line(
        PositionPoint::new(x, y1),
        PositionPoint::new(x, y2),
        &Stroke::solid(AXIS_COLOR, GUIDELINE_STROKE_WIDTH),
    );
}

pub fn default_grid_line(surface: &mut dyn DrawSurface, x_start: f32, x_end: f32, y: f32, density: f32) {
    surface.draw_line(
        PositionPoint::new(x_start, y),
        PositionPoint::new(x_end, y),
        &Stroke::dashed(AXIS_COLOR, GRIDLINE_WIDTH * density, GUIDELINE_DASH),
    );
}
