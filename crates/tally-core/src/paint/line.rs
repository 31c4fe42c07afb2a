// File: crates/tally-core/src/paint/line.rs
// Summary: Line chart painter: straight or cubic strokes, optional gradient fill, guide highlight.

use crate::canvas::{DrawSurface, Path, Stroke, VerticalGradient};
use crate::geometry::PositionPoint;
use crate::layout::Layout;
use crate::paint::{ChartPainter, Highlight, AXIS_COLOR, GUIDELINE_DASH, GUIDELINE_STROKE_WIDTH};
use crate::types::Color;

/// Fraction of the way from the line color to the end color used as the default gradient start.
pub const GRADIENT_START_FRACTION: f32 = 0.8;
/// Outer (white) and inner (dataset colored) highlight marker radii, in dp.
pub const HIGHLIGHT_OUTER_RADIUS: f32 = 7.0;
pub const HIGHLIGHT_INNER_RADIUS: f32 = 2.5;

/// Area fill below each line, fading from a start color at the line's top to `end_color` at the plot bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientFill {
    pub alpha: f32,
    /// Start color per dataset; missing entries are derived from the line color.
    pub start_colors: Vec<Color>,
    pub end_color: Color,
}

impl Default for GradientFill {
    fn default() -> Self {
        Self { alpha: 1.0, start_colors: Vec::new(), end_color: Color::WHITE }
    }
}

impl GradientFill {
    pub fn start_color(&self, index: usize, line_color: Color) -> Color {
        self.start_colors
            .get(index)
            .copied()
            .unwrap_or_else(|| line_color.lerp(self.end_color, GRADIENT_START_FRACTION))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LineStyle {
    #[default]
    Straight,
    Cubic,
    Gradient(GradientFill),
    CubicGradient(GradientFill),
}

impl LineStyle {
    fn is_cubic(&self) -> bool {
        matches!(self, Self::Cubic | Self::CubicGradient(_))
    }

    fn fill(&self) -> Option<&GradientFill> {
        match self {
            Self::Gradient(fill) | Self::CubicGradient(fill) => Some(fill),
            Self::Straight | Self::Cubic => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinePainter {
    pub style: LineStyle,
    /// Line width in pixels.
    pub stroke_width: f32,
}

impl Default for LinePainter {
    fn default() -> Self {
        Self { style: LineStyle::Straight, stroke_width: GUIDELINE_STROKE_WIDTH }
    }
}

impl LinePainter {
    pub fn new(style: LineStyle) -> Self {
        Self { style, ..Self::default() }
    }

    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

/// Control points for the segment `from -> to`: both sit at the x midpoint, at the
/// y of their own end. This flattens each segment into an S shape and is not a true
/// spline fit.
pub fn cubic_controls(from: PositionPoint, to: PositionPoint) -> (PositionPoint, PositionPoint) {
    let mid_x = (from.x + to.x) / 2.0;
    (PositionPoint::new(mid_x, from.y), PositionPoint::new(mid_x, to.y))
}

fn append_segments(path: &mut Path, points: &[PositionPoint], cubic: bool) {
    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if cubic {
            let (c1, c2) = cubic_controls(from, to);
            path.cubic_to(c1, c2, to);
        } else {
            path.line_to(to.x, to.y);
        }
    }
}

/// Open cubic path through `points`; empty when there are no points.
pub fn cubic_path(points: &[PositionPoint]) -> Path {
    let mut path = Path::new();
    if let Some(first) = points.first() {
        path.move_to(first.x, first.y);
        append_segments(&mut path, points, true);
    }
    path
}

/// Closed area under `points` down to `y_bottom`, spanning `x_start..x_end`.
pub fn gradient_path(points: &[PositionPoint], x_start: f32, x_end: f32, y_bottom: f32, cubic: bool) -> Path {
    let mut path = Path::new();
    let Some(first) = points.first() else { return path };
    path.move_to(x_start, y_bottom);
    path.line_to(first.x, first.y);
    append_segments(&mut path, points, cubic);
    path.line_to(x_end, y_bottom);
    path.line_to(x_start, y_bottom);
    path.close();
    path
}

impl ChartPainter for LinePainter {
    fn draw_points(&self, surface: &mut dyn DrawSurface, layout: &Layout) {
        let bounds = &layout.bounds;
        if let Some(fill) = self.style.fill() {
            for (i, series) in layout.series.iter().enumerate() {
                let Some(top_y) = series.points.iter().map(|p| p.y).reduce(f32::min) else { continue };
                let path = gradient_path(&series.points, bounds.x_start, bounds.x_end, bounds.y_bottom, self.style.is_cubic());
                let gradient = VerticalGradient {
                    top_color: fill.start_color(i, series.color),
                    bottom_color: fill.end_color,
                    top_y,
                    bottom_y: bounds.y_bottom,
                    alpha: fill.alpha,
                };
                surface.fill_path_gradient(&path, &gradient);
            }
        }
        for series in &layout.series {
            let stroke = Stroke::solid(series.color, self.stroke_width);
            if self.style.is_cubic() {
                if series.points.is_empty() {
                    continue;
                }
                surface.stroke_path(&cubic_path(&series.points), &stroke);
            } else {
                for pair in series.points.windows(2) {
                    surface.draw_line(pair[0], pair[1], &stroke);
                }
            }
        }
    }

    fn draw_highlight(&self, surface: &mut dyn DrawSurface, layout: &Layout, highlight: &Highlight) {
        let x = highlight.x;
        surface.draw_line(
            PositionPoint::new(x, layout.bounds.y_bottom),
            PositionPoint::new(x, layout.bounds.y_top),
            &Stroke::dashed(AXIS_COLOR, GUIDELINE_STROKE_WIDTH, GUIDELINE_DASH),
        );
        for marker in &highlight.markers {
            surface.draw_circle(PositionPoint::new(x, marker.y), HIGHLIGHT_OUTER_RADIUS * layout.density, Color::WHITE);
        }
        for marker in &highlight.markers {
            surface.draw_circle(PositionPoint::new(x, marker.y), HIGHLIGHT_INNER_RADIUS * layout.density, marker.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::PathCommand;

    #[test]
    fn controls_share_the_midpoint() {
        let (c1, c2) = cubic_controls(PositionPoint::new(0.0, 10.0), PositionPoint::new(20.0, 30.0));
        assert_eq!(c1, PositionPoint::new(10.0, 10.0));
        assert_eq!(c2, PositionPoint::new(10.0, 30.0));
    }

    #[test]
    fn gradient_path_closes_along_the_bottom() {
        let pts = [PositionPoint::new(5.0, 40.0), PositionPoint::new(50.0, 20.0)];
        let path = gradient_path(&pts, 0.0, 60.0, 100.0, false);
        let cmds = path.commands();
        assert_eq!(cmds.first(), Some(&PathCommand::MoveTo(PositionPoint::new(0.0, 100.0))));
        assert_eq!(cmds[1], PathCommand::LineTo(PositionPoint::new(5.0, 40.0)));
        assert_eq!(cmds[2], PathCommand::LineTo(PositionPoint::new(50.0, 20.0)));
        assert_eq!(cmds[3], PathCommand::LineTo(PositionPoint::new(60.0, 100.0)));
        assert_eq!(cmds[4], PathCommand::LineTo(PositionPoint::new(0.0, 100.0)));
        assert_eq!(cmds[5], PathCommand::Close);
    }

    #[test]
    fn empty_points_give_empty_paths() {
        assert!(cubic_path(&[]).is_empty());
        assert!(gradient_path(&[], 0.0, 1.0, 1.0, true).is_empty());
    }
}
