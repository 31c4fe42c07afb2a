// File: crates/tally-core/src/paint/bar.rs
// Summary: Bar chart painter: one rect per point from its value to the x axis, highlighted in place.

use crate::canvas::DrawSurface;
use crate::geometry::Rect;
use crate::layout::Layout;
use crate::paint::{ChartPainter, Highlight};
use crate::types::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarPainter;

impl BarPainter {
    /// Rect centered on `x`, spanning from `top` to `baseline` (either may be lower on screen).
    pub fn bar_rect(x: f32, top: f32, baseline: f32, width: f32) -> Rect {
        Rect::from_ltrb(x - width / 2.0, top, x + width / 2.0, baseline).normalized()
    }

    fn draw_bar(surface: &mut dyn DrawSurface, layout: &Layout, x: f32, y: f32, color: Color) {
        let width = layout.bar_width.unwrap_or_default();
        surface.draw_rect(Self::bar_rect(x, y, layout.bounds.x_axis_y, width), color);
    }
}

impl ChartPainter for BarPainter {
    fn draw_points(&self, surface: &mut dyn DrawSurface, layout: &Layout) {
        for series in &layout.series {
            for p in &series.points {
                Self::draw_bar(surface, layout, p.x, p.y, series.color);
            }
        }
    }

    fn draw_highlight(&self, surface: &mut dyn DrawSurface, layout: &Layout, highlight: &Highlight) {
        for marker in &highlight.markers {
            Self::draw_bar(surface, layout, highlight.x, marker.y, marker.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_bars_hang_below_the_axis() {
        let r = BarPainter::bar_rect(50.0, 120.0, 100.0, 10.0);
        assert_eq!(r, Rect::from_ltrb(45.0, 100.0, 55.0, 120.0));
    }
}
