// File: crates/tally-render-skia/src/surface.rs
// Summary: DrawSurface implementation over a Skia canvas.

use skia_safe as skia;
use tally_core::{Color, DrawSurface, Path, PathCommand, PositionPoint, Rect, Stroke, VerticalGradient};
use tracing::trace;

use crate::text::TextShaper;

pub fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_point(p: PositionPoint) -> skia::Point {
    skia::Point::new(p.x, p.y)
}

fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => {
                out.move_to(to_point(p));
            }
            PathCommand::LineTo(p) => {
                out.line_to(to_point(p));
            }
            PathCommand::CubicTo { c1, c2, to } => {
                out.cubic_to(to_point(c1), to_point(c2), to_point(to));
            }
            PathCommand::Close => {
                out.close();
            }
        }
    }
    out
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(to_skia_color(stroke.color));
    if let Some(dash) = stroke.dash {
        paint.set_path_effect(skia::PathEffect::dash(&dash, 0.0));
    }
    paint
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia_color(color));
    paint
}

/// Borrowed Skia canvas plus the shaper used for labels.
/// With no shaper, text calls are dropped.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    shaper: Option<&'a TextShaper>,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: Option<&'a TextShaper>) -> Self {
        Self { canvas, shaper }
    }
}

impl DrawSurface for SkiaSurface<'_> {
    fn draw_line(&mut self, from: PositionPoint, to: PositionPoint, stroke: &Stroke) {
        self.canvas.draw_line(to_point(from), to_point(to), &stroke_paint(stroke));
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.canvas.draw_rect(r, &fill_paint(color));
    }

    fn draw_circle(&mut self, center: PositionPoint, radius: f32, color: Color) {
        self.canvas.draw_circle(to_point(center), radius, &fill_paint(color));
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.canvas.draw_path(&to_skia_path(path), &stroke_paint(stroke));
    }

    fn fill_path_gradient(&mut self, path: &Path, gradient: &VerticalGradient) {
        let colors = [to_skia_color(gradient.top_color), to_skia_color(gradient.bottom_color)];
        let shader = skia::Shader::linear_gradient(
            ((0.0f32, gradient.top_y), (0.0f32, gradient.bottom_y)),
            skia::gradient_shader::GradientShaderColors::Colors(&colors[..]),
            None,
            skia::TileMode::Clamp,
            None,
            None,
        );
        let Some(shader) = shader else {
            trace!(?gradient, "skipping degenerate gradient");
            return;
        };
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_shader(shader);
        paint.set_alpha_f(gradient.alpha.clamp(0.0, 1.0));
        self.canvas.draw_path(&to_skia_path(path), &paint);
    }

    fn draw_text(&mut self, text: &str, center: PositionPoint) {
        if let Some(shaper) = self.shaper {
            shaper.draw_centered(self.canvas, text, center.x, center.y);
        }
    }
}
