// File: crates/tally-core/src/canvas.rs
// Summary: Host drawing surface trait, stroke/path/gradient primitives and a recording surface.

use crate::geometry::{PositionPoint, Rect};
use crate::types::Color;

/// Line style for strokes; `dash` is `[on, off]` in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub const fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    pub const fn dashed(color: Color, width: f32, dash: [f32; 2]) -> Self {
        Self { color, width, dash: Some(dash) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(PositionPoint),
    LineTo(PositionPoint),
    CubicTo { c1: PositionPoint, c2: PositionPoint, to: PositionPoint },
    Close,
}

/// Backend-neutral path description.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(PositionPoint::new(x, y)));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(PositionPoint::new(x, y)));
    }

    pub fn cubic_to(&mut self, c1: PositionPoint, c2: PositionPoint, to: PositionPoint) {
        self.commands.push(PathCommand::CubicTo { c1, c2, to });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Vertical linear gradient from `top_color` at `top_y` to `bottom_color` at `bottom_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalGradient {
    pub top_color: Color,
    pub bottom_color: Color,
    pub top_y: f32,
    pub bottom_y: f32,
    /// Overall opacity in `[0, 1]`.
    pub alpha: f32,
}

/// Canvas primitives the host exposes, addressed in pixel coordinates.
pub trait DrawSurface {
    fn draw_line(&mut self, from: PositionPoint, to: PositionPoint, stroke: &Stroke);
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_circle(&mut self, center: PositionPoint, radius: f32, color: Color);
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);
    fn fill_path_gradient(&mut self, path: &Path, gradient: &VerticalGradient);
    /// Draw `text` centered on `center`.
    fn draw_text(&mut self, text: &str, center: PositionPoint);
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { from: PositionPoint, to: PositionPoint, stroke: Stroke },
    Rect { rect: Rect, color: Color },
    Circle { center: PositionPoint, radius: f32, color: Color },
    StrokePath { path: Path, stroke: Stroke },
    FillGradient { path: Path, gradient: VerticalGradient },
    Text { text: String, center: PositionPoint },
}

/// Surface that records every call; useful for tests and for hosts that
/// batch drawing into their own display lists.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for Recorder {
    fn draw_line(&mut self, from: PositionPoint, to: PositionPoint, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke: *stroke });
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_circle(&mut self, center: PositionPoint, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokePath { path: path.clone(), stroke: *stroke });
    }

    fn fill_path_gradient(&mut self, path: &Path, gradient: &VerticalGradient) {
        self.commands.push(DrawCommand::FillGradient { path: path.clone(), gradient: *gradient });
    }

    fn draw_text(&mut self, text: &str, center: PositionPoint) {
        self.commands.push(DrawCommand::Text { text: text.to_owned(), center });
    }
}
