// File: crates/tally-core/src/types.rs
// Summary: Shared data model (colors, points, datasets, canvas bounds, selection).

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);
    pub const DARK_GRAY: Color = Color::from_argb(255, 0x44, 0x44, 0x44);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Linear interpolation per channel; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round() as u8 };
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// One data point: an ordinal/time index on x and a value on y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: i64,
    pub y: f32,
}

impl ChartPoint {
    pub const fn new(x: i64, y: f32) -> Self {
        Self { x, y }
    }
}

/// A series of points drawn in one color.
///
/// Points are expected in ascending `x` order. This is not enforced; use
/// [`Dataset::is_sorted_by_x`] to check untrusted input.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub color: Color,
    pub highlight_color: Color,
    pub points: Vec<ChartPoint>,
}

impl Dataset {
    /// Dataset whose highlight color is `color` blended halfway to white.
    pub fn new(color: Color, points: Vec<ChartPoint>) -> Self {
        Self { color, highlight_color: color.lerp(Color::WHITE, 0.5), points }
    }

    pub fn from_xy(color: Color, data: &[(i64, f32)]) -> Self {
        Self::new(color, data.iter().map(|&(x, y)| ChartPoint::new(x, y)).collect())
    }

    pub fn with_highlight_color(mut self, highlight_color: Color) -> Self {
        self.highlight_color = highlight_color;
        self
    }

    pub fn is_sorted_by_x(&self) -> bool {
        self.points.windows(2).all(|w| w[0].x <= w[1].x)
    }

    /// First point whose x equals `x`.
    pub fn point_at(&self, x: i64) -> Option<&ChartPoint> {
        self.points.iter().find(|p| p.x == x)
    }
}

/// Pixel size of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Plot-area bounds in pixels, computed once per layout pass.
/// Contract: `x_start < x_end` and `y_top < y_bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasBounds {
    pub x_start: f32,
    pub x_end: f32,
    pub y_top: f32,
    pub y_bottom: f32,
    /// Pixel y of the x axis, or `y_bottom` when zero is outside the y range.
    pub x_axis_y: f32,
}

/// Currently selected x value and whether it is drawn highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SelectedValue {
    pub x_value: i64,
    pub is_highlighted: bool,
}

impl SelectedValue {
    pub const fn new(x_value: i64, is_highlighted: bool) -> Self {
        Self { x_value, is_highlighted }
    }
}
