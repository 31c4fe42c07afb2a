// File: crates/tally-core/src/scale.rs
// Summary: Linear x (ordinal) and y (value) scales mapping domain values to pixels.

use crate::axis::{XRange, YRange};

/// Offset in value units applied to bar centers so bars sit between ticks.
pub const BAR_CENTER_OFFSET: f32 = 0.5;

/// Where a value lands inside its x slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XMapping {
    /// On the tick itself (line charts).
    Point,
    /// Half a step to the right of the tick (bar charts).
    BarCenter,
}

/// Horizontal scale: `px = (x - min + offset) * step + x_start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XScale {
    pub range: XRange,
    pub x_start: f32,
    /// Pixels per value unit.
    pub step: f32,
    pub mapping: XMapping,
}

impl XScale {
    pub fn new(range: XRange, x_start: f32, x_end: f32, mapping: XMapping) -> Self {
        Self { range, x_start, step: (x_end - x_start) / range.span(), mapping }
    }

    fn offset(&self) -> f32 {
        match self.mapping {
            XMapping::Point => 0.0,
            XMapping::BarCenter => BAR_CENTER_OFFSET,
        }
    }

    #[inline]
    pub fn to_px(&self, x: i64) -> f32 {
        (self.range.offset_of(x) + self.offset()) * self.step + self.x_start
    }

    /// Fractional domain value under pixel `px`.
    #[inline]
    pub fn from_px(&self, px: f32) -> f32 {
        (px - self.x_start) / self.step - self.offset() + self.range.min as f32
    }
}

/// Vertical scale: `px = (max - y) * step + y_top`; larger values sit higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YScale {
    pub range: YRange,
    pub y_top: f32,
    /// Pixels per value unit.
    pub step: f32,
}

impl YScale {
    pub fn new(range: YRange, y_top: f32, y_bottom: f32) -> Self {
        Self { range, y_top, step: (y_bottom - y_top) / range.span() }
    }

    #[inline]
    pub fn to_px(&self, y: f32) -> f32 {
        (self.range.max - y) * self.step + self.y_top
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f32 {
        self.range.max - (py - self.y_top) / self.step
    }
}
