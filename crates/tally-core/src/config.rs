// File: crates/tally-core/src/config.rs
// Summary: Chart configuration (dp units), label formatters and validation.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::error::{ChartError, Result};
use crate::format;
use crate::scrub::ScrubbingBehavior;

pub const DEFAULT_CANVAS_HEIGHT: f32 = 300.0;
pub const DEFAULT_HORIZONTAL_MARGIN: f32 = 16.0;
pub const DEFAULT_Y_INTERVALS: usize = 5;
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Formats an axis value into a label; `None` means "no label for this value".
pub struct LabelFormatter<T>(Rc<dyn Fn(T) -> Option<String>>);

impl<T> LabelFormatter<T> {
    pub fn new(f: impl Fn(T) -> Option<String> + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn format(&self, value: T) -> Option<String> {
        (self.0)(value)
    }
}

impl<T> Clone for LabelFormatter<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for LabelFormatter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LabelFormatter(..)")
    }
}

/// Bar sizing, in dp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarConfig {
    /// Gap between neighbouring bars; half of it also pads the plot edges.
    pub horizontal_margin: f32,
    pub max_width: f32,
    /// Below this width the margin is dropped in favour of a fixed ratio of the slot.
    pub min_width: f32,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self { horizontal_margin: 8.0, max_width: 90.0, min_width: 6.0 }
    }
}

/// Layout and interaction settings. Lengths are in dp and multiplied by `density`.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    /// Suggested canvas height for hosts that size the surface from the config.
    pub canvas_height: f32,
    pub horizontal_margin: f32,
    pub num_y_intervals: usize,
    /// Minimum gap kept between neighbouring axis labels.
    pub axis_label_padding: f32,
    /// Gap between the y-label column and the y axis.
    pub y_label_padding: f32,
    /// Gap between the plot bottom and the x-label row.
    pub x_label_padding: f32,
    /// Pixels per dp.
    pub density: f32,
    pub reset_delay: Duration,
    pub y_range_min: Option<f32>,
    pub y_range_max: Option<f32>,
    pub scrubbing: ScrubbingBehavior,
    pub bar: BarConfig,
    pub x_label: Option<LabelFormatter<i64>>,
    pub y_label: Option<LabelFormatter<f32>>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            horizontal_margin: DEFAULT_HORIZONTAL_MARGIN,
            num_y_intervals: DEFAULT_Y_INTERVALS,
            axis_label_padding: 2.0,
            y_label_padding: 8.0,
            x_label_padding: 16.0,
            density: 1.0,
            reset_delay: DEFAULT_RESET_DELAY,
            y_range_min: None,
            y_range_max: None,
            scrubbing: ScrubbingBehavior::NoScrubbing,
            bar: BarConfig::default(),
            x_label: None,
            y_label: Some(LabelFormatter::new(format::integer_label)),
        }
    }
}

impl ChartConfig {
    /// Convert a dp length to pixels.
    #[inline]
    pub fn px(&self, dp: f32) -> f32 {
        dp * self.density
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_y_intervals == 0 {
            return Err(ChartError::InvalidConfig("num_y_intervals must be at least 1"));
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ChartError::InvalidConfig("density must be positive"));
        }
        let lengths = [
            self.canvas_height,
            self.horizontal_margin,
            self.axis_label_padding,
            self.y_label_padding,
            self.x_label_padding,
            self.bar.horizontal_margin,
            self.bar.max_width,
            self.bar.min_width,
        ];
        if lengths.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ChartError::InvalidConfig("lengths must be finite and non-negative"));
        }
        if let (Some(min), Some(max)) = (self.y_range_min, self.y_range_max) {
            if min >= max {
                return Err(ChartError::InvalidConfig("y_range_min must be below y_range_max"));
            }
        }
        Ok(())
    }

    pub fn with_scrubbing(mut self, scrubbing: ScrubbingBehavior) -> Self {
        self.scrubbing = scrubbing;
        self
    }

    pub fn with_x_label(mut self, f: impl Fn(i64) -> Option<String> + 'static) -> Self {
        self.x_label = Some(LabelFormatter::new(f));
        self
    }

    pub fn with_y_label(mut self, f: impl Fn(f32) -> Option<String> + 'static) -> Self {
        self.y_label = Some(LabelFormatter::new(f));
        self
    }

    pub fn without_labels(mut self) -> Self {
        self.x_label = None;
        self.y_label = None;
        self
    }

    pub fn with_y_range(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.y_range_min = min;
        self.y_range_max = max;
        self
    }
}
