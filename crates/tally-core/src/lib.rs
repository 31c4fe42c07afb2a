// File: crates/tally-core/src/lib.rs
// Summary: Core library entry point; exports the layout, scrubbing and painting API.

//! Renderer-agnostic core of the Tally line and bar charts.
//!
//! The host supplies a [`DrawSurface`] and a [`TextMeasure`]; the core turns
//! datasets into pixel geometry ([`compute_layout`]), replays it through a
//! [`ChartPainter`], and resolves touch positions back to data values
//! ([`find_nearest`]).

pub mod axis;
pub mod canvas;
pub mod chart;
pub mod closest;
pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod paint;
pub mod range;
pub mod scale;
pub mod scrub;
pub mod text;
pub mod types;

pub use axis::{XRange, YRange};
pub use canvas::{DrawCommand, DrawSurface, Path, PathCommand, Recorder, Stroke, VerticalGradient};
pub use chart::{Chart, ChartKind};
pub use closest::{find_closest_value, find_nearest, PositionMap};
pub use config::{BarConfig, ChartConfig, LabelFormatter};
pub use error::{ChartError, Result};
pub use geometry::{PositionPoint, Rect};
pub use layout::{compute_layout, GridLine, Layout, PlacedLabel, SeriesPositions};
pub use paint::{BarPainter, ChartPainter, GradientFill, Highlight, HighlightMarker, LinePainter, LineStyle};
pub use range::{default_lower_bound, default_upper_bound, resolve_y_range};
pub use scale::{XMapping, XScale, YScale};
pub use scrub::{PointerEvent, ScrubPhase, Scrubber, ScrubberMotion, ScrubberPosition, ScrubbingBehavior};
pub use text::{ApproxTextMeasure, TextMeasure, TextSize};
pub use types::{CanvasBounds, CanvasSize, ChartPoint, Color, Dataset, SelectedValue};
