// File: crates/tally-render-skia/src/lib.rs
// Summary: Skia renderer crate: CPU raster surfaces, label shaping and PNG/RGBA output for tally charts.

pub mod render;
pub mod surface;
pub mod text;

pub use render::{RenderOptions, SkiaRenderer};
pub use surface::{to_skia_color, SkiaSurface};
pub use text::TextShaper;
