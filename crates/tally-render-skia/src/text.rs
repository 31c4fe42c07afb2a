// File: crates/tally-render-skia/src/text.rs
// Summary: Label shaping, measurement and centered drawing using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use tally_core::{TextMeasure, TextSize};

/// Default label size in pixels at density 1.
pub const DEFAULT_LABEL_SIZE: f32 = 12.0;

pub struct TextShaper {
    fonts: FontCollection,
    size: f32,
    color: skia::Color,
}

impl TextShaper {
    pub fn new(size: f32, color: skia::Color) -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc, size: size.max(1.0), color }
    }

    fn make_style(&self) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(self.size);
        ts.set_color(self.color);
        ts.set_font_families(&["Roboto", "Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&self.make_style());
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` with its box centered on `(cx, cy)`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32) {
        let mut p = self.layout(text);
        p.paint(canvas, (cx - p.longest_line() / 2.0, cy - p.height() / 2.0));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_SIZE, skia::Color::BLACK)
    }
}

impl TextMeasure for TextShaper {
    fn measure(&self, text: &str) -> TextSize {
        if text.is_empty() {
            return TextSize::default();
        }
        let p = self.layout(text);
        TextSize { width: p.longest_line(), height: p.height() }
    }
}
