// File: crates/tally-core/src/text.rs
// Summary: Text measurement seam used to reserve space for axis labels.

/// Tight bounds of a rendered label, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

/// Font metrics provided by the host.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> TextSize;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure(&self, text: &str) -> TextSize {
        (**self).measure(text)
    }
}

/// Backend-independent estimate: fixed advance per character and cap height
/// proportional to the font size. Keeps layouts deterministic in tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxTextMeasure {
    pub font_size: f32,
}

impl ApproxTextMeasure {
    const ADVANCE: f32 = 0.6;
    const CAP_HEIGHT: f32 = 0.72;

    pub const fn new(font_size: f32) -> Self {
        Self { font_size }
    }
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self::new(12.0)
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn measure(&self, text: &str) -> TextSize {
        let chars = text.chars().count() as f32;
        TextSize {
            width: chars * self.font_size * Self::ADVANCE,
            height: if chars > 0.0 { self.font_size * Self::CAP_HEIGHT } else { 0.0 },
        }
    }
}
