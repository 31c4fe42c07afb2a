// File: crates/tally-core/src/axis.rs
// Summary: Domain value ranges for the x (ordinal) and y (value) axes.

/// Inclusive range of x domain values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XRange {
    pub min: i64,
    pub max: i64,
}

impl XRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Smallest range covering `xs`, `None` when empty.
    pub fn of_points(xs: impl IntoIterator<Item = i64>) -> Option<Self> {
        let mut iter = xs.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x)));
        Some(Self { min, max })
    }

    /// Range with one extra slot after `max`, used by bar charts for the last bar.
    /// Saturates at `i64::MAX`.
    pub const fn extended_by_one(self) -> Self {
        Self { min: self.min, max: self.max.saturating_add(1) }
    }

    /// Distance from `min` to `x` in value units; exact over the whole `i64` domain.
    #[inline]
    pub fn offset_of(&self, x: i64) -> f32 {
        (i128::from(x) - i128::from(self.min)) as f32
    }

    /// Number of value units covered; a single value counts as one unit.
    pub fn span(&self) -> f32 {
        let span = self.offset_of(self.max);
        if span <= 0.0 { 1.0 } else { span }
    }
}

/// Range of y domain values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YRange {
    pub min: f32,
    pub max: f32,
}

impl YRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Distance between the bounds; a flat range counts as one unit.
    pub fn span(&self) -> f32 {
        let span = self.max - self.min;
        if span.abs() < f32::EPSILON { 1.0 } else { span }
    }

    pub fn contains(&self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }
}
