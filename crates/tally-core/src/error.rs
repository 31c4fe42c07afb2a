// File: crates/tally-core/src/error.rs
// Summary: Error type for configuration and layout failures.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("invalid chart config: {0}")]
    InvalidConfig(&'static str),

    #[error("canvas too small for plot area: x {x_start}..{x_end}, y {y_top}..{y_bottom}")]
    DegenerateBounds {
        x_start: f32,
        x_end: f32,
        y_top: f32,
        y_bottom: f32,
    },
}

pub type Result<T> = std::result::Result<T, ChartError>;
