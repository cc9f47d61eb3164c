//! Span-wise laws: linear segments, their polynomial algebra and exact
//! integration of products over refined segments.

mod linear;
mod piecewise;
mod polynomial;

pub use linear::{integrate_linear_product, LinearLaw};
pub use piecewise::{
    integrate_product, integrate_product_segments, refined_breaks, PiecewiseLinear,
    SegmentIntegral,
};
pub use polynomial::Polynomial;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LawError {
    #[error("At least two stations are required, got {0}")]
    InsufficientStations(usize),
    #[error("Station {index} ({station}) does not increase along the span")]
    NonIncreasing { index: usize, station: f64 },
    #[error("Non-finite value at station {index}")]
    NonFinite { index: usize },
    #[error("{breaks} break-points cannot bound {segments} segments")]
    SegmentMismatch { breaks: usize, segments: usize },
    #[error("Laws span different domains: expected {expected:?}, found {found:?}")]
    DomainMismatch {
        expected: (f64, f64),
        found: (f64, f64),
    },
    #[error("Nothing to integrate")]
    NoFactors,
}
