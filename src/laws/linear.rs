use serde::{Deserialize, Serialize};

use super::polynomial::Polynomial;

/// Linear law `slope * (y - origin) + intercept` on one span segment.
///
/// `slope` and `intercept` are the `A` and `B` coefficients of the classic
/// span-wise treatment; `origin` is the inboard station of the segment (the
/// kink station for an outer panel, zero for the inner one).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearLaw {
    /// Rate of change along the span (`A`).
    pub slope: f64,
    /// Value at the origin station (`B`).
    pub intercept: f64,
    /// Station the law is referred to (m).
    pub origin: f64,
}

impl LinearLaw {
    pub fn new(slope: f64, intercept: f64, origin: f64) -> Self {
        Self {
            slope,
            intercept,
            origin,
        }
    }

    /// Law through `(y0, v0)` and `(y1, v1)`, referred to `y0`.
    pub fn through(y0: f64, v0: f64, y1: f64, v1: f64) -> Self {
        Self::new((v1 - v0) / (y1 - y0), v0, y0)
    }

    pub fn constant(value: f64) -> Self {
        Self::new(0.0, value, 0.0)
    }

    pub fn evaluate(&self, y: f64) -> f64 {
        self.slope * (y - self.origin) + self.intercept
    }

    /// Coefficients `(A, B)` of the same law written as `A * y + B`.
    pub fn global_coefficients(&self) -> (f64, f64) {
        (self.slope, self.intercept - self.slope * self.origin)
    }

    pub fn to_polynomial(&self) -> Polynomial {
        let (slope, intercept) = self.global_coefficients();
        Polynomial::linear(slope, intercept)
    }
}

/// Closed form of `∫_{y0}^{y1} (A y + B)(C y + D) dy`.
pub fn integrate_linear_product(a: f64, b: f64, c: f64, d: f64, y0: f64, y1: f64) -> f64 {
    a * c * (y1.powi(3) - y0.powi(3)) / 3.0
        + (a * d + b * c) * (y1.powi(2) - y0.powi(2)) / 2.0
        + b * d * (y1 - y0)
}
