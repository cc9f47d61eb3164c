use serde::{Deserialize, Serialize};

use super::linear::LinearLaw;
use super::polynomial::Polynomial;
use super::LawError;
use crate::utils::{linspace, stations_coincide};

/// Piecewise-linear function of the span station `y`.
///
/// Segment `i` covers `(breaks[i], breaks[i + 1]]`; the first segment is also
/// closed on the left, so a break-point belongs to the inboard segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPiecewiseLinear")]
pub struct PiecewiseLinear {
    breaks: Vec<f64>,
    segments: Vec<LinearLaw>,
}

#[derive(Debug, Deserialize)]
struct RawPiecewiseLinear {
    breaks: Vec<f64>,
    segments: Vec<LinearLaw>,
}

impl TryFrom<RawPiecewiseLinear> for PiecewiseLinear {
    type Error = LawError;

    fn try_from(raw: RawPiecewiseLinear) -> Result<Self, Self::Error> {
        Self::from_segments(raw.breaks, raw.segments)
    }
}

/// One refined segment of a span integral.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentIntegral {
    pub lower: f64,
    pub upper: f64,
    /// Linear factors of the integrand on this segment, in call order.
    pub factors: Vec<LinearLaw>,
    /// Antiderivative of the integrand in the global span variable.
    pub antiderivative: Polynomial,
    pub value: f64,
}

impl PiecewiseLinear {
    /// Continuous law through station values `(y, value)`.
    pub fn from_stations(stations: &[(f64, f64)]) -> Result<Self, LawError> {
        if stations.len() < 2 {
            return Err(LawError::InsufficientStations(stations.len()));
        }
        for (index, &(y, value)) in stations.iter().enumerate() {
            if !y.is_finite() || !value.is_finite() {
                return Err(LawError::NonFinite { index });
            }
        }
        let breaks: Vec<f64> = stations.iter().map(|&(y, _)| y).collect();
        let segments = stations
            .windows(2)
            .map(|w| LinearLaw::through(w[0].0, w[0].1, w[1].0, w[1].1))
            .collect();
        Self::from_segments(breaks, segments)
    }

    /// Law made of arbitrary segments, possibly discontinuous at the breaks.
    pub fn from_segments(breaks: Vec<f64>, segments: Vec<LinearLaw>) -> Result<Self, LawError> {
        if breaks.len() < 2 {
            return Err(LawError::InsufficientStations(breaks.len()));
        }
        if segments.len() + 1 != breaks.len() {
            return Err(LawError::SegmentMismatch {
                breaks: breaks.len(),
                segments: segments.len(),
            });
        }
        if let Some(index) = breaks.iter().position(|y| !y.is_finite()) {
            return Err(LawError::NonFinite { index });
        }
        if let Some(index) = breaks.windows(2).position(|w| w[1] <= w[0]) {
            return Err(LawError::NonIncreasing {
                index: index + 1,
                station: breaks[index + 1],
            });
        }
        Ok(Self { breaks, segments })
    }

    /// Constant law over `[lower, upper]`.
    pub fn constant(lower: f64, upper: f64, value: f64) -> Result<Self, LawError> {
        Self::from_stations(&[(lower, value), (upper, value)])
    }

    /// The span coordinate itself, `f(y) = y`.
    pub fn identity(lower: f64, upper: f64) -> Result<Self, LawError> {
        Self::from_stations(&[(lower, lower), (upper, upper)])
    }

    pub fn breaks(&self) -> &[f64] {
        &self.breaks
    }

    pub fn segments(&self) -> &[LinearLaw] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&LinearLaw> {
        self.segments.get(index)
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.breaks[0], self.breaks[self.breaks.len() - 1])
    }

    /// Index of the segment owning station `y`.
    pub fn segment_index(&self, y: f64) -> Option<usize> {
        let (lower, upper) = self.domain();
        if y.is_nan() || y < lower || y > upper {
            return None;
        }
        self.breaks[1..].iter().position(|&b| y <= b)
    }

    /// Value at `y`, `None` outside the domain.
    pub fn evaluate(&self, y: f64) -> Option<f64> {
        self.segment_index(y)
            .map(|index| self.segments[index].evaluate(y))
    }

    /// `n` evenly spaced `(y, value)` samples over the domain.
    pub fn sample(&self, n: usize) -> Vec<(f64, f64)> {
        let (lower, upper) = self.domain();
        linspace(lower, upper, n)
            .into_iter()
            .filter_map(|y| self.evaluate(y).map(|v| (y, v)))
            .collect()
    }

    /// Values at the break-points, left-continuous at interior breaks.
    pub fn station_values(&self) -> Vec<(f64, f64)> {
        let mut values = Vec::with_capacity(self.breaks.len());
        values.push((self.breaks[0], self.segments[0].evaluate(self.breaks[0])));
        for (segment, &y) in self.segments.iter().zip(&self.breaks[1..]) {
            values.push((y, segment.evaluate(y)));
        }
        values
    }

    /// `self + factor * other`, refined on the break-points of both laws.
    pub fn add_scaled(&self, other: &PiecewiseLinear, factor: f64) -> Result<Self, LawError> {
        let breaks = refined_breaks(&[self, other])?;
        let segments = breaks
            .windows(2)
            .map(|w| {
                let a = self.segment_at_midpoint(w[0], w[1]);
                let b = other.segment_at_midpoint(w[0], w[1]);
                LinearLaw::new(
                    a.slope + factor * b.slope,
                    a.evaluate(w[0]) + factor * b.evaluate(w[0]),
                    w[0],
                )
            })
            .collect();
        Self::from_segments(breaks, segments)
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            breaks: self.breaks.clone(),
            segments: self
                .segments
                .iter()
                .map(|s| LinearLaw::new(s.slope * factor, s.intercept * factor, s.origin))
                .collect(),
        }
    }

    /// `∫ f(y) dy` over the domain.
    pub fn integrate(&self) -> f64 {
        self.segments
            .iter()
            .zip(self.breaks.windows(2))
            .map(|(s, w)| s.to_polynomial().integrate(w[0], w[1]))
            .sum()
    }

    fn segment_at_midpoint(&self, lower: f64, upper: f64) -> &LinearLaw {
        let index = self
            .segment_index(0.5 * (lower + upper))
            .unwrap_or(self.segments.len() - 1);
        &self.segments[index]
    }
}

/// Union of the break-points of `laws`, which must share the same domain.
pub fn refined_breaks(laws: &[&PiecewiseLinear]) -> Result<Vec<f64>, LawError> {
    let first = laws.first().ok_or(LawError::NoFactors)?;
    let (lower, upper) = first.domain();
    for law in &laws[1..] {
        let (l, u) = law.domain();
        if !stations_coincide(l, lower) || !stations_coincide(u, upper) {
            return Err(LawError::DomainMismatch {
                expected: (lower, upper),
                found: (l, u),
            });
        }
    }

    let mut breaks: Vec<f64> = laws
        .iter()
        .flat_map(|law| law.breaks().iter().copied())
        .collect();
    breaks.sort_by(|a, b| a.total_cmp(b));
    breaks.dedup_by(|a, b| stations_coincide(*a, *b));
    // snap the ends so the refined law spans the first domain exactly
    if let Some(first) = breaks.first_mut() {
        *first = lower;
    }
    if let Some(last) = breaks.last_mut() {
        *last = upper;
    }
    Ok(breaks)
}

/// Exact integral of the product of `factors`, segment by segment.
pub fn integrate_product_segments(
    factors: &[&PiecewiseLinear],
) -> Result<Vec<SegmentIntegral>, LawError> {
    let breaks = refined_breaks(factors)?;
    Ok(breaks
        .windows(2)
        .map(|w| {
            let (lower, upper) = (w[0], w[1]);
            let laws: Vec<LinearLaw> = factors
                .iter()
                .map(|f| *f.segment_at_midpoint(lower, upper))
                .collect();
            let integrand: Polynomial = laws.iter().map(LinearLaw::to_polynomial).product();
            let antiderivative = integrand.antiderivative();
            let value = antiderivative.evaluate(upper) - antiderivative.evaluate(lower);
            SegmentIntegral {
                lower,
                upper,
                factors: laws,
                antiderivative,
                value,
            }
        })
        .collect())
}

/// `∫ Π f_i(y) dy` over the common domain of `factors`.
pub fn integrate_product(factors: &[&PiecewiseLinear]) -> Result<f64, LawError> {
    Ok(integrate_product_segments(factors)?
        .iter()
        .map(|s| s.value)
        .sum())
}
