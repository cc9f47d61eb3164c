use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::laws::PiecewiseLinear;
use crate::utils::{stations_coincide, WingError, MAX_SWEEP, MIN_SWEEP};

/// Planform of a two-panel (cranked) wing.
///
/// A straight-tapered wing is the special case with the kink at the tip.
/// Spans are full spans (both halves); the span-wise laws are defined on the
/// semispan `0 <= y <= b/2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingPlanform {
    /// Root chord `c_r` (m).
    pub root_chord: f64,
    /// Chord at the kink station `c_k` (m).
    pub kink_chord: f64,
    /// Tip chord `c_t` (m).
    pub tip_chord: f64,
    /// Wing span `b` (m).
    pub span: f64,
    /// Span of the inner panel `b_k`, both halves (m).
    pub kink_span: f64,
    /// Leading-edge sweep of the inner panel `Λ_le,1` (rad).
    pub sweep_le_inner: f64,
    /// Leading-edge sweep of the outer panel `Λ_le,2` (rad).
    pub sweep_le_outer: f64,
}

impl WingPlanform {
    /// Creates a cranked planform, validating its dimensions.
    pub fn new(
        root_chord: f64,
        kink_chord: f64,
        tip_chord: f64,
        span: f64,
        kink_span: f64,
        sweep_le_inner: f64,
        sweep_le_outer: f64,
    ) -> Result<Self, WingError> {
        let planform = Self {
            root_chord,
            kink_chord,
            tip_chord,
            span,
            kink_span,
            sweep_le_inner,
            sweep_le_outer,
        };
        planform.validate()?;
        Ok(planform)
    }

    /// Straight-tapered planform with a single leading-edge sweep.
    pub fn trapezoidal(
        root_chord: f64,
        tip_chord: f64,
        span: f64,
        sweep_le: f64,
    ) -> Result<Self, WingError> {
        Self::new(
            root_chord, tip_chord, tip_chord, span, span, sweep_le, sweep_le,
        )
    }

    pub fn validate(&self) -> Result<(), WingError> {
        let lengths = [
            ("root chord", self.root_chord),
            ("kink chord", self.kink_chord),
            ("tip chord", self.tip_chord),
            ("span", self.span),
            ("kink span", self.kink_span),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(WingError::InvalidGeometry(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        if self.kink_span > self.span && !stations_coincide(self.kink_span, self.span) {
            return Err(WingError::InvalidGeometry(format!(
                "kink span {} exceeds span {}",
                self.kink_span, self.span
            )));
        }
        if !self.is_cranked() && !stations_coincide(self.kink_chord, self.tip_chord) {
            return Err(WingError::InvalidGeometry(format!(
                "kink chord {} differs from tip chord {} on a straight-tapered wing",
                self.kink_chord, self.tip_chord
            )));
        }
        for (name, sweep) in [
            ("inner sweep", self.sweep_le_inner),
            ("outer sweep", self.sweep_le_outer),
        ] {
            if !(MIN_SWEEP..=MAX_SWEEP).contains(&sweep) {
                return Err(WingError::InvalidGeometry(format!(
                    "{} {} rad is outside [{:.3}, {:.3}]",
                    name, sweep, MIN_SWEEP, MAX_SWEEP
                )));
            }
        }
        Ok(())
    }

    pub fn semispan(&self) -> f64 {
        0.5 * self.span
    }

    /// Span station of the kink, `b_k / 2`.
    pub fn kink_station(&self) -> f64 {
        0.5 * self.kink_span
    }

    /// Span of the outer panel, both halves.
    pub fn outer_span(&self) -> f64 {
        (self.span - self.kink_span).max(0.0)
    }

    pub fn is_cranked(&self) -> bool {
        !stations_coincide(self.kink_span, self.span)
    }

    pub fn taper_ratio(&self) -> f64 {
        self.tip_chord / self.root_chord
    }

    /// Break stations of the span-wise laws.
    pub fn stations(&self) -> Vec<f64> {
        if self.is_cranked() {
            vec![0.0, self.kink_station(), self.semispan()]
        } else {
            vec![0.0, self.semispan()]
        }
    }

    /// Law through root, kink and tip values; the kink value is ignored on
    /// straight-tapered wings.
    pub fn station_law(&self, root: f64, kink: f64, tip: f64) -> Result<PiecewiseLinear, WingError> {
        if !self.is_cranked() && !stations_coincide(kink, tip) {
            warn!(
                "Kink value {} ignored on a straight-tapered wing, tip value is {}",
                kink, tip
            );
        }
        let law = if self.is_cranked() {
            PiecewiseLinear::from_stations(&[
                (0.0, root),
                (self.kink_station(), kink),
                (self.semispan(), tip),
            ])?
        } else {
            PiecewiseLinear::from_stations(&[(0.0, root), (self.semispan(), tip)])?
        };
        Ok(law)
    }

    /// Chord law `c(y)`.
    pub fn chord_law(&self) -> Result<PiecewiseLinear, WingError> {
        self.station_law(self.root_chord, self.kink_chord, self.tip_chord)
    }

    /// Leading-edge position `X_le(y)` measured aft from the root leading edge.
    pub fn leading_edge_law(&self) -> Result<PiecewiseLinear, WingError> {
        let x_kink = self.leading_edge_at_kink();
        self.station_law(0.0, x_kink, self.leading_edge_at_tip())
    }

    pub fn trailing_edge_law(&self) -> Result<PiecewiseLinear, WingError> {
        Ok(self.leading_edge_law()?.add_scaled(&self.chord_law()?, 1.0)?)
    }

    /// Local aerodynamic-centre line `X_le(y) + c(y) / 4`.
    pub fn quarter_chord_law(&self) -> Result<PiecewiseLinear, WingError> {
        Ok(self.leading_edge_law()?.add_scaled(&self.chord_law()?, 0.25)?)
    }

    /// The span coordinate `y` as a law, for first-moment integrals.
    pub fn span_coordinate_law(&self) -> Result<PiecewiseLinear, WingError> {
        Ok(PiecewiseLinear::identity(0.0, self.semispan())?)
    }

    pub fn leading_edge_at_kink(&self) -> f64 {
        self.kink_station() * self.sweep_le_inner.tan()
    }

    pub fn leading_edge_at_tip(&self) -> f64 {
        if self.is_cranked() {
            self.leading_edge_at_kink()
                + (self.semispan() - self.kink_station()) * self.sweep_le_outer.tan()
        } else {
            self.semispan() * self.sweep_le_inner.tan()
        }
    }

    /// Sum of the panel trapezoids, `S` in closed form.
    pub fn trapezoidal_area(&self) -> f64 {
        if self.is_cranked() {
            (self.root_chord + self.kink_chord) * self.kink_station()
                + (self.kink_chord + self.tip_chord) * (self.semispan() - self.kink_station())
        } else {
            (self.root_chord + self.tip_chord) * self.semispan()
        }
    }
}

/// `AR = b² / S`
pub fn aspect_ratio(span: f64, area: f64) -> f64 {
    span * span / area
}

/// Mean aerodynamic chord of a straight-tapered wing.
pub fn mean_aerodynamic_chord_trapezoidal(root_chord: f64, taper_ratio: f64) -> f64 {
    let l = taper_ratio;
    2.0 / 3.0 * root_chord * (1.0 + l + l * l) / (1.0 + l)
}

/// Leading edge of the mean aerodynamic chord of a straight-tapered wing.
pub fn x_le_mac_trapezoidal(span: f64, taper_ratio: f64, sweep_le: f64) -> f64 {
    y_mac_trapezoidal(span, taper_ratio) * sweep_le.tan()
}

/// Span station of the mean aerodynamic chord of a straight-tapered wing.
pub fn y_mac_trapezoidal(span: f64, taper_ratio: f64) -> f64 {
    span / 6.0 * (1.0 + 2.0 * taper_ratio) / (1.0 + taper_ratio)
}
