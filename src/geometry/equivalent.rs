use serde::{Deserialize, Serialize};

use super::planform::WingPlanform;
use crate::utils::WingError;

/// Straight-tapered wing equivalent to a cranked planform.
///
/// The equivalent leading and trailing edges cut off, between the root and
/// the tip, the same area as the real edges do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquivalentWing {
    /// Leading edge of the equivalent root chord `x_A1` (m).
    pub x_le_root: f64,
    /// Trailing edge of the equivalent root chord `x_A2` (m).
    pub x_te_root: f64,
    /// Equivalent root chord `c_r,eq` (m).
    pub root_chord: f64,
    /// Equivalent leading-edge sweep `Λ_le,eq` (rad).
    pub sweep_le: f64,
    /// Equivalent taper ratio `c_t / c_r,eq`.
    pub taper_ratio: f64,
}

impl EquivalentWing {
    pub fn from_planform(planform: &WingPlanform) -> Result<Self, WingError> {
        planform.validate()?;
        let half_span = planform.semispan();
        let half_inner = planform.kink_station();
        let half_outer = 0.5 * planform.outer_span();

        // leading edge: root A, kink B, tip C
        let x_b = planform.leading_edge_at_kink();
        let x_c = planform.leading_edge_at_tip();
        let le_area = x_b * half_inner / 2.0
            + (x_c - x_b) * half_inner
            + half_outer * (x_c - x_b) / 2.0;
        let x_le_root = x_c - 2.0 * le_area / half_span;

        // trailing edge: A', B', C'
        let x_ap = planform.root_chord;
        let x_bp = x_b + planform.kink_chord;
        let x_cp = x_c + planform.tip_chord;
        let te_area = (x_ap - x_bp) * half_inner / 2.0
            + (x_cp - x_ap) * half_inner
            + half_outer * (x_cp - x_bp) / 2.0;
        let x_te_root = x_cp - 2.0 * te_area / half_span;

        let root_chord = x_te_root - x_le_root;
        if !root_chord.is_finite() || root_chord <= 0.0 {
            return Err(WingError::Degenerate(format!(
                "equivalent root chord is {}",
                root_chord
            )));
        }

        Ok(Self {
            x_le_root,
            x_te_root,
            root_chord,
            sweep_le: ((x_c - x_le_root) / half_span).atan(),
            taper_ratio: planform.tip_chord / root_chord,
        })
    }

    pub fn to_planform(&self, span: f64) -> Result<WingPlanform, WingError> {
        WingPlanform::trapezoidal(
            self.root_chord,
            self.root_chord * self.taper_ratio,
            span,
            self.sweep_le,
        )
    }
}
