use serde::{Deserialize, Serialize};

use super::planform::WingPlanform;
use crate::laws::PiecewiseLinear;
use crate::utils::WingError;

/// Section property given at the root, kink and tip stations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationValues {
    pub root: f64,
    pub kink: f64,
    pub tip: f64,
}

impl StationValues {
    pub fn new(root: f64, kink: f64, tip: f64) -> Self {
        Self { root, kink, tip }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Root and tip values, with the kink value placed on the straight line
    /// between them at `kink_fraction = b_k / b`.
    pub fn root_to_tip(root: f64, tip: f64, kink_fraction: f64) -> Self {
        Self::new(root, root + (tip - root) * kink_fraction, tip)
    }

    pub fn law(&self, planform: &WingPlanform) -> Result<PiecewiseLinear, WingError> {
        planform.station_law(self.root, self.kink, self.tip)
    }
}

/// Aerodynamic section properties along the span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanwiseLaws {
    /// Geometric twist `ε_g` (rad), positive nose-up.
    pub twist: StationValues,
    /// Section zero-lift angle `α_0ℓ` (rad).
    pub zero_lift_angle: StationValues,
    /// Section lift-curve slope `C_ℓα` (1/rad).
    pub lift_slope: StationValues,
    /// Section pitching moment about the aerodynamic centre `C_m,ac`.
    pub cm_ac: StationValues,
    /// Thickness ratio `t/c`.
    pub thickness: StationValues,
}

impl Default for SpanwiseLaws {
    /// Untwisted thin-airfoil wing: `C_ℓα = 2π`, everything else zero.
    fn default() -> Self {
        Self {
            twist: StationValues::default(),
            zero_lift_angle: StationValues::default(),
            lift_slope: StationValues::uniform(2.0 * std::f64::consts::PI),
            cm_ac: StationValues::default(),
            thickness: StationValues::default(),
        }
    }
}

impl SpanwiseLaws {
    /// Geometric twist `ε_g(y)`, measured from the root chord.
    pub fn twist_law(&self, planform: &WingPlanform) -> Result<PiecewiseLinear, WingError> {
        if self.twist.root != 0.0 {
            return Err(WingError::InvalidGeometry(format!(
                "twist is measured from the root chord, root twist must be 0, got {} rad",
                self.twist.root
            )));
        }
        self.twist.law(planform)
    }

    pub fn zero_lift_law(&self, planform: &WingPlanform) -> Result<PiecewiseLinear, WingError> {
        self.zero_lift_angle.law(planform)
    }

    pub fn lift_slope_law(&self, planform: &WingPlanform) -> Result<PiecewiseLinear, WingError> {
        self.lift_slope.law(planform)
    }

    pub fn cm_ac_law(&self, planform: &WingPlanform) -> Result<PiecewiseLinear, WingError> {
        self.cm_ac.law(planform)
    }

    pub fn thickness_law(&self, planform: &WingPlanform) -> Result<PiecewiseLinear, WingError> {
        self.thickness.law(planform)
    }

    /// Zero-lift angle measured from the root chord, `α_0ℓ(y) - ε_g(y)`.
    pub fn effective_zero_lift_law(
        &self,
        planform: &WingPlanform,
    ) -> Result<PiecewiseLinear, WingError> {
        Ok(self
            .zero_lift_law(planform)?
            .add_scaled(&self.twist_law(planform)?, -1.0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_root_to_tip_places_kink_on_straight_line() {
        let v = StationValues::root_to_tip(-0.04, -0.02, 0.25);
        assert_relative_eq!(v.kink, -0.035, epsilon = 1e-15);
    }

    #[test]
    fn test_twist_law_starts_from_root_value() {
        let planform = WingPlanform::new(5.0, 3.0, 1.0, 24.0, 8.0, 0.0, 0.0).unwrap();
        let laws = SpanwiseLaws {
            twist: StationValues::new(0.0, -0.01, -0.04),
            ..SpanwiseLaws::default()
        };
        let twist = laws.twist_law(&planform).unwrap();
        // A_eps,1 = 2 eps_k / b_k
        assert_relative_eq!(twist.segment(0).unwrap().slope, 2.0 * -0.01 / 8.0);
        assert_relative_eq!(twist.evaluate(12.0).unwrap(), -0.04, epsilon = 1e-15);
    }

    #[test]
    fn test_nonzero_root_twist_is_rejected() {
        let planform = WingPlanform::new(5.0, 3.0, 1.0, 24.0, 8.0, 0.0, 0.0).unwrap();
        let laws = SpanwiseLaws {
            twist: StationValues::new(0.035, -0.01, -0.04),
            ..SpanwiseLaws::default()
        };
        assert!(matches!(
            laws.twist_law(&planform),
            Err(WingError::InvalidGeometry(_))
        ));
        assert!(laws.effective_zero_lift_law(&planform).is_err());
    }

    #[test]
    fn test_effective_zero_lift_law() {
        let planform = WingPlanform::trapezoidal(2.0, 1.0, 10.0, 0.0).unwrap();
        let laws = SpanwiseLaws {
            twist: StationValues::new(0.0, -0.05, -0.05),
            zero_lift_angle: StationValues::uniform(-0.03),
            ..SpanwiseLaws::default()
        };
        let law = laws.effective_zero_lift_law(&planform).unwrap();
        assert_relative_eq!(law.evaluate(0.0).unwrap(), -0.03);
        assert_relative_eq!(law.evaluate(5.0).unwrap(), 0.02, epsilon = 1e-15);
    }
}
