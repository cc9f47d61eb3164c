use tracing::{debug, info};

use super::result::IntegralResult;
use super::wing;
use crate::config::WingConfig;
use crate::database::{AeroCenterDatabase, AeroCenterEstimate};
use crate::geometry::{
    aspect_ratio, mean_aerodynamic_chord_trapezoidal, x_le_mac_trapezoidal, EquivalentWing,
    SpanwiseLaws, WingPlanform,
};
use crate::utils::{rad_to_deg, WingError};

/// Aggregate quantities of one wing, computed in dependency order.
#[derive(Debug, Clone, PartialEq)]
pub struct WingAnalysis {
    pub reference_area: IntegralResult,
    pub aspect_ratio: f64,
    pub mean_aerodynamic_chord: IntegralResult,
    pub x_le_mac: IntegralResult,
    pub y_mac: IntegralResult,
    pub zero_lift_angle: IntegralResult,
    pub mean_zero_lift_angle: IntegralResult,
    pub mean_lift_slope: IntegralResult,
    pub mean_thickness: IntegralResult,
    /// Wing aerodynamic centre, measured aft of the root leading edge (m).
    pub x_ac: f64,
    pub cm_ac_basic: IntegralResult,
    pub cm_ac_additional: IntegralResult,
}

impl WingAnalysis {
    /// Runs the chain with the aerodynamic centre at the quarter of the
    /// mean aerodynamic chord.
    pub fn run(planform: &WingPlanform, laws: &SpanwiseLaws) -> Result<Self, WingError> {
        Self::run_with_aerodynamic_center(planform, laws, None)
    }

    pub fn from_config(config: &WingConfig) -> Result<Self, WingError> {
        info!("Analysing wing {}", config.name);
        Self::run(&config.planform, &config.laws)
    }

    pub fn run_with_aerodynamic_center(
        planform: &WingPlanform,
        laws: &SpanwiseLaws,
        x_ac: Option<f64>,
    ) -> Result<Self, WingError> {
        planform.validate()?;

        let reference_area = wing::reference_area(planform)?;
        let s = reference_area.value;
        info!("S = {:.4} m^2", s);

        let aspect_ratio = aspect_ratio(planform.span, s);
        info!("AR = {:.4}", aspect_ratio);

        let mean_aerodynamic_chord = wing::mean_aerodynamic_chord(planform, s)?;
        let mac = mean_aerodynamic_chord.value;
        let x_le_mac = wing::x_le_mac(planform, s)?;
        let y_mac = wing::y_mac(planform, s)?;
        info!(
            "MAC = {:.4} m at X_le = {:.4} m, Y = {:.4} m",
            mac, x_le_mac.value, y_mac.value
        );

        let zero_lift_angle = wing::zero_lift_angle(planform, laws, s)?;
        let mean_zero_lift_angle = wing::mean_zero_lift_angle(planform, laws, s)?;
        info!(
            "alpha_0L = {:.4} deg, mean section alpha_0l = {:.4} deg",
            rad_to_deg(zero_lift_angle.value),
            rad_to_deg(mean_zero_lift_angle.value)
        );

        let mean_lift_slope = wing::mean_lift_slope(planform, laws, s)?;
        let mean_thickness = wing::mean_thickness(planform, laws, s)?;
        info!(
            "mean Cl_alpha = {:.4} 1/rad, mean t/c = {:.4}",
            mean_lift_slope.value, mean_thickness.value
        );

        let x_ac = match x_ac {
            Some(x_ac) => x_ac,
            None => {
                debug!("No aerodynamic centre given, using the quarter of the MAC");
                x_le_mac.value + 0.25 * mac
            }
        };
        if !x_ac.is_finite() {
            return Err(WingError::Domain(format!(
                "aerodynamic centre must be finite, got {}",
                x_ac
            )));
        }

        let cm_ac_basic = wing::cm_ac_basic(planform, laws, s, mac)?;
        let cm_ac_additional = wing::cm_ac_additional(
            planform,
            laws,
            s,
            mac,
            zero_lift_angle.value,
            x_ac,
        )?;
        info!(
            "Cm_ac = {:.5} (basic {:.5}, additional {:.5}) about X_ac = {:.4} m",
            cm_ac_basic.value + cm_ac_additional.value,
            cm_ac_basic.value,
            cm_ac_additional.value,
            x_ac
        );

        Ok(Self {
            reference_area,
            aspect_ratio,
            mean_aerodynamic_chord,
            x_le_mac,
            y_mac,
            zero_lift_angle,
            mean_zero_lift_angle,
            mean_lift_slope,
            mean_thickness,
            x_ac,
            cm_ac_basic,
            cm_ac_additional,
        })
    }

    /// Runs the chain about the aerodynamic centre read from the charts.
    ///
    /// Cranked wings enter the charts through their equivalent
    /// straight-tapered wing; the chart position is measured from the
    /// leading edge of that wing's mean aerodynamic chord.
    pub fn run_with_database(
        config: &WingConfig,
        database: &AeroCenterDatabase,
    ) -> Result<(Self, AeroCenterEstimate), WingError> {
        let planform = &config.planform;
        let area = wing::reference_area(planform)?.value;
        let equivalent = EquivalentWing::from_planform(planform)?;
        let estimate = database.aerodynamic_center(
            equivalent.taper_ratio,
            rad_to_deg(equivalent.sweep_le),
            aspect_ratio(planform.span, area),
            config.mach,
        )?;

        let mac =
            mean_aerodynamic_chord_trapezoidal(equivalent.root_chord, equivalent.taper_ratio);
        let x_le_mac = equivalent.x_le_root
            + x_le_mac_trapezoidal(planform.span, equivalent.taper_ratio, equivalent.sweep_le);
        let x_ac = x_le_mac + estimate.x_ac_fraction * mac;
        info!(
            "Chart aerodynamic centre at {:.4} m ({:.4} of the equivalent MAC)",
            x_ac, estimate.x_ac_fraction
        );

        let analysis = Self::run_with_aerodynamic_center(planform, &config.laws, Some(x_ac))?;
        Ok((analysis, estimate))
    }

    /// Wing pitching-moment coefficient about the aerodynamic centre.
    pub fn cm_ac(&self) -> f64 {
        self.cm_ac_basic.value + self.cm_ac_additional.value
    }

    /// Aerodynamic centre as a fraction of the mean aerodynamic chord,
    /// measured from its leading edge.
    pub fn x_ac_fraction(&self) -> f64 {
        (self.x_ac - self.x_le_mac.value) / self.mean_aerodynamic_chord.value
    }

    pub fn results(&self) -> [&IntegralResult; 10] {
        [
            &self.reference_area,
            &self.mean_aerodynamic_chord,
            &self.x_le_mac,
            &self.y_mac,
            &self.zero_lift_angle,
            &self.mean_zero_lift_angle,
            &self.mean_lift_slope,
            &self.mean_thickness,
            &self.cm_ac_basic,
            &self.cm_ac_additional,
        ]
    }
}
