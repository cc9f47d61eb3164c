use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{SpanwiseLaws, StationValues, WingPlanform};
use crate::utils::deg_to_rad;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid wing configuration: {0}")]
    ValidationError(String),
}

/// Flat wing description as written in YAML files.
///
/// Angles are in degrees, lengths in metres, lift-curve slopes per radian.
/// Kink values may be omitted, in which case they lie on the straight line
/// between root and tip.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawWingConfig {
    /// Wing identification
    pub name: String,

    /// Planform
    pub c_r: f64,
    #[serde(default)]
    pub c_k: Option<f64>,
    pub c_t: f64,
    pub b: f64,
    #[serde(default)]
    pub b_k: Option<f64>,
    pub Lambda_le_1: f64,
    #[serde(default)]
    pub Lambda_le_2: Option<f64>,

    /// Geometric twist, measured from the root chord; `eps_r` must be 0
    #[serde(default)]
    pub eps_r: f64,
    #[serde(default)]
    pub eps_k: Option<f64>,
    #[serde(default)]
    pub eps_t: f64,

    /// Section zero-lift angle
    #[serde(default)]
    pub alpha0l_r: f64,
    #[serde(default)]
    pub alpha0l_k: Option<f64>,
    #[serde(default)]
    pub alpha0l_t: f64,

    /// Section lift-curve slope
    pub cl_alpha_r: f64,
    #[serde(default)]
    pub cl_alpha_k: Option<f64>,
    pub cl_alpha_t: f64,

    /// Section pitching moment about the aerodynamic centre
    #[serde(default)]
    pub cm_ac_r: f64,
    #[serde(default)]
    pub cm_ac_k: Option<f64>,
    #[serde(default)]
    pub cm_ac_t: f64,

    /// Thickness ratio
    #[serde(default)]
    pub t_c_r: f64,
    #[serde(default)]
    pub t_c_k: Option<f64>,
    #[serde(default)]
    pub t_c_t: f64,

    /// Free-stream Mach number
    #[serde(default)]
    pub mach: f64,
}

impl RawWingConfig {
    pub fn kink_fraction(&self) -> f64 {
        self.b_k.unwrap_or(self.b) / self.b
    }

    fn stations(&self, root: f64, kink: Option<f64>, tip: f64, scale: f64) -> StationValues {
        let values = match kink {
            Some(kink) => StationValues::new(root, kink, tip),
            None => StationValues::root_to_tip(root, tip, self.kink_fraction()),
        };
        StationValues::new(values.root * scale, values.kink * scale, values.tip * scale)
    }
}

impl WingPlanform {
    pub fn from_raw(raw: &RawWingConfig) -> Result<Self, ConfigError> {
        let kink_span = raw.b_k.unwrap_or(raw.b);
        let kink_chord = raw
            .c_k
            .unwrap_or_else(|| raw.c_r + (raw.c_t - raw.c_r) * raw.kink_fraction());
        let sweep_inner = deg_to_rad(raw.Lambda_le_1);
        let sweep_outer = raw.Lambda_le_2.map(deg_to_rad).unwrap_or(sweep_inner);

        WingPlanform::new(
            raw.c_r,
            kink_chord,
            raw.c_t,
            raw.b,
            kink_span,
            sweep_inner,
            sweep_outer,
        )
        .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

impl SpanwiseLaws {
    pub fn from_raw(raw: &RawWingConfig) -> Result<Self, ConfigError> {
        if raw.eps_r != 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "twist is measured from the root chord, eps_r must be 0, got {}",
                raw.eps_r
            )));
        }
        let to_rad = deg_to_rad(1.0);
        let laws = SpanwiseLaws {
            twist: raw.stations(raw.eps_r, raw.eps_k, raw.eps_t, to_rad),
            zero_lift_angle: raw.stations(raw.alpha0l_r, raw.alpha0l_k, raw.alpha0l_t, to_rad),
            lift_slope: raw.stations(raw.cl_alpha_r, raw.cl_alpha_k, raw.cl_alpha_t, 1.0),
            cm_ac: raw.stations(raw.cm_ac_r, raw.cm_ac_k, raw.cm_ac_t, 1.0),
            thickness: raw.stations(raw.t_c_r, raw.t_c_k, raw.t_c_t, 1.0),
        };

        let slopes = [laws.lift_slope.root, laws.lift_slope.kink, laws.lift_slope.tip];
        if slopes.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "lift-curve slopes must be positive, got {:?}",
                slopes
            )));
        }
        Ok(laws)
    }
}
