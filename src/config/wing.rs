use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use super::loader::{ConfigError, RawWingConfig};
use crate::geometry::{SpanwiseLaws, StationValues, WingPlanform};
use crate::utils::deg_to_rad;

/// Full wing description: planform, span-wise section laws and flight Mach number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingConfig {
    /// Name of the wing, defaults to the type name.
    pub name: String,
    /// Preset the wing was built from, or `Custom` for file-defined wings.
    pub wing_type: WingType,
    /// Planform geometry.
    pub planform: WingPlanform,
    /// Section properties along the span.
    pub laws: SpanwiseLaws,
    /// Free-stream Mach number used for the aerodynamic-centre charts.
    pub mach: f64,
}

impl Default for WingConfig {
    /// The cranked `GenericTransport` wing is the default.
    fn default() -> Self {
        Self::generic_transport()
    }
}

impl WingConfig {
    /// Creates a wing configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - Either a programmed preset or a YAML file.
    ///
    /// # Returns
    /// The configuration, or an error if the file cannot be read or is invalid.
    pub fn new(source: WingSource) -> Result<Self, ConfigError> {
        match source {
            WingSource::Programmed(wing_type) => Ok(Self::from_programmed(wing_type)),
            WingSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(wing_type: WingType) -> Self {
        match wing_type {
            WingType::GenericTransport => Self {
                name: "GenericTransport".to_string(),
                wing_type: WingType::GenericTransport,
                planform: WingPlanform {
                    root_chord: 7.0,
                    kink_chord: 4.2,
                    tip_chord: 1.6,
                    span: 34.0,
                    kink_span: 12.0,
                    sweep_le_inner: deg_to_rad(30.0),
                    sweep_le_outer: deg_to_rad(27.0),
                },
                laws: SpanwiseLaws {
                    twist: StationValues::new(0.0, deg_to_rad(-1.5), deg_to_rad(-3.0)),
                    zero_lift_angle: StationValues::new(
                        deg_to_rad(-2.5),
                        deg_to_rad(-2.2),
                        deg_to_rad(-2.0),
                    ),
                    lift_slope: StationValues::new(6.2, 6.3, 6.4),
                    cm_ac: StationValues::new(-0.09, -0.085, -0.08),
                    thickness: StationValues::new(0.15, 0.12, 0.10),
                },
                mach: 0.3,
            },
            WingType::Trainer => Self {
                name: "Trainer".to_string(),
                wing_type: WingType::Trainer,
                planform: WingPlanform {
                    root_chord: 1.9,
                    kink_chord: 1.1,
                    tip_chord: 1.1,
                    span: 10.0,
                    kink_span: 10.0,
                    sweep_le_inner: deg_to_rad(2.0),
                    sweep_le_outer: deg_to_rad(2.0),
                },
                laws: SpanwiseLaws {
                    twist: StationValues::new(0.0, deg_to_rad(-2.0), deg_to_rad(-2.0)),
                    zero_lift_angle: StationValues::new(
                        deg_to_rad(-2.0),
                        deg_to_rad(-1.5),
                        deg_to_rad(-1.5),
                    ),
                    lift_slope: StationValues::new(6.0, 5.9, 5.9),
                    cm_ac: StationValues::uniform(-0.04),
                    thickness: StationValues::new(0.15, 0.12, 0.12),
                },
                mach: 0.2,
            },
            WingType::Custom(name) => Self {
                name: name.clone(),
                wing_type: WingType::Custom(name),
                ..Self::from_programmed(WingType::Trainer)
            },
        }
    }

    /// Reads a wing configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading wing configuration from {}", path.display());
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&file_contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let raw_config: RawWingConfig = serde_yaml::from_str(contents)?;
        Self::from_raw_config(raw_config)
    }

    /// Maps the flat file layout onto the structured configuration.
    pub fn from_raw_config(raw: RawWingConfig) -> Result<Self, ConfigError> {
        if !raw.mach.is_finite() || !(0.0..1.0).contains(&raw.mach) {
            return Err(ConfigError::ValidationError(format!(
                "Mach number must be in [0, 1), got {}",
                raw.mach
            )));
        }
        Ok(Self {
            name: raw.name.clone(),
            wing_type: WingType::Custom(raw.name.clone()),
            planform: WingPlanform::from_raw(&raw)?,
            laws: SpanwiseLaws::from_raw(&raw)?,
            mach: raw.mach,
        })
    }

    pub fn generic_transport() -> Self {
        Self::from_programmed(WingType::GenericTransport)
    }

    pub fn trainer() -> Self {
        Self::from_programmed(WingType::Trainer)
    }
}

/// Source for a wing configuration.
#[derive(Debug, Clone)]
pub enum WingSource {
    Programmed(WingType),
    File(PathBuf),
}

impl WingSource {
    /// Preset name or, failing that, a path to a YAML file.
    pub fn parse(arg: &str) -> Self {
        match WingType::from_name(arg) {
            Some(wing_type) => WingSource::Programmed(wing_type),
            None => WingSource::File(PathBuf::from(arg)),
        }
    }
}

/// Enumeration of the programmed wings.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum WingType {
    GenericTransport,
    Trainer,
    Custom(String),
}

impl WingType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "generic_transport" | "generictransport" => Some(WingType::GenericTransport),
            "trainer" => Some(WingType::Trainer),
            _ => None,
        }
    }
}
