use std::path::PathBuf;

use approx::assert_relative_eq;
use wing_aero::{
    config::ConfigError, utils::deg_to_rad, WingConfig, WingSource, WingType,
};

use crate::common::{write_temp_file, CRANKED_WING_YAML, UNIFORM_WING_YAML};

#[test]
fn test_wing_loads_from_yaml_file() {
    let (_dir, path) = write_temp_file("wing.yaml", CRANKED_WING_YAML);
    let config = WingConfig::new(WingSource::File(path)).unwrap();

    assert_eq!(config.name, "cranked_wing");
    assert!(config.planform.is_cranked());
    assert_relative_eq!(config.planform.kink_station(), 5.0);
    assert_relative_eq!(config.planform.sweep_le_inner, deg_to_rad(30.0));
    assert_relative_eq!(config.laws.twist.tip, deg_to_rad(-3.0), epsilon = 1e-12);
}

#[test]
fn test_omitted_kink_makes_a_trapezoidal_wing() {
    let config = WingConfig::from_yaml_str(UNIFORM_WING_YAML).unwrap();
    assert!(!config.planform.is_cranked());
    assert_relative_eq!(config.planform.taper_ratio(), 0.5);
    assert_relative_eq!(config.planform.sweep_le_outer, config.planform.sweep_le_inner);
}

#[test]
fn test_source_selects_preset_or_file() {
    assert!(matches!(
        WingSource::parse("trainer"),
        WingSource::Programmed(WingType::Trainer)
    ));
    assert!(matches!(
        WingSource::parse("Generic_Transport"),
        WingSource::Programmed(WingType::GenericTransport)
    ));
    match WingSource::parse("wings/glider.yaml") {
        WingSource::File(path) => assert_eq!(path, PathBuf::from("wings/glider.yaml")),
        other => panic!("expected a file source, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_a_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = WingConfig::new(WingSource::File(dir.path().join("absent.yaml")));
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_malformed_yaml_is_rejected() {
    let result = WingConfig::from_yaml_str("name: [unterminated");
    assert!(matches!(result, Err(ConfigError::YamlError(_))));

    let no_slope = UNIFORM_WING_YAML.replace("cl_alpha_t: 6.0", "cl_alpha_t: 0.0");
    assert!(matches!(
        WingConfig::from_yaml_str(&no_slope),
        Err(ConfigError::ValidationError(_))
    ));
}
