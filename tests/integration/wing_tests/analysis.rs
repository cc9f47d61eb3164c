use approx::assert_relative_eq;
use wing_aero::{
    geometry::{mean_aerodynamic_chord_trapezoidal, x_le_mac_trapezoidal, y_mac_trapezoidal},
    utils::deg_to_rad,
    WingAnalysis, WingConfig,
};

use crate::common::{assert_integral_consistent, CRANKED_WING_YAML, UNIFORM_WING_YAML};

#[test]
fn test_trapezoidal_wing_matches_closed_forms() {
    let config = WingConfig::from_yaml_str(UNIFORM_WING_YAML).unwrap();
    let analysis = WingAnalysis::from_config(&config).unwrap();

    assert_relative_eq!(analysis.reference_area.value, 15.0, epsilon = 1e-12);
    assert_relative_eq!(analysis.aspect_ratio, 100.0 / 15.0, epsilon = 1e-12);
    assert_relative_eq!(
        analysis.mean_aerodynamic_chord.value,
        mean_aerodynamic_chord_trapezoidal(2.0, 0.5),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        analysis.y_mac.value,
        y_mac_trapezoidal(10.0, 0.5),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        analysis.x_le_mac.value,
        x_le_mac_trapezoidal(10.0, 0.5, deg_to_rad(20.0)),
        epsilon = 1e-12
    );
    assert_relative_eq!(analysis.y_mac.value, 20.0 / 9.0, epsilon = 1e-12);
}

#[test]
fn test_uniform_sections_carry_over_to_the_wing() {
    let config = WingConfig::from_yaml_str(UNIFORM_WING_YAML).unwrap();
    let analysis = WingAnalysis::from_config(&config).unwrap();

    // no twist: wing and section zero-lift angles coincide
    assert_relative_eq!(
        analysis.zero_lift_angle.value,
        deg_to_rad(-2.0),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        analysis.mean_zero_lift_angle.value,
        analysis.zero_lift_angle.value,
        epsilon = 1e-12
    );
    assert_relative_eq!(analysis.mean_lift_slope.value, 6.0, epsilon = 1e-12);
    assert_relative_eq!(analysis.mean_thickness.value, 0.12, epsilon = 1e-12);

    assert_relative_eq!(analysis.cm_ac_basic.value, -0.05, epsilon = 1e-12);
    assert_relative_eq!(analysis.cm_ac_additional.value, 0.0, epsilon = 1e-12);
    assert_relative_eq!(analysis.cm_ac(), -0.05, epsilon = 1e-12);
}

#[test]
fn test_cranked_wing_results_are_consistent() {
    let config = WingConfig::from_yaml_str(CRANKED_WING_YAML).unwrap();
    let analysis = WingAnalysis::from_config(&config).unwrap();

    assert_relative_eq!(
        analysis.reference_area.value,
        config.planform.trapezoidal_area(),
        epsilon = 1e-10
    );
    for result in analysis.results() {
        assert_integral_consistent(result);
        assert!(result.value.is_finite(), "{} is not finite", result.quantity);
    }

    // three laws break at the kink, so the kink splits every integral
    let kink = config.planform.kink_station();
    assert!(analysis
        .reference_area
        .segments
        .iter()
        .any(|s| (s.upper - kink).abs() < 1e-12));
}

/// Value at `y` of the law through root, kink (`y = 5`) and tip (`y = 15`)
/// values of the cranked fixture wing.
fn cranked_station_value(y: f64, [root, kink, tip]: [f64; 3]) -> f64 {
    if y <= 5.0 {
        root + (kink - root) * y / 5.0
    } else {
        kink + (tip - kink) * (y - 5.0) / 10.0
    }
}

/// Three-point Gauss-Legendre rule on each panel, exact up to degree five.
fn cranked_quadrature(f: impl Fn(f64) -> f64) -> f64 {
    let nodes = [-(0.6f64.sqrt()), 0.0, 0.6f64.sqrt()];
    let weights = [5.0 / 9.0, 8.0 / 9.0, 5.0 / 9.0];
    [(0.0, 5.0), (5.0, 15.0)]
        .iter()
        .map(|&(a, b): &(f64, f64)| {
            let (mid, half) = (0.5 * (a + b), 0.5 * (b - a));
            nodes
                .iter()
                .zip(weights)
                .map(|(t, w)| w * half * f(mid + half * t))
                .sum::<f64>()
        })
        .sum()
}

#[test]
fn test_cranked_wing_matches_quadrature() {
    let config = WingConfig::from_yaml_str(CRANKED_WING_YAML).unwrap();
    let analysis = WingAnalysis::from_config(&config).unwrap();

    let (t1, t2) = (deg_to_rad(30.0).tan(), deg_to_rad(25.0).tan());
    let chord = |y: f64| cranked_station_value(y, [6.0, 3.5, 1.5]);
    let x_le = |y: f64| cranked_station_value(y, [0.0, 5.0 * t1, 5.0 * t1 + 10.0 * t2]);
    let twist = |y: f64| deg_to_rad(cranked_station_value(y, [0.0, -1.0, -3.0]));
    // kink values left out of the file sit on the root-to-tip line
    let alpha_0l = |y: f64| deg_to_rad(-2.0 + y / 15.0);
    let cl_alpha = |y: f64| 6.1 + 0.3 * y / 15.0;
    let cm_ac = |y: f64| -0.08 + 0.02 * y / 15.0;

    let area = 2.0 * cranked_quadrature(chord);
    let mac = 2.0 / area * cranked_quadrature(|y| chord(y).powi(2));
    let x_le_mac = 2.0 / area * cranked_quadrature(|y| x_le(y) * chord(y));
    let alpha_0 = 2.0 / area * cranked_quadrature(|y| (alpha_0l(y) - twist(y)) * chord(y));
    let mean_alpha_0l = 2.0 / area * cranked_quadrature(|y| alpha_0l(y) * chord(y));
    let cm_basic = 2.0 / (area * mac) * cranked_quadrature(|y| cm_ac(y) * chord(y).powi(2));
    let x_ac = x_le_mac + 0.25 * mac;
    let cm_additional = 2.0 / (area * mac)
        * cranked_quadrature(|y| {
            chord(y)
                * cl_alpha(y)
                * (alpha_0 - (alpha_0l(y) - twist(y)))
                * (x_ac - (x_le(y) + 0.25 * chord(y)))
        });

    assert_relative_eq!(analysis.reference_area.value, area, epsilon = 1e-10);
    assert_relative_eq!(analysis.mean_aerodynamic_chord.value, mac, epsilon = 1e-12);
    assert_relative_eq!(analysis.x_le_mac.value, x_le_mac, epsilon = 1e-12);
    assert_relative_eq!(analysis.x_ac, x_ac, epsilon = 1e-12);
    assert_relative_eq!(analysis.zero_lift_angle.value, alpha_0, epsilon = 1e-12);
    assert_relative_eq!(analysis.mean_zero_lift_angle.value, mean_alpha_0l, epsilon = 1e-12);
    assert_relative_eq!(analysis.cm_ac_basic.value, cm_basic, epsilon = 1e-12);
    assert_relative_eq!(analysis.cm_ac_additional.value, cm_additional, epsilon = 1e-12);

    // twist and varying sections make every term distinct
    assert!((alpha_0 - mean_alpha_0l).abs() > 1e-3);
    assert!(cm_additional.abs() > 1e-3);
}

#[test]
fn test_washout_shifts_lift_inboard() {
    let config = WingConfig::from_yaml_str(CRANKED_WING_YAML).unwrap();
    let mut untwisted = config.clone();
    untwisted.laws.twist = Default::default();

    let twisted = WingAnalysis::from_config(&config).unwrap();
    let plain = WingAnalysis::from_config(&untwisted).unwrap();

    // washout raises alpha_0L measured from the root chord
    assert!(twisted.zero_lift_angle.value > plain.zero_lift_angle.value);
    assert_eq!(twisted.reference_area, plain.reference_area);
    assert_eq!(twisted.cm_ac_basic, plain.cm_ac_basic);
}
