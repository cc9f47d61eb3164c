use approx::assert_relative_eq;
use wing_aero::{
    database::{xac_cr_arguments, DatabaseError},
    utils::deg_to_rad,
    AeroCenterDatabase, WingAnalysis, WingConfig, WingError,
};

use crate::common::{
    synthetic_database, synthetic_database_file, write_temp_file, UNIFORM_WING_YAML,
};

#[test]
fn test_database_loads_from_json_and_yaml() {
    let (_dir, json_path) = synthetic_database_file();
    let from_json = AeroCenterDatabase::from_file(&json_path).unwrap();
    assert_tables_close(&from_json, &synthetic_database());

    let yaml = serde_yaml::to_string(&synthetic_database()).unwrap();
    let (_dir, yaml_path) = write_temp_file("aero_center.yml", &yaml);
    let from_yaml = AeroCenterDatabase::from_file(&yaml_path).unwrap();
    assert_tables_close(&from_yaml, &synthetic_database());
}

#[track_caller]
fn assert_tables_close(a: &AeroCenterDatabase, b: &AeroCenterDatabase) {
    assert_eq!(a.dimensions(), b.dimensions());
    let flatten = |db: &AeroCenterDatabase| -> Vec<f64> {
        let mut values = db.k1.data.clone();
        for table in [&db.k2, &db.xac_cr] {
            values.extend(table.var_2.iter().chain(&table.var_1).chain(&table.var_0));
            values.extend(table.data.iter().flatten().flatten());
        }
        values
    };
    for (x, y) in flatten(a).into_iter().zip(flatten(b)) {
        assert_relative_eq!(x, y, max_relative = 1e-14);
    }
}

#[test]
fn test_unknown_database_format_is_rejected() {
    let (_dir, path) = write_temp_file("aero_center.h5", "");
    assert!(matches!(
        AeroCenterDatabase::from_file(&path),
        Err(DatabaseError::Parse(_))
    ));
}

#[test]
fn test_dimensions_report_every_table() {
    let report = synthetic_database().dimensions().to_string();
    assert!(report.contains("shape of var_0: (5,)"));
    assert!(report.contains("shape of data: (4, 4, 5)"));
    assert_eq!(report.matches("/data").count(), 3);
}

#[test]
fn test_linear_charts_are_read_exactly() {
    let db = synthetic_database();
    let (lambda, sweep, ar, mach) = (0.5, 20.0, 100.0 / 15.0, 0.4);
    let estimate = db.aerodynamic_center(lambda, sweep, ar, mach).unwrap();

    let (x, y) = xac_cr_arguments(sweep, ar, mach).unwrap();
    let beta = (1.0_f64 - mach * mach).sqrt();
    assert_relative_eq!(x, deg_to_rad(sweep).tan() / beta, epsilon = 1e-12);

    let k1 = 1.0 + 0.4 * lambda;
    let k2 = 0.05 + sweep / 400.0 + ar / 100.0 + 0.1 * lambda;
    let xac_cr = 0.3 + 0.2 * x + y / 50.0 + 0.05 * lambda;
    assert_relative_eq!(estimate.k1, k1, epsilon = 1e-12);
    assert_relative_eq!(estimate.k2.value, k2, epsilon = 1e-12);
    assert_relative_eq!(estimate.xac_cr.value, xac_cr, epsilon = 1e-12);
    assert_relative_eq!(estimate.x_ac_fraction, k1 * (xac_cr - k2), epsilon = 1e-12);
}

#[test]
fn test_chart_aerodynamic_center_feeds_the_analysis() {
    let config = WingConfig::from_yaml_str(UNIFORM_WING_YAML).unwrap();
    let (analysis, estimate) =
        WingAnalysis::run_with_database(&config, &synthetic_database()).unwrap();

    // straight-tapered: the equivalent wing is the wing itself
    assert_relative_eq!(estimate.taper_ratio, 0.5, epsilon = 1e-12);
    assert_relative_eq!(estimate.sweep_le_deg, 20.0, epsilon = 1e-9);
    assert_relative_eq!(
        analysis.x_ac_fraction(),
        estimate.x_ac_fraction,
        epsilon = 1e-9
    );
    assert!(analysis.cm_ac_additional.value.abs() < 1e-12);
}

#[test]
fn test_out_of_range_arguments_are_errors() {
    let db = synthetic_database();
    assert!(matches!(
        db.aerodynamic_center(1.5, 20.0, 6.0, 0.3),
        Err(DatabaseError::OutOfRange { .. })
    ));
    assert!(matches!(
        db.aerodynamic_center(0.5, 20.0, 6.0, 1.0),
        Err(DatabaseError::OutOfRange { .. })
    ));

    let mut config = WingConfig::from_yaml_str(UNIFORM_WING_YAML).unwrap();
    config.mach = 1.2;
    assert!(matches!(
        WingAnalysis::run_with_database(&config, &db),
        Err(WingError::Database(DatabaseError::OutOfRange { .. }))
    ));
}
