use wing_aero::{
    display::analysis_report,
    plot::{
        multiplot_k2, multiplot_xac_cr, plot_interpolate_k1, plot_interpolate_k2,
        plot_interpolate_xac_cr, plot_planform, plot_wing_functions,
    },
    WingAnalysis, WingConfig,
};

use crate::common::{synthetic_database, CRANKED_WING_YAML};

#[test]
fn test_report_includes_chart_derivation() {
    let config = WingConfig::from_yaml_str(CRANKED_WING_YAML).unwrap();
    let db = synthetic_database();
    let (analysis, estimate) = WingAnalysis::run_with_database(&config, &db).unwrap();

    let plain = analysis_report(&config, &analysis, None).unwrap().into_string();
    let full = analysis_report(&config, &analysis, Some(&estimate))
        .unwrap()
        .into_string();
    assert!(full.len() > plain.len());
    assert!(full.contains("K_1"));
    assert!(!plain.contains("K_1"));
    assert!(full.ends_with("\\end{equation}"));
}

#[test]
fn test_full_plot_set_is_written() {
    let config = WingConfig::from_yaml_str(CRANKED_WING_YAML).unwrap();
    let db = synthetic_database();
    let (analysis, estimate) = WingAnalysis::run_with_database(&config, &db).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path();

    plot_planform(&config, &analysis, &out.join("planform.svg")).unwrap();
    plot_wing_functions(&config, &out.join("functions.svg")).unwrap();
    multiplot_k2(&db, &out.join("k2.svg")).unwrap();
    multiplot_xac_cr(&db, &out.join("xac_cr.svg")).unwrap();
    plot_interpolate_k1(&db, &estimate, &out.join("k1_interp.svg")).unwrap();
    plot_interpolate_k2(&db, &estimate, &out.join("k2_interp.svg")).unwrap();
    plot_interpolate_xac_cr(&db, &estimate, &out.join("xac_interp.svg")).unwrap();

    let written = std::fs::read_dir(out).unwrap().count();
    assert_eq!(written, 7);
}
