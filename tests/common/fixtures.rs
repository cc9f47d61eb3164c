use std::path::PathBuf;

use tempfile::TempDir;
use wing_aero::database::{Table1D, Table3D};
use wing_aero::AeroCenterDatabase;

/// Straight-tapered, untwisted wing with uniform sections
pub const UNIFORM_WING_YAML: &str = r#"
name: uniform_wing
c_r: 2.0
c_t: 1.0
b: 10.0
Lambda_le_1: 20.0
alpha0l_r: -2.0
alpha0l_t: -2.0
cl_alpha_r: 6.0
cl_alpha_t: 6.0
cm_ac_r: -0.05
cm_ac_t: -0.05
t_c_r: 0.12
t_c_t: 0.12
mach: 0.4
"#;

/// Cranked, twisted wing
pub const CRANKED_WING_YAML: &str = r#"
name: cranked_wing
c_r: 6.0
c_k: 3.5
c_t: 1.5
b: 30.0
b_k: 10.0
Lambda_le_1: 30.0
Lambda_le_2: 25.0
eps_k: -1.0
eps_t: -3.0
alpha0l_r: -2.0
alpha0l_t: -1.0
cl_alpha_r: 6.1
cl_alpha_t: 6.4
cm_ac_r: -0.08
cm_ac_t: -0.06
mach: 0.5
"#;

/// Writes `contents` to `name` inside a fresh temporary directory.
///
/// The directory lives as long as the returned guard.
pub fn write_temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temporary directory");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("fixture file");
    (dir, path)
}

/// Aerodynamic-centre database whose tables are linear in every variable
pub fn synthetic_database() -> AeroCenterDatabase {
    let lambdas = vec![0.0, 0.25, 0.5, 0.75, 1.0];
    let grid = |v2: &[f64], v1: &[f64], f: &dyn Fn(f64, f64, f64) -> f64| {
        v2.iter()
            .map(|&x2| {
                v1.iter()
                    .map(|&x1| lambdas.iter().map(|&l| f(x2, x1, l)).collect())
                    .collect()
            })
            .collect::<Vec<Vec<Vec<f64>>>>()
    };
    let sweeps = vec![0.0, 20.0, 40.0, 60.0];
    let aspect_ratios = vec![2.0, 6.0, 10.0, 14.0];
    let x_compressible = vec![0.0, 1.0, 2.0, 3.0];
    let ar_tan_sweeps = vec![0.0, 4.0, 8.0, 12.0];

    AeroCenterDatabase {
        k1: Table1D {
            var_0: lambdas.clone(),
            data: lambdas.iter().map(|l| 1.0 + 0.4 * l).collect(),
        },
        k2: Table3D {
            var_0: lambdas.clone(),
            var_1: aspect_ratios.clone(),
            var_2: sweeps.clone(),
            data: grid(&sweeps, &aspect_ratios, &|s, a, l| {
                0.05 + s / 400.0 + a / 100.0 + 0.1 * l
            }),
        },
        xac_cr: Table3D {
            var_0: lambdas.clone(),
            var_1: ar_tan_sweeps.clone(),
            var_2: x_compressible.clone(),
            data: grid(&x_compressible, &ar_tan_sweeps, &|x, y, l| {
                0.3 + 0.2 * x + y / 50.0 + 0.05 * l
            }),
        },
    }
}

/// The synthetic database serialized to a JSON file
pub fn synthetic_database_file() -> (TempDir, PathBuf) {
    let json = synthetic_database()
        .to_json_string()
        .expect("database serializes");
    write_temp_file("aero_center.json", &json)
}
