use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::tables::{RawTable1D, RawTable3D, Table1D, Table3D};
use super::DatabaseError;
use crate::utils::{
    bracket, deg_to_rad, prandtl_glauert_beta, DATABASE_ENV_VAR, DATABASE_FILE_NAME,
};

pub const K1_TABLE: &str = "(x_bar_ac_w)_k1_vs_lambda";
pub const K2_TABLE: &str = "(x_bar_ac_w)_k2_vs_L_LE_(AR)_(lambda)";
pub const XAC_CR_TABLE: &str =
    "(x_bar_ac_w)_x'_ac_over_root_chord_vs_tan_(L_LE)_over_beta_(AR_times_tan_(L_LE))_(lambda)";

/// Wing aerodynamic-centre charts.
///
/// * `k1`: `K_1` against the taper ratio.
/// * `k2`: `K_2` with `var_2 = Λ_le` (deg), `var_1 = AR`, `var_0 = λ`.
/// * `xac_cr`: `X'_ac / c_r` with `var_2 = tan Λ_le / β`,
///   `var_1 = AR tan Λ_le`, `var_0 = λ`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAeroCenterDatabase")]
pub struct AeroCenterDatabase {
    pub k1: Table1D,
    pub k2: Table3D,
    pub xac_cr: Table3D,
}

#[derive(Debug, Deserialize)]
struct RawAeroCenterDatabase {
    k1: RawTable1D,
    k2: RawTable3D,
    xac_cr: RawTable3D,
}

impl TryFrom<RawAeroCenterDatabase> for AeroCenterDatabase {
    type Error = DatabaseError;

    fn try_from(raw: RawAeroCenterDatabase) -> Result<Self, Self::Error> {
        let database = Self {
            k1: raw.k1.checked(K1_TABLE)?,
            k2: raw.k2.checked(K2_TABLE)?,
            xac_cr: raw.xac_cr.checked(XAC_CR_TABLE)?,
        };
        database.log_dimensions();
        Ok(database)
    }
}

/// Value blended linearly between the two tabulated taper ratios that
/// bracket `taper_ratio`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaperBlend {
    pub lambda_a: f64,
    pub lambda_b: f64,
    pub value_a: f64,
    pub value_b: f64,
    pub taper_ratio: f64,
    pub value: f64,
    /// Slice index of `lambda_a`.
    pub j_lambda: usize,
}

/// Chart arguments and readings behind one aerodynamic-centre estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroCenterEstimate {
    pub taper_ratio: f64,
    pub sweep_le_deg: f64,
    pub aspect_ratio: f64,
    pub mach: f64,
    /// `tan Λ_le / sqrt(1 - M²)`
    pub x_compressible: f64,
    /// `AR tan Λ_le`
    pub ar_tan_sweep: f64,
    pub k1: f64,
    pub k2: TaperBlend,
    pub xac_cr: TaperBlend,
    /// `K_1 (X'_ac / c_r - K_2)`, fraction of the mean aerodynamic chord aft
    /// of its leading edge.
    pub x_ac_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableShape {
    pub name: &'static str,
    pub var_0: usize,
    pub var_1: Option<usize>,
    pub var_2: Option<usize>,
    pub data: Vec<usize>,
}

/// Shapes of the three tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseDimensions {
    pub tables: Vec<TableShape>,
}

impl fmt::Display for DatabaseDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, table) in self.tables.iter().enumerate() {
            if i > 0 {
                writeln!(f, "=====================================")?;
            }
            writeln!(f, "{}/var_0\nshape of var_0: ({},)", table.name, table.var_0)?;
            if let Some(n) = table.var_1 {
                writeln!(f, "{}/var_1\nshape of var_1: ({},)", table.name, n)?;
            }
            if let Some(n) = table.var_2 {
                writeln!(f, "{}/var_2\nshape of var_2: ({},)", table.name, n)?;
            }
            let dims: Vec<String> = table.data.iter().map(|d| d.to_string()).collect();
            let trailing = if dims.len() == 1 { "," } else { "" };
            writeln!(
                f,
                "{}/data\nshape of data: ({}{})",
                table.name,
                dims.join(", "),
                trailing
            )?;
        }
        Ok(())
    }
}

impl AeroCenterDatabase {
    /// Loads the database, JSON or YAML depending on the file extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        info!("Loading aerodynamic-centre database from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            other => Err(DatabaseError::Parse(format!(
                "unsupported database format {:?} for {}",
                other,
                path.display()
            ))),
        }
    }

    /// Loads the database from the default location, see [`default_path`].
    pub fn load_default() -> Result<Self, DatabaseError> {
        let path = default_path().ok_or_else(|| {
            DatabaseError::Parse(format!(
                "no database location: set {} or install {}",
                DATABASE_ENV_VAR, DATABASE_FILE_NAME
            ))
        })?;
        Self::from_file(path)
    }

    /// Parses and checks every table; shape errors name the offending table.
    pub fn from_json_str(contents: &str) -> Result<Self, DatabaseError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, DatabaseError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn to_json_string(&self) -> Result<String, DatabaseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), DatabaseError> {
        self.k1.validate(K1_TABLE)?;
        self.k2.validate(K2_TABLE)?;
        self.xac_cr.validate(XAC_CR_TABLE)?;
        self.log_dimensions();
        Ok(())
    }

    fn log_dimensions(&self) {
        debug!("Database dimensions:\n{}", self.dimensions());
    }

    pub fn dimensions(&self) -> DatabaseDimensions {
        let table_3d = |name, table: &Table3D| {
            let (n2, n1, n0) = table.shape();
            TableShape {
                name,
                var_0: n0,
                var_1: Some(n1),
                var_2: Some(n2),
                data: vec![n2, n1, n0],
            }
        };
        DatabaseDimensions {
            tables: vec![
                TableShape {
                    name: K1_TABLE,
                    var_0: self.k1.var_0.len(),
                    var_1: None,
                    var_2: None,
                    data: vec![self.k1.data.len()],
                },
                table_3d(K2_TABLE, &self.k2),
                table_3d(XAC_CR_TABLE, &self.xac_cr),
            ],
        }
    }

    pub fn k1(&self, taper_ratio: f64) -> Result<f64, DatabaseError> {
        self.k1.interpolate(K1_TABLE, taper_ratio)
    }

    /// `K_2` on the taper slice `j_lambda`.
    pub fn k2_slice(
        &self,
        j_lambda: usize,
        sweep_le_deg: f64,
        aspect_ratio: f64,
    ) -> Result<f64, DatabaseError> {
        self.k2
            .interpolate_slice(K2_TABLE, j_lambda, sweep_le_deg, aspect_ratio)
    }

    /// `X'_ac / c_r` on the taper slice `j_lambda`, at the chart abscissa
    /// `x = tan Λ_le / β` and parameter `ar_tan_sweep = AR tan Λ_le`.
    pub fn xac_cr_slice(
        &self,
        j_lambda: usize,
        x: f64,
        ar_tan_sweep: f64,
    ) -> Result<f64, DatabaseError> {
        self.xac_cr
            .interpolate_slice(XAC_CR_TABLE, j_lambda, x, ar_tan_sweep)
    }

    pub fn k2(
        &self,
        taper_ratio: f64,
        sweep_le_deg: f64,
        aspect_ratio: f64,
    ) -> Result<TaperBlend, DatabaseError> {
        blend(&self.k2, K2_TABLE, taper_ratio, |j| {
            self.k2_slice(j, sweep_le_deg, aspect_ratio)
        })
    }

    pub fn xac_cr(
        &self,
        taper_ratio: f64,
        sweep_le_deg: f64,
        aspect_ratio: f64,
        mach: f64,
    ) -> Result<TaperBlend, DatabaseError> {
        let (x, ar_tan_sweep) = xac_cr_arguments(sweep_le_deg, aspect_ratio, mach)?;
        blend(&self.xac_cr, XAC_CR_TABLE, taper_ratio, |j| {
            self.xac_cr_slice(j, x, ar_tan_sweep)
        })
    }

    /// Aerodynamic centre of a straight-tapered wing,
    /// `x̄_ac = K_1 (X'_ac / c_r - K_2)`.
    pub fn aerodynamic_center(
        &self,
        taper_ratio: f64,
        sweep_le_deg: f64,
        aspect_ratio: f64,
        mach: f64,
    ) -> Result<AeroCenterEstimate, DatabaseError> {
        let (x_compressible, ar_tan_sweep) = xac_cr_arguments(sweep_le_deg, aspect_ratio, mach)?;
        let k1 = self.k1(taper_ratio)?;
        let k2 = self.k2(taper_ratio, sweep_le_deg, aspect_ratio)?;
        let xac_cr = self.xac_cr(taper_ratio, sweep_le_deg, aspect_ratio, mach)?;
        let x_ac_fraction = k1 * (xac_cr.value - k2.value);
        info!(
            "K1 = {:.4}, K2 = {:.4}, X'ac/cr = {:.4} -> x_ac = {:.4} MAC",
            k1, k2.value, xac_cr.value, x_ac_fraction
        );
        Ok(AeroCenterEstimate {
            taper_ratio,
            sweep_le_deg,
            aspect_ratio,
            mach,
            x_compressible,
            ar_tan_sweep,
            k1,
            k2,
            xac_cr,
            x_ac_fraction,
        })
    }
}

/// Chart arguments `(tan Λ_le / β, AR tan Λ_le)`.
pub fn xac_cr_arguments(
    sweep_le_deg: f64,
    aspect_ratio: f64,
    mach: f64,
) -> Result<(f64, f64), DatabaseError> {
    let beta = prandtl_glauert_beta(mach).ok_or_else(|| DatabaseError::OutOfRange {
        table: XAC_CR_TABLE.to_string(),
        variable: "Mach".to_string(),
        value: mach,
        min: 0.0,
        max: 1.0,
    })?;
    let tan_sweep = deg_to_rad(sweep_le_deg).tan();
    Ok((tan_sweep / beta, aspect_ratio * tan_sweep))
}

fn blend<F>(
    table: &Table3D,
    name: &str,
    taper_ratio: f64,
    slice_value: F,
) -> Result<TaperBlend, DatabaseError>
where
    F: Fn(usize) -> Result<f64, DatabaseError>,
{
    let (j, t) = bracket(&table.var_0, taper_ratio).ok_or_else(|| DatabaseError::OutOfRange {
        table: name.to_string(),
        variable: "lambda".to_string(),
        value: taper_ratio,
        min: table.var_0.first().copied().unwrap_or(f64::NAN),
        max: table.var_0.last().copied().unwrap_or(f64::NAN),
    })?;
    let (lambda_a, lambda_b) = (table.var_0[j], table.var_0[j + 1]);
    let value_a = slice_value(j)?;
    let value_b = slice_value(j + 1)?;
    let value = value_a + (value_b - value_a) * t;
    debug!(
        "{}: lambda {:.3} between slices {} and {} -> {:.4}",
        name,
        taper_ratio,
        j,
        j + 1,
        value
    );
    Ok(TaperBlend {
        lambda_a,
        lambda_b,
        value_a,
        value_b,
        taper_ratio,
        value,
        j_lambda: j,
    })
}

/// Database location: `$WING_AERO_DATABASE` if set, otherwise the user data
/// directory.
pub fn default_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(DATABASE_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::data_dir().map(|dir| dir.join("wing-aero").join(DATABASE_FILE_NAME))
}
