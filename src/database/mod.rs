//! Tabulated wing aerodynamic-centre charts and their interpolation.

mod aero_center;
mod tables;

pub use aero_center::{
    default_path, xac_cr_arguments, AeroCenterDatabase, AeroCenterEstimate, DatabaseDimensions,
    TableShape, TaperBlend, K1_TABLE, K2_TABLE, XAC_CR_TABLE,
};
pub use tables::{Table1D, Table3D};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to read database: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse JSON database: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse YAML database: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{0}")]
    Parse(String),
    #[error("Inconsistent table shape: {0}")]
    Shape(String),
    #[error("{table}: {variable} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        table: String,
        variable: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{table}: index {index} out of range, {len} entries available")]
    InvalidIndex {
        table: String,
        index: usize,
        len: usize,
    },
}
