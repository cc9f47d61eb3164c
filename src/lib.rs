pub mod config;
pub mod database;
pub mod display;
pub mod geometry;
pub mod integrals;
pub mod laws;
pub mod plot;
pub mod utils;

pub use config::{WingConfig, WingSource, WingType};
pub use database::{AeroCenterDatabase, AeroCenterEstimate};
pub use geometry::{SpanwiseLaws, WingPlanform};
pub use integrals::{IntegralResult, Quantity, WingAnalysis};
pub use laws::PiecewiseLinear;
pub use utils::errors::WingError;
