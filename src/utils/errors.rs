use std::io;
use thiserror::Error;

use plotters::drawing::DrawingAreaErrorKind;

use crate::config::ConfigError;
use crate::database::DatabaseError;
use crate::laws::LawError;

#[derive(Error, Debug)]
pub enum WingError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Law error: {0}")]
    Law(#[from] LawError),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Degenerate wing: {0}")]
    Degenerate(String),

    #[error("Value outside the valid domain: {0}")]
    Domain(String),

    #[error("Plot error: {0}")]
    Plot(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for WingError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        WingError::Plot(err.to_string())
    }
}
