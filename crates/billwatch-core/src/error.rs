//! Error types for billwatch

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    #[error("Invalid bill type: {0}")]
    InvalidBillType(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
