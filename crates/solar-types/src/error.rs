//! Error types for solar-track

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Rejections raised while validating a new fuel entry.
///
/// Any of these leaves the log untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field '{field}' is not a valid number: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Field '{field}' must not be negative: {value}")]
    NegativeValue { field: &'static str, value: f64 },

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Final reading {final_reading} is before initial reading {initial_reading}")]
    FinalBeforeInitial {
        initial_reading: f64,
        final_reading: f64,
    },

    #[error("Stored record {id} is inconsistent: {reason}")]
    InconsistentRecord { id: String, reason: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, Error>;
