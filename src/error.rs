//! Error types and handling for emojifind

use crate::dataset::DatasetError;
use crate::search::{CostModelError, ScaleError};
use serde::Serialize;
use std::fmt;

/// Application error types
#[derive(Debug, Serialize)]
pub enum AppError {
    InvalidInput(String),
    InvalidConfig(String),
    DatasetNotFound(String),
    DatasetParseFailed(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            AppError::DatasetNotFound(msg) => write!(f, "Dataset not found: {}", msg),
            AppError::DatasetParseFailed(msg) => write!(f, "Dataset parse failed: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::InvalidConfig(_) => "invalid_config",
            AppError::DatasetNotFound(_) => "dataset_not_found",
            AppError::DatasetParseFailed(_) => "dataset_parse_failed",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// JSON error object: `{"error": {"code": ..., "message": ...}}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        })
    }

    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidInput(_) | AppError::InvalidConfig(_) => 1,
            AppError::DatasetNotFound(_) => 3,
            AppError::DatasetParseFailed(_) => 4,
            AppError::Internal(_) => 5,
        }
    }
}

impl From<DatasetError> for AppError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                AppError::DatasetNotFound(io.to_string())
            }
            DatasetError::Io(io) => AppError::Internal(io.to_string()),
            other => AppError::DatasetParseFailed(other.to_string()),
        }
    }
}

impl From<CostModelError> for AppError {
    fn from(err: CostModelError) -> Self {
        AppError::InvalidConfig(err.to_string())
    }
}

impl From<ScaleError> for AppError {
    fn from(err: ScaleError) -> Self {
        AppError::InvalidConfig(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Reject thresholds the matcher cannot use
pub fn validate_threshold(threshold: f64) -> Result<(), AppError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(AppError::InvalidConfig(format!(
            "Threshold must be finite and non-negative, got {}",
            threshold
        )));
    }
    Ok(())
}

pub fn validate_query(query: &str) -> Result<(), AppError> {
    if query.chars().count() > 500 {
        return Err(AppError::InvalidInput(
            "Query too long, maximum 500 characters".to_string(),
        ));
    }
    Ok(())
}
