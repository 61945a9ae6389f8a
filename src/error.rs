//! Error types for growth projections

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrowthError {
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GrowthError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        GrowthError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the projection inputs themselves
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, GrowthError::InvalidInput { .. })
    }
}
