//! Error types for `orderdash`
//!
//! Only the I/O edges can fail: reading the dataset, decoding it and loading
//! configuration. Aggregation and table queries are total.

use std::path::PathBuf;

/// Main error type for `orderdash`
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Dataset file could not be read
    #[error("Failed to read order dataset {}: {source}", path.display())]
    DatasetRead {
        /// Path of the dataset
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// JSON decoding or encoding error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    #[error("Validation error: {field} - {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors.errors().keys().map(ToString::to_string).collect();
        fields.sort();
        let field = fields.join(", ");

        Self::Validation {
            field,
            message: errors.to_string(),
        }
    }
}
