//! Core error types for eterna-core.
//!
//! Persistence, configuration and validation failures are modeled with
//! thiserror. Game engines never return these: an invalid move is a no-op and
//! a failed score write is logged, so errors only surface from the store,
//! the config file and explicit validation (journal drafts).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for eterna-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Key-value store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Store is locked")]
    Locked,

    /// The data directory could not be resolved or created
    #[error("Data directory unavailable at {path}: {message}")]
    DataDir { path: PathBuf, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required text field is blank
    #[error("'{field}' must not be empty")]
    EmptyField { field: String },

    /// Unknown name for an enumerated value
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: String, value: String },
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, _msg)
                if code.code == rusqlite::ErrorCode::DatabaseLocked =>
            {
                StoreError::Locked
            }
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Store(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_errors_map_to_query_failed() {
        let err: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, StoreError::QueryFailed(_)));
    }

    #[test]
    fn every_core_error_comes_from_a_source_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let json = serde_json::from_str::<u32>("x").unwrap_err();
        let errors = [
            CoreError::from(rusqlite::Error::QueryReturnedNoRows),
            CoreError::from(ConfigError::UnknownKey("games.nope".into())),
            CoreError::from(ValidationError::UnknownVariant {
                kind: "mood".into(),
                value: "grumpy".into(),
            }),
            CoreError::from(io),
            CoreError::from(json),
        ];
        for err in &errors {
            match err {
                CoreError::Store(_)
                | CoreError::Config(_)
                | CoreError::Validation(_)
                | CoreError::Io(_)
                | CoreError::Json(_) => {}
            }
        }
        assert_eq!(errors[2].to_string(), "Validation error: Unknown mood: 'grumpy'");
    }

    #[test]
    fn validation_error_message_names_field() {
        let err = CoreError::from(ValidationError::EmptyField {
            field: "response".into(),
        });
        assert_eq!(err.to_string(), "Validation error: 'response' must not be empty");
    }
}
