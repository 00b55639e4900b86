//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("History capacity must be between 1 and {max}, got {actual}")]
    InvalidCapacity { max: usize, actual: usize },

    #[error("Storage key must not contain path separators: {0}")]
    InvalidStorageKey(String),

    #[error("Tick interval must be between 1 and {max} ms, got {actual}")]
    InvalidTickInterval { max: u64, actual: u64 },

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
