//! Error types for the roster service
//!
//! - `DomainError`: faults raised by repositories, passed through the service untouched
//! - `ConfigError`: problems reading configuration from the environment

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
