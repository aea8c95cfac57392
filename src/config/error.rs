//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::fuzzy::UnknownTiePolicy;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// A numeric or boolean variable could not be parsed.
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },

    /// A parsed value violates its allowed range.
    #[error("{name} = {value} is out of range: expected {expected}")]
    OutOfRange {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error(transparent)]
    InvalidTiePolicy(#[from] UnknownTiePolicy),

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },
}
