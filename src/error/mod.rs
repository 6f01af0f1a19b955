//! Error handling for the deployment profile
//!
//! Building the configuration never fails. These errors cover everything
//! around it: loading `.env` files, looking up networks and exporting.

use std::fmt;

/// Result type alias for profile operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Requested network has no profile
    UnknownNetwork(String),
    /// `.env` file could not be parsed or read
    Env(String),
    /// Export to JSON/TOML failed
    Serialization(String),
    /// File I/O errors
    Io(String),
    /// Validation found at least one error-level issue
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownNetwork(name) => write!(f, "Unknown network: {name}"),
            ConfigError::Env(msg) => write!(f, "Environment file error: {msg}"),
            ConfigError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            ConfigError::Io(msg) => write!(f, "I/O error: {msg}"),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

impl From<dotenvy::Error> for ConfigError {
    fn from(err: dotenvy::Error) -> Self {
        ConfigError::Env(err.to_string())
    }
}
