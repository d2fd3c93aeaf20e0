//! Error types for rule configuration
//!
//! Classification and reply parsing are total and never fail; only loading
//! and compiling rule tables can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or compiling rule tables
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Rule file could not be read
    #[error("Failed to read rule file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule file is not valid TOML for the rule schema
    #[error("Failed to parse rule configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A pattern in the rule tables does not compile
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Rule values are out of range or inconsistent
    #[error("Invalid rule configuration: {0}")]
    Validation(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
