//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use crate::route::{Budgets, Target};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Classification configuration
    #[serde(default)]
    pub classification: ClassificationConfig,

    /// Routing configuration
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Classification-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Rule file replacing the embedded tables
    pub rules: Option<PathBuf>,
}

/// Routing-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Reply budget for word inputs
    pub word_max_tokens: u32,

    /// Reply budget for sentence inputs
    pub sentence_max_tokens: u32,

    /// Target language when none is given
    pub default_target: Target,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        let budgets = Budgets::default();
        Self {
            word_max_tokens: budgets.word_max_tokens,
            sentence_max_tokens: budgets.sentence_max_tokens,
            default_target: Target::default(),
        }
    }
}

impl RoutingConfig {
    pub fn budgets(&self) -> Budgets {
        Budgets {
            word_max_tokens: self.word_max_tokens,
            sentence_max_tokens: self.sentence_max_tokens,
        }
    }
}

impl CliConfig {
    /// Load from `path`, or the defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        if config.routing.word_max_tokens == 0 || config.routing.sentence_max_tokens == 0 {
            return Err(CliError::ConfigError("token budgets must be non-zero".to_string()).into());
        }

        log::debug!("Loaded CLI config from {}", path.display());
        Ok(config)
    }
}
