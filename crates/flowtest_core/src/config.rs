//! Configuration types for the harness.

use crate::error::{HarnessError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default file name looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "flowtest.toml";

/// Top-level harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Logging configuration applied by `before_all`.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Suite execution configuration.
    #[serde(default)]
    pub suite: SuiteConfig,
}

impl HarnessConfig {
    /// Load configuration from a file, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)
                .map_err(|e| HarnessError::ConfigError(format!("failed to parse config: {}", e)))
        } else {
            Ok(HarnessConfig::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            HarnessError::ConfigError(format!("failed to serialize config: {}", e))
        })?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    pub level: String,

    /// Emit ANSI colour codes (default: false).
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: false,
        }
    }
}

/// Suite execution configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SuiteConfig {
    /// Stop running scenarios after the first failure (default: false).
    pub fail_fast: bool,
}
