//! Tool configuration (recolour.yaml).
//!
//! The config file holds default strengths and an optional seed. Command
//! line flags take precedence over anything set here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RecolourError, Result};
use crate::randomize::Strengths;

/// Name of the config file looked up next to documents.
pub const CONFIG_FILENAME: &str = "recolour.yaml";

/// Configuration loaded from recolour.yaml.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Per-channel strengths, `0` to `10`.
    pub strengths: Strengths,

    /// Seed for reproducible runs. Fresh entropy is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Config {
    /// Load config from a recolour.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RecolourError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file is a valid, all-default config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| RecolourError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;

        for (channel, value) in config.strengths.channels() {
            if !value.is_finite() {
                return Err(RecolourError::Parse {
                    message: format!(
                        "Invalid config: {} strength {} is not a finite number",
                        channel, value
                    ),
                    help: Some("Use a number from 0 to 10".to_string()),
                });
            }
        }

        Ok(config)
    }

    /// Find a config file, checking each directory in order.
    pub fn find<'a>(dirs: impl IntoIterator<Item = &'a Path>) -> Option<PathBuf> {
        dirs.into_iter()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|path| path.is_file())
    }

    /// Render the config as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| RecolourError::Parse {
            message: format!("Failed to encode config: {}", e),
            help: None,
        })
    }
}
