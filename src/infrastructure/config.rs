// src/infrastructure/config.rs
use crate::constants::{CONFIG_DIR_NAME, DEFAULT_PROMPT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Optional TOML configuration for the terminal front-end.
///
/// Only presentation settings live here; note content rules are fixed.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ShellConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Render `list` as JSON unless `--json` is given explicitly.
    #[serde(default)]
    pub json: bool,
    /// Truncate details on the list screen, `0` keeps them whole.
    #[serde(default)]
    pub details_width: usize,
}

fn default_prompt() -> String { DEFAULT_PROMPT.to_string() }

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            json: false,
            details_width: 0,
        }
    }
}

impl Config {
    /// Loads the config file.
    ///
    /// An explicit `path` must exist. Without one, the platform default
    /// location is tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config TOML")
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}

/// `<config_dir>/todonotes/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
}
