use std::{fs, path::Path, time::Duration};

use anyhow::{Context as _, Result};
use lotto_engine::Rules;
use serde::{Deserialize, Serialize};

use crate::ENV_GUARD;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "LOTTO_CONFIG";

/// Pause between drawings so a human can follow along
pub const DEFAULT_PACE_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub pace_ms: u64,
    pub stop_on_jackpot: bool,
    /// None means play until jackpot or cancel
    pub max_drawings: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pace_ms: DEFAULT_PACE_MS,
            stop_on_jackpot: true,
            max_drawings: None,
        }
    }
}

impl SessionConfig {
    pub fn pace(&self) -> Duration {
        Duration::from_millis(self.pace_ms)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub rules: Rules,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML config")?;
        config
            .rules
            .validate()
            .context("Invalid [rules] section")?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let content = fs::read_to_string(&config_path).with_context(|| {
            format!(
                "Failed to read config file: {}",
                config_path.as_ref().display()
            )
        })?;

        Self::from_toml_str(&content)
            .with_context(|| format!("In config file: {}", config_path.as_ref().display()))
    }

    /// Pick the config source: explicit path, then `LOTTO_CONFIG`, then defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            log::debug!("Loading config from: {}", path.display());
            return Self::load(path);
        }

        if let Ok(env_file_path) = ENV_GUARD.as_ref() {
            log::debug!("Environment loaded from: {}", env_file_path.display());
        }

        Self::from_env_value(std::env::var(CONFIG_ENV).ok())
    }

    /// Load the file named by a `LOTTO_CONFIG` value, unset or empty means defaults
    fn from_env_value(value: Option<String>) -> Result<Self> {
        match value {
            Some(path) if !path.is_empty() => {
                log::debug!("Loading config from {CONFIG_ENV}: {path}");
                Self::load(path)
            }
            _ => {
                log::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
