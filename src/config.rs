//! TOML settings for the reporter.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::report::DEFAULT_SECRET_KEY;

/// File looked up by [`Config::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "envreport.toml";

/// Configuration for the environment reporter
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dotenv file to load (default: search for `.env` upwards)
    pub env_file: Option<String>,
    /// Variable reported by the `password` command (default: "PASSWORD")
    pub secret_key: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Config> {
        let config_path = config_path.as_ref();
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;
        Ok(config)
    }

    /// Load `envreport.toml` from `dir` if it exists, defaults otherwise.
    ///
    /// A discovered file that fails to load is logged and ignored.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Config {
        let path = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            return Config::default();
        }

        tracing::debug!(path = %path.display(), "loading default config");
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %format!("{:#}", err),
                    "ignoring default config"
                );
                Config::default()
            }
        }
    }

    /// Effective secret variable name
    pub fn secret_key(&self) -> &str {
        self.secret_key.as_deref().unwrap_or(DEFAULT_SECRET_KEY)
    }

    /// Sample written by `init-config`
    pub fn sample() -> Self {
        Self {
            env_file: Some(".env".to_string()),
            secret_key: Some(DEFAULT_SECRET_KEY.to_string()),
        }
    }
}
