//! Configuration module
//!
//! Default keys and logging settings, loaded from a TOML file and environment
//! variables. Configured keys are only checked when a request uses them, so a
//! bad default for one cipher never blocks the others.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable holding the configuration file path
pub const CONFIG_PATH_VAR: &str = "POLISH_CIPHERS_CONFIG";

/// Cipher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherConfig {
    /// Path to the configuration file
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Caesar key used when none is given
    #[serde(default = "default_shift_key")]
    pub shift_key: i64,

    /// Vigenère key used when none is given
    #[serde(default = "default_running_key")]
    pub running_key: String,

    /// Playfair key used when none is given
    #[serde(default = "default_matrix_key")]
    pub matrix_key: String,

    /// `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

// Default value functions
fn default_config_path() -> PathBuf {
    PathBuf::from("config/ciphers.toml")
}

fn default_shift_key() -> i64 {
    3
}

fn default_running_key() -> String {
    "klucz".to_string()
}

fn default_matrix_key() -> String {
    "szyfr".to_string()
}

fn default_log_filter() -> String {
    "warn,polish_ciphers=info".to_string()
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            config_path: default_config_path(),
            shift_key: default_shift_key(),
            running_key: default_running_key(),
            matrix_key: default_matrix_key(),
            log_filter: default_log_filter(),
        }
    }
}

impl CipherConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        let config_path = env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path());

        let mut config = Self::load_file(&config_path)?;
        config.apply_overrides(|name| env::var(name).ok());

        Ok(config)
    }

    /// Read `path`, falling back to defaults when the file does not exist
    pub fn load_file(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;

            let config = Self::from_toml(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            tracing::info!("Configuration loaded from: {}", path.display());
            config
        } else {
            tracing::warn!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            Self::default()
        };

        config.config_path = path.to_path_buf();
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from `lookup`, keyed by environment variable name
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("POLISH_CIPHERS_SHIFT_KEY") {
            if let Ok(key) = val.trim().parse() {
                self.shift_key = key;
            }
        }
        if let Some(val) = lookup("POLISH_CIPHERS_RUNNING_KEY") {
            self.running_key = val;
        }
        if let Some(val) = lookup("POLISH_CIPHERS_MATRIX_KEY") {
            self.matrix_key = val;
        }
        if let Some(val) = lookup("POLISH_CIPHERS_LOG") {
            self.log_filter = val;
        }
    }
}
