//! # Configuration
//!
//! Client settings live in `config.json` in the rollcall home directory.
//!
//! ## Resolution Order
//!
//! 1. `--api-url` on the command line
//! 2. `ROLLCALL_API_URL` in the environment
//! 3. `config.json`
//! 4. Compiled defaults
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `api-url` | `http://localhost:8000/api` | Base URL of the roster backend |
//! | `timeout` | `10` | HTTP timeout in seconds |

use crate::error::{RollcallError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const API_URL_ENV: &str = "ROLLCALL_API_URL";
pub const KEYS: [&str; 2] = ["api-url", "timeout"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollcallConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for RollcallConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RollcallConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RollcallError::Io)?;
        let config = serde_json::from_str(&content).map_err(RollcallError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RollcallError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(RollcallError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(RollcallError::Io)?;
        Ok(())
    }

    /// Applies `ROLLCALL_API_URL` from the given lookup (usually `std::env::var`).
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api-url" => Some(self.api_url.clone()),
            "timeout" => Some(self.timeout_secs.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "api-url" => {
                let value = value.trim();
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(format!("api-url must start with http:// or https://: {}", value));
                }
                self.api_url = value.trim_end_matches('/').to_string();
                Ok(())
            }
            "timeout" => {
                let secs: u64 = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("timeout must be a whole number of seconds: {}", value))?;
                if secs == 0 {
                    return Err("timeout must be at least 1 second".to_string());
                }
                self.timeout_secs = secs;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
