//! Configuration Management
//!
//! Cloud endpoint and credentials come from a `clouds.yaml` under the
//! platform config dir, overridable per-run via environment variables
//! and CLI flags (flag > environment > file).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Control plane endpoint URL, e.g. `https://cloud.example.com/v2`
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Pre-issued bearer token
    #[serde(default)]
    pub token: Option<String>,
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ostack").join("clouds.yaml"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Get effective endpoint (env > config file)
    pub fn effective_endpoint(&self) -> Option<String> {
        env_non_empty("OSTACK_ENDPOINT").or_else(|| self.endpoint.clone())
    }

    /// Get effective token (env > config file)
    pub fn effective_token(&self) -> Option<String> {
        env_non_empty("OSTACK_TOKEN").or_else(|| self.token.clone())
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
