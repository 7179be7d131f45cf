//! Configuration file loading
//!
//! Settings live in an optional YAML file; a missing file means
//! defaults. Command-line flags always take precedence over file
//! values.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Relay base address, e.g. `http://localhost:3000/api`; unset
    /// means calls go directly to the upstream API
    #[serde(default)]
    pub relay_base: Option<String>,

    /// Upstream API base the relay forwards to
    #[serde(default)]
    pub upstream_base: Option<String>,

    /// Commits fetched per page
    #[serde(default)]
    pub per_page: Option<u32>,

    /// Relay session lifetime in seconds
    #[serde(default)]
    pub session_ttl_secs: Option<u64>,

    /// Relay bind address
    #[serde(default)]
    pub bind: Option<String>,

    /// Relay listen port
    #[serde(default)]
    pub port: Option<u16>,
}

impl Config {
    /// Load configuration from a YAML file; a missing file yields defaults
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(per_page) = self.per_page {
            if per_page == 0 || per_page > 100 {
                anyhow::bail!("per_page must be between 1 and 100, got {per_page}");
            }
        }
        if let Some(ttl) = self.session_ttl_secs {
            if ttl == 0 {
                anyhow::bail!("session_ttl_secs must be greater than zero");
            }
        }
        Ok(())
    }
}
