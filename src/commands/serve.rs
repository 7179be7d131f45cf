//! Serve command: run the relay service

use super::base::{Command, CommandContext};
use crate::constants::relay::{DEFAULT_BIND, DEFAULT_PORT, SESSION_TTL_SECS};
use crate::relay::{self, RelayConfig};
use anyhow::Result;
use colored::*;
use getcommits_github::constants::GITHUB_API_BASE;
use std::time::Duration;

/// Arguments for the serve command
pub struct ServeCommand {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub upstream: Option<String>,
    pub ttl_secs: Option<u64>,
}

#[async_trait::async_trait]
impl Command for ServeCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let config = RelayConfig {
            bind: self
                .bind
                .clone()
                .or_else(|| context.config.bind.clone())
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            port: self.port.or(context.config.port).unwrap_or(DEFAULT_PORT),
            upstream_base: self
                .upstream
                .clone()
                .or_else(|| context.config.upstream_base.clone())
                .unwrap_or_else(|| GITHUB_API_BASE.to_string()),
            session_ttl: Duration::from_secs(
                self.ttl_secs
                    .or(context.config.session_ttl_secs)
                    .unwrap_or(SESSION_TTL_SECS),
            ),
        };

        println!(
            "{} {}:{} (upstream {})",
            "Starting relay on".green(),
            config.bind,
            config.port,
            config.upstream_base
        );
        relay::serve(config).await
    }
}
