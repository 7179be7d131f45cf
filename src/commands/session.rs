//! Session command: exchange a token for a relay session id

use super::base::{Command, CommandContext};
use super::validators;
use anyhow::{anyhow, Result};
use colored::*;
use getcommits_github::GitHubClient;

/// Arguments for the session command
pub struct SessionCommand {
    pub relay: Option<String>,
    pub token: Option<String>,
}

#[async_trait::async_trait]
impl Command for SessionCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let relay = self
            .relay
            .clone()
            .or_else(|| context.config.relay_base.clone())
            .ok_or_else(|| {
                anyhow!("relay base not provided. Use --relay or set relay_base in the config file.")
            })?;
        validators::validate_relay_base(&relay)?;

        let token = self
            .token
            .clone()
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
            .ok_or_else(|| {
                anyhow!("token not provided. Use --token or set the GITHUB_TOKEN environment variable.")
            })?;

        let client = GitHubClient::new(None);
        let session = client.create_relay_session(&relay, &token).await?;

        println!(
            "{} {} (expires in {}s)",
            "Session created:".green(),
            session.session_id.bold(),
            session.ttl / 1000
        );
        Ok(())
    }
}
