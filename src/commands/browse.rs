//! Browse command: load a repository and render its commit history

use super::base::{Command, CommandContext};
use super::validators;
use crate::app::{Controller, PageSurface};
use crate::auth::TokenStore;
use crate::constants::browse::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::state::Mode;
use anyhow::Result;
use colored::*;
use getcommits_github::GitHubClient;
use std::path::PathBuf;

/// Arguments for the browse command
pub struct BrowseCommand {
    pub owner: String,
    pub repo: String,
    pub branch: Option<String>,
    pub mode: Mode,
    pub token: Option<String>,
    pub relay: Option<String>,
    pub session: Option<String>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub out: Option<PathBuf>,
}

#[async_trait::async_trait]
impl Command for BrowseCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        validators::validate_owner_repo(&self.owner, &self.repo)?;

        let mut store = TokenStore::new();
        if let Some(token) = &self.token {
            store.set(token);
        }
        if store.get().is_none() {
            if let Ok(token) = std::env::var("GITHUB_TOKEN") {
                store.set(&token);
            }
        }
        validators::validate_credential(self.mode, store.get())?;

        let relay_base = self
            .relay
            .clone()
            .or_else(|| context.config.relay_base.clone());
        if let Some(relay) = &relay_base {
            validators::validate_relay_base(relay)?;
        }

        let per_page = self
            .per_page
            .or(context.config.per_page)
            .unwrap_or(DEFAULT_PER_PAGE);
        validators::validate_page_size(per_page)?;
        let page = self.page.unwrap_or(DEFAULT_PAGE);

        let mut client = GitHubClient::new(store.get().map(str::to_string));
        if let Some(relay) = relay_base {
            client = client.with_relay(relay, self.session.clone());
        }

        let label = format!("{}/{}", self.owner, self.repo);
        println!(
            "{} | {} ({} mode)",
            label.cyan().bold(),
            "Loading repository".dimmed(),
            self.mode
        );

        let mut controller =
            Controller::new(client, PageSurface::new()).with_page_size(per_page, page);
        controller.switch_mode(self.mode);

        let mut outcome = controller.load_repository(&self.owner, &self.repo).await;
        if outcome.is_ok() {
            if let Some(branch) = &self.branch {
                if controller.state.selected_branch.as_deref() != Some(branch.as_str()) {
                    outcome = controller.select_branch(branch).await;
                }
            }
        }

        match &outcome {
            Ok(()) => println!(
                "{} | {} {} commits on '{}'",
                label.cyan().bold(),
                "Loaded".green(),
                controller.state.commits.len(),
                controller.state.selected_branch.as_deref().unwrap_or("?"),
            ),
            Err(err) => println!("{} | {}", label.cyan().bold(), err.to_string().red()),
        }

        // Errors are painted into the page too, so it is written either way.
        let document = controller.into_surface().into_document();
        match &self.out {
            Some(path) => {
                std::fs::write(path, document)?;
                println!(
                    "{} | {} {}",
                    label.cyan().bold(),
                    "Wrote".green(),
                    path.display()
                );
            }
            None => println!("{document}"),
        }

        outcome
    }
}
