//! Controller wiring the API client to a paint surface
//!
//! The controller runs the fetch pipeline (repository, then branches,
//! then commits for the selected branch) and paints HTML fragments into
//! named sections of a [`Surface`]. It owns the [`AppState`] and drops
//! any response whose request generation is no longer current, so a
//! rapid branch switch cannot leave a stale commit list on screen.

use crate::constants::browse::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::render::html;
use crate::render::view::{CommitRowView, RepoHeaderView};
use crate::state::{AppState, Mode};
use crate::Result;
use anyhow::anyhow;
use getcommits_github::{GitHubClient, GitHubError};
use std::collections::BTreeMap;

/// The three independently repaintable regions of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Repo,
    Branches,
    Commits,
}

/// The paint step: takes a finished fragment and displays it
///
/// Painting fully replaces the section's prior content. Implementations
/// hold no rendering logic of their own; the pure mapping in
/// [`crate::render`] produces everything they receive.
pub trait Surface {
    fn paint(&mut self, section: Section, fragment: String);
}

/// Surface that accumulates the latest fragment per section
///
/// Used by the CLI to assemble a standalone HTML document once the
/// pipeline finishes.
#[derive(Debug, Default)]
pub struct PageSurface {
    sections: BTreeMap<Section, String>,
}

impl PageSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, section: Section) -> Option<&str> {
        self.sections.get(&section).map(String::as_str)
    }

    /// Assemble the collected fragments into a full document
    pub fn into_document(self) -> String {
        let get = |section: Section| self.sections.get(&section).cloned().unwrap_or_default();
        html::page(&get(Section::Repo), &get(Section::Branches), &get(Section::Commits))
    }
}

impl Surface for PageSurface {
    fn paint(&mut self, section: Section, fragment: String) {
        self.sections.insert(section, fragment);
    }
}

/// Drives the fetch/render pipeline for one repository at a time
pub struct Controller<S: Surface> {
    client: GitHubClient,
    surface: S,
    pub state: AppState,
    per_page: u32,
    page: u32,
    target: Option<(String, String)>,
}

impl<S: Surface> Controller<S> {
    pub fn new(client: GitHubClient, surface: S) -> Self {
        Self {
            client,
            surface,
            state: AppState::new(),
            per_page: DEFAULT_PER_PAGE,
            page: DEFAULT_PAGE,
            target: None,
        }
    }

    pub fn with_page_size(mut self, per_page: u32, page: u32) -> Self {
        self.per_page = per_page;
        self.page = page;
        self
    }

    pub fn switch_mode(&mut self, mode: Mode) {
        self.state.switch_mode(mode);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Load a repository and run the full pipeline: header, branch
    /// list (preselecting the repository's default branch), then the
    /// commit list for the selection.
    ///
    /// A repository or branch-list failure replaces both sections with
    /// the error; sections already painted are not rolled back.
    pub async fn load_repository(&mut self, owner: &str, repo: &str) -> Result<()> {
        self.target = Some((owner.to_string(), repo.to_string()));
        let generation = self.state.begin_request();
        self.state.loading = true;
        self.state.error = None;
        self.surface
            .paint(Section::Repo, html::loading("Loading repository…"));

        let repository = match self.client.get_repository(owner, repo).await {
            Ok(response) => response.data,
            Err(err) => return self.fail_pipeline(generation, err),
        };
        if !self.state.is_current(generation) {
            return Ok(());
        }
        self.surface.paint(
            Section::Repo,
            html::repo_header(&RepoHeaderView::from(&repository)),
        );

        self.surface
            .paint(Section::Commits, html::loading("Loading branches…"));
        let branches = match self.client.list_branches(owner, repo).await {
            Ok(response) => response.data,
            Err(err) => return self.fail_pipeline(generation, err),
        };
        if !self.state.is_current(generation) {
            return Ok(());
        }

        let selected = if branches.iter().any(|b| b.name == repository.default_branch) {
            repository.default_branch.clone()
        } else {
            branches
                .first()
                .map(|b| b.name.clone())
                .unwrap_or_else(|| repository.default_branch.clone())
        };
        self.state.repo = Some(repository);
        self.state.branches = branches;
        self.state.selected_branch = Some(selected.clone());
        self.surface.paint(
            Section::Branches,
            html::branch_options(&self.state.branches, Some(&selected)),
        );

        self.fetch_commits(selected).await
    }

    /// Switch the selected branch, re-running only the commit step
    pub async fn select_branch(&mut self, branch: &str) -> Result<()> {
        if self.target.is_none() {
            return Err(anyhow!("no repository loaded"));
        }
        self.state.selected_branch = Some(branch.to_string());
        self.surface.paint(
            Section::Branches,
            html::branch_options(&self.state.branches, Some(branch)),
        );
        self.fetch_commits(branch.to_string()).await
    }

    /// Fetch and paint commits for one branch
    ///
    /// A failure here replaces only the commits section; the repository
    /// header and branch selector stay intact.
    async fn fetch_commits(&mut self, branch: String) -> Result<()> {
        let (owner, repo) = self
            .target
            .clone()
            .ok_or_else(|| anyhow!("no repository loaded"))?;
        let generation = self.state.begin_request();
        self.state.loading = true;
        self.surface
            .paint(Section::Commits, html::loading("Loading commits…"));

        match self
            .client
            .list_commits(&owner, &repo, Some(&branch), self.per_page, self.page)
            .await
        {
            Ok(response) => {
                if !self.state.is_current(generation) {
                    return Ok(());
                }
                if let Some(remaining) = response.rate.remaining {
                    tracing::debug!(remaining, "rate limit after commit fetch");
                }
                self.state.commits = response.data;
                self.state.loading = false;
                let rows: Vec<CommitRowView> = self
                    .state
                    .commits
                    .iter()
                    .map(|commit| CommitRowView::from_commit(commit, &owner, &repo))
                    .collect();
                self.surface.paint(Section::Commits, html::commit_list(&rows));
                Ok(())
            }
            Err(err) => {
                if !self.state.is_current(generation) {
                    return Ok(());
                }
                self.state.loading = false;
                self.state.error = Some(err.to_string());
                self.surface
                    .paint(Section::Commits, html::error(&err.to_string()));
                Err(err.into())
            }
        }
    }

    /// Abort the pipeline, painting the failure into both sections
    fn fail_pipeline(&mut self, generation: u64, err: GitHubError) -> Result<()> {
        if !self.state.is_current(generation) {
            return Ok(());
        }
        self.state.loading = false;
        self.state.error = Some(err.to_string());
        let fragment = html::error(&err.to_string());
        self.surface.paint(Section::Repo, fragment.clone());
        self.surface.paint(Section::Commits, fragment);
        Err(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_surface_keeps_latest_fragment_per_section() {
        let mut surface = PageSurface::new();
        surface.paint(Section::Commits, "first".to_string());
        surface.paint(Section::Commits, "second".to_string());
        assert_eq!(surface.section(Section::Commits), Some("second"));
    }

    #[test]
    fn test_page_surface_document_contains_sections() {
        let mut surface = PageSurface::new();
        surface.paint(Section::Repo, "<p>repo</p>".to_string());
        let document = surface.into_document();
        assert!(document.contains("<p>repo</p>"));
        assert!(document.contains("commits-section"));
    }
}
