//! State-to-view-model mapping
//!
//! Pure translation of upstream payloads into display-ready records,
//! kept apart from the HTML paint step so the fallback rules here are
//! unit-testable on their own.

use crate::render::format::{format_timestamp, short_sha};
use getcommits_github::{Commit, Repository};

/// Display model for the repository header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoHeaderView {
    pub full_name: String,
    pub visibility: &'static str,
    pub default_branch: String,
    pub updated: String,
}

impl From<&Repository> for RepoHeaderView {
    fn from(repo: &Repository) -> Self {
        Self {
            full_name: repo.full_name.clone(),
            visibility: if repo.private { "Private" } else { "Public" },
            default_branch: repo.default_branch.clone(),
            updated: format_timestamp(&repo.updated_at),
        }
    }
}

/// Display model for one commit row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRowView {
    pub short_sha: String,
    pub message: String,
    pub author: String,
    pub date: String,
    pub avatar_url: Option<String>,
    pub url: String,
}

impl CommitRowView {
    /// Build a row from an upstream commit entry
    ///
    /// Fallback chain: the git author name, else the resolved GitHub
    /// login, else "Unknown"; the author date, else the committer date;
    /// the upstream web URL, else a canonical one built from
    /// owner/repo/sha.
    pub fn from_commit(commit: &Commit, owner: &str, repo: &str) -> Self {
        let message = if commit.commit.message.is_empty() {
            "(no message)".to_string()
        } else {
            commit.commit.message.clone()
        };

        let author = commit
            .commit
            .author
            .as_ref()
            .map(|a| a.name.clone())
            .or_else(|| commit.author.as_ref().map(|u| u.login.clone()))
            .unwrap_or_else(|| "Unknown".to_string());

        let date = commit
            .commit
            .author
            .as_ref()
            .map(|a| a.date)
            .or_else(|| commit.commit.committer.as_ref().map(|c| c.date))
            .map(|ts| format_timestamp(&ts))
            .unwrap_or_else(|| "unknown date".to_string());

        let url = commit.html_url.clone().unwrap_or_else(|| {
            format!(
                "https://github.com/{}/{}/commit/{}",
                urlencoding::encode(owner),
                urlencoding::encode(repo),
                urlencoding::encode(&commit.sha)
            )
        });

        Self {
            short_sha: short_sha(&commit.sha),
            message,
            author,
            date,
            avatar_url: commit.author.as_ref().and_then(|u| u.avatar_url.clone()),
            url,
        }
    }
}
