//! Commit listing

use crate::client::{require_owner_repo, GitHubClient};
use crate::error::Result;
use crate::types::{constants, ApiResponse, Commit};

impl GitHubClient {
    /// List commits for a repository
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    /// * `branch` - Branch to list from, sent as the `sha` query
    ///   parameter; `None` lists from the repository's default branch
    /// * `per_page` - Results per page (clamped to 100)
    /// * `page` - Page number
    pub async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        branch: Option<&str>,
        per_page: u32,
        page: u32,
    ) -> Result<ApiResponse<Vec<Commit>>> {
        require_owner_repo(owner, repo)?;

        let mut params = vec![
            format!("per_page={}", per_page.min(constants::MAX_PER_PAGE)),
            format!("page={}", page),
        ];
        if let Some(branch) = branch {
            params.push(format!("sha={}", urlencoding::encode(branch)));
        }

        let path = format!(
            "/repos/{}/{}/commits?{}",
            urlencoding::encode(owner),
            urlencoding::encode(repo),
            params.join("&")
        );
        self.get_json(&path).await
    }
}
