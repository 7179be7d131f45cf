//! Repository metadata retrieval

use crate::client::{require_owner_repo, GitHubClient};
use crate::error::Result;
use crate::types::{ApiResponse, Repository};

impl GitHubClient {
    /// Get repository metadata from GitHub
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    ///
    /// # Example
    /// ```rust,no_run
    /// use getcommits_github::GitHubClient;
    ///
    /// # async fn example() -> getcommits_github::Result<()> {
    /// let client = GitHubClient::new(None);
    /// let repo = client.get_repository("octocat", "Hello-World").await?;
    /// println!("Repository: {}", repo.data.full_name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<ApiResponse<Repository>> {
        require_owner_repo(owner, repo)?;
        let path = format!(
            "/repos/{}/{}",
            urlencoding::encode(owner),
            urlencoding::encode(repo)
        );
        self.get_json(&path).await
    }
}
