//! Branch listing

use crate::client::{require_owner_repo, GitHubClient};
use crate::error::Result;
use crate::types::{constants, ApiResponse, Branch};

impl GitHubClient {
    /// List branches for a repository
    ///
    /// A single page sized [`constants::BRANCH_PAGE_SIZE`] is fetched;
    /// the branch selector does not paginate.
    pub async fn list_branches(&self, owner: &str, repo: &str) -> Result<ApiResponse<Vec<Branch>>> {
        require_owner_repo(owner, repo)?;
        let path = format!(
            "/repos/{}/{}/branches?per_page={}",
            urlencoding::encode(owner),
            urlencoding::encode(repo),
            constants::BRANCH_PAGE_SIZE
        );
        self.get_json(&path).await
    }
}
