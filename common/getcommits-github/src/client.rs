//! GitHub client implementation

use crate::error::{GitHubError, Result};
use crate::types::{constants, ApiResponse, RateLimit};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;

/// Where relayed calls are sent, and which credential header they carry
///
/// With a session id the relay resolves the credential from its own
/// store; otherwise the stored token travels in a distinct header so
/// the relay, not this client, makes the authenticated upstream call.
#[derive(Debug, Clone)]
pub struct RelayTarget {
    pub base: String,
    pub session_id: Option<String>,
}

/// GitHub API client for making authenticated requests
///
/// The client targets the upstream API directly by default, attaching
/// the stored credential as a bearer token. When a relay target is
/// configured, calls go to the relay instead and the credential (or a
/// relay session id) travels in the relay's own headers.
///
/// ## Example
///
/// ```rust,no_run
/// use getcommits_github::GitHubClient;
///
/// # async fn example() -> getcommits_github::Result<()> {
/// let client = GitHubClient::new(Some("your_github_token".to_string()));
/// let repo = client.get_repository("octocat", "Hello-World").await?;
/// println!("{} (default: {})", repo.data.full_name, repo.data.default_branch);
/// # Ok(())
/// # }
/// ```
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) token: Option<String>,
    pub(crate) api_base: String,
    pub(crate) relay: Option<RelayTarget>,
}

impl GitHubClient {
    /// Create a new GitHub client with an optional token
    /// If no token is provided, will try to read from GITHUB_TOKEN environment variable
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.or_else(|| std::env::var("GITHUB_TOKEN").ok()),
            api_base: constants::GITHUB_API_BASE.to_string(),
            relay: None,
        }
    }

    /// Override the upstream API base address (used by tests)
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = normalize_base(base.into());
        self
    }

    /// Route all calls through a relay instead of the upstream API
    pub fn with_relay(mut self, base: impl Into<String>, session_id: Option<String>) -> Self {
        self.relay = Some(RelayTarget {
            base: normalize_base(base.into()),
            session_id,
        });
        self
    }

    /// Check if the client has a credential configured
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Get the credential (if available)
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Perform a GET request against the configured base and decode the
    /// JSON payload, carrying rate-limit metadata through on success
    /// and failure alike.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
    ) -> Result<ApiResponse<T>> {
        let base = match &self.relay {
            Some(relay) => relay.base.as_str(),
            None => self.api_base.as_str(),
        };
        let mut request = self
            .client
            .get(format!("{base}{path_and_query}"))
            .header(ACCEPT, constants::GITHUB_ACCEPT)
            .header(USER_AGENT, constants::DEFAULT_USER_AGENT);

        match &self.relay {
            None => {
                if let Some(token) = &self.token {
                    request = request.bearer_auth(token);
                }
            }
            Some(relay) => {
                if let Some(session_id) = &relay.session_id {
                    request = request.header(constants::SESSION_ID_HEADER, session_id);
                } else if let Some(token) = &self.token {
                    request = request.header(constants::CLIENT_TOKEN_HEADER, token);
                }
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| GitHubError::Network(e.to_string()))?;

        let rate = RateLimit::from_headers(response.headers());
        let status = response.status();

        if status.is_success() {
            let data = response
                .json::<T>()
                .await
                .map_err(|e| GitHubError::Decode(e.to_string()))?;
            return Ok(ApiResponse { data, rate });
        }

        let body = response.text().await.unwrap_or_default();
        Err(GitHubError::from_status(status.as_u16(), body, rate))
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Require a non-empty owner/repo pair before touching the network.
pub(crate) fn require_owner_repo(owner: &str, repo: &str) -> Result<()> {
    if owner.trim().is_empty() || repo.trim().is_empty() {
        return Err(GitHubError::InvalidInput(
            "owner and repo are required".to_string(),
        ));
    }
    Ok(())
}

fn normalize_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}
