//! Data structures for GitHub API payloads
//!
//! All upstream types are deserialized verbatim from the REST API and
//! never mutated locally; unknown fields are ignored.

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Shared protocol constants
pub mod constants {
    /// GitHub API base URL
    pub const GITHUB_API_BASE: &str = "https://api.github.com";

    /// Accept header for the v3 REST API
    pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("getcommits/", env!("CARGO_PKG_VERSION"));

    /// Header carrying a relay session id
    pub const SESSION_ID_HEADER: &str = "x-session-id";

    /// Header carrying a credential for the relay to forward
    pub const CLIENT_TOKEN_HEADER: &str = "x-client-token";

    /// Rate-limit response headers, relayed verbatim by the proxy
    pub const RATE_LIMIT_HEADER: &str = "x-ratelimit-limit";
    pub const RATE_REMAINING_HEADER: &str = "x-ratelimit-remaining";
    pub const RATE_RESET_HEADER: &str = "x-ratelimit-reset";

    /// Page size used when listing branches
    pub const BRANCH_PAGE_SIZE: u32 = 100;

    /// Upper bound GitHub accepts for per_page
    pub const MAX_PER_PAGE: u32 = 100;
}

/// Repository metadata as returned by `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub full_name: String,
    pub private: bool,
    pub default_branch: String,
    pub updated_at: DateTime<Utc>,
}

/// A branch entry from `GET /repos/{owner}/{repo}/branches`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
}

/// A commit entry from `GET /repos/{owner}/{repo}/commits`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub commit: CommitDetail,
    #[serde(default)]
    pub author: Option<CommitUser>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// The nested git commit object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    #[serde(default)]
    pub author: Option<CommitSignature>,
    #[serde(default)]
    pub committer: Option<CommitSignature>,
}

/// Author or committer signature on a git commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitSignature {
    pub name: String,
    pub date: DateTime<Utc>,
}

/// The GitHub user attached to a commit, when resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitUser {
    pub login: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Rate-limit metadata read from response headers
///
/// GitHub reports quota counters on every response:
/// - `X-RateLimit-Limit`: maximum requests per hour
/// - `X-RateLimit-Remaining`: requests remaining in the window
/// - `X-RateLimit-Reset`: Unix timestamp when the window resets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: Option<u64>,
    pub remaining: Option<u64>,
    pub reset: Option<u64>,
}

impl RateLimit {
    /// Parse rate-limit counters out of response headers. Absent or
    /// malformed headers yield `None` for the respective counter.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let parse = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
        };
        Self {
            limit: parse(constants::RATE_LIMIT_HEADER),
            remaining: parse(constants::RATE_REMAINING_HEADER),
            reset: parse(constants::RATE_RESET_HEADER),
        }
    }

    /// True when the remaining quota is known to be exhausted
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}

/// A successful API response: payload plus rate-limit metadata
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub rate: RateLimit,
}

/// Response of the relay session endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelaySession {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    /// Session lifetime in milliseconds
    pub ttl: u64,
}
