//! GitHub error types.

use crate::types::RateLimit;
use thiserror::Error;

/// Errors that can occur during GitHub operations.
///
/// Every HTTP-origin variant carries the rate-limit metadata read from
/// the failing response, so callers can surface remaining quota even on
/// error. Failures are never retried; they surface immediately.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Missing or malformed local input; never reaches the network.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Bad or missing credential (HTTP 401).
    #[error("unauthorized: invalid token or credentials")]
    Unauthorized { rate: RateLimit },

    /// Quota exhausted (HTTP 403 with remaining quota at zero, or an
    /// upstream message naming the rate limit).
    #[error("rate limit exceeded")]
    RateLimited { rate: RateLimit },

    /// Access denied for reasons other than quota (HTTP 403).
    #[error("forbidden: access denied")]
    Forbidden { rate: RateLimit },

    /// Repository or branch does not exist (HTTP 404).
    #[error("not found: repository or branch does not exist")]
    NotFound { rate: RateLimit },

    /// Repository has no commits (HTTP 409).
    #[error("empty repository (no commits)")]
    EmptyRepository { rate: RateLimit },

    /// Any other non-2xx upstream response.
    #[error("GitHub API error ({status}): {body}")]
    Upstream {
        status: u16,
        body: String,
        rate: RateLimit,
    },

    /// Transport-level failure before a response was received.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Result type for GitHub operations.
pub type Result<T> = std::result::Result<T, GitHubError>;

impl GitHubError {
    /// Rate-limit metadata attached to the failing response, if any.
    pub fn rate_limit(&self) -> Option<&RateLimit> {
        match self {
            GitHubError::Unauthorized { rate }
            | GitHubError::RateLimited { rate }
            | GitHubError::Forbidden { rate }
            | GitHubError::NotFound { rate }
            | GitHubError::EmptyRepository { rate }
            | GitHubError::Upstream { rate, .. } => Some(rate),
            _ => None,
        }
    }

    /// True when the failure is quota exhaustion rather than a
    /// permission problem.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GitHubError::RateLimited { .. })
    }

    /// True when the failure is due to a bad or missing credential.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, GitHubError::Unauthorized { .. })
    }

    /// Classify a non-2xx upstream response.
    ///
    /// A 403 counts as a rate-limit failure when the remaining-quota
    /// header reads zero or the upstream message mentions the rate
    /// limit; otherwise it is access denial.
    pub(crate) fn from_status(status: u16, body: String, rate: RateLimit) -> Self {
        match status {
            401 => GitHubError::Unauthorized { rate },
            403 => {
                let message_names_rate_limit = serde_json::from_str::<serde_json::Value>(&body)
                    .ok()
                    .and_then(|v| v.get("message").and_then(|m| m.as_str().map(String::from)))
                    .is_some_and(|m| m.to_lowercase().contains("rate limit"));
                if rate.is_exhausted() || message_names_rate_limit {
                    GitHubError::RateLimited { rate }
                } else {
                    GitHubError::Forbidden { rate }
                }
            }
            404 => GitHubError::NotFound { rate },
            409 => GitHubError::EmptyRepository { rate },
            _ => GitHubError::Upstream { status, body, rate },
        }
    }
}
