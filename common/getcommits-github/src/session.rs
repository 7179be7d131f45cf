//! Relay session creation

use crate::client::GitHubClient;
use crate::error::{GitHubError, Result};
use crate::types::{constants, RateLimit, RelaySession};
use reqwest::header::USER_AGENT;
use serde_json::json;

impl GitHubClient {
    /// Exchange a credential for a short-lived relay session
    ///
    /// The relay stores the token server-side and returns an opaque
    /// session id plus its lifetime in milliseconds. Subsequent calls
    /// configured with [`GitHubClient::with_relay`] and that id carry
    /// no credential at all.
    pub async fn create_relay_session(
        &self,
        relay_base: &str,
        token: &str,
    ) -> Result<RelaySession> {
        if token.trim().is_empty() {
            return Err(GitHubError::InvalidInput("token is required".to_string()));
        }

        let url = format!("{}/session", relay_base.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .header(USER_AGENT, constants::DEFAULT_USER_AGENT)
            .json(&json!({ "token": token }))
            .send()
            .await
            .map_err(|e| GitHubError::Network(e.to_string()))?;

        let rate = RateLimit::from_headers(response.headers());
        let status = response.status();
        if status.is_success() {
            return response
                .json::<RelaySession>()
                .await
                .map_err(|e| GitHubError::Decode(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        Err(GitHubError::from_status(status.as_u16(), body, rate))
    }
}
