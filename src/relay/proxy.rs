//! Relay request handlers
//!
//! One handler per forwarded endpoint plus session creation. Credential
//! resolution order: `X-Session-Id` header, `sessionId` query
//! parameter, then a directly supplied `X-Client-Token`. The upstream
//! response (status, body, content type and the three rate-limit
//! headers) is relayed verbatim; upstream transport failures become a
//! generic server error and are never retried.

use super::RelayState;
use axum::body::Body;
use axum::extract::{Path, Query, RawQuery, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Json, Response};
use getcommits_github::constants::{
    CLIENT_TOKEN_HEADER, DEFAULT_USER_AGENT, GITHUB_ACCEPT, RATE_LIMIT_HEADER,
    RATE_REMAINING_HEADER, RATE_RESET_HEADER, SESSION_ID_HEADER,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Failures a relay handler can produce on its own
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("token required")]
    TokenRequired,

    #[error("missing session or token")]
    MissingCredential,

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            RelayError::TokenRequired => axum::http::StatusCode::BAD_REQUEST,
            RelayError::MissingCredential => axum::http::StatusCode::UNAUTHORIZED,
            RelayError::Upstream(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

#[derive(Deserialize)]
pub(crate) struct SessionBody {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct SessionCreated {
    #[serde(rename = "sessionId")]
    session_id: String,
    /// Session lifetime in milliseconds
    ttl: u64,
}

/// POST /api/session
pub(crate) async fn create_session(
    State(state): State<Arc<RelayState>>,
    Json(body): Json<SessionBody>,
) -> Result<Json<SessionCreated>, RelayError> {
    let token = body.token.unwrap_or_default();
    if token.trim().is_empty() {
        return Err(RelayError::TokenRequired);
    }
    let session_id = state.sessions.create(token);
    let ttl = state.sessions.ttl().as_millis() as u64;
    tracing::info!(ttl_ms = ttl, "relay session created");
    Ok(Json(SessionCreated { session_id, ttl }))
}

#[derive(Deserialize)]
pub(crate) struct SessionQuery {
    #[serde(rename = "sessionId")]
    session_id: Option<String>,
}

/// GET /api/repos/{owner}/{repo}
pub(crate) async fn proxy_repository(
    State(state): State<Arc<RelayState>>,
    Path((owner, repo)): Path<(String, String)>,
    Query(params): Query<SessionQuery>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Response, RelayError> {
    let path = repo_path(&owner, &repo);
    forward(&state, &headers, params.session_id, &path, query).await
}

/// GET /api/repos/{owner}/{repo}/branches
pub(crate) async fn proxy_branches(
    State(state): State<Arc<RelayState>>,
    Path((owner, repo)): Path<(String, String)>,
    Query(params): Query<SessionQuery>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Response, RelayError> {
    let path = format!("{}/branches", repo_path(&owner, &repo));
    forward(&state, &headers, params.session_id, &path, query).await
}

/// GET /api/repos/{owner}/{repo}/commits
pub(crate) async fn proxy_commits(
    State(state): State<Arc<RelayState>>,
    Path((owner, repo)): Path<(String, String)>,
    Query(params): Query<SessionQuery>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Response, RelayError> {
    let path = format!("{}/commits", repo_path(&owner, &repo));
    forward(&state, &headers, params.session_id, &path, query).await
}

fn repo_path(owner: &str, repo: &str) -> String {
    format!(
        "/repos/{}/{}",
        urlencoding::encode(owner),
        urlencoding::encode(repo)
    )
}

/// Resolve the credential for a proxied request
///
/// A supplied session id must resolve in the store; there is no
/// fallback from a dead session to a directly supplied token.
fn resolve_credential(
    state: &RelayState,
    headers: &HeaderMap,
    query_session: Option<String>,
) -> Result<String, RelayError> {
    let session_id = headers
        .get(SESSION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or(query_session);

    if let Some(id) = session_id {
        return state
            .sessions
            .resolve(&id)
            .ok_or(RelayError::MissingCredential);
    }

    headers
        .get(CLIENT_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .ok_or(RelayError::MissingCredential)
}

async fn forward(
    state: &RelayState,
    headers: &HeaderMap,
    query_session: Option<String>,
    path: &str,
    query: Option<String>,
) -> Result<Response, RelayError> {
    let token = resolve_credential(state, headers, query_session)?;

    let mut url = format!("{}{}", state.upstream_base, path);
    if let Some(query) = query {
        url.push('?');
        url.push_str(&query);
    }

    let upstream = state
        .http
        .get(&url)
        .header("accept", GITHUB_ACCEPT)
        .header("user-agent", DEFAULT_USER_AGENT)
        .bearer_auth(&token)
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "upstream request failed");
            RelayError::Upstream(err.to_string())
        })?;

    let status = upstream.status().as_u16();
    let mut builder = axum::http::Response::builder().status(status);
    for name in [
        "content-type",
        RATE_LIMIT_HEADER,
        RATE_REMAINING_HEADER,
        RATE_RESET_HEADER,
    ] {
        if let Some(value) = upstream.headers().get(name).and_then(|v| v.to_str().ok()) {
            builder = builder.header(name, value);
        }
    }

    let body = upstream
        .bytes()
        .await
        .map_err(|err| RelayError::Upstream(err.to_string()))?;
    builder
        .body(Body::from(body))
        .map_err(|err| RelayError::Upstream(err.to_string()))
}
