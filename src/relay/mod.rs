//! Relay service
//!
//! A stateless pass-through in front of the upstream API. The only
//! shared mutable resource is the in-memory [`SessionStore`]; each
//! request is handled independently and failures surface immediately to
//! the caller.

mod proxy;
pub mod sessions;

pub use proxy::RelayError;
pub use sessions::SessionStore;

use crate::constants::relay::{DEFAULT_BIND, DEFAULT_PORT, SESSION_TTL_SECS, SWEEP_INTERVAL_SECS};
use axum::routing::{get, post};
use axum::Router;
use getcommits_github::constants::GITHUB_API_BASE;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Relay runtime settings
pub struct RelayConfig {
    pub bind: String,
    pub port: u16,
    pub upstream_base: String,
    pub session_ttl: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            upstream_base: GITHUB_API_BASE.to_string(),
            session_ttl: Duration::from_secs(SESSION_TTL_SECS),
        }
    }
}

/// State shared by all relay handlers
pub(crate) struct RelayState {
    pub(crate) sessions: SessionStore,
    pub(crate) http: reqwest::Client,
    pub(crate) upstream_base: String,
}

impl RelayState {
    fn from_config(config: &RelayConfig) -> Arc<Self> {
        Arc::new(Self {
            sessions: SessionStore::new(config.session_ttl),
            http: reqwest::Client::new(),
            upstream_base: config.upstream_base.trim_end_matches('/').to_string(),
        })
    }
}

/// Build the router (for testing without binding to a port).
pub fn router(config: &RelayConfig) -> Router {
    build_router(RelayState::from_config(config))
}

fn build_router(state: Arc<RelayState>) -> Router {
    Router::new()
        .route("/api/session", post(proxy::create_session))
        .route("/api/repos/{owner}/{repo}", get(proxy::proxy_repository))
        .route(
            "/api/repos/{owner}/{repo}/branches",
            get(proxy::proxy_branches),
        )
        .route(
            "/api/repos/{owner}/{repo}/commits",
            get(proxy::proxy_commits),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and run the relay until the process exits
pub async fn serve(config: RelayConfig) -> anyhow::Result<()> {
    let state = RelayState::from_config(&config);

    // Periodic sweep alongside the lazy expiry check on lookup.
    let sweeper = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(SWEEP_INTERVAL_SECS));
        loop {
            interval.tick().await;
            let purged = sweeper.sessions.purge_expired();
            if purged > 0 {
                tracing::debug!(purged, "expired relay sessions swept");
            }
        }
    });

    let app = build_router(state);
    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, upstream = %config.upstream_base, "getcommits relay listening");
    axum::serve(listener, app).await?;
    Ok(())
}
