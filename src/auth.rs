//! Session-scoped credential storage
//!
//! Holds a single personal access token for the lifetime of the
//! process. Nothing is encrypted and nothing touches disk; clearing the
//! store or exiting the process discards the credential.

/// In-memory store for one credential
#[derive(Debug, Default)]
pub struct TokenStore {
    token: Option<String>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a credential; empty strings are ignored
    pub fn set(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        self.token = Some(token.to_string());
    }

    /// The last stored credential, if any
    pub fn get(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Discard the stored credential
    pub fn clear(&mut self) {
        self.token = None;
    }
}
