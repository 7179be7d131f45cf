//! Command argument validation utilities
//!
//! Domain-specific validation applied after clap parsing, before any
//! network call is made.

use crate::state::Mode;
use anyhow::{anyhow, Result};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Required argument was not provided
    MissingRequired { argument: String },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MissingRequired { argument } => {
                write!(f, "{} is required", argument)
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

fn to_anyhow(err: CommandValidationError) -> anyhow::Error {
    anyhow!("{err}")
}

/// Owner and repository name must both be non-empty
pub fn validate_owner_repo(owner: &str, repo: &str) -> Result<()> {
    if owner.trim().is_empty() {
        return Err(to_anyhow(CommandValidationError::MissingRequired {
            argument: "owner".to_string(),
        }));
    }
    if repo.trim().is_empty() {
        return Err(to_anyhow(CommandValidationError::MissingRequired {
            argument: "repo".to_string(),
        }));
    }
    Ok(())
}

/// Private mode needs a credential before anything reaches the network
pub fn validate_credential(mode: Mode, token: Option<&str>) -> Result<()> {
    if mode == Mode::Private && token.map_or(true, |t| t.trim().is_empty()) {
        return Err(to_anyhow(CommandValidationError::MissingRequired {
            argument: "token (private mode)".to_string(),
        }));
    }
    Ok(())
}

/// Page size must stay within what the upstream API accepts
pub fn validate_page_size(per_page: u32) -> Result<()> {
    if per_page == 0 || per_page > 100 {
        return Err(to_anyhow(CommandValidationError::InvalidValue {
            argument: "per-page".to_string(),
            value: per_page.to_string(),
            reason: "must be between 1 and 100".to_string(),
        }));
    }
    Ok(())
}

/// A relay base address must look like an HTTP(S) URL
pub fn validate_relay_base(relay: &str) -> Result<()> {
    if !relay.starts_with("http://") && !relay.starts_with("https://") {
        return Err(to_anyhow(CommandValidationError::InvalidValue {
            argument: "relay".to_string(),
            value: relay.to_string(),
            reason: "must start with http:// or https://".to_string(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_owner_repo() {
        assert!(validate_owner_repo("octocat", "Hello-World").is_ok());
        assert!(validate_owner_repo("", "Hello-World").is_err());
        assert!(validate_owner_repo("octocat", "  ").is_err());
    }

    #[test]
    fn test_private_mode_requires_credential() {
        assert!(validate_credential(Mode::Private, None).is_err());
        assert!(validate_credential(Mode::Private, Some("")).is_err());
        assert!(validate_credential(Mode::Private, Some("ghp_abc")).is_ok());
    }

    #[test]
    fn test_public_mode_needs_no_credential() {
        assert!(validate_credential(Mode::Public, None).is_ok());
    }

    #[test]
    fn test_validate_page_size_bounds() {
        assert!(validate_page_size(1).is_ok());
        assert!(validate_page_size(100).is_ok());
        assert!(validate_page_size(0).is_err());
        assert!(validate_page_size(101).is_err());
    }

    #[test]
    fn test_validate_relay_base_scheme() {
        assert!(validate_relay_base("http://localhost:3000/api").is_ok());
        assert!(validate_relay_base("https://relay.example/api").is_ok());
        assert!(validate_relay_base("localhost:3000").is_err());
    }

    #[test]
    fn test_validation_error_display() {
        let err = CommandValidationError::MissingRequired {
            argument: "owner".to_string(),
        };
        assert_eq!(err.to_string(), "owner is required");
    }
}
