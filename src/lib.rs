//! GetCommits - browse a GitHub repository's branches and commit history

pub mod app;
pub mod auth;
pub mod commands;
pub mod config;
pub mod constants;
pub mod relay;
pub mod render;
pub mod state;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use app::{Controller, Section, Surface};
pub use commands::{Command, CommandContext};
pub use config::Config;
pub use state::{AppState, Mode};
