use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use getcommits::commands::*;
use getcommits::{constants, Config, Mode};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "getcommits")]
#[command(about = "Browse a GitHub repository's branches and commit history")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Anonymous browsing of public repositories
    Public,
    /// Token-backed browsing, required for private repositories
    Private,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Public => Mode::Public,
            ModeArg::Private => Mode::Private,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Load a repository and render its branches and commit history
    Browse {
        /// Repository owner (username or organization)
        owner: String,

        /// Repository name
        repo: String,

        /// Branch to list commits from (default: the repository's default branch)
        #[arg(short, long)]
        branch: Option<String>,

        /// Browsing mode
        #[arg(long, value_enum, default_value_t = ModeArg::Public)]
        mode: ModeArg,

        /// Personal access token (falls back to GITHUB_TOKEN)
        #[arg(long)]
        token: Option<String>,

        /// Relay base address, e.g. http://localhost:3000/api
        #[arg(long)]
        relay: Option<String>,

        /// Relay session id to authenticate with instead of a token
        #[arg(long)]
        session: Option<String>,

        /// Commits per page (1-100)
        #[arg(long)]
        per_page: Option<u32>,

        /// Page of commits to fetch
        #[arg(long)]
        page: Option<u32>,

        /// Write the rendered HTML page to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
        config: String,
    },

    /// Run the relay service
    Serve {
        /// Bind address
        #[arg(long)]
        bind: Option<String>,

        /// Listen port
        #[arg(long)]
        port: Option<u16>,

        /// Upstream API base address
        #[arg(long)]
        upstream: Option<String>,

        /// Session lifetime in seconds
        #[arg(long)]
        ttl: Option<u64>,

        /// Configuration file path
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
        config: String,
    },

    /// Create a relay session from a token
    Session {
        /// Relay base address, e.g. http://localhost:3000/api
        #[arg(long)]
        relay: Option<String>,

        /// Personal access token (falls back to GITHUB_TOKEN)
        #[arg(long)]
        token: Option<String>,

        /// Configuration file path
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
        config: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Browse {
            owner,
            repo,
            branch,
            mode,
            token,
            relay,
            session,
            per_page,
            page,
            out,
            config,
        } => {
            let context = CommandContext {
                config: Config::load(&config)?,
            };
            BrowseCommand {
                owner,
                repo,
                branch,
                mode: mode.into(),
                token,
                relay,
                session,
                per_page,
                page,
                out,
            }
            .execute(&context)
            .await?;
        }
        Commands::Serve {
            bind,
            port,
            upstream,
            ttl,
            config,
        } => {
            let context = CommandContext {
                config: Config::load(&config)?,
            };
            ServeCommand {
                bind,
                port,
                upstream,
                ttl_secs: ttl,
            }
            .execute(&context)
            .await?;
        }
        Commands::Session {
            relay,
            token,
            config,
        } => {
            let context = CommandContext {
                config: Config::load(&config)?,
            };
            SessionCommand { relay, token }.execute(&context).await?;
        }
    }

    Ok(())
}
