//! `pea`: terminal front end for the PEA tracker API.
//!
//! LIFECYCLE
//! =========
//! 1. Load `.env`, install the stderr log subscriber.
//! 2. Build `ClientConfig` from the environment, then apply CLI overrides.
//! 3. Open the file-backed session and build the gateway.
//! 4. Run one command; print `error[CODE]: message` and exit non-zero on failure.

mod commands;
mod render;
mod terminal;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use pea_client::components::form_error::FormError;
use pea_client::config::{ClientConfig, cache_ttl_from_secs, parse_zero_division};
use pea_client::state::storage::FileStorage;
use pea_client::{ApiError, Gateway, PeaApi, Session};
use tracing_subscriber::EnvFilter;

use crate::commands::Context;
use crate::terminal::TerminalNavigator;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "E_CONFIG",
            Self::Api(e) => e.error_code(),
            Self::Form(e) => e.error_code(),
            Self::Json(_) => "E_JSON",
            Self::Io(_) => "E_IO",
            Self::InvalidArgument(_) => "E_INVALID_ARGUMENT",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pea", about = "Track a PEA portfolio from the terminal")]
struct Cli {
    /// API origin, e.g. `http://127.0.0.1:8000`.
    #[arg(long, global = true, env = "PEA_API_BASE_URL")]
    base_url: Option<String>,

    /// JSON file holding the session token.
    #[arg(long, global = true, env = "PEA_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Percentage shown when the reference value is zero: `zero` or `na`.
    #[arg(long, global = true, env = "PEA_ZERO_DIVISION")]
    zero_division: Option<String>,

    /// Refresh period of polled cards, in seconds.
    #[arg(long, global = true)]
    poll_interval: Option<u64>,

    /// Response cache TTL in seconds; `0` disables the cache.
    #[arg(long, global = true)]
    cache_ttl: Option<u64>,

    /// Whole-request timeout in seconds; `0` waits indefinitely.
    #[arg(long, global = true)]
    request_timeout: Option<u64>,

    /// Print raw API records as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session token.
    Login(commands::auth::LoginArgs),
    /// Create an account.
    Register(commands::auth::RegisterArgs),
    /// Forget the stored session token.
    Logout,
    /// Show the signed-in user.
    Me,
    /// Show the subscription plan.
    Subscription,
    /// Show every dashboard card, optionally refreshing live.
    Dashboard(commands::dashboard::DashboardArgs),
    /// List, show and add transactions.
    #[command(subcommand)]
    Transactions(commands::transactions::TransactionsCommand),
    #[command(flatten)]
    Portfolio(commands::portfolio::PortfolioCommand),
}

impl Cli {
    fn config(&self) -> Result<ClientConfig, CliError> {
        let mut config = ClientConfig::from_env().map_err(CliError::Config)?;
        if let Some(base_url) = &self.base_url {
            config.base_url = pea_client::config::normalize_base_url(base_url);
        }
        if let Some(path) = &self.session_file {
            config.session_file.clone_from(path);
        }
        if let Some(raw) = &self.zero_division {
            config.zero_division = parse_zero_division(Some(raw)).map_err(CliError::Config)?;
        }
        if let Some(secs) = self.poll_interval {
            config.poll_interval = Duration::from_secs(secs.max(1));
        }
        if let Some(secs) = self.cache_ttl {
            config.cache_ttl = cache_ttl_from_secs(secs);
        }
        if let Some(secs) = self.request_timeout {
            config.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        Ok(config)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}

fn build_context(config: ClientConfig, json: bool) -> Result<Context, CliError> {
    let storage = Arc::new(FileStorage::new(config.session_file.clone()));
    let session = Session::new(storage);
    let gateway = Gateway::new(&config, session, Arc::new(TerminalNavigator))?;
    Ok(Context { api: PeaApi::new(gateway), config, json })
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = build_context(cli.config()?, cli.json)?;
    tracing::debug!(base_url = %ctx.config.base_url, session_file = %ctx.config.session_file.display(), "client configured");

    match cli.command {
        Command::Login(args) => commands::auth::login(&ctx, args).await,
        Command::Register(args) => commands::auth::register(&ctx, args).await,
        Command::Logout => commands::auth::logout(&ctx),
        Command::Me => commands::auth::me(&ctx).await,
        Command::Subscription => commands::auth::subscription(&ctx).await,
        Command::Dashboard(args) => commands::dashboard::run(&ctx, args).await,
        Command::Transactions(command) => commands::transactions::run(&ctx, command).await,
        Command::Portfolio(command) => commands::portfolio::run(&ctx, command).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    init_tracing();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, ".env could not be loaded");
        }
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error[{}]: {e}", e.error_code());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
