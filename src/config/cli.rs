//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.
//! Every connection option can also come from a `PAGARME_*` environment
//! variable; an explicit flag wins over the environment.

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};

/// Pagar.me API gateway client
///
/// Sends authenticated calls to the Pagar.me API and verifies inbound
/// webhook notifications.
#[derive(Debug, Parser)]
#[command(name = "pagarme")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Secret API key
    #[arg(
        long = "api-key",
        env = "PAGARME_API_KEY",
        global = true,
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// API base URL
    #[arg(long = "base-url", env = "PAGARME_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// API version path segment
    #[arg(long = "api-version", env = "PAGARME_API_VERSION", global = true)]
    pub api_version: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "PAGARME_TIMEOUT", global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Connect timeout in seconds
    #[arg(
        long = "connect-timeout",
        env = "PAGARME_CONNECT_TIMEOUT",
        global = true,
        value_name = "SECS"
    )]
    pub connect_timeout: Option<u64>,

    /// Log every API call with redacted request data
    ///
    /// From the environment, `0`, `false`, `no`, `off` and an empty value
    /// turn it off; anything else turns it on.
    #[arg(
        long = "log-requests",
        env = "PAGARME_LOG_REQUESTS",
        global = true,
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub log_requests: bool,

    /// Shared secret for webhook signatures
    #[arg(
        long = "webhook-secret",
        env = "PAGARME_WEBHOOK_SECRET",
        global = true,
        hide_env_values = true
    )]
    pub webhook_secret: Option<String>,

    /// Webhook timestamp tolerance in seconds (0 disables the check)
    #[arg(
        long = "webhook-tolerance",
        env = "PAGARME_WEBHOOK_TOLERANCE",
        global = true,
        value_name = "SECS"
    )]
    pub webhook_tolerance: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for pagarme
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show package and configuration information
    Info,

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "pagarme.toml")]
        output: PathBuf,
    },

    /// Send one API call and print the response body
    Request {
        /// HTTP method (GET, POST, PUT, PATCH, DELETE)
        method: String,

        /// Path relative to the versioned API root, e.g. `charges/ch_123`
        path: String,

        /// JSON request body
        #[arg(long, value_name = "JSON")]
        data: Option<String>,

        /// Query parameter in 'Key=Value' format (can be specified multiple times)
        #[arg(long = "query", value_name = "K=V")]
        query: Vec<String>,

        /// Send the body as multipart/form-data
        #[arg(long)]
        multipart: bool,
    },

    /// Print the signature of a payload file
    Sign {
        /// File holding the raw payload
        #[arg(long)]
        payload: PathBuf,
    },

    /// Verify and decode a webhook payload file
    VerifyWebhook {
        /// File holding the raw payload
        #[arg(long)]
        payload: PathBuf,

        /// Signature sent with the notification
        #[arg(long)]
        signature: Option<String>,

        /// Require a configured secret and a signature
        #[arg(long)]
        strict: bool,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
