//! Configuration layer for the gateway and the `pagarme` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **Environment variables** - `PAGARME_API_KEY`, `PAGARME_BASE_URL`,
//!    `PAGARME_API_VERSION`, `PAGARME_TIMEOUT`, `PAGARME_CONNECT_TIMEOUT`,
//!    `PAGARME_LOG_REQUESTS`, `PAGARME_WEBHOOK_SECRET`, `PAGARME_WEBHOOK_TOLERANCE`
//! 3. **TOML config file**
//! 4. **Built-in defaults**
//!
//! # Boolean Flag Semantics
//!
//! `log_requests` uses OR semantics: if enabled by the CLI, the environment
//! or the TOML file, the result is `true`.
//!
//! # Empty Secrets
//!
//! An empty API key or webhook secret counts as unset.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{
    ApiSection, HttpSection, LoggingSection, TomlConfig, WebhookSection, default_config_template,
};
pub use validated::{ValidatedConfig, write_default_config};
