//! Validated configuration after merging CLI, environment and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::gateway::{ApiKey, GatewayConfig};
use crate::webhook::WebhookConfig;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args (which already
/// carry environment values) and an optional TOML config.
///
/// The API key is optional here so that commands which never call the API
/// (`info`, `sign`, `verify-webhook`) work without one;
/// [`ValidatedConfig::gateway_config`] enforces it.
#[derive(Clone)]
pub struct ValidatedConfig {
    /// Secret API key
    pub api_key: Option<ApiKey>,

    /// API base URL
    pub base_url: Url,

    /// API version path segment
    pub api_version: String,

    /// Request timeout
    pub timeout: Duration,

    /// Connect timeout
    pub connect_timeout: Duration,

    /// Whether API calls are logged
    pub log_requests: bool,

    /// Shared secret for webhook signatures
    pub webhook_secret: Option<String>,

    /// Webhook timestamp tolerance
    pub webhook_tolerance: Duration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ base_url: {}, api_version: {}, api_key: {}, timeout: {}s, \
             connect_timeout: {}s, log_requests: {}, webhook_secret: {}, webhook_tolerance: {}s }}",
            self.base_url,
            self.api_version,
            set_or_unset(self.api_key.is_some()),
            self.timeout.as_secs(),
            self.connect_timeout.as_secs(),
            self.log_requests,
            set_or_unset(self.webhook_secret.is_some()),
            self.webhook_tolerance.as_secs(),
        )
    }
}

impl fmt::Debug for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedConfig")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url.as_str())
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("log_requests", &self.log_requests)
            .field("webhook_secret", &self.webhook_secret.as_ref().map(|_| "***"))
            .field("webhook_tolerance", &self.webhook_tolerance)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments and environment variables take precedence over TOML
    /// config values, which take precedence over built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base URL is invalid or not http(s)
    /// - The API version is empty
    /// - A timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let api_key = cli
            .api_key
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.api_key.as_deref()))
            .filter(|key| !key.is_empty())
            .map(ApiKey::new);

        let base_url = Self::resolve_base_url(cli, toml)?;
        let api_version = Self::resolve_api_version(cli, toml)?;

        let timeout = Self::resolve_timeout(
            field::TIMEOUT,
            cli.timeout,
            toml.and_then(|t| t.http.timeout),
            defaults::TIMEOUT_SECS,
        )?;
        let connect_timeout = Self::resolve_timeout(
            field::CONNECT_TIMEOUT,
            cli.connect_timeout,
            toml.and_then(|t| t.http.connect_timeout),
            defaults::CONNECT_TIMEOUT_SECS,
        )?;

        // Flags only enable
        let log_requests = cli.log_requests || toml.is_some_and(|t| t.logging.log_requests);

        let webhook_secret = cli
            .webhook_secret
            .clone()
            .or_else(|| toml.and_then(|t| t.webhook.secret.clone()))
            .filter(|secret| !secret.is_empty());

        // Zero is allowed and disables the check
        let webhook_tolerance = Duration::from_secs(
            cli.webhook_tolerance
                .or_else(|| toml.and_then(|t| t.webhook.tolerance))
                .unwrap_or(defaults::WEBHOOK_TOLERANCE_SECS),
        );

        Ok(Self {
            api_key,
            base_url,
            api_version,
            timeout,
            connect_timeout,
            log_requests,
            webhook_secret,
            webhook_tolerance,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Builds the gateway configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if no API key is configured.
    pub fn gateway_config(&self) -> Result<GatewayConfig, ConfigError> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            ConfigError::missing(
                field::API_KEY,
                "Use --api-key, set PAGARME_API_KEY, or set api.api_key in config file",
            )
        })?;

        Ok(GatewayConfig::new(api_key)
            .with_base_url(self.base_url.clone())
            .with_api_version(self.api_version.clone())
            .with_timeout(self.timeout)
            .with_connect_timeout(self.connect_timeout)
            .with_log_requests(self.log_requests))
    }

    /// Builds the webhook verifier configuration.
    #[must_use]
    pub fn webhook_config(&self) -> WebhookConfig {
        let config = WebhookConfig::new().with_tolerance(self.webhook_tolerance);
        match self.webhook_secret {
            Some(ref secret) => config.with_secret(secret.clone()),
            None => config,
        }
    }

    fn resolve_base_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // Priority: CLI/env > TOML > default
        let url_str = cli
            .base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.base_url.as_deref()))
            .unwrap_or(defaults::BASE_URL);

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: format!("unsupported scheme '{}', expected http or https", url.scheme()),
            });
        }

        Ok(url)
    }

    fn resolve_api_version(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let version = cli
            .api_version
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.api_version.as_deref()))
            .unwrap_or(defaults::API_VERSION)
            .trim_matches('/');

        if version.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: field::API_VERSION,
                reason: "must not be empty".to_string(),
            });
        }

        Ok(version.to_string())
    }

    fn resolve_timeout(
        field: &'static str,
        cli: Option<u64>,
        toml: Option<u64>,
        default: u64,
    ) -> Result<Duration, ConfigError> {
        let seconds = cli.or(toml).unwrap_or(default);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field,
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

const fn set_or_unset(set: bool) -> &'static str {
    if set { "set" } else { "unset" }
}
