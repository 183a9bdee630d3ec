//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments and the environment.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// API connection section
    #[serde(default)]
    pub api: ApiSection,

    /// HTTP transport section
    #[serde(default)]
    pub http: HttpSection,

    /// Logging section
    #[serde(default)]
    pub logging: LoggingSection,

    /// Inbound webhook section
    #[serde(default)]
    pub webhook: WebhookSection,
}

/// API connection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    /// Secret API key
    pub api_key: Option<String>,

    /// API base URL
    pub base_url: Option<String>,

    /// API version path segment
    pub api_version: Option<String>,
}

/// HTTP transport section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpSection {
    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// Connect timeout in seconds
    pub connect_timeout: Option<u64>,
}

/// Logging section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Log every API call with redacted request data
    #[serde(default)]
    pub log_requests: bool,
}

/// Inbound webhook section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Shared secret for webhook signatures
    pub secret: Option<String>,

    /// Timestamp tolerance in seconds
    pub tolerance: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Pagar.me gateway configuration file
# Every value can be overridden by a CLI flag or a PAGARME_* environment variable.

[api]
# Secret API key (required for API calls)
# Prefer the PAGARME_API_KEY environment variable over storing it here.
# api_key = "sk_test_..."

# API base URL (default: https://api.pagar.me/core)
# base_url = "https://api.pagar.me/core"

# API version path segment (default: v5)
# api_version = "v5"

[http]
# Request timeout in seconds (default: 30)
timeout = 30

# Connect timeout in seconds (default: 10)
connect_timeout = 10

[logging]
# Log every API call; card, cvv, password and token fields are masked
log_requests = false

[webhook]
# Shared secret for webhook signatures
# Without it, signatures are not checked.
# secret = "..."

# Reject events whose numeric `timestamp` is further than this from now
# (seconds, default: 300, 0 disables the check)
# tolerance = 300
"#
    .to_string()
}
