//! Immutable settings for the outbound gateway.

use std::fmt;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use url::Url;

use crate::config::defaults;

/// Secret API key.
///
/// `Debug` and `Display` never print the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw API key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the raw key.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns the HTTP Basic credential `base64(key + ":")`.
    ///
    /// The key is the username; the password half is always empty.
    #[must_use]
    pub fn basic_credential(&self) -> String {
        STANDARD.encode(format!("{}:", self.0))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Settings for [`GatewayClient`](super::GatewayClient).
///
/// Built once at startup and never mutated; every component that needs it
/// receives it explicitly at construction.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Credential sent as HTTP Basic username
    pub api_key: ApiKey,

    /// API root, e.g. `https://api.pagar.me/core`
    pub base_url: Url,

    /// Version segment inserted between base URL and path
    pub api_version: String,

    /// Overall request timeout
    pub timeout: Duration,

    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,

    /// Emit one structured log event per call
    pub log_requests: bool,
}

impl GatewayConfig {
    /// Creates a configuration with default URL, version and timeouts.
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: Url::parse(defaults::BASE_URL).expect("default base URL is a valid URL"),
            api_version: defaults::API_VERSION.to_string(),
            timeout: defaults::timeout(),
            connect_timeout: defaults::connect_timeout(),
            log_requests: false,
        }
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sets the API version segment.
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Sets the overall request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Enables or disables request logging.
    #[must_use]
    pub const fn with_log_requests(mut self, log_requests: bool) -> Self {
        self.log_requests = log_requests;
        self
    }
}
