//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default API base URL.
pub const BASE_URL: &str = "https://api.pagar.me/core";

/// Default API version path segment.
pub const API_VERSION: &str = "v5";

/// Default overall request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Default connect timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default webhook timestamp tolerance in seconds.
pub const WEBHOOK_TOLERANCE_SECS: u64 = 300;

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}

/// Default connect timeout as Duration.
#[must_use]
pub const fn connect_timeout() -> Duration {
    Duration::from_secs(CONNECT_TIMEOUT_SECS)
}

/// Default webhook tolerance as Duration.
#[must_use]
pub const fn webhook_tolerance() -> Duration {
    Duration::from_secs(WEBHOOK_TOLERANCE_SECS)
}
