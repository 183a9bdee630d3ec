//! Error types for inbound webhook handling.

use thiserror::Error;

/// Reason an inbound notification was rejected.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// A signature was checked and did not match the payload.
    ///
    /// The payload was not decoded.
    #[error("Invalid webhook signature")]
    SignatureInvalid,

    /// Strict mode requires a signature and none was supplied.
    #[error("Missing webhook signature")]
    SignatureMissing,

    /// Strict mode requires a webhook secret and none is configured.
    #[error("Webhook secret is not configured")]
    ConfigurationMissing,

    /// The payload is not a JSON object.
    #[error("Invalid JSON payload: {0}")]
    PayloadMalformed(String),

    /// The event's `timestamp` lies outside the tolerance window.
    #[error("Webhook timestamp is {age_secs}s away from now (tolerance {tolerance_secs}s)")]
    TimestampOutOfTolerance {
        /// Absolute distance between event time and now
        age_secs: u64,
        /// Configured tolerance
        tolerance_secs: u64,
    },
}
