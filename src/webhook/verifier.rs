//! Authentication and decoding of inbound notifications.

use std::fmt;
use std::time::Duration;

use serde_json::Value;

use super::{WebhookError, verify_signature};
use crate::config::defaults;
use crate::time::{Clock, SystemClock};

/// Settings for [`WebhookVerifier`].
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    /// Shared HMAC secret; `None` disables signature checks
    pub secret: Option<String>,

    /// Maximum distance between an event's `timestamp` and now; zero disables the check
    pub tolerance: Duration,

    /// Require both a configured secret and a supplied signature
    pub strict: bool,
}

impl WebhookConfig {
    /// Creates a configuration with no secret and the default tolerance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            secret: None,
            tolerance: defaults::webhook_tolerance(),
            strict: false,
        }
    }

    /// Sets the webhook secret. An empty secret counts as unset.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        self.secret = (!secret.is_empty()).then_some(secret);
        self
    }

    /// Sets the timestamp tolerance.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enables or disables strict mode.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("secret", &self.secret.as_ref().map(|_| "***"))
            .field("tolerance", &self.tolerance)
            .field("strict", &self.strict)
            .finish()
    }
}

/// A verified and decoded notification.
///
/// Interpreting the event type and its `data` is left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookEnvelope {
    payload: Vec<u8>,
    signature: Option<String>,
    event: Value,
}

impl WebhookEnvelope {
    /// Raw payload bytes as received.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Signature claimed by the sender, if any.
    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Event type, e.g. `charge.paid`.
    #[must_use]
    pub fn event_type(&self) -> Option<&str> {
        self.event.get("type").and_then(Value::as_str)
    }

    /// Event id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.event.get("id").and_then(Value::as_str)
    }

    /// The nested `data` object describing the affected resource.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.event.get("data")
    }

    /// The whole decoded payload.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.event
    }

    /// Consumes the envelope, returning the decoded payload.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.event
    }
}

/// Validates inbound notifications and decodes their payload.
///
/// # Verification modes
///
/// - Secret configured and signature supplied: the signature must match,
///   otherwise [`WebhookError::SignatureInvalid`] and nothing is decoded.
/// - Secret or signature absent: verification is skipped and only the JSON
///   shape is checked. This is a reduced-security mode.
/// - Strict mode turns a missing secret into
///   [`WebhookError::ConfigurationMissing`] and a missing signature into
///   [`WebhookError::SignatureMissing`].
///
/// If the decoded object carries a numeric `timestamp` (Unix seconds), events
/// further than the tolerance from the clock are rejected.
///
/// Holds no mutable state; one instance can serve concurrent deliveries.
///
/// # Type Parameters
///
/// - `C`: the clock used for the tolerance check (defaults to [`SystemClock`])
#[derive(Debug, Clone)]
pub struct WebhookVerifier<C = SystemClock> {
    secret: Option<Vec<u8>>,
    tolerance: Duration,
    strict: bool,
    clock: C,
}

impl WebhookVerifier<SystemClock> {
    /// Creates a verifier using the system clock.
    #[must_use]
    pub fn new(config: &WebhookConfig) -> Self {
        Self {
            secret: config
                .secret
                .as_ref()
                .filter(|s| !s.is_empty())
                .map(|s| s.as_bytes().to_vec()),
            tolerance: config.tolerance,
            strict: config.strict,
            clock: SystemClock,
        }
    }
}

impl<C> WebhookVerifier<C> {
    /// Replaces the clock used for the tolerance check.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> WebhookVerifier<C2> {
        WebhookVerifier {
            secret: self.secret,
            tolerance: self.tolerance,
            strict: self.strict,
            clock,
        }
    }

    /// Returns true if a secret is configured.
    #[must_use]
    pub const fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    /// Checks `signature` against `payload` with the configured secret.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::ConfigurationMissing`] if no secret is set.
    pub fn verify(&self, payload: &[u8], signature: &str) -> Result<bool, WebhookError> {
        let secret = self
            .secret
            .as_deref()
            .ok_or(WebhookError::ConfigurationMissing)?;
        Ok(verify_signature(payload, signature, secret))
    }
}

impl<C: Clock> WebhookVerifier<C> {
    /// Authenticates and decodes one notification.
    ///
    /// An empty `signature` is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] when the signature does not match, strict
    /// mode requirements are unmet, the payload is not a JSON object, or
    /// its timestamp is outside the tolerance window.
    pub fn process(
        &self,
        payload: &[u8],
        signature: Option<&str>,
    ) -> Result<WebhookEnvelope, WebhookError> {
        let signature = signature.filter(|s| !s.is_empty());

        self.authenticate(payload, signature)?;
        let event = decode(payload)?;
        self.check_timestamp(&event)?;

        Ok(WebhookEnvelope {
            payload: payload.to_vec(),
            signature: signature.map(ToString::to_string),
            event,
        })
    }

    fn authenticate(&self, payload: &[u8], signature: Option<&str>) -> Result<(), WebhookError> {
        match (self.secret.as_deref(), signature) {
            (Some(secret), Some(signature)) => {
                if verify_signature(payload, signature, secret) {
                    Ok(())
                } else {
                    tracing::warn!("Rejected webhook with invalid signature");
                    Err(WebhookError::SignatureInvalid)
                }
            }
            (None, _) if self.strict => Err(WebhookError::ConfigurationMissing),
            (Some(_), None) if self.strict => Err(WebhookError::SignatureMissing),
            (Some(_), None) => {
                tracing::warn!("Webhook has no signature; accepting unverified payload");
                Ok(())
            }
            (None, _) => {
                tracing::debug!("No webhook secret configured; skipping signature check");
                Ok(())
            }
        }
    }

    fn check_timestamp(&self, event: &Value) -> Result<(), WebhookError> {
        if self.tolerance.is_zero() {
            return Ok(());
        }

        let Some(timestamp) = event.get("timestamp").and_then(Value::as_u64) else {
            return Ok(());
        };

        let age_secs = self.clock.unix_seconds().abs_diff(timestamp);
        let tolerance_secs = self.tolerance.as_secs();

        if age_secs > tolerance_secs {
            return Err(WebhookError::TimestampOutOfTolerance {
                age_secs,
                tolerance_secs,
            });
        }

        Ok(())
    }
}

fn decode(payload: &[u8]) -> Result<Value, WebhookError> {
    let event: Value = serde_json::from_slice(payload)
        .map_err(|e| WebhookError::PayloadMalformed(e.to_string()))?;

    if !event.is_object() {
        return Err(WebhookError::PayloadMalformed(
            "expected a JSON object".to_string(),
        ));
    }

    Ok(event)
}
