//! Inbound webhook verification.
//!
//! This module provides:
//! - HMAC-SHA256 signatures ([`compute_signature`], [`verify_signature`])
//! - Authentication and decoding of notifications ([`WebhookVerifier`], [`WebhookEnvelope`])
//! - Verifier settings ([`WebhookConfig`])

mod error;
mod signature;
mod verifier;


pub use error::WebhookError;
pub use signature::{compute_signature, verify_signature};
pub use verifier::{WebhookConfig, WebhookEnvelope, WebhookVerifier};
