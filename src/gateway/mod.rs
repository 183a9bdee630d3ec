//! Outbound request pipeline.
//!
//! This module provides:
//! - Immutable gateway settings ([`GatewayConfig`], [`ApiKey`])
//! - Request description and encoding ([`OutboundRequest`], [`RequestBuilder`], [`Encoding`])
//! - Error classification ([`classify`], [`GatewayError`], [`ErrorKind`])
//! - Log redaction ([`redact`])
//! - The call orchestrator ([`GatewayClient`])

mod classify;
mod client;
mod config;
mod error;
mod redact;
mod request;
mod response;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod redact_tests;
#[cfg(test)]
mod request_tests;

pub use classify::{classify, classify_status};
pub use client::{GatewayClient, LOG_TARGET};
pub use config::{ApiKey, GatewayConfig};
pub use error::{ErrorKind, GatewayError};
pub use redact::{MASK, SENSITIVE_FIELDS, is_sensitive, redact};
pub use request::{CLIENT_USER_AGENT, Encoding, OutboundRequest, RequestBuilder};
pub use response::GatewayResponse;
