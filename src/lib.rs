//! Client gateway for the Pagar.me payment API.
//!
//! Every outbound call goes through one pipeline: build an authenticated
//! request, send it once, classify the outcome, and optionally log it with
//! sensitive fields masked. Inbound webhook notifications are authenticated
//! with HMAC-SHA256 before their payload is decoded.
//!
//! - [`gateway`]: request building, error classification, redaction and the [`gateway::GatewayClient`]
//! - [`resources`]: endpoint wrappers (charges, customers, orders, ...)
//! - [`webhook`]: signature verification and decoding of notifications
//! - [`transport`]: the HTTP boundary and its reqwest implementation
//! - [`config`]: CLI, environment and TOML configuration

pub mod config;
pub mod gateway;
pub mod resources;
pub mod time;
pub mod transport;
pub mod webhook;
