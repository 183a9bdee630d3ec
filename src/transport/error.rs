//! Error types for the transport boundary.

use thiserror::Error;

/// Failure to obtain any HTTP response at all.
///
/// A response with a non-2xx status is *not* an `HttpError`; that case is
/// classified by the gateway layer.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS failures and bodies that could not be read to completion.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// Either the connect timeout or the overall request timeout elapsed.
    #[error("Request timed out")]
    Timeout,

    /// The resolved URL or request could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
