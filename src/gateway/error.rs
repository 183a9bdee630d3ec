//! Error taxonomy for outbound calls.

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::transport::HttpError;

/// Coarse category of a [`GatewayError`], for callers that only branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response was obtained
    Transport,
    /// A response arrived with a non-2xx status
    Http,
    /// A body that should be JSON was not
    Decode,
}

/// Error returned by every gateway call.
///
/// Created once by the classifier and handed to the caller; the gateway
/// never retries on its own.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No response was obtained (connection, DNS, TLS, timeout).
    #[error("Request failed: {0}")]
    Transport(#[from] HttpError),

    /// The API answered with a non-2xx status.
    ///
    /// `message` is the provider's `message` field when the body is JSON
    /// carrying one, otherwise `HTTP {status}: {body}`.
    #[error("{message}")]
    Http {
        /// Response status
        status: StatusCode,
        /// Provider message or synthesized description
        message: String,
        /// Raw response body (lossy UTF-8)
        body: String,
        /// Provider `errors` field, when present
        errors: Option<Value>,
    },

    /// A response body could not be decoded as the expected JSON.
    #[error("Invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GatewayError {
    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Http { .. } => ErrorKind::Http,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Returns the HTTP status, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the provider or synthesized message of an HTTP error.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Returns the provider's field-level validation errors, if any.
    #[must_use]
    pub const fn errors(&self) -> Option<&Value> {
        match self {
            Self::Http { errors, .. } => errors.as_ref(),
            _ => None,
        }
    }

    /// 401: the API key was rejected.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// 404: the resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// 400 or 422: the request was rejected as invalid.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY)
        )
    }

    /// 429: too many requests.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(StatusCode::TOO_MANY_REQUESTS)
    }

    /// 5xx.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_server_error())
    }
}
