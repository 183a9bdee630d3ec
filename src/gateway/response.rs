//! Successful API responses.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::GatewayError;
use crate::transport::HttpResponse;

/// A 2xx response, owned by the caller.
///
/// The body is kept raw; decoding happens on demand.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Raw response body
    pub body: Vec<u8>,
}

impl GatewayResponse {
    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Decode`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, GatewayError> {
        serde_json::from_slice(&self.body).map_err(GatewayError::Decode)
    }

    /// Decodes the body into a JSON tree.
    ///
    /// An empty body (e.g. `204 No Content`) decodes to `null`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Decode`] if the body is not valid JSON.
    pub fn json_value(&self) -> Result<Value, GatewayError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        self.json()
    }
}

impl From<HttpResponse> for GatewayResponse {
    fn from(response: HttpResponse) -> Self {
        Self {
            status: response.status,
            headers: response.headers,
            body: response.body,
        }
    }
}
