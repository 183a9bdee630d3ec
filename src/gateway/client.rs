//! The single entry point for outbound API calls.

use serde_json::Value;

use super::{
    GatewayConfig, GatewayError, GatewayResponse, OutboundRequest, RequestBuilder, classify,
    redact,
};
use crate::transport::{HttpClient, HttpError, ReqwestClient};

/// Target of every request and failure event.
pub const LOG_TARGET: &str = "pagarme_gateway::gateway";

/// Authenticated client for the payment API.
///
/// Every call performs exactly one transport request and returns either a
/// 2xx [`GatewayResponse`] or a classified [`GatewayError`]. There is no
/// retry: repeating GET/PUT/PATCH/DELETE calls is safe for idempotent
/// endpoints, repeating POST is not, and that decision belongs to the caller.
///
/// # Logging
///
/// When `log_requests` is enabled, each call emits one `info` event with
/// the verb, the resolved URL (query stripped) and the redacted request
/// data. A failed call emits one further event: `error` with status and
/// raw body for HTTP errors, `warn` for transport failures. All events use
/// the [`LOG_TARGET`] target.
///
/// # Example
///
/// ```no_run
/// use pagarme_gateway::gateway::{ApiKey, GatewayClient, GatewayConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GatewayConfig::new(ApiKey::new("sk_test_123"));
/// let gateway = GatewayClient::from_config(&config)?;
/// let charge = gateway.get("charges/ch_123", &[]).await?;
/// println!("{}", charge.text());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GatewayClient<H> {
    client: H,
    builder: RequestBuilder,
    log_requests: bool,
}

impl GatewayClient<ReqwestClient> {
    /// Creates a client backed by reqwest with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the underlying HTTP client cannot be built.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, HttpError> {
        let client = ReqwestClient::with_timeouts(config.timeout, config.connect_timeout)?;
        Ok(Self::new(config, client))
    }
}

impl<H> GatewayClient<H> {
    /// Creates a client over an arbitrary transport.
    #[must_use]
    pub fn new(config: &GatewayConfig, client: H) -> Self {
        Self {
            client,
            builder: RequestBuilder::new(config),
            log_requests: config.log_requests,
        }
    }

    /// Returns the request builder used for every call.
    #[must_use]
    pub const fn request_builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &H {
        &self.client
    }

    /// Returns true if calls are logged.
    #[must_use]
    pub const fn log_requests(&self) -> bool {
        self.log_requests
    }
}

impl<H: HttpClient> GatewayClient<H> {
    /// Executes one request.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if no response was obtained and
    /// [`GatewayError::Http`] for a non-2xx response.
    pub async fn execute(&self, request: OutboundRequest) -> Result<GatewayResponse, GatewayError> {
        let result = self.send(&request).await;

        if let Err(error) = &result {
            self.log_failure(&request, error);
        }

        result
    }

    /// Sends a GET request with the given query parameters.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<GatewayResponse, GatewayError> {
        self.execute(OutboundRequest::get(path).with_query_pairs(query)).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn post(&self, path: &str, body: Value) -> Result<GatewayResponse, GatewayError> {
        self.execute(OutboundRequest::post(path).with_body(body)).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn put(&self, path: &str, body: Value) -> Result<GatewayResponse, GatewayError> {
        self.execute(OutboundRequest::put(path).with_body(body)).await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn patch(&self, path: &str, body: Value) -> Result<GatewayResponse, GatewayError> {
        self.execute(OutboundRequest::patch(path).with_body(body)).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn delete(&self, path: &str) -> Result<GatewayResponse, GatewayError> {
        self.execute(OutboundRequest::delete(path)).await
    }

    async fn send(&self, request: &OutboundRequest) -> Result<GatewayResponse, GatewayError> {
        let http_request = self.builder.build(request)?;
        self.log_request(request, &http_request.url);

        classify(self.client.request(http_request).await)
    }

    fn log_request(&self, request: &OutboundRequest, url: &url::Url) {
        if !self.log_requests {
            return;
        }

        let mut url = url.clone();
        url.set_query(None);

        tracing::info!(
            target: LOG_TARGET,
            method = %request.method,
            url = %url,
            data = %redact(&request.log_data()),
            "Pagarme API request"
        );
    }

    fn log_failure(&self, request: &OutboundRequest, error: &GatewayError) {
        if !self.log_requests {
            return;
        }

        match error {
            GatewayError::Http {
                status,
                message,
                body,
                ..
            } => tracing::error!(
                target: LOG_TARGET,
                status_code = status.as_u16(),
                response_body = %body,
                error = %message,
                "Pagarme API error"
            ),
            other => tracing::warn!(
                target: LOG_TARGET,
                method = %request.method,
                path = %request.path,
                error = %other,
                "Pagarme API request failed"
            ),
        }
    }
}
