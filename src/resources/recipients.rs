//! Recipient endpoints (`/recipients`).

use serde_json::Value;

use super::segment;
use crate::gateway::{GatewayClient, GatewayError, GatewayResponse};
use crate::transport::HttpClient;

/// Recipient endpoints.
#[derive(Debug)]
pub struct Recipients<'a, H> {
    client: &'a GatewayClient<H>,
}

impl<'a, H> Recipients<'a, H> {
    pub(super) const fn new(client: &'a GatewayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Recipients<'_, H> {
    /// Creates a recipient.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn create(&self, data: Value) -> Result<GatewayResponse, GatewayError> {
        self.client.post("recipients", data).await
    }

    /// Fetches one recipient.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn find(&self, id: &str) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.get(&format!("recipients/{id}"), &[]).await
    }

    /// Updates a recipient.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn update(&self, id: &str, data: Value) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.put(&format!("recipients/{id}"), data).await
    }

    /// Lists all recipients.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn list(&self) -> Result<GatewayResponse, GatewayError> {
        self.client.get("recipients", &[]).await
    }
}
