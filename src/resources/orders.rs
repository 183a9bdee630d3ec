//! Order endpoints (`/orders`).

use serde_json::{Value, json};

use super::segment;
use crate::gateway::{GatewayClient, GatewayError, GatewayResponse};
use crate::transport::HttpClient;

/// Order endpoints.
#[derive(Debug)]
pub struct Orders<'a, H> {
    client: &'a GatewayClient<H>,
}

impl<'a, H> Orders<'a, H> {
    pub(super) const fn new(client: &'a GatewayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Orders<'_, H> {
    /// Creates an order.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn create(&self, data: Value) -> Result<GatewayResponse, GatewayError> {
        self.client.post("orders", data).await
    }

    /// Fetches one order.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn find(&self, id: &str) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.get(&format!("orders/{id}"), &[]).await
    }

    /// Lists orders matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn list(&self, query: &[(&str, &str)]) -> Result<GatewayResponse, GatewayError> {
        self.client.get("orders", query).await
    }

    /// Closes an order with the given final status (`paid`, `canceled` or `failed`).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn close(&self, id: &str, status: &str) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.patch(&format!("orders/{id}/closed"), json!({ "status": status })).await
    }
}
