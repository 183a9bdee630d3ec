//! Subscription endpoints (`/subscriptions`).

use serde_json::Value;

use super::segment;
use crate::gateway::{GatewayClient, GatewayError, GatewayResponse};
use crate::transport::HttpClient;

/// Subscription endpoints.
#[derive(Debug)]
pub struct Subscriptions<'a, H> {
    client: &'a GatewayClient<H>,
}

impl<'a, H> Subscriptions<'a, H> {
    pub(super) const fn new(client: &'a GatewayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Subscriptions<'_, H> {
    /// Creates a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn create(&self, data: Value) -> Result<GatewayResponse, GatewayError> {
        self.client.post("subscriptions", data).await
    }

    /// Fetches one subscription.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn find(&self, id: &str) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.get(&format!("subscriptions/{id}"), &[]).await
    }

    /// Lists subscriptions matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn list(&self, query: &[(&str, &str)]) -> Result<GatewayResponse, GatewayError> {
        self.client.get("subscriptions", query).await
    }

    /// Cancels a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn cancel(&self, id: &str) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.delete(&format!("subscriptions/{id}")).await
    }
}
