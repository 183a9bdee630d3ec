//! Hook endpoints (`/hooks`): the provider's record of webhook deliveries.

use serde_json::{Value, json};

use super::segment;
use crate::gateway::{GatewayClient, GatewayError, GatewayResponse};
use crate::transport::HttpClient;

/// Hook endpoints.
#[derive(Debug)]
pub struct Hooks<'a, H> {
    client: &'a GatewayClient<H>,
}

impl<'a, H> Hooks<'a, H> {
    pub(super) const fn new(client: &'a GatewayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Hooks<'_, H> {
    /// Creates a hook.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn create(&self, data: Value) -> Result<GatewayResponse, GatewayError> {
        self.client.post("hooks", data).await
    }

    /// Fetches one hook.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn find(&self, id: &str) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.get(&format!("hooks/{id}"), &[]).await
    }

    /// Lists hooks matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn list(&self, query: &[(&str, &str)]) -> Result<GatewayResponse, GatewayError> {
        self.client.get("hooks", query).await
    }

    /// Updates a hook.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn update(&self, id: &str, data: Value) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.put(&format!("hooks/{id}"), data).await
    }

    /// Deletes a hook.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn delete(&self, id: &str) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.delete(&format!("hooks/{id}")).await
    }

    /// Asks the provider to deliver a hook again.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn retry(&self, id: &str) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.post(&format!("hooks/{id}/retry"), json!({})).await
    }
}
