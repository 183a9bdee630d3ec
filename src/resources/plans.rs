//! Plan endpoints (`/plans`).

use serde_json::Value;

use super::segment;
use crate::gateway::{GatewayClient, GatewayError, GatewayResponse};
use crate::transport::HttpClient;

/// Plan endpoints, including plan items.
#[derive(Debug)]
pub struct Plans<'a, H> {
    client: &'a GatewayClient<H>,
}

impl<'a, H> Plans<'a, H> {
    pub(super) const fn new(client: &'a GatewayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Plans<'_, H> {
    /// Creates a plan.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn create(&self, data: Value) -> Result<GatewayResponse, GatewayError> {
        self.client.post("plans", data).await
    }

    /// Fetches one plan.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn find(&self, id: &str) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.get(&format!("plans/{id}"), &[]).await
    }

    /// Lists plans matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn list(&self, query: &[(&str, &str)]) -> Result<GatewayResponse, GatewayError> {
        self.client.get("plans", query).await
    }

    /// Updates a plan.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn update(&self, id: &str, data: Value) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.put(&format!("plans/{id}"), data).await
    }

    /// Deletes a plan.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn delete(&self, id: &str) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.delete(&format!("plans/{id}")).await
    }

    /// Adds an item to a plan.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn add_item(&self, id: &str, data: Value) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.post(&format!("plans/{id}/items"), data).await
    }

    /// Updates a plan item.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn update_item(
        &self,
        id: &str,
        item_id: &str,
        data: Value,
    ) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        let item_id = segment(item_id);
        self.client.put(&format!("plans/{id}/items/{item_id}"), data).await
    }

    /// Removes an item from a plan.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn delete_item(
        &self,
        id: &str,
        item_id: &str,
    ) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        let item_id = segment(item_id);
        self.client.delete(&format!("plans/{id}/items/{item_id}")).await
    }

    /// Lists the items of a plan.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn list_items(&self, id: &str) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.get(&format!("plans/{id}/items"), &[]).await
    }
}
