//! Customer endpoints (`/customers`).

use serde_json::Value;

use super::segment;
use crate::gateway::{GatewayClient, GatewayError, GatewayResponse};
use crate::transport::HttpClient;

/// Customer endpoints, including stored cards.
#[derive(Debug)]
pub struct Customers<'a, H> {
    client: &'a GatewayClient<H>,
}

impl<'a, H> Customers<'a, H> {
    pub(super) const fn new(client: &'a GatewayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Customers<'_, H> {
    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn create(&self, data: Value) -> Result<GatewayResponse, GatewayError> {
        self.client.post("customers", data).await
    }

    /// Fetches one customer.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn find(&self, id: &str) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.get(&format!("customers/{id}"), &[]).await
    }

    /// Lists customers matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn list(&self, query: &[(&str, &str)]) -> Result<GatewayResponse, GatewayError> {
        self.client.get("customers", query).await
    }

    /// Updates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn update(&self, id: &str, data: Value) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.put(&format!("customers/{id}"), data).await
    }

    /// Stores a card for a customer.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn create_card(
        &self,
        customer_id: &str,
        data: Value,
    ) -> Result<GatewayResponse, GatewayError> {
        let customer_id = segment(customer_id);
        self.client.post(&format!("customers/{customer_id}/cards"), data).await
    }

    /// Lists a customer's stored cards.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn list_cards(&self, customer_id: &str) -> Result<GatewayResponse, GatewayError> {
        let customer_id = segment(customer_id);
        self.client.get(&format!("customers/{customer_id}/cards"), &[]).await
    }

    /// Deletes a stored card.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn delete_card(
        &self,
        customer_id: &str,
        card_id: &str,
    ) -> Result<GatewayResponse, GatewayError> {
        let customer_id = segment(customer_id);
        let card_id = segment(card_id);
        self.client.delete(&format!("customers/{customer_id}/cards/{card_id}")).await
    }
}
