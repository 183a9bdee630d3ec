//! Charge endpoints (`/charges`).

use serde_json::{Map, Value, json};

use super::segment;
use crate::gateway::{GatewayClient, GatewayError, GatewayResponse};
use crate::transport::HttpClient;

/// Charge endpoints.
#[derive(Debug)]
pub struct Charges<'a, H> {
    client: &'a GatewayClient<H>,
}

impl<'a, H> Charges<'a, H> {
    pub(super) const fn new(client: &'a GatewayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Charges<'_, H> {
    /// Creates a charge.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn create(&self, data: Value) -> Result<GatewayResponse, GatewayError> {
        self.client.post("charges", data).await
    }

    /// Creates a PIX charge; `payment_method` is set to `pix`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn create_pix(
        &self,
        data: Map<String, Value>,
    ) -> Result<GatewayResponse, GatewayError> {
        self.create_with_method(data, "pix").await
    }

    /// Creates a boleto charge; `payment_method` is set to `boleto`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn create_boleto(
        &self,
        data: Map<String, Value>,
    ) -> Result<GatewayResponse, GatewayError> {
        self.create_with_method(data, "boleto").await
    }

    /// Creates a credit card charge; `payment_method` is set to `credit_card`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn create_credit_card(
        &self,
        data: Map<String, Value>,
    ) -> Result<GatewayResponse, GatewayError> {
        self.create_with_method(data, "credit_card").await
    }

    /// Fetches one charge.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn find(&self, id: &str) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.get(&format!("charges/{id}"), &[]).await
    }

    /// Lists charges matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn list(&self, query: &[(&str, &str)]) -> Result<GatewayResponse, GatewayError> {
        self.client.get("charges", query).await
    }

    /// Captures a pre-authorized charge.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn capture(&self, id: &str, data: Value) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.post(&format!("charges/{id}/capture"), data).await
    }

    /// Replaces the card of a charge.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn edit_card(&self, id: &str, data: Value) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.put(&format!("charges/{id}/card"), data).await
    }

    /// Changes the due date of a charge.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn update_due_date(
        &self,
        id: &str,
        data: Value,
    ) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.put(&format!("charges/{id}/due-date"), data).await
    }

    /// Changes the payment method of a charge.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn update_payment_method(
        &self,
        id: &str,
        data: Value,
    ) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.put(&format!("charges/{id}/payment-method"), data).await
    }

    /// Cancels a charge.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn cancel(&self, id: &str) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.delete(&format!("charges/{id}")).await
    }

    /// Reprocesses a failed charge.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn retry(&self, id: &str) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.post(&format!("charges/{id}/retry"), json!({})).await
    }

    /// Confirms a cash payment.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails.
    pub async fn confirm_cash(
        &self,
        id: &str,
        data: Value,
    ) -> Result<GatewayResponse, GatewayError> {
        let id = segment(id);
        self.client.post(&format!("charges/{id}/confirm-payment"), data).await
    }

    async fn create_with_method(
        &self,
        mut data: Map<String, Value>,
        payment_method: &str,
    ) -> Result<GatewayResponse, GatewayError> {
        data.insert(
            "payment_method".to_string(),
            Value::String(payment_method.to_string()),
        );
        self.create(Value::Object(data)).await
    }
}
