//! Typed wrappers for the API's resources.
//!
//! Each wrapper borrows a [`GatewayClient`] and maps method names onto
//! paths and verbs. They add no behaviour of their own: every call returns
//! the raw [`GatewayResponse`](crate::gateway::GatewayResponse) or a
//! classified [`GatewayError`](crate::gateway::GatewayError).
//!
//! ```no_run
//! use pagarme_gateway::gateway::{ApiKey, GatewayClient, GatewayConfig};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = GatewayClient::from_config(&GatewayConfig::new(ApiKey::new("sk_test_123")))?;
//! let order = gateway.orders().find("or_123").await?;
//! let charges = gateway.charges().list(&[("status", "paid")]).await?;
//! gateway.hooks().retry("hook_123").await?;
//! # let _ = (order, charges, json!({}));
//! # Ok(())
//! # }
//! ```

mod charges;
mod customers;
mod hooks;
mod orders;
mod plans;
mod recipients;
mod subscriptions;


pub use charges::Charges;
pub use customers::Customers;
pub use hooks::Hooks;
pub use orders::Orders;
pub use plans::Plans;
pub use recipients::Recipients;
pub use subscriptions::Subscriptions;

use percent_encoding::{AsciiSet, CONTROLS, PercentEncode, utf8_percent_encode};

use crate::gateway::GatewayClient;

/// Bytes escaped when an id is placed into a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Encodes an id so it stays a single path segment.
fn segment(id: &str) -> PercentEncode<'_> {
    utf8_percent_encode(id, SEGMENT)
}

impl<H> GatewayClient<H> {
    /// Charge endpoints.
    #[must_use]
    pub const fn charges(&self) -> Charges<'_, H> {
        Charges::new(self)
    }

    /// Customer endpoints.
    #[must_use]
    pub const fn customers(&self) -> Customers<'_, H> {
        Customers::new(self)
    }

    /// Webhook (hook) endpoints.
    #[must_use]
    pub const fn hooks(&self) -> Hooks<'_, H> {
        Hooks::new(self)
    }

    /// Order endpoints.
    #[must_use]
    pub const fn orders(&self) -> Orders<'_, H> {
        Orders::new(self)
    }

    /// Plan endpoints.
    #[must_use]
    pub const fn plans(&self) -> Plans<'_, H> {
        Plans::new(self)
    }

    /// Recipient endpoints.
    #[must_use]
    pub const fn recipients(&self) -> Recipients<'_, H> {
        Recipients::new(self)
    }

    /// Subscription endpoints.
    #[must_use]
    pub const fn subscriptions(&self) -> Subscriptions<'_, H> {
        Subscriptions::new(self)
    }
}
