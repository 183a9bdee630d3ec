//! Classification of transport outcomes into gateway results.
//!
//! | Outcome                                   | Result                         |
//! |-------------------------------------------|--------------------------------|
//! | no response                               | `Transport`, cause preserved   |
//! | 2xx                                       | `Ok(GatewayResponse)`          |
//! | non-2xx, JSON body with `message`         | `Http`, provider message       |
//! | non-2xx, JSON body without `message`      | `Http`, synthesized message    |
//! | non-2xx, body is not JSON                 | `Http`, synthesized with body  |

use http::StatusCode;
use serde_json::Value;

use super::{GatewayError, GatewayResponse};
use crate::transport::{HttpError, HttpResponse};

/// Classifies the outcome of one transport call.
///
/// # Errors
///
/// Returns [`GatewayError::Transport`] when no response was obtained and
/// [`GatewayError::Http`] for any non-2xx status.
pub fn classify(
    outcome: Result<HttpResponse, HttpError>,
) -> Result<GatewayResponse, GatewayError> {
    let response = outcome?;

    if response.is_success() {
        return Ok(response.into());
    }

    Err(classify_status(response.status, &response.body))
}

/// Builds the error for a non-2xx response.
///
/// Never fails: a body that is not JSON only changes how the message is
/// produced.
#[must_use]
pub fn classify_status(status: StatusCode, body: &[u8]) -> GatewayError {
    let raw = String::from_utf8_lossy(body).into_owned();
    let parsed = serde_json::from_slice::<Value>(body).ok();

    let message = parsed
        .as_ref()
        .and_then(provider_message)
        .unwrap_or_else(|| format!("HTTP {}: {raw}", status.as_u16()));

    let errors = parsed
        .as_ref()
        .and_then(|value| value.get("errors"))
        .filter(|errors| !errors.is_null())
        .cloned();

    GatewayError::Http {
        status,
        message,
        body: raw,
        errors,
    }
}

fn provider_message(body: &Value) -> Option<String> {
    match body.get("message")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
