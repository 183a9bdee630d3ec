//! Command execution logic.
//!
//! Each subcommand other than `init` is carried out here against a
//! validated configuration. Output goes to stdout; logs go to stderr.

use std::path::{Path, PathBuf};

use http::Method;
use serde_json::Value;
use thiserror::Error;

use pagarme_gateway::config::{Command, ConfigError, ValidatedConfig, field};
use pagarme_gateway::gateway::{CLIENT_USER_AGENT, GatewayClient, GatewayError, OutboundRequest};
use pagarme_gateway::transport::{HttpClient, HttpError};
use pagarme_gateway::webhook::{WebhookError, WebhookVerifier, compute_signature};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Configuration is incomplete for the requested command.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP method is not one the API accepts.
    #[error("Invalid HTTP method '{0}': expected GET, POST, PUT, PATCH or DELETE")]
    InvalidMethod(String),

    /// A query parameter is not in `Key=Value` form.
    #[error("Invalid query parameter '{0}': expected 'Key=Value'")]
    InvalidQuery(String),

    /// The request body is not valid JSON.
    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// Failed to read a payload file.
    #[error("Failed to read payload file '{}': {source}", path.display())]
    PayloadRead {
        /// Path to the payload file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    ClientCreation(#[source] HttpError),

    /// The API call failed.
    #[error("API call failed: {0}")]
    Gateway(#[from] GatewayError),

    /// The webhook was rejected.
    #[error("Webhook rejected: {0}")]
    Webhook(#[from] WebhookError),
}

/// Executes one subcommand.
///
/// # Errors
///
/// Returns [`RunError`] if the command fails; configuration problems
/// surface as [`RunError::Config`].
///
/// Excluded from coverage - performs real I/O against the API.
#[cfg(not(tarpaulin_include))]
pub async fn execute(command: Command, config: ValidatedConfig) -> Result<(), RunError> {
    match command {
        Command::Info => {
            print!("{}", info_report(&config));
            Ok(())
        }
        // Handled before configuration is loaded
        Command::Init { .. } => Ok(()),
        Command::Request {
            method,
            path,
            data,
            query,
            multipart,
        } => {
            let request = build_call(&method, &path, data.as_deref(), &query, multipart)?;
            let gateway = GatewayClient::from_config(&config.gateway_config()?)
                .map_err(RunError::ClientCreation)?;
            println!("{}", send_call(&gateway, request).await?);
            Ok(())
        }
        Command::Sign { payload } => {
            let payload = read_payload(&payload)?;
            println!("{}", sign_payload(&config, &payload)?);
            Ok(())
        }
        Command::VerifyWebhook {
            payload,
            signature,
            strict,
        } => {
            let payload = read_payload(&payload)?;
            let event = verify_payload(&config, &payload, signature.as_deref(), strict)?;
            println!("{}", pretty(&event));
            Ok(())
        }
    }
}

/// Renders the package and configuration summary printed by `info`.
fn info_report(config: &ValidatedConfig) -> String {
    format!(
        "{name} {version}\n\
         User-Agent:        {CLIENT_USER_AGENT}\n\
         API key:           {api_key}\n\
         Base URL:          {base_url}\n\
         API version:       {api_version}\n\
         Timeout:           {timeout}s\n\
         Connect timeout:   {connect_timeout}s\n\
         Log requests:      {log_requests}\n\
         Webhook secret:    {webhook_secret}\n\
         Webhook tolerance: {tolerance}s\n",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        api_key = configured(config.api_key.is_some()),
        base_url = config.base_url,
        api_version = config.api_version,
        timeout = config.timeout.as_secs(),
        connect_timeout = config.connect_timeout.as_secs(),
        log_requests = config.log_requests,
        webhook_secret = configured(config.webhook_secret.is_some()),
        tolerance = config.webhook_tolerance.as_secs(),
    )
}

/// Turns `request` arguments into an outbound request.
fn build_call(
    method: &str,
    path: &str,
    data: Option<&str>,
    query: &[String],
    multipart: bool,
) -> Result<OutboundRequest, RunError> {
    let method = parse_method(method)?;
    let mut request = OutboundRequest::new(method, path);

    for pair in query {
        let (key, value) = parse_query_pair(pair)?;
        request = request.with_query(key, value);
    }

    if let Some(data) = data {
        let body: Value = serde_json::from_str(data).map_err(RunError::InvalidBody)?;
        request = request.with_body(body);
    }

    if multipart {
        request = request.multipart();
    }

    Ok(request)
}

/// Performs one API call and returns the response body for printing.
async fn send_call<H: HttpClient>(
    gateway: &GatewayClient<H>,
    request: OutboundRequest,
) -> Result<String, RunError> {
    let response = gateway.execute(request).await?;
    tracing::debug!("API call returned {}", response.status);

    Ok(match response.json_value() {
        Ok(Value::Null) => String::new(),
        Ok(value) => pretty(&value),
        Err(_) => response.text().into_owned(),
    })
}

/// Computes the signature of a payload with the configured webhook secret.
fn sign_payload(config: &ValidatedConfig, payload: &[u8]) -> Result<String, RunError> {
    let secret = config.webhook_secret.as_deref().ok_or_else(|| {
        ConfigError::missing(
            field::WEBHOOK_SECRET,
            "Use --webhook-secret, set PAGARME_WEBHOOK_SECRET, or set webhook.secret in config file",
        )
    })?;

    Ok(compute_signature(payload, secret.as_bytes()))
}

/// Authenticates and decodes a payload.
fn verify_payload(
    config: &ValidatedConfig,
    payload: &[u8],
    signature: Option<&str>,
    strict: bool,
) -> Result<Value, RunError> {
    let verifier = WebhookVerifier::new(&config.webhook_config().with_strict(strict));
    let envelope = verifier.process(payload, signature)?;

    tracing::info!(
        event_type = envelope.event_type().unwrap_or("unknown"),
        id = envelope.id().unwrap_or("unknown"),
        verified = envelope.signature().is_some() && verifier.has_secret(),
        "Webhook accepted"
    );

    Ok(envelope.into_value())
}

fn read_payload(path: &Path) -> Result<Vec<u8>, RunError> {
    std::fs::read(path).map_err(|e| RunError::PayloadRead {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_method(method: &str) -> Result<Method, RunError> {
    match method.to_ascii_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "PATCH" => Ok(Method::PATCH),
        "DELETE" => Ok(Method::DELETE),
        _ => Err(RunError::InvalidMethod(method.to_string())),
    }
}

fn parse_query_pair(pair: &str) -> Result<(&str, &str), RunError> {
    pair.split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| RunError::InvalidQuery(pair.to_string()))
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

const fn configured(set: bool) -> &'static str {
    if set { "configured" } else { "not configured" }
}
