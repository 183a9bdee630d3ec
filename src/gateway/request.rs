//! Outbound request description and its translation into an [`HttpRequest`].

use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderValue, Method};
use serde_json::{Map, Value};
use url::Url;

use super::GatewayConfig;
use crate::transport::{FormPart, HttpError, HttpRequest, RequestBody};

/// User agent sent with every call.
pub const CLIENT_USER_AGENT: &str = concat!("Pagarme-Rust/", env!("CARGO_PKG_VERSION"));

/// How a request body is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// `application/json`
    #[default]
    Json,
    /// `multipart/form-data`, flattened one level (see [`RequestBuilder::encode_body`])
    Multipart,
}

/// One call to the remote API, before URL resolution and authentication.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    /// HTTP verb
    pub method: Method,
    /// Path relative to the versioned API root; a leading slash is optional
    pub path: String,
    /// Query parameters, sent in insertion order
    pub query: Vec<(String, String)>,
    /// Optional body tree
    pub body: Option<Value>,
    /// Body encoding
    pub encoding: Encoding,
}

impl OutboundRequest {
    /// Creates a request with no query, no body and JSON encoding.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            encoding: Encoding::Json,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Creates a PUT request.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Creates a PATCH request.
    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends one query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends query parameters from borrowed pairs.
    #[must_use]
    pub fn with_query_pairs(mut self, pairs: &[(&str, &str)]) -> Self {
        self.query.extend(
            pairs
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string())),
        );
        self
    }

    /// Sets the body tree.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the body encoding.
    #[must_use]
    pub const fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Switches the body encoding to multipart.
    #[must_use]
    pub const fn multipart(self) -> Self {
        self.with_encoding(Encoding::Multipart)
    }

    /// Data describing this request for the log side channel.
    ///
    /// The body when one is set, otherwise the query parameters as an object.
    /// Not yet redacted.
    #[must_use]
    pub fn log_data(&self) -> Value {
        if let Some(body) = &self.body {
            return body.clone();
        }

        let query: Map<String, Value> = self
            .query
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();
        Value::Object(query)
    }
}

/// Turns [`OutboundRequest`]s into transport-ready [`HttpRequest`]s.
///
/// Pure given the configuration it was built from.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    api_root: String,
    authorization: HeaderValue,
}

impl RequestBuilder {
    /// Creates a builder for the given configuration.
    #[must_use]
    pub fn new(config: &GatewayConfig) -> Self {
        let mut api_root = config.base_url.as_str().to_string();
        if !api_root.ends_with('/') {
            api_root.push('/');
        }

        let version = config.api_version.trim_matches('/');
        if !version.is_empty() {
            api_root.push_str(version);
            api_root.push('/');
        }

        let mut authorization =
            HeaderValue::from_str(&format!("Basic {}", config.api_key.basic_credential()))
                .expect("base64 output is always a valid header value");
        authorization.set_sensitive(true);

        Self {
            api_root,
            authorization,
        }
    }

    /// Resolves a logical path to an absolute URL.
    ///
    /// The result is always `base/version/path` with exactly one slash at
    /// each join, whatever slashes the base URL or path carry.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] if the joined string is not a URL.
    pub fn resolve_url(&self, path: &str) -> Result<Url, HttpError> {
        let joined = format!("{}{}", self.api_root, path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|e| HttpError::InvalidUrl(format!("{joined}: {e}")))
    }

    /// Returns the header set for the given encoding.
    #[must_use]
    pub fn headers(&self, encoding: Encoding) -> HeaderMap {
        let content_type = match encoding {
            Encoding::Json => "application/json",
            Encoding::Multipart => "multipart/form-data",
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        headers
    }

    /// Encodes a body tree for the wire.
    ///
    /// Empty trees (`null`, `{}`, `[]`) produce no body. In JSON mode the
    /// tree is passed through unchanged.
    ///
    /// Multipart mode is a lossy, one-level flattening: each top-level key
    /// (or array index) becomes one part. Nested objects and arrays are sent
    /// as their compact JSON text and are *not* expanded into bracketed
    /// field names. Scalars are stringified: strings as-is, numbers in
    /// decimal, `true` as `"1"`, `false` and `null` as `""`. A scalar at the
    /// top level becomes a single part named `0`.
    #[must_use]
    pub fn encode_body(&self, data: &Value, encoding: Encoding) -> Option<RequestBody> {
        if is_empty_tree(data) {
            return None;
        }

        match encoding {
            Encoding::Json => Some(RequestBody::Json(data.clone())),
            Encoding::Multipart => Some(RequestBody::Multipart(flatten_parts(data))),
        }
    }

    /// Builds the complete HTTP request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] if the path does not resolve.
    pub fn build(&self, request: &OutboundRequest) -> Result<HttpRequest, HttpError> {
        let mut url = self.resolve_url(&request.path)?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }

        let mut http_request = HttpRequest::new(request.method.clone(), url);
        http_request.headers = self.headers(request.encoding);
        http_request.body = request
            .body
            .as_ref()
            .and_then(|body| self.encode_body(body, request.encoding));

        Ok(http_request)
    }
}

fn is_empty_tree(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn flatten_parts(data: &Value) -> Vec<FormPart> {
    match data {
        Value::Object(map) => map
            .iter()
            .map(|(name, value)| FormPart::new(name.clone(), part_contents(value)))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, value)| FormPart::new(index.to_string(), part_contents(value)))
            .collect(),
        scalar => vec![FormPart::new("0", part_contents(scalar))],
    }
}

fn part_contents(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) | Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        composite @ (Value::Object(_) | Value::Array(_)) => composite.to_string(),
    }
}
