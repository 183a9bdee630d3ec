//! Wire-level request and response values, and the transport capability.

use super::HttpError;

/// Body of an outbound request, in one of the two supported encodings.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// A JSON tree, serialized by the transport.
    Json(serde_json::Value),
    /// Named text parts sent as `multipart/form-data`.
    Multipart(Vec<FormPart>),
}

/// One named part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    /// Form field name
    pub name: String,
    /// Text contents of the part
    pub contents: String,
}

impl FormPart {
    /// Creates a new form part.
    #[must_use]
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// A fully resolved request: absolute URL (query included), final headers
/// and an encoded body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    pub method: http::Method,
    /// Target URL, including any query string
    pub url: url::Url,
    /// Final header set
    pub headers: http::HeaderMap,
    /// Encoded body, if any
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Shorthand for a GET.
    #[must_use]
    pub fn get(url: url::Url) -> Self {
        Self::new(http::Method::GET, url)
    }

    /// Shorthand for a POST.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Attaches an encoded body.
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Appends a header value, keeping any existing values for `name`.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// Whatever the server answered, with the body read to completion.
///
/// Any status counts, including 4xx and 5xx.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status as sent by the server
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Raw body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Assembles a response from its parts.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// 2xx check.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The body as text, or `None` if it is not UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// The transport capability injected into the gateway.
///
/// Implementations own their connection pooling and must be safe to share
/// across concurrent calls. Tests substitute an in-memory implementation
/// that records requests and replays canned responses.
pub trait HttpClient: Send + Sync {
    /// Sends `req` once.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] only when no response was obtained: connection
    /// or TLS failure, timeout, or a request that could not be built.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
