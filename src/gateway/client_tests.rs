//! Tests for `GatewayClient`.

use super::{ApiKey, ErrorKind, GatewayClient, GatewayConfig, GatewayError, OutboundRequest};
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse, RequestBody};
use http::StatusCode;
use serde_json::json;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock HTTP client that returns a configurable sequence of responses.
#[derive(Debug)]
struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    fn responding(status: StatusCode, body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::new(
            status,
            http::HeaderMap::new(),
            body.as_bytes().to_vec(),
        ))])
    }

    fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

fn test_config() -> GatewayConfig {
    GatewayConfig::new(ApiKey::new("sk_test_123"))
        .with_base_url(url::Url::parse("https://x/core").unwrap())
}

fn gateway(client: MockClient) -> GatewayClient<MockClient> {
    GatewayClient::new(&test_config(), client)
}

mod verbs {
    use super::*;

    #[tokio::test]
    async fn get_sends_query_and_returns_response() {
        let gateway = gateway(MockClient::responding(StatusCode::OK, r#"{"data":[]}"#));

        let response = gateway
            .get("charges", &[("status", "paid"), ("page", "1")])
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json_value().unwrap(), json!({"data": []}));

        let requests = gateway_requests(&gateway);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, http::Method::GET);
        assert_eq!(
            requests[0].url.as_str(),
            "https://x/core/v5/charges?status=paid&page=1"
        );
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn post_sends_json_body() {
        let gateway = gateway(MockClient::responding(StatusCode::OK, r#"{"id":"or_1"}"#));

        gateway
            .post("orders", json!({"code": "A1"}))
            .await
            .unwrap();

        let requests = gateway_requests(&gateway);
        assert_eq!(requests[0].method, http::Method::POST);
        assert_eq!(
            requests[0].body,
            Some(RequestBody::Json(json!({"code": "A1"})))
        );
        assert_eq!(
            requests[0].headers[http::header::AUTHORIZATION],
            "Basic c2tfdGVzdF8xMjM6"
        );
    }

    #[tokio::test]
    async fn put_patch_delete_use_their_verbs() {
        let cases = [
            (http::Method::PUT, "hooks/hook_1"),
            (http::Method::PATCH, "orders/or_1/closed"),
            (http::Method::DELETE, "plans/plan_1"),
        ];

        for (method, path) in cases {
            let gateway = gateway(MockClient::responding(StatusCode::OK, "{}"));

            let result = if method == http::Method::PUT {
                gateway.put(path, json!({"a": 1})).await
            } else if method == http::Method::PATCH {
                gateway.patch(path, json!({"status": "paid"})).await
            } else {
                gateway.delete(path).await
            };

            assert!(result.is_ok());
            let requests = gateway_requests(&gateway);
            assert_eq!(requests[0].method, method);
            assert_eq!(requests[0].url.path(), format!("/core/v5/{path}"));
        }
    }

    #[tokio::test]
    async fn execute_sends_multipart_parts() {
        let gateway = gateway(MockClient::responding(StatusCode::OK, "{}"));
        let request = OutboundRequest::post("recipients")
            .with_body(json!({"a": {"b": 1}}))
            .multipart();

        gateway.execute(request).await.unwrap();

        let requests = gateway_requests(&gateway);
        assert_eq!(
            requests[0].headers[http::header::CONTENT_TYPE],
            "multipart/form-data"
        );
        match &requests[0].body {
            Some(RequestBody::Multipart(parts)) => {
                assert_eq!(parts.len(), 1);
                assert_eq!(parts[0].name, "a");
                assert_eq!(parts[0].contents, r#"{"b":1}"#);
            }
            other => panic!("Expected multipart body, got {other:?}"),
        }
    }

    fn gateway_requests(gateway: &GatewayClient<MockClient>) -> Vec<HttpRequest> {
        gateway.transport().captured_requests()
    }
}

mod errors {
    use super::*;

    #[tokio::test]
    async fn unauthorized_with_provider_message() {
        let gateway = gateway(MockClient::responding(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"Invalid API key"}"#,
        ));

        let error = gateway.get("charges", &[]).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Http);
        assert_eq!(error.status(), Some(StatusCode::UNAUTHORIZED));
        assert_eq!(error.message(), Some("Invalid API key"));
    }

    #[tokio::test]
    async fn timeout_is_transport_without_status() {
        let gateway = gateway(MockClient::failing(HttpError::Timeout));

        let error = gateway
            .post("charges", json!({"amount": 100}))
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Transport);
        assert!(error.status().is_none());
    }

    #[tokio::test]
    async fn connection_failure_is_transport() {
        let gateway = gateway(MockClient::failing(HttpError::Connection(Box::new(
            std::io::Error::other("connection refused"),
        ))));

        let error = gateway.delete("hooks/1").await.unwrap_err();

        assert!(matches!(
            error,
            GatewayError::Transport(HttpError::Connection(_))
        ));
    }

    #[tokio::test]
    async fn malformed_error_body_is_still_classified() {
        let gateway = gateway(MockClient::responding(
            StatusCode::INTERNAL_SERVER_ERROR,
            "{not json",
        ));

        let error = gateway.get("orders/or_1", &[]).await.unwrap_err();

        assert_eq!(error.message(), Some("HTTP 500: {not json"));
    }

    #[tokio::test]
    async fn server_error_is_not_retried() {
        let client = MockClient::new(vec![
            Ok(HttpResponse::new(
                StatusCode::SERVICE_UNAVAILABLE,
                http::HeaderMap::new(),
                vec![],
            )),
            Ok(HttpResponse::new(
                StatusCode::OK,
                http::HeaderMap::new(),
                vec![],
            )),
        ]);
        let gateway = gateway(client);

        let result = gateway.get("charges", &[]).await;

        assert!(result.is_err());
        assert_eq!(gateway.transport().calls(), 1);
    }

    #[tokio::test]
    async fn failures_are_returned_with_logging_enabled() {
        let config = test_config().with_log_requests(true);
        let gateway = GatewayClient::new(
            &config,
            MockClient::responding(StatusCode::UNPROCESSABLE_ENTITY, r#"{"message":"bad"}"#),
        );

        let error = gateway
            .post("customers", json!({"document": "1", "card": {"cvv": "123"}}))
            .await
            .unwrap_err();

        assert!(gateway.log_requests());
        assert_eq!(error.message(), Some("bad"));
    }

    #[tokio::test]
    async fn sensitive_data_is_sent_unredacted() {
        let config = test_config().with_log_requests(true);
        let gateway = GatewayClient::new(&config, MockClient::responding(StatusCode::OK, "{}"));

        gateway
            .post("tokens", json!({"card": {"cvv": "123"}}))
            .await
            .unwrap();

        let requests = gateway.transport().captured_requests();
        assert_eq!(
            requests[0].body,
            Some(RequestBody::Json(json!({"card": {"cvv": "123"}})))
        );
    }
}

mod construction {
    use super::*;

    #[test]
    fn from_config_builds_reqwest_backed_client() {
        let gateway = GatewayClient::from_config(&test_config());

        assert!(gateway.is_ok());
    }

    #[test]
    fn logging_defaults_to_off() {
        let gateway = gateway(MockClient::new(vec![]));

        assert!(!gateway.log_requests());
    }

    #[test]
    fn exposes_request_builder() {
        let gateway = gateway(MockClient::new(vec![]));

        assert_eq!(
            gateway
                .request_builder()
                .resolve_url("charges")
                .unwrap()
                .as_str(),
            "https://x/core/v5/charges"
        );
    }
}

mod logging {
    use super::*;
    use std::io;
    use std::sync::Arc;

    /// Writer that keeps formatted events in memory.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (buffer, guard)
    }

    fn logging_gateway(client: MockClient) -> GatewayClient<MockClient> {
        GatewayClient::new(&test_config().with_log_requests(true), client)
    }

    #[tokio::test]
    async fn request_event_carries_redacted_data() {
        let (buffer, _guard) = capture();
        let gateway = logging_gateway(MockClient::responding(StatusCode::OK, "{}"));

        gateway
            .post(
                "customers",
                json!({"name": "ok", "card": "4111111111111111", "x": {"cvv": "987"}}),
            )
            .await
            .unwrap();

        let logs = buffer.contents();
        assert!(logs.contains(crate::gateway::LOG_TARGET), "{logs}");
        assert!(logs.contains("Pagarme API request"), "{logs}");
        assert!(logs.contains("url=https://x/core/v5/customers"), "{logs}");
        assert!(
            logs.contains(r#"data={"card":"***HIDDEN***","name":"ok","x":{"cvv":"***HIDDEN***"}}"#),
            "{logs}"
        );
        assert!(!logs.contains("4111111111111111"), "{logs}");
        assert!(!logs.contains("987"), "{logs}");
    }

    #[tokio::test]
    async fn query_data_is_redacted_and_stripped_from_url() {
        let (buffer, _guard) = capture();
        let gateway = logging_gateway(MockClient::responding(StatusCode::OK, "{}"));

        gateway
            .get("tokens", &[("token", "tok_secret")])
            .await
            .unwrap();

        let logs = buffer.contents();
        assert!(logs.contains(r#"data={"token":"***HIDDEN***"}"#), "{logs}");
        assert!(!logs.contains("tok_secret"), "{logs}");
    }

    #[tokio::test]
    async fn http_failure_emits_error_event() {
        let (buffer, _guard) = capture();
        let gateway = logging_gateway(MockClient::responding(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message":"bad"}"#,
        ));

        gateway.post("customers", json!({"name": "ok"})).await.unwrap_err();

        let logs = buffer.contents();
        assert!(logs.contains("ERROR"), "{logs}");
        assert!(logs.contains("Pagarme API error"), "{logs}");
        assert!(logs.contains("status_code=422"), "{logs}");
        assert!(logs.contains(r#"response_body={"message":"bad"}"#), "{logs}");
        assert!(logs.contains("error=bad"), "{logs}");
    }

    #[tokio::test]
    async fn transport_failure_emits_warn_event() {
        let (buffer, _guard) = capture();
        let gateway = logging_gateway(MockClient::failing(HttpError::Timeout));

        gateway.delete("hooks/hook_1").await.unwrap_err();

        let logs = buffer.contents();
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("Pagarme API request failed"), "{logs}");
        assert!(logs.contains("path=hooks/hook_1"), "{logs}");
    }

    #[tokio::test]
    async fn nothing_is_logged_when_disabled() {
        let (buffer, _guard) = capture();
        let gateway = gateway(MockClient::responding(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message":"bad"}"#,
        ));

        gateway
            .post("tokens", json!({"token": "tok_secret"}))
            .await
            .unwrap_err();

        assert_eq!(buffer.contents(), "");
    }
}
