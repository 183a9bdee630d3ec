//! Tests for `OutboundRequest` and `RequestBuilder`.

use super::{ApiKey, CLIENT_USER_AGENT, Encoding, GatewayConfig, OutboundRequest, RequestBuilder};
use crate::transport::{FormPart, RequestBody};
use serde_json::json;

fn config_with(base_url: &str, api_version: &str) -> GatewayConfig {
    GatewayConfig::new(ApiKey::new("sk_test_123"))
        .with_base_url(url::Url::parse(base_url).unwrap())
        .with_api_version(api_version)
}

fn builder() -> RequestBuilder {
    RequestBuilder::new(&config_with("https://x/core", "v5"))
}

mod resolve_url {
    use super::*;

    #[test]
    fn slash_combinations_resolve_identically() {
        for base in ["https://x/core", "https://x/core/"] {
            for path in ["/charges", "charges"] {
                let builder = RequestBuilder::new(&config_with(base, "v5"));
                let url = builder.resolve_url(path).unwrap();

                assert_eq!(
                    url.as_str(),
                    "https://x/core/v5/charges",
                    "base={base} path={path}"
                );
            }
        }
    }

    #[test]
    fn version_with_slashes_is_not_doubled() {
        let builder = RequestBuilder::new(&config_with("https://x/core/", "/v5/"));

        assert_eq!(
            builder.resolve_url("charges").unwrap().as_str(),
            "https://x/core/v5/charges"
        );
    }

    #[test]
    fn repeated_leading_slashes_are_stripped() {
        assert_eq!(
            builder().resolve_url("//orders/or_1").unwrap().as_str(),
            "https://x/core/v5/orders/or_1"
        );
    }

    #[test]
    fn default_config_targets_pagarme_core_v5() {
        let builder = RequestBuilder::new(&GatewayConfig::new(ApiKey::new("k")));

        assert_eq!(
            builder.resolve_url("hooks").unwrap().as_str(),
            "https://api.pagar.me/core/v5/hooks"
        );
    }

    #[test]
    fn nested_path_is_preserved() {
        assert_eq!(
            builder().resolve_url("plans/pl_1/items/pi_2").unwrap().as_str(),
            "https://x/core/v5/plans/pl_1/items/pi_2"
        );
    }
}

mod headers {
    use super::*;

    #[test]
    fn json_mode_uses_json_content_type() {
        let headers = builder().headers(Encoding::Json);

        assert_eq!(headers[http::header::CONTENT_TYPE], "application/json");
        assert_eq!(headers[http::header::ACCEPT], "application/json");
    }

    #[test]
    fn multipart_mode_uses_form_content_type() {
        let headers = builder().headers(Encoding::Multipart);

        assert_eq!(headers[http::header::CONTENT_TYPE], "multipart/form-data");
        assert_eq!(headers[http::header::ACCEPT], "application/json");
    }

    #[test]
    fn authorization_is_basic_with_empty_password() {
        let headers = builder().headers(Encoding::Json);

        // base64("sk_test_123:")
        assert_eq!(
            headers[http::header::AUTHORIZATION],
            "Basic c2tfdGVzdF8xMjM6"
        );
        assert!(headers[http::header::AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn user_agent_names_client_and_version() {
        for encoding in [Encoding::Json, Encoding::Multipart] {
            let headers = builder().headers(encoding);
            assert_eq!(headers[http::header::USER_AGENT], CLIENT_USER_AGENT);
        }
        assert!(CLIENT_USER_AGENT.starts_with("Pagarme-Rust/"));
    }
}

mod encode_body {
    use super::*;

    #[test]
    fn json_mode_passes_tree_through() {
        let data = json!({"amount": 1000, "customer": {"name": "Ana"}});

        let body = builder().encode_body(&data, Encoding::Json);

        assert_eq!(body, Some(RequestBody::Json(data)));
    }

    #[test]
    fn multipart_serializes_nested_object_as_json_text() {
        let data = json!({"a": {"b": 1}});

        let body = builder().encode_body(&data, Encoding::Multipart);

        assert_eq!(
            body,
            Some(RequestBody::Multipart(vec![FormPart::new("a", r#"{"b":1}"#)]))
        );
    }

    #[test]
    fn multipart_stringifies_scalars() {
        let data = json!({
            "name": "Ana",
            "amount": 1500,
            "ratio": 0.5,
            "active": true,
            "archived": false,
            "note": null,
            "tags": ["x", "y"]
        });

        let Some(RequestBody::Multipart(parts)) =
            builder().encode_body(&data, Encoding::Multipart)
        else {
            panic!("Expected multipart body");
        };

        let find = |name: &str| {
            parts
                .iter()
                .find(|p| p.name == name)
                .map(|p| p.contents.as_str())
        };
        assert_eq!(parts.len(), 7);
        assert_eq!(find("name"), Some("Ana"));
        assert_eq!(find("amount"), Some("1500"));
        assert_eq!(find("ratio"), Some("0.5"));
        assert_eq!(find("active"), Some("1"));
        assert_eq!(find("archived"), Some(""));
        assert_eq!(find("note"), Some(""));
        assert_eq!(find("tags"), Some(r#"["x","y"]"#));
    }

    #[test]
    fn multipart_array_uses_indexes_as_names() {
        let body = builder().encode_body(&json!(["first", 2]), Encoding::Multipart);

        assert_eq!(
            body,
            Some(RequestBody::Multipart(vec![
                FormPart::new("0", "first"),
                FormPart::new("1", "2"),
            ]))
        );
    }

    #[test]
    fn empty_trees_produce_no_body() {
        for data in [json!(null), json!({}), json!([])] {
            for encoding in [Encoding::Json, Encoding::Multipart] {
                assert!(
                    builder().encode_body(&data, encoding).is_none(),
                    "{data} in {encoding:?}"
                );
            }
        }
    }
}

mod build {
    use super::*;

    #[test]
    fn get_appends_query_in_order() {
        let request = OutboundRequest::get("charges")
            .with_query("page", "2")
            .with_query("size", "10")
            .with_query("status", "paid");

        let http_request = builder().build(&request).unwrap();

        assert_eq!(http_request.method, http::Method::GET);
        assert_eq!(
            http_request.url.as_str(),
            "https://x/core/v5/charges?page=2&size=10&status=paid"
        );
        assert!(http_request.body.is_none());
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let request = OutboundRequest::get("customers").with_query("email", "ana+1@x.com");

        let http_request = builder().build(&request).unwrap();

        assert_eq!(http_request.url.query(), Some("email=ana%2B1%40x.com"));
    }

    #[test]
    fn no_query_leaves_url_without_question_mark() {
        let http_request = builder().build(&OutboundRequest::get("charges")).unwrap();

        assert_eq!(http_request.url.query(), None);
    }

    #[test]
    fn post_carries_json_body_and_headers() {
        let request = OutboundRequest::post("/orders").with_body(json!({"code": "A1"}));

        let http_request = builder().build(&request).unwrap();

        assert_eq!(http_request.method, http::Method::POST);
        assert_eq!(http_request.url.as_str(), "https://x/core/v5/orders");
        assert_eq!(
            http_request.body,
            Some(RequestBody::Json(json!({"code": "A1"})))
        );
        assert_eq!(
            http_request.headers[http::header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn multipart_request_uses_form_headers_and_parts() {
        let request = OutboundRequest::put("recipients/rp_1")
            .with_body(json!({"document": "123"}))
            .multipart();

        let http_request = builder().build(&request).unwrap();

        assert_eq!(
            http_request.headers[http::header::CONTENT_TYPE],
            "multipart/form-data"
        );
        assert_eq!(
            http_request.body,
            Some(RequestBody::Multipart(vec![FormPart::new("document", "123")]))
        );
    }
}

mod outbound_request {
    use super::*;

    #[test]
    fn constructors_set_method() {
        assert_eq!(OutboundRequest::get("a").method, http::Method::GET);
        assert_eq!(OutboundRequest::post("a").method, http::Method::POST);
        assert_eq!(OutboundRequest::put("a").method, http::Method::PUT);
        assert_eq!(OutboundRequest::patch("a").method, http::Method::PATCH);
        assert_eq!(OutboundRequest::delete("a").method, http::Method::DELETE);
    }

    #[test]
    fn defaults_to_json_encoding() {
        assert_eq!(OutboundRequest::post("a").encoding, Encoding::Json);
        assert_eq!(
            OutboundRequest::post("a").multipart().encoding,
            Encoding::Multipart
        );
    }

    #[test]
    fn log_data_prefers_body() {
        let request = OutboundRequest::post("charges")
            .with_query("ignored", "1")
            .with_body(json!({"amount": 10}));

        assert_eq!(request.log_data(), json!({"amount": 10}));
    }

    #[test]
    fn log_data_falls_back_to_query() {
        let request = OutboundRequest::get("charges").with_query_pairs(&[("page", "1")]);

        assert_eq!(request.log_data(), json!({"page": "1"}));
    }

    #[test]
    fn log_data_is_empty_object_without_body_or_query() {
        assert_eq!(OutboundRequest::delete("hooks/1").log_data(), json!({}));
    }
}
