//! Tests for log redaction.

use super::{MASK, is_sensitive, redact};
use serde_json::json;

#[test]
fn masks_top_level_sensitive_fields() {
    let data = json!({"password": "hunter2", "token": "tok_abc", "name": "Ana"});

    let redacted = redact(&data);

    assert_eq!(
        redacted,
        json!({"password": MASK, "token": MASK, "name": "Ana"})
    );
}

#[test]
fn masks_at_any_depth() {
    let data = json!({
        "customer": {
            "name": "Ana",
            "payments": [
                {"credit_card": {"cvv": "123", "holder": "ANA"}},
                {"pix": {"expires_in": 60}}
            ]
        }
    });

    let redacted = redact(&data);

    assert_eq!(
        redacted,
        json!({
            "customer": {
                "name": "Ana",
                "payments": [
                    {"credit_card": {"cvv": MASK, "holder": "ANA"}},
                    {"pix": {"expires_in": 60}}
                ]
            }
        })
    );
}

#[test]
fn masks_whole_composite_under_sensitive_key() {
    let data = json!({"card": {"number": "4111111111111111", "cvv": "123"}});

    let redacted = redact(&data);

    assert_eq!(redacted, json!({"card": MASK}));
    assert!(!redacted.to_string().contains("4111111111111111"));
}

#[test]
fn key_match_is_case_insensitive() {
    let data = json!({"CVV": "999", "Token": "t", "PassWord": "p"});

    let redacted = redact(&data);

    assert_eq!(redacted, json!({"CVV": MASK, "Token": MASK, "PassWord": MASK}));
}

#[test]
fn similar_keys_are_not_masked() {
    let data = json!({"card_id": "card_1", "card_token": "x", "tokens": 3});

    assert_eq!(redact(&data), data);
}

#[test]
fn does_not_mutate_input() {
    let data = json!({"cvv": "123"});
    let before = data.clone();

    let _ = redact(&data);

    assert_eq!(data, before);
}

#[test]
fn scalars_and_arrays_of_scalars_are_unchanged() {
    for data in [json!(null), json!(42), json!("cvv"), json!(["card", "token"])] {
        assert_eq!(redact(&data), data);
    }
}

#[test]
fn sensitive_field_set_is_fixed() {
    for key in ["card", "cvv", "password", "token", "CARD"] {
        assert!(is_sensitive(key), "{key}");
    }
    for key in ["number", "holder_name", "cards", ""] {
        assert!(!is_sensitive(key), "{key}");
    }
}
