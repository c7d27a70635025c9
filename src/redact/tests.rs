//! Tests for redact module

use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;

// ============================================================================
// Sensitive Name Tests
// ============================================================================

#[test]
fn test_is_sensitive_name() {
    assert!(is_sensitive_name("password"));
    assert!(is_sensitive_name("PASSWORD"));
    assert!(is_sensitive_name("api_key"));
    assert!(is_sensitive_name("ssn"));
    assert!(is_sensitive_name("primary_email"));
    assert!(is_sensitive_name("email_address"));
    assert!(is_sensitive_name("phone_number"));
    assert!(is_sensitive_name("billing_address"));
    assert!(is_sensitive_name("date_of_birth"));

    assert!(!is_sensitive_name("note"));
    assert!(!is_sensitive_name("first_name"));
    assert!(!is_sensitive_name("amount"));
}

#[test]
fn test_is_credential_header() {
    assert!(is_credential_header("Authorization"));
    assert!(is_credential_header("authorization"));
    assert!(is_credential_header("X-Api-Key"));
    assert!(is_credential_header("api-key"));

    assert!(!is_credential_header("Content-Type"));
    assert!(!is_credential_header("Accept"));
}

// ============================================================================
// Value Mask Tests
// ============================================================================

#[test]
fn test_mask_value_long() {
    assert_eq!(mask_value("secret123"), "se***23");
    assert_eq!(mask_value("user@example.com"), "us***om");
    assert_eq!(mask_value("123-45-6789"), "12***89");
    assert_eq!(mask_value("abcde"), "ab***de");
}

#[test]
fn test_mask_value_short() {
    assert_eq!(mask_value("abcd"), "***");
    assert_eq!(mask_value("abc"), "***");
    assert_eq!(mask_value(""), "***");
}

#[test]
fn test_mask_value_hides_secret() {
    let raw = "hunter2hunter2";
    let masked = mask_value(raw);
    assert!(!masked.contains(raw));
    assert!(masked.contains("***"));
    assert!(masked.starts_with("hu"));
    assert!(masked.ends_with("r2"));
}

#[test]
fn test_mask_credential() {
    assert_eq!(
        mask_credential("Bearer very_long_secret_key_123456789"),
        "Bearer v...6789"
    );
    assert_eq!(mask_credential("short"), "***MASKED***");
    // Boundary: exactly 10 characters is still fully masked
    assert_eq!(mask_credential("0123456789"), "***MASKED***");
    assert_eq!(mask_credential("0123456789a"), "01234567...789a");
}

// ============================================================================
// Payload Mask Tests
// ============================================================================

#[test]
fn test_mask_payload_flat() {
    let payload = json!({"ssn": "123-45-6789", "note": "ok"});
    let masked = mask_payload(&payload);
    assert_eq!(masked["ssn"], "12***89");
    assert_eq!(masked["note"], "ok");
}

#[test]
fn test_mask_payload_short_and_non_string() {
    let payload = json!({"password": "abc", "account_number": 123456789, "count": 5});
    let masked = mask_payload(&payload);
    assert_eq!(masked["password"], "***");
    assert_eq!(masked["account_number"], "***");
    assert_eq!(masked["count"], 5);
}

#[test]
fn test_mask_payload_nested() {
    let payload = json!({
        "constituent": {
            "first_name": "Ada",
            "email": "ada@example.org",
            "address": {"street": "1 Main St"}
        }
    });
    let masked = mask_payload(&payload);
    assert_eq!(masked["constituent"]["first_name"], "Ada");
    assert_eq!(masked["constituent"]["email"], "ad***rg");
    // The address key itself is sensitive, so the whole object collapses
    assert_eq!(masked["constituent"]["address"], "***");
}

#[test]
fn test_mask_payload_lists() {
    // Items in a list named after a sensitive field inherit the name
    let payload = json!({"emails": ["ada@example.org", "a@b.io"]});
    let masked = mask_payload(&payload);
    assert_eq!(masked["emails"][0], "ad***rg");
    assert_eq!(masked["emails"][1], "a@***io");

    // Items in an ordinary list are walked individually
    let payload = json!({"members": [{"name": "Ada", "phone": "555-0100"}]});
    let masked = mask_payload(&payload);
    assert_eq!(masked["members"][0]["name"], "Ada");
    assert_eq!(masked["members"][0]["phone"], "55***00");
}

#[test]
fn test_mask_payload_non_object() {
    let masked = mask_payload(&json!(["a", "b"]));
    assert_eq!(masked, json!({"payload": "[SANITIZED]"}));
}

#[test]
fn test_mask_field_preserves_password_shape() {
    let masked = mask_field("user_password", &json!("correcthorse"));
    let text = masked.as_str().unwrap();
    assert!(text.starts_with("co"));
    assert!(text.ends_with("se"));
    assert!(text.matches('*').count() >= 3);
    assert!(!text.contains("correcthorse"));
}

// ============================================================================
// URL Sanitization Tests
// ============================================================================

#[test]
fn test_sanitize_url() {
    assert_eq!(
        sanitize_url("https://api.littlegreenlight.com/api/v1/constituents/search?q=name%3DAda&limit=25"),
        "https://api.littlegreenlight.com/api/v1/constituents/search?[QUERY_PARAMS_REMOVED]"
    );
    assert_eq!(
        sanitize_url("https://api.littlegreenlight.com/api/v1/appeals"),
        "https://api.littlegreenlight.com/api/v1/appeals"
    );
}

#[test]
fn test_sanitize_url_splits_at_first_question_mark() {
    assert_eq!(
        sanitize_url("https://example.com/x?a=1?b=2"),
        "https://example.com/x?[QUERY_PARAMS_REMOVED]"
    );
}
