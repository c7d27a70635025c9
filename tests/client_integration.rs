//! Integration tests using a mock HTTP server
//!
//! Exercises the full flow: client construction, validation, transport,
//! pagination and typed decoding against canned API responses.

use httpmock::prelude::*;
use lgl_client::{ClientConfig, Error, Lgl, Pages, Query, Transport};
use serde_json::{json, Value};

fn client_for(server: &MockServer) -> Lgl {
    let config = ClientConfig::builder("test_api_key_1234567890")
        .base_url(server.base_url())
        .build();
    Lgl::with_config(&config).unwrap()
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_five_full_pages_yield_every_item_in_order() {
    let server = MockServer::start();

    let mut mocks = Vec::new();
    for page in 0..5u32 {
        let offset = page * 10;
        let items: Vec<Value> = (offset + 1..=offset + 10)
            .map(|id| json!({"id": id}))
            .collect();
        mocks.push(server.mock(|when, then| {
            when.method(GET)
                .path("/widgets")
                .query_param("limit", "10")
                .query_param("offset", offset.to_string());
            then.status(200).json_body(json!({
                "items": items,
                "items_count": 10,
                "total_items": 50,
                "limit": 10,
                "offset": offset
            }));
        }));
    }

    let config = ClientConfig::builder("test_api_key_1234567890")
        .base_url(server.base_url())
        .build();
    let transport = Transport::new(&config).unwrap();

    let items = Pages::with_limit(
        |limit, offset| {
            let query = Query::new().param("limit", limit).param("offset", offset);
            transport.get("widgets", &query)
        },
        10,
    )
    .collect::<lgl_client::Result<Vec<Value>>>()
    .unwrap();

    for mock in &mocks {
        mock.assert();
    }
    assert_eq!(items.len(), 50);
    let ids: Vec<i64> = items.iter().map(|v| v["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, (1..=50).collect::<Vec<i64>>());
}

#[test]
fn test_short_page_ends_walk_after_one_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/widgets")
            .query_param("limit", "10")
            .query_param("offset", "0");
        then.status(200).json_body(json!({
            "items": [{"id": 1}, {"id": 2}, {"id": 3}],
            "items_count": 3,
            "total_items": 3,
            "limit": 10,
            "offset": 0
        }));
    });

    let config = ClientConfig::builder("test_api_key_1234567890")
        .base_url(server.base_url())
        .build();
    let transport = Transport::new(&config).unwrap();

    let items = Pages::with_limit(
        |limit, offset| {
            let query = Query::new().param("limit", limit).param("offset", offset);
            transport.get("widgets", &query)
        },
        10,
    )
    .collect::<lgl_client::Result<Vec<Value>>>()
    .unwrap();

    mock.assert();
    assert_eq!(items.len(), 3);
}

#[test]
fn test_bare_array_resource_is_one_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/payment_types");
        then.status(200).json_body(json!([
            {"id": 1, "name": "Cash", "key": "cash"},
            {"id": 2, "name": "Check", "key": "check"},
            {"id": 3, "name": "Credit Card", "key": "credit"},
            {"id": 4, "name": "Stock", "key": "stock"},
            {"id": 5, "name": "In Kind", "key": "in_kind"}
        ]));
    });

    let lgl = client_for(&server);
    let types = lgl.payment_types().fetch_all().unwrap();

    // One request regardless of array length
    mock.assert();
    assert_eq!(types.len(), 5);
    assert_eq!(types[4].key, "in_kind");
}

// ============================================================================
// Error classification
// ============================================================================

#[test]
fn test_unauthorized_maps_to_typed_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/constituents");
        then.status(401).json_body(json!({"error": "Invalid API key"}));
    });

    let lgl = client_for(&server);
    let err = lgl.constituents().list(25, 0).unwrap_err();

    match &err {
        Error::Unauthorized(failure) => {
            assert!(failure.message.contains("Invalid API key"));
            assert_eq!(failure.status, 401);
        }
        other => panic!("Expected Unauthorized error, got {:?}", other),
    }
    assert_eq!(err.status(), Some(401));
}

#[test]
fn test_sensitive_payload_is_masked_in_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/constituents");
        then.status(422).json_body(json!({"error": "Validation failed"}));
    });

    let lgl = client_for(&server);
    let err = lgl
        .constituents()
        .create(&json!({"ssn": "123-45-6789", "note": "ok", "last_name": "Doe"}))
        .unwrap_err();

    let failure = err.api_failure().unwrap();
    let payload = failure.payload.as_ref().unwrap();
    assert_eq!(payload["ssn"], "12***89");
    assert_eq!(payload["note"], "ok");
    assert_eq!(payload["last_name"], "Doe");
}

#[test]
fn test_deep_payload_rejected_before_any_request() {
    // Closed port: had a request been attempted it would have come back
    // as a transport error, not the validation error asserted here.
    let config = ClientConfig::builder("test_api_key_1234567890")
        .base_url("http://127.0.0.1:1/api/v1")
        .build();
    let lgl = Lgl::with_config(&config).unwrap();

    let deep = json!({"a": {"b": {"c": {"d": {"e": {"f": 1}}}}}});
    let err = lgl.constituents().create(&deep).unwrap_err();

    assert!(matches!(err, Error::NestingTooDeep { depth: 6 }));
    assert!(err.is_invalid_input());
}

// ============================================================================
// CRUD round trip
// ============================================================================

#[test]
fn test_appeal_lifecycle() {
    let server = MockServer::start();

    let created = server.mock(|when, then| {
        when.method(POST)
            .path("/appeals")
            .json_body(json!({"name": "Spring Appeal", "code": "SPR25"}));
        then.status(201)
            .json_body(json!({"id": 11, "name": "Spring Appeal", "code": "SPR25"}));
    });
    let retrieved = server.mock(|when, then| {
        when.method(GET).path("/appeals/11");
        then.status(200)
            .json_body(json!({"id": 11, "name": "Spring Appeal", "code": "SPR25"}));
    });
    let updated = server.mock(|when, then| {
        when.method(PATCH)
            .path("/appeals/11")
            .json_body(json!({"financial_goal": 7500.0}));
        then.status(200).json_body(json!({
            "id": 11,
            "name": "Spring Appeal",
            "code": "SPR25",
            "financial_goal": "7500.00"
        }));
    });
    let deleted = server.mock(|when, then| {
        when.method(DELETE).path("/appeals/11");
        then.status(200).body("");
    });

    let lgl = client_for(&server);
    let appeals = lgl.appeals();

    let appeal = appeals
        .create(&json!({"name": "Spring Appeal", "code": "SPR25"}))
        .unwrap();
    assert_eq!(appeal.id, 11);

    let appeal = appeals.retrieve(appeal.id).unwrap();
    assert_eq!(appeal.code.as_deref(), Some("SPR25"));

    let appeal = appeals
        .update(appeal.id, &json!({"financial_goal": 7500.0}))
        .unwrap();
    assert_eq!(appeal.financial_goal, Some(7500.0));

    appeals.delete(appeal.id).unwrap();

    created.assert();
    retrieved.assert();
    updated.assert();
    deleted.assert();
}
