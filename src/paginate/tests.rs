//! Tests for pagination module

use std::cell::{Cell, RefCell};

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::error::{Error, Result};

use super::types::is_meaningful;
use super::*;

fn envelope(items: Vec<Value>, total: u32) -> Value {
    let count = items.len();
    json!({
        "items": items,
        "items_count": count,
        "total_items": total,
    })
}

// ============================================================================
// Classification Tests
// ============================================================================

#[test]
fn test_classify_envelope() {
    let body = json!({
        "items": [{"id": 1}],
        "items_count": 1,
        "total_items": 9,
        "limit": 25,
        "offset": 0,
        "next_item": 1,
        "next_link": "https://api.littlegreenlight.com/api/v1/appeals?limit=25&offset=1",
        "item_type": "appeal",
        "api_version": "1.0"
    });
    match PageBody::classify(body) {
        PageBody::Envelope(page) => {
            assert_eq!(page.items.len(), 1);
            assert_eq!(page.counted_items(), 1);
            assert_eq!(page.reported_total(), 9);
            assert_eq!(page.limit, Some(25));
            assert_eq!(page.next_item, Some(1));
            assert_eq!(page.item_type.as_deref(), Some("appeal"));
        }
        other => panic!("Expected Envelope, got {:?}", other),
    }
}

#[test]
fn test_classify_direct_and_other() {
    assert!(matches!(
        PageBody::classify(json!([1, 2])),
        PageBody::Direct(_)
    ));
    assert!(matches!(
        PageBody::classify(json!({"ok": true})),
        PageBody::Other(_)
    ));
    assert!(matches!(PageBody::classify(json!(null)), PageBody::Other(_)));
}

#[test]
fn test_page_counter_defaults() {
    let page = match PageBody::classify(json!({"items": [1, 2, 3]})) {
        PageBody::Envelope(page) => page,
        other => panic!("Expected Envelope, got {:?}", other),
    };
    assert_eq!(page.counted_items(), 3);
    assert_eq!(page.reported_total(), 0);
}

#[test]
fn test_meaningful_values() {
    assert!(is_meaningful(&json!({"id": 1})));
    assert!(is_meaningful(&json!("x")));
    assert!(is_meaningful(&json!(1)));
    assert!(is_meaningful(&json!(true)));

    assert!(!is_meaningful(&json!(null)));
    assert!(!is_meaningful(&json!(false)));
    assert!(!is_meaningful(&json!(0)));
    assert!(!is_meaningful(&json!("")));
    assert!(!is_meaningful(&json!({})));
    assert!(!is_meaningful(&json!([])));
}

// ============================================================================
// Walk Tests
// ============================================================================

#[test]
fn test_walk_five_full_pages() {
    let calls = Cell::new(0u32);
    let pages = Pages::with_limit(
        |limit, offset| {
            calls.set(calls.get() + 1);
            assert_eq!(limit, 10);
            let items: Vec<Value> = (offset..offset + 10).map(|i| json!(i)).collect();
            Ok(envelope(items, 50))
        },
        10,
    );

    let items = pages.collect::<Result<Vec<_>>>().unwrap();
    assert_eq!(items.len(), 50);
    assert_eq!(calls.get(), 5);
    // Order is preserved across page boundaries
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item, &json!(i as u32));
    }
}

#[test]
fn test_short_page_is_authoritative() {
    // The total claims 50 remain, but a 3-item page under a limit of 10
    // ends the walk after a single call
    let calls = Cell::new(0u32);
    let pages = Pages::with_limit(
        |_, _| {
            calls.set(calls.get() + 1);
            Ok(envelope(vec![json!(1), json!(2), json!(3)], 50))
        },
        10,
    );

    let items = pages.collect::<Result<Vec<_>>>().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_empty_first_page() {
    let calls = Cell::new(0u32);
    let pages = Pages::new(|_, _| {
        calls.set(calls.get() + 1);
        Ok(envelope(vec![], 0))
    });

    let items = pages.collect::<Result<Vec<_>>>().unwrap();
    assert!(items.is_empty());
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_direct_array_is_single_page() {
    // Array length equals the limit; a second call is still never made
    let calls = Cell::new(0u32);
    let pages = Pages::with_limit(
        |_, _| {
            calls.set(calls.get() + 1);
            let items: Vec<Value> = (0..10).map(|i| json!(i)).collect();
            Ok(Value::Array(items))
        },
        10,
    );

    let items = pages.collect::<Result<Vec<_>>>().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_empty_direct_array() {
    let calls = Cell::new(0u32);
    let pages = Pages::new(|_, _| {
        calls.set(calls.get() + 1);
        Ok(json!([]))
    });

    let items = pages.collect::<Result<Vec<_>>>().unwrap();
    assert!(items.is_empty());
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_unrecognized_body_yields_verbatim() {
    let pages = Pages::new(|_, _| Ok(json!({"id": 7, "name": "solo"})));
    let items = pages.collect::<Result<Vec<_>>>().unwrap();
    assert_eq!(items, vec![json!({"id": 7, "name": "solo"})]);
}

#[test]
fn test_empty_unrecognized_body_yields_nothing() {
    let pages = Pages::new(|_, _| Ok(json!({})));
    let items = pages.collect::<Result<Vec<_>>>().unwrap();
    assert!(items.is_empty());

    let pages = Pages::new(|_, _| Ok(Value::Null));
    assert_eq!(pages.count(), 0);
}

#[test]
fn test_missing_counters_end_after_one_page() {
    let calls = Cell::new(0u32);
    let pages = Pages::with_limit(
        |_, _| {
            calls.set(calls.get() + 1);
            Ok(json!({"items": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]}))
        },
        10,
    );

    let items = pages.collect::<Result<Vec<_>>>().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_offset_advances_by_items_yielded() {
    let seen = RefCell::new(Vec::new());
    let pages = Pages::with_limit(
        |limit, offset| {
            seen.borrow_mut().push(offset);
            let n = if offset < 20 { limit } else { 5 };
            let items: Vec<Value> = (offset..offset + n).map(|i| json!(i)).collect();
            Ok(envelope(items, 25))
        },
        10,
    );

    let items = pages.collect::<Result<Vec<_>>>().unwrap();
    assert_eq!(items.len(), 25);
    assert_eq!(*seen.borrow(), vec![0, 10, 20]);
}

#[test]
fn test_fetch_error_propagates_and_fuses() {
    let calls = Cell::new(0u32);
    let mut pages = Pages::with_limit(
        |_, offset| {
            calls.set(calls.get() + 1);
            if offset == 0 {
                let items: Vec<Value> = (0..10).map(|i| json!(i)).collect();
                Ok(envelope(items, 30))
            } else {
                Err(Error::config("backend went away"))
            }
        },
        10,
    );

    for _ in 0..10 {
        assert!(pages.next().unwrap().is_ok());
    }
    assert!(pages.next().unwrap().is_err());
    assert!(pages.next().is_none());
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_walk_is_lazy() {
    // Only consuming the first page's items never triggers a second call
    let calls = Cell::new(0u32);
    let mut pages = Pages::with_limit(
        |_, offset| {
            calls.set(calls.get() + 1);
            let items: Vec<Value> = (offset..offset + 10).map(|i| json!(i)).collect();
            Ok(envelope(items, 100))
        },
        10,
    );

    for _ in 0..10 {
        pages.next();
    }
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_fetch_all_collects() {
    let items = fetch_all(|_, _| Ok(envelope(vec![json!("a"), json!("b")], 2))).unwrap();
    assert_eq!(items, vec![json!("a"), json!("b")]);
}

#[test]
fn test_fetch_all_surfaces_error() {
    let result = fetch_all(|_, _| Err(Error::config("no")));
    assert!(result.is_err());
}
