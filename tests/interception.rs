//! End-to-end behaviour of the observed product service.

use std::time::Duration;

use storefront_probe::catalog::{CatalogError, NewProduct, ProductService};
use storefront_probe::interception::{Component, Level, RecordEvent};

mod common;

#[test]
fn test_get_product_success_scenario() {
    let (service, sink) = common::observed(common::SlowCatalog::new(
        common::seeded_catalog(),
        Duration::from_millis(5),
    ));

    let product = service.get_product(42).unwrap();
    assert_eq!(product.to_string(), "{id:42, name:Widget}");

    let timing = sink.records_for(Component::Timing);
    assert_eq!(timing.len(), 1);
    assert_eq!(timing[0].method, "get_product");
    match timing[0].event {
        RecordEvent::Timing { elapsed_ms } => {
            assert!(elapsed_ms >= 5);
            assert_eq!(
                timing[0].message(),
                format!("Execution time of get_product :: {} ms", elapsed_ms)
            );
        }
        ref other => panic!("unexpected event {:?}", other),
    }

    let lifecycle = sink.records_for(Component::Lifecycle);
    let kinds: Vec<_> = lifecycle.iter().map(common::kind).collect();
    assert_eq!(kinds, vec!["before", "returned", "completed"]);
    assert_eq!(
        lifecycle[1].message(),
        "Method executed successfully: get_product, returned: {id:42, name:Widget}"
    );
    assert_eq!(
        lifecycle[1].event,
        RecordEvent::Returned {
            value: product.to_string()
        }
    );
    assert!(lifecycle.iter().all(|r| r.method == "get_product" && r.level == Level::Info));
    assert!(lifecycle.iter().all(|r| r.invocation_id == timing[0].invocation_id));
}

#[test]
fn test_delete_missing_product_scenario() {
    let (service, sink) = common::observed(common::seeded_catalog());

    let err = service.delete_product(7).unwrap_err();
    assert_eq!(err, CatalogError::NotFound(7));

    assert!(sink.records_for(Component::Timing).is_empty());
    assert_eq!(
        sink.messages(),
        vec![
            "Calling method: delete_product".to_string(),
            "Method delete_product threw exception: id 7 missing".to_string(),
            "Method completed: delete_product".to_string(),
        ]
    );

    let failure = &sink.records()[1];
    assert_eq!(failure.level, Level::Error);
    match &failure.event {
        RecordEvent::Failed { message, detail } => {
            assert_eq!(message, "id 7 missing");
            assert_eq!(detail, "NotFound(7)");
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_every_method_is_matched() {
    let (service, sink) = common::observed(common::seeded_catalog());

    let created = service.create_product(NewProduct::named("Gadget")).unwrap();
    service.update_product(created.id, NewProduct::named("Gadget Pro")).unwrap();
    service.list_products().unwrap();
    service.get_product(created.id).unwrap();
    service.delete_product(created.id).unwrap();

    let methods: Vec<_> = sink
        .records_for(Component::Timing)
        .iter()
        .map(|r| r.method)
        .collect();
    assert_eq!(
        methods,
        vec![
            "create_product",
            "update_product",
            "list_products",
            "get_product",
            "delete_product"
        ]
    );
    assert_eq!(sink.records_for(Component::Lifecycle).len(), 15);
}

#[test]
fn test_records_nest_inside_timing() {
    let (service, sink) = common::observed(common::seeded_catalog());
    service.get_product(42).unwrap();

    let kinds: Vec<_> = sink.records().iter().map(common::kind).collect();
    assert_eq!(kinds, vec!["before", "returned", "completed", "timing"]);
}

#[test]
fn test_failed_call_records_share_invocation_id() {
    let (service, sink) = common::observed(common::seeded_catalog());
    let _ = service.delete_product(7);
    service.get_product(42).unwrap();

    let records = sink.records();
    assert_eq!(records.len(), 7);
    assert!(records[..3].iter().all(|r| r.invocation_id == records[0].invocation_id));
    assert!(records[3..].iter().all(|r| r.invocation_id == records[3].invocation_id));
    assert_ne!(records[0].invocation_id, records[3].invocation_id);
}

#[test]
fn test_repeated_calls_do_not_share_state() {
    let (service, sink) = common::observed(common::seeded_catalog());

    service.get_product(42).unwrap();
    let first = sink.records();
    sink.clear();
    service.get_product(42).unwrap();
    let second = sink.records();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(common::kind(a), common::kind(b));
        assert_eq!(a.method, b.method);
        assert_ne!(a.invocation_id, b.invocation_id);
    }
    assert!(first.iter().all(|r| r.invocation_id == first[0].invocation_id));
}

#[test]
fn test_invalid_input_error_propagates_unchanged() {
    let (service, sink) = common::observed(common::seeded_catalog());

    let err = service.create_product(NewProduct::named("")).unwrap_err();
    assert_eq!(err, CatalogError::Invalid("name must not be empty".into()));
    assert_eq!(
        sink.messages()[1],
        "Method create_product threw exception: invalid product: name must not be empty"
    );
    assert!(sink.records_for(Component::Timing).is_empty());
}
