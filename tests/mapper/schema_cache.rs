//! Schema resolution and caching behavior.

use std::sync::Arc;

use crate::common::{BrokenBinding, Reading, User};
use rowmap::{Schema, SchemaError, SchemaRegistry};

#[test]
fn resolving_twice_returns_identical_mapping() {
    let registry = SchemaRegistry::new();
    let first = registry.resolve::<User>().unwrap();
    let second = registry.resolve::<User>().unwrap();

    assert!(Arc::ptr_eq(&first, &second), "cached entry, not a rebuild");
    assert_eq!(first.field_index("profile:name"), Some(0));
    assert_eq!(first.field_index("profile:age"), Some(1));
}

#[test]
fn schemas_are_per_type() {
    let registry = SchemaRegistry::new();
    registry.resolve::<User>().unwrap();
    registry.resolve::<Reading>().unwrap();
    assert_eq!(registry.len(), 2);

    let reading = registry.resolve::<Reading>().unwrap();
    assert_eq!(reading.field_index("profile:name"), None);
    assert_eq!(reading.field_index("data,count"), None);
    assert_eq!(reading.field_index("data:count"), Some(1));
}

#[test]
fn unbound_fields_are_excluded_both_directions() {
    let registry = SchemaRegistry::new();
    let schema = registry.resolve::<Reading>().unwrap();
    assert_eq!(schema.column_count(), 5);
    assert_eq!(schema.column_key(5), None, "tag `-` stays unmapped");
}

#[test]
fn malformed_binding_fails_resolution() {
    let registry = SchemaRegistry::new();
    let err = registry.resolve::<BrokenBinding>().unwrap_err();
    assert!(matches!(
        err,
        SchemaError::MalformedBinding { field: "value", .. }
    ));
    assert!(registry.is_empty(), "failed derivations are not cached");
}

#[test]
fn derive_without_registry_matches_cached_schema() {
    let derived = Schema::derive::<User>().unwrap();
    let registry = SchemaRegistry::new();
    let cached = registry.resolve::<User>().unwrap();
    assert_eq!(derived, *cached);
}

#[test]
fn concurrent_resolution_builds_once() {
    let registry = Arc::new(SchemaRegistry::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || registry.resolve::<Reading>().unwrap())
        })
        .collect();

    let schemas: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(registry.len(), 1);
    for schema in &schemas[1..] {
        assert!(Arc::ptr_eq(&schemas[0], schema));
    }
}
