//! Failure handling: fatal schema errors, attached decode errors,
//! propagated transport errors.

use std::sync::Arc;

use crate::common::{user_mapper, BrokenBinding, User, USER_TABLE};
use rowmap::testing::MemoryTransport;
use rowmap::{
    Column, ColumnValue, Error, Mapper, MapperConfig, SchemaError, TextCodec,
};

#[test]
fn broken_record_type_fails_before_any_call() {
    let mapper: Mapper<MemoryTransport> = Mapper::new(MemoryTransport::new());
    let record = BrokenBinding {
        id: "b1".to_string(),
        value: 9,
    };

    let err = mapper.set(&record, &[]).unwrap_err();
    assert!(matches!(
        err,
        Error::Schema(SchemaError::MalformedBinding { .. })
    ));
    assert_eq!(mapper.transport().row_count("account:broken"), 0);

    let found = mapper.get::<BrokenBinding>("b1");
    assert!(matches!(found.error, Some(Error::Schema(_))));
}

#[test]
fn write_failure_propagates_unchanged() {
    let mapper = user_mapper();
    mapper.transport().fail_writes();
    let user = User {
        id: "u1".to_string(),
        name: "Ann".to_string(),
        age: 30,
    };

    let err = mapper.set(&user, &[]).unwrap_err();
    assert!(matches!(err, Error::Transport(_)));

    let err = mapper.batch_set(&[user], &[]).unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[test]
fn undecodable_cell_attaches_error_but_keeps_siblings() {
    let store = MemoryTransport::new();
    store.insert_row(
        USER_TABLE,
        "u1",
        vec![
            // Three bytes cannot hold a fixed-width integer.
            ColumnValue::new("profile", "age", vec![0, 0, 30]),
            ColumnValue::new("profile", "name", b"Ann".to_vec()),
        ],
    );
    let mapper = Mapper::new(store);

    let found = mapper.get::<User>("u1");
    assert!(matches!(found.error, Some(Error::Decode(_))));
    assert_eq!(found.value.name, "Ann", "good cell still decoded");
    assert_eq!(found.value.age, 0, "bad cell left at default");
}

#[test]
fn decode_error_in_one_row_does_not_poison_a_scan() {
    let mapper = user_mapper();
    let store = mapper.transport();
    store.insert_row(
        USER_TABLE,
        "u1",
        vec![
            ColumnValue::new("profile", "name", b"Ann".to_vec()),
            ColumnValue::new("profile", "age", vec![1, 2]),
        ],
    );
    store.insert_row(
        USER_TABLE,
        "u2",
        vec![
            ColumnValue::new("profile", "name", b"Bea".to_vec()),
            ColumnValue::new("profile", "age", crate::common::be64(31)),
        ],
    );

    let found = mapper.find::<User>("u", "v", &[], None);
    assert!(matches!(found.error, Some(Error::Decode(_))));
    assert_eq!(found.value.len(), 2, "both rows materialized");
    assert_eq!(found.value[1].age, 31);
}

#[test]
fn outcome_into_result_drops_partial_data() {
    let mapper = user_mapper();
    mapper.transport().fail_scan_at(0);
    let result = mapper.find::<User>("a", "z", &[], None).into_result();
    assert!(result.is_err());
}

#[test]
fn swapped_codec_changes_the_wire_format() {
    let config = MapperConfig::new().codec(Arc::new(TextCodec));
    let mapper = Mapper::with_config(MemoryTransport::new(), config);
    let user = User {
        id: "u1".to_string(),
        name: "Ann".to_string(),
        age: 30,
    };
    mapper.set(&user, &[]).unwrap();

    let row = mapper.transport().stored_row(USER_TABLE, b"u1").unwrap();
    let age = row.columns.iter().find(|c| c.qualifier == "age").unwrap();
    assert_eq!(age.value, b"30", "decimal text instead of fixed width");

    let found = mapper.get::<User>("u1");
    assert!(found.is_ok());
    assert_eq!(found.value, user);
}

#[test]
fn selection_errors_take_precedence_over_write_failures() {
    let mapper = user_mapper();
    mapper.transport().fail_writes();
    let user = User {
        id: "u1".to_string(),
        name: "Ann".to_string(),
        age: 30,
    };

    // The unknown column is detected before the failing transport is hit.
    let err = mapper
        .set(&user, &[Column::new("profile", "missing")])
        .unwrap_err();
    assert!(matches!(err, Error::Schema(_)));
}
