//! Column selections on writes.

use crate::common::{be64, user_mapper, User, USER_TABLE};
use rowmap::{Column, Error, SchemaError};

#[test]
fn selection_writes_only_named_columns() {
    let mapper = user_mapper();
    let user = User {
        id: "u1".to_string(),
        name: "Ann".to_string(),
        age: 30,
    };
    mapper.set(&user, &[Column::new("profile", "age")]).unwrap();

    let row = mapper.transport().stored_row(USER_TABLE, b"u1").unwrap();
    assert_eq!(row.columns.len(), 1);
    assert_eq!(row.columns[0].key(), "profile:age");
    assert_eq!(row.columns[0].value, be64(30));
}

#[test]
fn selection_applies_to_every_batch_record() {
    let mapper = user_mapper();
    let users = vec![
        User {
            id: "u1".to_string(),
            name: "Ann".to_string(),
            age: 30,
        },
        User {
            id: "u2".to_string(),
            name: "Bea".to_string(),
            age: 31,
        },
    ];
    mapper
        .batch_set(&users, &[Column::new("profile", "name")])
        .unwrap();

    for key in [b"u1".as_slice(), b"u2".as_slice()] {
        let row = mapper.transport().stored_row(USER_TABLE, key).unwrap();
        assert_eq!(row.columns.len(), 1);
        assert_eq!(row.columns[0].key(), "profile:name");
    }
}

#[test]
fn unknown_selection_fails_before_io() {
    let mapper = user_mapper();
    let user = User {
        id: "u1".to_string(),
        name: "Ann".to_string(),
        age: 30,
    };
    let err = mapper
        .set(&user, &[Column::new("profile", "nickname")])
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Schema(SchemaError::UnknownColumn { ref key, .. }) if key == "profile:nickname"
    ));
    assert_eq!(mapper.transport().row_count(USER_TABLE), 0, "nothing written");
}

#[test]
fn partial_update_leaves_other_columns_intact() {
    let mapper = user_mapper();
    let user = User {
        id: "u1".to_string(),
        name: "Ann".to_string(),
        age: 30,
    };
    mapper.set(&user, &[]).unwrap();

    let older = User {
        id: "u1".to_string(),
        name: "ignored".to_string(),
        age: 31,
    };
    mapper.set(&older, &[Column::new("profile", "age")]).unwrap();

    let found = mapper.get::<User>("u1");
    assert_eq!(found.value.name, "Ann", "unselected column untouched");
    assert_eq!(found.value.age, 31);
}
