use super::*;
use crate::{
    coerce::{CoercionError, CoercionReason},
    error::{Error, ErrorClass},
    schema::Schema,
    test_fixtures::{
        Deferring, Document, Event, Everything, Inner, Ledger, Nullable, Plain, User,
    },
    traits::Record,
    types::Timestamp,
    value::NativeValue,
};

fn schema<R: Record>() -> Schema {
    Schema::resolve(R::model()).expect("schema resolves")
}

fn key(name: &str, value: impl Into<Value>) -> KeyColumn {
    KeyColumn::new(name, value.into())
}

fn marker(name: &str, value: KeyValue) -> KeyColumn {
    KeyColumn::new(name, value)
}

// ---------------------------------------------------------------------
// Write
// ---------------------------------------------------------------------

#[test]
fn user_row_has_key_placeholder_and_attribute() {
    let schema = schema::<User>();
    let user = User {
        pk: 7,
        id: 99,
        name: "a".into(),
    };

    let row = build_row(&schema, &user).expect("row");

    assert_eq!(
        row.primary_key.to_vec(),
        vec![key("pk", 7_i64), marker("id", KeyValue::AutoIncrement)]
    );
    assert_eq!(row.columns, vec![Column::new("name", "a")]);
    assert!(row.primary_key.has_auto_increment());
}

#[test]
fn auto_increment_placeholder_ignores_current_value() {
    let schema = schema::<User>();

    for id in [0, -1, i64::MAX] {
        let user = User {
            id,
            ..User::default()
        };
        let pk = build_primary_key(&schema, &user).expect("key");

        assert_eq!(pk.value_of("id"), Some(&KeyValue::AutoIncrement));
    }
}

#[test]
fn lookup_key_carries_literal_auto_increment_value() {
    let schema = schema::<User>();
    let user = User {
        pk: 1,
        id: 42,
        ..User::default()
    };

    let pk = build_lookup_key(&schema, &user).expect("key");

    assert_eq!(pk.to_vec(), vec![key("pk", 1_i64), key("id", 42_i64)]);
}

#[test]
fn statement_field_reads_the_embedded_slot() {
    let deferring = Deferring {
        id: 1,
        title: "outer".into(),
        inner: Inner {
            title: "inner".into(),
        },
    };
    let row = build_row(&schema::<Deferring>(), &deferring).expect("row");
    assert_eq!(row.column("title"), Some(&Value::from("inner")));

    let plain = Plain {
        id: 1,
        title: "outer".into(),
        inner: Inner {
            title: "inner".into(),
        },
    };
    let row = build_row(&schema::<Plain>(), &plain).expect("row");
    assert_eq!(row.column("title"), Some(&Value::from("outer")));
}

#[test]
fn null_attributes_are_omitted_but_null_timestamps_are_empty() {
    let schema = schema::<Everything>();
    let row = build_row(&schema, &Everything::default()).expect("row");

    assert_eq!(row.column("deep"), None);
    assert_eq!(row.column("when"), Some(&Value::from("")));
    assert_eq!(row.column("at"), Some(&Value::from("1970-01-01T00:00:00.000000000Z")));
}

#[test]
fn null_primary_key_is_a_coercion_failure() {
    let schema = schema::<Nullable>();

    let err = build_primary_key(&schema, &Nullable { k: None }).expect_err("null key");
    assert!(matches!(
        err,
        Error::Coercion(CoercionError {
            reason: CoercionReason::MissingKey,
            ..
        })
    ));

    let pk = build_primary_key(&schema, &Nullable { k: Some(3) }).expect("key");
    assert_eq!(pk.to_vec(), vec![key("k", 3_i64)]);
}

// ---------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------

#[test]
fn update_columns_accept_logical_or_column_names() {
    let schema = schema::<Document>();

    let columns = build_update_columns(
        &schema,
        [
            ("label", NativeValue::from("x")),
            ("created_at", NativeValue::Null),
        ],
    )
    .expect("columns");

    assert_eq!(
        columns.put,
        vec![Column::new("label", "x"), Column::new("created_at", "")]
    );
    assert!(columns.delete.is_empty());
}

#[test]
fn null_update_deletes_optional_columns() {
    let schema = schema::<Everything>();

    let columns = build_update_columns(
        &schema,
        [
            ("deep", NativeValue::Null),
            ("when", NativeValue::Null),
            ("i32", NativeValue::from(5_i32)),
        ],
    )
    .expect("columns");

    assert_eq!(
        columns.put,
        vec![Column::new("when", ""), Column::new("i32", 5_i64)]
    );
    assert_eq!(columns.delete, vec!["deep".to_string()]);
}

#[test]
fn null_update_of_required_member_is_rejected() {
    let schema = schema::<Everything>();

    for name in ["i64", "flag", "at"] {
        let err = build_update_columns(&schema, [(name, NativeValue::Null)]).expect_err("null");

        assert_eq!(err.class(), ErrorClass::TypeMismatch, "{name}");
        assert!(
            matches!(
                err,
                Error::Coercion(CoercionError {
                    reason: CoercionReason::NotNullable,
                    ..
                })
            ),
            "{name}"
        );
    }
}

#[test]
fn applied_null_update_reads_back() {
    let schema = schema::<Everything>();
    let at = Timestamp::from_unix_nanos(1_000);
    let mut record = Everything {
        deep: Some(Some(Some(Some(3)))),
        when: Some(at.into()),
        ..Everything::default()
    };

    let columns = build_update_columns(
        &schema,
        [
            ("deep", NativeValue::Null),
            ("when", NativeValue::Null),
            ("i32", NativeValue::from(5_i64)),
        ],
    )
    .expect("columns");

    let written = apply_update_columns(&schema, &mut record, &columns).expect("apply");
    assert_eq!(written, 3);
    assert_eq!(record.deep, None);
    assert_eq!(record.when, None);
    assert_eq!(record.i32, 5);

    let expected = record.clone();
    populate_row(&schema, &mut record, &[], &columns.put).expect("populate");
    assert_eq!(record, expected);
}

#[test]
fn applied_update_is_all_or_nothing() {
    let schema = schema::<Everything>();
    let mut record = Everything::default();
    let columns = UpdateColumns {
        put: vec![Column::new("i32", 9_i64)],
        delete: vec!["i64".to_string()],
    };

    let err = apply_update_columns(&schema, &mut record, &columns).expect_err("required");

    assert_eq!(err.class(), ErrorClass::TypeMismatch);
    assert_eq!(record, Everything::default());
}

#[test]
fn update_columns_reject_keys_and_unknown_names() {
    let schema = schema::<Document>();

    let err = build_update_columns(&schema, [("doc_id", NativeValue::from("y"))])
        .expect_err("key");
    assert!(matches!(err, Error::InvalidColumn { ref name, .. } if name == "doc_id"));
    assert_eq!(err.class(), ErrorClass::InvalidArgument);

    let err = build_update_columns(&schema, [("nope", NativeValue::from(1_i64))])
        .expect_err("unknown");
    assert!(matches!(err, Error::InvalidColumn { reason: "no such field", .. }));
}

#[test]
fn update_columns_coerce_values() {
    let schema = schema::<Everything>();

    let err = build_update_columns(&schema, [("u8", NativeValue::Text("x".into()))])
        .expect_err("mismatch");

    assert_eq!(err.class(), ErrorClass::TypeMismatch);
}

// ---------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------

#[test]
fn min_to_max_scans_forward() {
    let range = build_range(&schema::<Event>(), &Boundary::Min, &Boundary::Max).expect("range");

    assert_eq!(range.direction, Direction::Forward);
    assert_eq!(
        range.start.to_vec(),
        vec![marker("user", KeyValue::Min), marker("seq", KeyValue::Min)]
    );
    assert_eq!(
        range.end.to_vec(),
        vec![marker("user", KeyValue::Max), marker("seq", KeyValue::Max)]
    );
}

#[test]
fn max_to_min_scans_backward() {
    let range = build_range(&schema::<Event>(), &Boundary::Max, &Boundary::Min).expect("range");

    assert_eq!(range.direction, Direction::Backward);
}

#[test]
fn partial_bounds_fill_with_their_polarity() {
    let schema = schema::<Event>();
    let start = Boundary::Min.with("user", "alice");
    let end = Boundary::keys(Extreme::Max).with("user", "alice");

    let range = build_range(&schema, &start, &end).expect("range");

    assert_eq!(range.direction, Direction::Forward);
    assert_eq!(
        range.start.to_vec(),
        vec![key("user", "alice"), marker("seq", KeyValue::Min)]
    );
    assert_eq!(
        range.end.to_vec(),
        vec![key("user", "alice"), marker("seq", KeyValue::Max)]
    );
}

#[test]
fn concrete_bounds_are_coerced() {
    let schema = schema::<Event>();
    let start = Boundary::keys(Extreme::Max)
        .with("user", "bob")
        .with("seq", 10_u8);

    let bound = build_range_boundary(&schema, &start).expect("bound");

    assert_eq!(bound.to_vec(), vec![key("user", "bob"), key("seq", 10_i64)]);
}

#[test]
fn invalid_bounds_are_rejected_before_any_store_call() {
    let schema = schema::<Event>();

    for boundary in [
        Boundary::Min.with("nope", 1_i64),
        Boundary::Min.with("payload", vec![1_u8]),
        Boundary::Min.with("seq", None::<i64>),
    ] {
        let err = build_range_boundary(&schema, &boundary).expect_err("invalid");
        assert!(matches!(err, Error::InvalidBoundary { .. }), "{err}");
    }
}

#[test]
fn key_bounded_twice_is_rejected() {
    let schema = schema::<Ledger>();

    for boundary in [
        Boundary::Min.with("account", "a").with("acct", "b"),
        Boundary::Max.with("seq", 1_i64).with("seq", 2_i64),
    ] {
        let err = build_range_boundary(&schema, &boundary).expect_err("duplicate");
        assert!(matches!(err, Error::InvalidBoundary { .. }), "{err}");
    }

    let bound = build_range_boundary(&schema, &Boundary::Min.with("account", "a"))
        .expect("logical name");
    assert_eq!(
        bound.to_vec(),
        vec![key("acct", "a"), marker("seq", KeyValue::Min)]
    );
}

#[test]
fn boundary_parses_sentinel_names() {
    assert_eq!("min".parse::<Boundary>().expect("min"), Boundary::Min);
    assert_eq!(" MAX ".parse::<Boundary>().expect("max"), Boundary::Max);

    let err = "first".parse::<Boundary>().expect_err("invalid");
    assert_eq!(err.class(), ErrorClass::InvalidArgument);
}

// ---------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------

#[test]
fn populate_user_from_returned_columns() {
    let schema = schema::<User>();
    let mut user = User::default();

    let written = populate_row(
        &schema,
        &mut user,
        &[Column::new("pk", 7_i64), Column::new("id", 42_i64)],
        &[Column::new("name", "b")],
    )
    .expect("populate");

    assert_eq!(written, 3);
    assert_eq!(
        user,
        User {
            pk: 7,
            id: 42,
            name: "b".into(),
        }
    );
}

#[test]
fn attribute_columns_do_not_override_key_columns() {
    let schema = schema::<User>();
    let mut user = User::default();

    populate_row(
        &schema,
        &mut user,
        &[Column::new("pk", 7_i64)],
        &[Column::new("pk", 8_i64), Column::new("extra", true)],
    )
    .expect("populate");

    assert_eq!(user.pk, 7);
}

#[test]
fn populate_is_all_or_nothing() {
    let schema = schema::<Everything>();
    let mut record = Everything::default();

    let err = populate_row(
        &schema,
        &mut record,
        &[Column::new("key", "k")],
        &[Column::new("u8", 1_000_i64)],
    )
    .expect_err("overflow");

    assert_eq!(err.class(), ErrorClass::TypeMismatch);
    assert_eq!(record, Everything::default(), "no slot was written");
}

#[test]
fn populate_writes_embedded_and_indirect_slots() {
    let ts = Timestamp::from_unix_nanos(5);
    let mut doc = Document::default();

    populate_row(
        &schema::<Document>(),
        &mut doc,
        &[Column::new("doc_id", "d")],
        &[
            Column::new("label", "l"),
            Column::new("created_at", ts.to_rfc3339_nanos()),
        ],
    )
    .expect("populate");

    assert_eq!(doc.audit.label, "l");
    assert_eq!(doc.audit.created_at, Some(ts));
    assert_eq!(doc.label, "", "the shadowed member is never written");
}

#[test]
fn populate_statement_field_writes_the_embedded_slot() {
    let mut record = Deferring::default();

    populate_row(
        &schema::<Deferring>(),
        &mut record,
        &[],
        &[Column::new("title", "t")],
    )
    .expect("populate");

    assert_eq!(record.inner.title, "t");
    assert_eq!(record.title, "");
}

#[test]
fn returned_auto_increment_reads_the_assigned_key() {
    let user_schema = schema::<User>();
    let returned = [Column::new("pk", 7_i64), Column::new("id", 1_001_i64)];

    assert_eq!(returned_auto_increment(&user_schema, &returned), Some(1_001));
    assert_eq!(returned_auto_increment(&user_schema, &returned[..1]), None);
    assert_eq!(returned_auto_increment(&schema::<Event>(), &returned), None);
}
