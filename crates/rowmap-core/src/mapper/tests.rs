use super::*;
use crate::{
    config::RowExistence,
    row::{Direction, KeyValue},
    test_fixtures::{Document, Event, User},
    types::Timestamp,
};

fn user() -> User {
    User {
        pk: 7,
        id: 0,
        name: "a".into(),
    }
}

#[test]
fn auto_increment_insert_ignores_existence_and_returns_key() {
    let mapper = RowMapper::new();

    let request = mapper.insert(&user()).expect("insert");

    assert_eq!(request.table, "users");
    assert_eq!(request.condition, RowExistence::Ignore);
    assert!(request.return_primary_key);
    assert_eq!(
        request.row.primary_key.value_of("id"),
        Some(&KeyValue::AutoIncrement)
    );
}

#[test]
fn plain_insert_uses_the_configured_condition() {
    let event = Event {
        user: "u".into(),
        seq: 1,
        payload: vec![1, 2],
    };

    let request = RowMapper::new().insert(&event).expect("insert");
    assert_eq!(request.condition, RowExistence::ExpectNotExist);
    assert!(!request.return_primary_key);

    let mapper = RowMapper::with_config(MapperConfig {
        insert_condition: RowExistence::ExpectExist,
        ..MapperConfig::default()
    });
    let request = mapper.insert(&event).expect("insert");
    assert_eq!(request.condition, RowExistence::ExpectExist);
}

#[test]
fn get_addresses_the_row_by_literal_key() {
    let mapper = RowMapper::with_config(MapperConfig {
        max_versions: 3,
        ..MapperConfig::default()
    });
    let user = User { id: 11, ..user() };

    let request = mapper.get(&user).expect("get");

    assert_eq!(request.max_versions, 3);
    assert_eq!(
        request.primary_key.value_of("id"),
        Some(&KeyValue::Value(11_i64.into()))
    );
}

#[test]
fn update_and_delete_ignore_row_existence() {
    let mapper = RowMapper::new();
    let doc = Document {
        doc_id: "d".into(),
        ..Document::default()
    };

    let update = mapper
        .update(&doc, [("label", NativeValue::from("new"))])
        .expect("update");
    assert_eq!(update.table, "documents");
    assert_eq!(update.condition, RowExistence::Ignore);
    assert_eq!(update.columns.put, vec![Column::new("label", "new")]);

    let delete = mapper.delete(&doc).expect("delete");
    assert_eq!(delete.condition, RowExistence::Ignore);
    assert_eq!(delete.primary_key.len(), 1);
}

#[test]
fn range_request_takes_direction_and_limit() {
    let mapper = RowMapper::with_config(MapperConfig {
        range_limit: Some(100),
        ..MapperConfig::default()
    });

    let request = mapper
        .range::<Event>(&Boundary::Max, &Boundary::Min)
        .expect("range");

    assert_eq!(request.table, "events");
    assert_eq!(request.direction, Direction::Backward);
    assert_eq!(request.limit, Some(100));
    assert_eq!(request.max_versions, 1);
    assert_eq!(request.with_limit(5).limit, Some(5));
}

#[test]
fn complete_insert_writes_back_the_assigned_key() {
    let mapper = RowMapper::new();
    let mut user = user();

    let assigned = mapper
        .complete_insert(
            &mut user,
            &[Column::new("pk", 7_i64), Column::new("id", 1_001_i64)],
        )
        .expect("complete");

    assert_eq!(assigned, Some(1_001));
    assert_eq!(user.id, 1_001);
}

#[test]
fn wrappers_share_the_cached_schema() {
    let mapper = RowMapper::new();

    let direct = mapper.schema::<User>().expect("schema");
    let wrapped = mapper.schema_of::<Vec<Box<User>>>().expect("schema");
    let slice = mapper.schema_of::<[User]>().expect("schema");

    assert!(Arc::ptr_eq(&direct, &wrapped));
    assert!(Arc::ptr_eq(&direct, &slice));
    assert_eq!(mapper.cache().len(), 1);
}

#[test]
fn scalars_are_not_records() {
    let mapper = RowMapper::new();

    for (err, label) in [
        (mapper.schema_of::<i64>().expect_err("scalar"), "i64"),
        (mapper.schema_of::<Option<String>>().expect_err("scalar"), "text"),
    ] {
        assert!(
            matches!(
                err,
                Error::UnsupportedType {
                    reason: UnsupportedReason::NotARecord(ref found),
                    ..
                } if found == label
            ),
            "{err}"
        );
    }
}

#[test]
fn mappers_keep_separate_caches() {
    let a = RowMapper::new();
    let b = RowMapper::new();

    a.row(&user()).expect("row");

    assert_eq!(a.cache().len(), 1);
    assert!(b.cache().is_empty());
}

#[test]
fn completed_update_writes_changes_back() {
    let mapper = RowMapper::new();
    let mut doc = Document {
        doc_id: "d".into(),
        ..Document::default()
    };
    doc.audit.label = "old".into();
    doc.audit.created_at = Some(Timestamp::from_unix_nanos(1));

    let update = mapper
        .update(
            &doc,
            [
                ("label", NativeValue::from("new")),
                ("created_at", NativeValue::Null),
            ],
        )
        .expect("update");
    assert_eq!(doc.audit.label, "old", "building the request leaves the record");

    let written = mapper.complete_update(&mut doc, &update).expect("complete");

    assert_eq!(written, 2);
    assert_eq!(doc.audit.label, "new");
    assert_eq!(doc.audit.created_at, None);
    assert_eq!(doc.label, "", "the shadowed member is never written");
}
