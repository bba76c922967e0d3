//! Record types shared by the unit tests. Built with the real derive.
//!
//! Members stay `pub`: only public members are persisted.
#![allow(unreachable_pub)]

use crate::types::Timestamp;
use chrono::{DateTime, Utc};
use rowmap_derive::Record;

///
/// User
/// Two key columns, one assigned by the store.
///

#[derive(Clone, Debug, Default, PartialEq, Record)]
#[rowmap(table = "users")]
pub(crate) struct User {
    #[rowmap(column = "pk", primary_key)]
    pub pk: i64,

    #[rowmap(column = "id", primary_key, auto_increment)]
    pub id: i64,

    #[rowmap(column = "name")]
    pub name: String,
}

///
/// Audit
/// Embedded into `Document`.
///

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub(crate) struct Audit {
    #[rowmap(column = "created_at")]
    pub created_at: Option<Timestamp>,

    #[rowmap(column = "label")]
    pub label: String,

    pub note: String,
}

#[derive(Clone, Debug, Default, PartialEq, Record)]
#[rowmap(table = "documents")]
pub(crate) struct Document {
    #[rowmap(column = "doc_id", primary_key)]
    pub doc_id: String,

    // shadowed by `Audit::label`, which carries a column
    pub label: String,

    pub audit: Audit,
}

///
/// Inner
///

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub(crate) struct Inner {
    #[rowmap(column = "inner_title")]
    pub title: String,
}

/// `title` defers its value slot to the embedded redeclaration.
#[derive(Clone, Debug, Default, PartialEq, Record)]
pub(crate) struct Deferring {
    #[rowmap(column = "id", primary_key)]
    pub id: i64,

    #[rowmap(column = "title", statement)]
    pub title: String,

    pub inner: Inner,
}

/// Same shape as `Deferring` without the `statement` marker.
#[derive(Clone, Debug, Default, PartialEq, Record)]
pub(crate) struct Plain {
    #[rowmap(column = "id", primary_key)]
    pub id: i64,

    #[rowmap(column = "title")]
    pub title: String,

    pub inner: Inner,
}

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub(crate) struct Secretive {
    #[rowmap(column = "k", primary_key)]
    pub k: i64,

    #[rowmap(column = "hidden")]
    hidden: String,

    #[rowmap(column = "ignored", skip)]
    pub ignored: String,
}

impl Secretive {
    pub(crate) fn hidden(&self) -> &str {
        &self.hidden
    }
}

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub(crate) struct Sorted {
    #[rowmap(column = "c", primary_key, sort = 2)]
    pub c: i64,

    #[rowmap(column = "a", primary_key, sort = 1)]
    pub a: i64,

    #[rowmap(column = "b", primary_key)]
    pub b: i64,

    #[rowmap(column = "z", primary_key, sort = -1)]
    pub z: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Record)]
#[rowmap(table = "tagged")]
pub(crate) struct Tagged {
    #[rowmap(tag = "column:id;primaryKey;autoIncrement")]
    pub id: i64,

    #[rowmap(tag = "column:body;statement:false;sort:7")]
    pub body: String,

    #[rowmap(tag = r"column:a\;b")]
    pub odd: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub(crate) struct BadSort {
    #[rowmap(tag = "column:x;sort:abc")]
    pub x: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub(crate) struct Duplicated {
    #[rowmap(column = "x")]
    pub a: i64,

    #[rowmap(column = "x")]
    pub b: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub(crate) struct Unmapped {
    pub a: i64,
    pub b: String,
}

///
/// Everything
/// One member per supported native kind, plus indirection.
///

#[derive(Clone, Debug, Default, PartialEq, Record)]
#[rowmap(table = "everything")]
pub(crate) struct Everything {
    #[rowmap(column = "key", primary_key)]
    pub key: String,

    #[rowmap(column = "text")]
    pub text: String,
    #[rowmap(column = "bytes")]
    pub bytes: Vec<u8>,
    #[rowmap(column = "flag")]
    pub flag: bool,
    #[rowmap(column = "i8")]
    pub i8: i8,
    #[rowmap(column = "i16")]
    pub i16: i16,
    #[rowmap(column = "i32")]
    pub i32: i32,
    #[rowmap(column = "i64")]
    pub i64: i64,
    #[rowmap(column = "isize")]
    pub isize: isize,
    #[rowmap(column = "u8")]
    pub u8: u8,
    #[rowmap(column = "u16")]
    pub u16: u16,
    #[rowmap(column = "u32")]
    pub u32: u32,
    #[rowmap(column = "u64")]
    pub u64: u64,
    #[rowmap(column = "usize")]
    pub usize: usize,
    #[rowmap(column = "f32")]
    pub f32: f32,
    #[rowmap(column = "f64")]
    pub f64: f64,
    #[rowmap(column = "at")]
    pub at: Timestamp,
    #[rowmap(column = "when")]
    pub when: Option<DateTime<Utc>>,
    #[rowmap(column = "deep")]
    pub deep: Option<Option<Option<Option<i64>>>>,
    #[rowmap(column = "boxed")]
    pub boxed: Box<i32>,
}

///
/// Event
/// Composite key for range scans.
///

#[derive(Clone, Debug, Default, PartialEq, Record)]
#[rowmap(table = "events")]
pub(crate) struct Event {
    #[rowmap(column = "user", primary_key)]
    pub user: String,

    #[rowmap(column = "seq", primary_key)]
    pub seq: i64,

    #[rowmap(column = "payload")]
    pub payload: Vec<u8>,
}

/// Key slot that can be empty.
#[derive(Clone, Debug, Default, PartialEq, Record)]
pub(crate) struct Nullable {
    #[rowmap(column = "k", primary_key)]
    pub k: Option<i64>,
}

/// Key whose logical name differs from its column.
#[derive(Clone, Debug, Default, PartialEq, Record)]
#[rowmap(table = "ledger")]
pub(crate) struct Ledger {
    #[rowmap(column = "acct", primary_key)]
    pub account: String,

    #[rowmap(column = "seq", primary_key)]
    pub seq: i64,
}
