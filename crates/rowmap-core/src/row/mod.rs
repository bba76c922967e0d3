//! Row Builder.
//!
//! Turns a record instance into store request primitives and maps
//! returned columns back onto a record. Everything crossing this boundary
//! is expressed in store [`Value`]s; native record types never leave.

mod boundary;
mod builder;
pub mod request;

#[cfg(test)]
mod tests;

use crate::value::Value;
use derive_more::{Deref, IntoIterator};

// re-exports
pub use boundary::{Boundary, Direction, Extreme, RangeBounds};
pub use builder::{
    apply_update_columns, build_lookup_key, build_primary_key, build_range, build_range_boundary,
    build_row, build_update_columns, populate_row, returned_auto_increment,
};

///
/// KeyValue
///
/// One primary-key column value, or a marker the store resolves.
///

#[derive(Clone, Debug, PartialEq)]
pub enum KeyValue {
    Value(Value),

    /// Assign on write.
    AutoIncrement,

    /// Least possible value of the column.
    Min,

    /// Greatest possible value of the column.
    Max,
}

impl KeyValue {
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Value> for KeyValue {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

///
/// KeyColumn
///

#[derive(Clone, Debug, PartialEq)]
pub struct KeyColumn {
    pub name: String,
    pub value: KeyValue,
}

impl KeyColumn {
    pub fn new(name: impl Into<String>, value: impl Into<KeyValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

///
/// PrimaryKey
/// Key columns in schema order.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct PrimaryKey(Vec<KeyColumn>);

impl PrimaryKey {
    #[must_use]
    pub const fn new(columns: Vec<KeyColumn>) -> Self {
        Self(columns)
    }

    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&KeyValue> {
        self.0.iter().find(|c| c.name == name).map(|c| &c.value)
    }

    /// Whether any column asks the store to assign its value.
    #[must_use]
    pub fn has_auto_increment(&self) -> bool {
        self.0.iter().any(|c| c.value == KeyValue::AutoIncrement)
    }

    #[must_use]
    pub fn into_columns(self) -> Vec<KeyColumn> {
        self.0
    }
}

///
/// Column
/// A named store value, as sent in a request or returned in a response.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub value: Value,
}

impl Column {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

///
/// Row
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    pub primary_key: PrimaryKey,
    pub columns: Vec<Column>,
}

impl Row {
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Value> {
        self.columns.iter().find(|c| c.name == name).map(|c| &c.value)
    }
}

///
/// UpdateColumns
///
/// Column changes of one update: values to put and columns to delete.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateColumns {
    pub put: Vec<Column>,
    pub delete: Vec<String>,
}
