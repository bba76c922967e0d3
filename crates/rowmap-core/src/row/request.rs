//! Request primitives handed to the row-operation client.
//!
//! Building these never touches the network; the client executes them.

use crate::{
    config::{MapperConfig, RowExistence},
    row::{Direction, PrimaryKey, RangeBounds, Row, UpdateColumns},
};

///
/// PutRowRequest
///

#[derive(Clone, Debug, PartialEq)]
pub struct PutRowRequest {
    pub table: String,
    pub row: Row,
    pub condition: RowExistence,
    pub return_primary_key: bool,
}

impl PutRowRequest {
    /// An auto-increment key overrides the configured condition: the row
    /// cannot exist yet, and the assigned key is requested back.
    #[must_use]
    pub fn new(table: impl Into<String>, row: Row, config: &MapperConfig) -> Self {
        let auto_increment = row.primary_key.has_auto_increment();
        let condition = if auto_increment {
            RowExistence::Ignore
        } else {
            config.insert_condition
        };

        Self {
            table: table.into(),
            row,
            condition,
            return_primary_key: auto_increment,
        }
    }
}

///
/// GetRowRequest
///

#[derive(Clone, Debug, PartialEq)]
pub struct GetRowRequest {
    pub table: String,
    pub primary_key: PrimaryKey,
    pub max_versions: u32,
}

impl GetRowRequest {
    #[must_use]
    pub fn new(table: impl Into<String>, primary_key: PrimaryKey, config: &MapperConfig) -> Self {
        Self {
            table: table.into(),
            primary_key,
            max_versions: config.max_versions,
        }
    }
}

///
/// UpdateRowRequest
///

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateRowRequest {
    pub table: String,
    pub primary_key: PrimaryKey,
    pub columns: UpdateColumns,
    pub condition: RowExistence,
}

impl UpdateRowRequest {
    #[must_use]
    pub fn new(table: impl Into<String>, primary_key: PrimaryKey, columns: UpdateColumns) -> Self {
        Self {
            table: table.into(),
            primary_key,
            columns,
            condition: RowExistence::Ignore,
        }
    }
}

///
/// DeleteRowRequest
///

#[derive(Clone, Debug, PartialEq)]
pub struct DeleteRowRequest {
    pub table: String,
    pub primary_key: PrimaryKey,
    pub condition: RowExistence,
}

impl DeleteRowRequest {
    #[must_use]
    pub fn new(table: impl Into<String>, primary_key: PrimaryKey) -> Self {
        Self {
            table: table.into(),
            primary_key,
            condition: RowExistence::Ignore,
        }
    }
}

///
/// RangeRequest
///

#[derive(Clone, Debug, PartialEq)]
pub struct RangeRequest {
    pub table: String,
    pub start: PrimaryKey,
    pub end: PrimaryKey,
    pub direction: Direction,
    pub limit: Option<u32>,
    pub max_versions: u32,
}

impl RangeRequest {
    #[must_use]
    pub fn new(table: impl Into<String>, bounds: RangeBounds, config: &MapperConfig) -> Self {
        Self {
            table: table.into(),
            start: bounds.start,
            end: bounds.end,
            direction: bounds.direction,
            limit: config.range_limit,
            max_versions: config.max_versions,
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}
