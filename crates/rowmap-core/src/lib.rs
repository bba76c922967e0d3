//! Core runtime for rowmap: record description traits, the field resolver,
//! the type coercion engine, the schema cache, and the row builder.
#![warn(unreachable_pub)]

extern crate self as rowmap;

// public exports are one module level down
pub mod coerce;
pub mod config;
pub mod error;
pub mod model;
pub mod row;
pub mod schema;
pub mod traits;
pub mod types;
pub mod value;

mod mapper;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;
pub use mapper::RowMapper;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No builders, coercion helpers, or cache internals are re-exported here.
///

pub mod prelude {
    pub use crate::{
        RowMapper,
        row::{Boundary, Column, Direction, KeyValue, PrimaryKey, Row},
        traits::{FieldValue, Record, Table},
        types::Timestamp,
        value::{NativeValue, Value},
    };
}
