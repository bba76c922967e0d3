//! ## Crate layout
//! - `core`: record traits, field resolver, coercion engine, schema cache
//!   and row builder.
//! - `Record`: the derive macro, re-exported at the root.
//! - `primitives`: the native kind and store kind registry.
//! - `base`: reusable embedded records.
//!
//! The `prelude` module carries the vocabulary needed to declare records and
//! build requests; builders and coercion helpers stay under `row`/`coerce`.

pub use rowmap_core as core;
pub use rowmap_primitives as primitives;

pub use rowmap_core::{
    Error, RowMapper, coerce, config, error, model, row, schema, traits, types, value,
};
pub use rowmap_derive::Record;

pub mod base;

// export so the derive resolves inside this crate
extern crate self as rowmap;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::Record;
    pub use rowmap_core::prelude::*;
}
