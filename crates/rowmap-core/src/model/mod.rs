//! Runtime data model definitions.
//!
//! - `record` holds the static, macro-generated description of a struct
//!   (what the derive saw, nothing resolved yet);
//! - `native` describes the declared type of one member;
//! - `field` holds one resolved, persisted field of a schema.
//!
//! In general:
//! - the derive macro defines *what exists*
//! - `schema` decides *what is persisted*
pub mod field;
pub mod native;
pub mod record;

pub use field::Field;
pub use native::{BaseType, NativeType, RecordRef};
pub use record::{Annotation, FieldAttr, MemberModel, RecordModel, Visibility};
