//! Resolved schemas and the cache that owns them.

mod cache;
mod resolve;
mod tag;


use crate::{
    error::{Error, UnsupportedReason},
    model::{Field, RecordModel},
};
use std::{any::TypeId, collections::HashMap};

// re-exports
pub use cache::{CacheStats, SchemaCache};
pub use tag::{FieldTag, parse_field_tag};

///
/// Schema
///
/// The resolved, immutable mapping for one record type.
///
/// Fields are ordered by explicit `sort` (unsorted fields last), ties
/// broken by declaration order in the depth-first walk.
///

#[derive(Debug)]
pub struct Schema {
    type_id: TypeId,
    path: &'static str,
    fields: Vec<Field>,
    by_column: HashMap<String, usize>,
    by_name: HashMap<&'static str, usize>,
}

impl Schema {
    /// Resolve and finalize the schema for `model`.
    pub fn resolve(model: &'static RecordModel) -> Result<Self, Error> {
        let fields = resolve::resolve(model)?;

        Self::from_fields(model, fields)
    }

    fn from_fields(model: &'static RecordModel, mut fields: Vec<Field>) -> Result<Self, Error> {
        if fields.is_empty() {
            return Err(Error::unsupported(
                model.path,
                UnsupportedReason::NoPersistedFields,
            ));
        }

        fields.sort_by_key(|f| (f.sort.is_none(), f.sort, f.order));

        let mut by_column = HashMap::with_capacity(fields.len());
        let mut by_name = HashMap::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            if let Some(&previous) = by_column.get(&field.column) {
                let first: &Field = &fields[previous];
                return Err(Error::unsupported(
                    model.path,
                    UnsupportedReason::DuplicateColumn {
                        column: field.column.clone(),
                        first: first.name,
                        second: field.name,
                    },
                ));
            }

            by_column.insert(field.column.clone(), index);
            by_name.insert(field.name, index);
        }

        Ok(Self {
            type_id: model.type_id(),
            path: model.path,
            fields,
            by_column,
            by_name,
        })
    }

    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Fields in schema order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn field_by_column(&self, column: &str) -> Option<&Field> {
        self.by_column.get(column).map(|&i| &self.fields[i])
    }

    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.by_name.get(name).map(|&i| &self.fields[i])
    }

    /// Look a field up by store column first, then by logical name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.field_by_column(name)
            .or_else(|| self.field_by_name(name))
    }

    pub fn primary_key_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.primary_key)
    }

    pub fn attribute_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.primary_key)
    }

    /// First primary-key field that the store assigns on write.
    #[must_use]
    pub fn auto_increment_field(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_auto_increment_key())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
