#[cfg(test)]
mod tests;

use crate::{
    config::MapperConfig,
    error::{Error, UnsupportedReason},
    model::NativeType,
    row::{
        self, Boundary, Column, PrimaryKey, RangeBounds, Row,
        request::{DeleteRowRequest, GetRowRequest, PutRowRequest, RangeRequest, UpdateRowRequest},
    },
    schema::{Schema, SchemaCache},
    traits::{Record, SchemaSource, Table},
    value::NativeValue,
};
use std::sync::Arc;

///
/// RowMapper
///
/// One mapping-engine instance: a schema cache plus request defaults.
/// Instances are independent; create one per process or per test.
///

#[derive(Debug, Default)]
pub struct RowMapper {
    cache: SchemaCache,
    config: MapperConfig,
}

impl RowMapper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: MapperConfig) -> Self {
        Self {
            cache: SchemaCache::new(),
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &MapperConfig {
        &self.config
    }

    #[must_use]
    pub const fn cache(&self) -> &SchemaCache {
        &self.cache
    }

    // ------------------------------------------------------------------
    // Schema
    // ------------------------------------------------------------------

    pub fn schema<R: Record>(&self) -> Result<Arc<Schema>, Error> {
        self.cache.get_or_resolve(R::model())
    }

    /// Schema for `S` after unwrapping pointer, slice and array wrappers.
    pub fn schema_of<S: SchemaSource + ?Sized>(&self) -> Result<Arc<Schema>, Error> {
        self.schema_for_type(S::source_type())
    }

    pub fn schema_for_type(&self, native_type: NativeType) -> Result<Arc<Schema>, Error> {
        match native_type.record_model() {
            Some(model) => self.cache.get_or_resolve(model),
            None => {
                let label = native_type.to_string();

                Err(Error::unsupported(
                    label.clone(),
                    UnsupportedReason::NotARecord(label),
                ))
            }
        }
    }

    // ------------------------------------------------------------------
    // Row building
    // ------------------------------------------------------------------

    pub fn primary_key<R: Record>(&self, record: &R) -> Result<PrimaryKey, Error> {
        row::build_primary_key(&*self.schema::<R>()?, record)
    }

    pub fn row<R: Record>(&self, record: &R) -> Result<Row, Error> {
        row::build_row(&*self.schema::<R>()?, record)
    }

    pub fn range_bounds<R: Record>(
        &self,
        start: &Boundary,
        end: &Boundary,
    ) -> Result<RangeBounds, Error> {
        row::build_range(&*self.schema::<R>()?, start, end)
    }

    /// Map returned key and attribute columns onto `record`.
    pub fn populate<R: Record>(
        &self,
        record: &mut R,
        key_columns: &[Column],
        attribute_columns: &[Column],
    ) -> Result<usize, Error> {
        row::populate_row(&*self.schema::<R>()?, record, key_columns, attribute_columns)
    }

    /// Write the key columns returned by an insert back onto `record` and
    /// report the store-assigned auto-increment value, if any.
    pub fn complete_insert<R: Record>(
        &self,
        record: &mut R,
        returned_keys: &[Column],
    ) -> Result<Option<i64>, Error> {
        let schema = self.schema::<R>()?;
        row::populate_row(&schema, record, returned_keys, &[])?;

        Ok(row::returned_auto_increment(&schema, returned_keys))
    }

    // ------------------------------------------------------------------
    // Requests
    // ------------------------------------------------------------------

    pub fn insert<T: Table>(&self, record: &T) -> Result<PutRowRequest, Error> {
        let row = self.row(record)?;

        Ok(PutRowRequest::new(record.table_name(), row, &self.config))
    }

    pub fn get<T: Table>(&self, record: &T) -> Result<GetRowRequest, Error> {
        let key = row::build_lookup_key(&*self.schema::<T>()?, record)?;

        Ok(GetRowRequest::new(record.table_name(), key, &self.config))
    }

    pub fn update<T, I, S>(&self, record: &T, changes: I) -> Result<UpdateRowRequest, Error>
    where
        T: Table,
        I: IntoIterator<Item = (S, NativeValue)>,
        S: AsRef<str>,
    {
        let schema = self.schema::<T>()?;
        let key = row::build_lookup_key(&schema, record)?;
        let columns = row::build_update_columns(&schema, changes)?;

        Ok(UpdateRowRequest::new(record.table_name(), key, columns))
    }

    /// Write the changes of an applied update back onto `record`.
    pub fn complete_update<R: Record>(
        &self,
        record: &mut R,
        request: &UpdateRowRequest,
    ) -> Result<usize, Error> {
        row::apply_update_columns(&*self.schema::<R>()?, record, &request.columns)
    }

    pub fn delete<T: Table>(&self, record: &T) -> Result<DeleteRowRequest, Error> {
        let key = row::build_lookup_key(&*self.schema::<T>()?, record)?;

        Ok(DeleteRowRequest::new(record.table_name(), key))
    }

    /// Range request over `T`'s table; the table name comes from
    /// `T::default()`.
    pub fn range<T: Table + Default>(
        &self,
        start: &Boundary,
        end: &Boundary,
    ) -> Result<RangeRequest, Error> {
        let bounds = self.range_bounds::<T>(start, end)?;

        Ok(RangeRequest::new(T::default().table_name(), bounds, &self.config))
    }
}
