use crate::{
    coerce::{self, CoercionDirection, CoercionError},
    error::Error,
    model::Field,
    row::{
        Boundary, Column, Direction, Extreme, KeyColumn, KeyValue, PrimaryKey, RangeBounds, Row,
        UpdateColumns,
    },
    schema::Schema,
    traits::{Members, slot, slot_mut},
    value::{NativeValue, Value},
};
use std::collections::{HashMap, HashSet};
use tracing::debug;

// ============================================================================
// WRITE
// ============================================================================

/// Key columns in schema order. An auto-increment key emits the
/// [`KeyValue::AutoIncrement`] placeholder whatever its current value.
pub fn build_primary_key(schema: &Schema, record: &dyn Members) -> Result<PrimaryKey, Error> {
    key_columns(schema, record, true)
}

/// Key columns with literal values for every key, auto-increment included.
/// Used to address an existing row.
pub fn build_lookup_key(schema: &Schema, record: &dyn Members) -> Result<PrimaryKey, Error> {
    key_columns(schema, record, false)
}

/// Key columns plus one attribute column per non-key field.
/// Null attributes are omitted.
pub fn build_row(schema: &Schema, record: &dyn Members) -> Result<Row, Error> {
    let primary_key = build_primary_key(schema, record)?;

    let mut columns = Vec::new();
    for field in schema.attribute_fields() {
        if let Some(value) = read(schema, field, record)? {
            columns.push(Column::new(field.column.clone(), value));
        }
    }

    Ok(Row {
        primary_key,
        columns,
    })
}

/// Coerce `(name, value)` changes into the columns of one update.
///
/// Names are matched by column, then by logical name. Primary-key fields
/// cannot be updated. A null change deletes the column, except on a
/// timestamp field where it writes the empty sentinel. Null is only
/// accepted for members declared through `Option`.
pub fn build_update_columns<I, S>(schema: &Schema, changes: I) -> Result<UpdateColumns, Error>
where
    I: IntoIterator<Item = (S, NativeValue)>,
    S: AsRef<str>,
{
    let mut columns = UpdateColumns::default();
    for (name, native) in changes {
        let name = name.as_ref();
        let field = schema
            .field(name)
            .ok_or_else(|| Error::invalid_column(schema.path(), name, "no such field"))?;

        if field.primary_key {
            return Err(Error::invalid_column(
                schema.path(),
                name,
                "primary-key columns cannot be updated",
            ));
        }
        if native.is_null() && field.native_type.indirection == 0 {
            return Err(CoercionError::not_nullable(field, CoercionDirection::Write).into());
        }

        match coerce::to_store_value(field, &native)? {
            Some(value) => columns.put.push(Column::new(field.column.clone(), value)),
            None => columns.delete.push(field.column.clone()),
        }
    }

    Ok(columns)
}

/// Write the changes of an applied update back onto `record`.
///
/// Deleted columns and empty timestamp sentinels clear their slot. Every
/// change is coerced before any slot is written. Returns the number of
/// slots written.
pub fn apply_update_columns(
    schema: &Schema,
    record: &mut dyn Members,
    columns: &UpdateColumns,
) -> Result<usize, Error> {
    let lookup = |column: &str| {
        schema
            .field_by_column(column)
            .ok_or_else(|| Error::invalid_column(schema.path(), column, "no such field"))
    };

    let mut pending = Vec::with_capacity(columns.put.len() + columns.delete.len());
    for column in &columns.put {
        let field = lookup(&column.name)?;
        let native = match coerce::to_native_value(field, &column.value)? {
            Some(native) => native,
            None if column.value.as_str() == Some("") => NativeValue::Null,
            None => continue,
        };
        pending.push((field, native));
    }
    for column in &columns.delete {
        pending.push((lookup(column)?, NativeValue::Null));
    }

    for (field, native) in &pending {
        if native.is_null() && field.native_type.indirection == 0 {
            return Err(CoercionError::not_nullable(field, CoercionDirection::Read).into());
        }
    }

    let mut written = 0;
    for (field, native) in pending {
        let Some(target) = slot_mut(record, &field.path) else {
            continue;
        };
        coerce::assign_native(field, target, native)?;
        written += 1;
    }

    Ok(written)
}

// ============================================================================
// RANGE
// ============================================================================

/// Key bounds for one end of a range scan.
pub fn build_range_boundary(schema: &Schema, boundary: &Boundary) -> Result<PrimaryKey, Error> {
    let (values, fill): (&[(String, NativeValue)], Extreme) = match boundary {
        Boundary::Min => (&[], Extreme::Min),
        Boundary::Max => (&[], Extreme::Max),
        Boundary::Keys { values, fill } => (values.as_slice(), *fill),
    };

    let mut seen = HashSet::with_capacity(values.len());
    for (name, _) in values {
        match schema.field(name) {
            Some(field) if field.primary_key => {
                if !seen.insert(field.column.as_str()) {
                    return Err(Error::invalid_boundary(
                        schema.path(),
                        format!("key column '{}' is bounded more than once", field.column),
                    ));
                }
            }
            Some(_) => {
                return Err(Error::invalid_boundary(
                    schema.path(),
                    format!("'{name}' is not a primary-key column"),
                ));
            }
            None => {
                return Err(Error::invalid_boundary(
                    schema.path(),
                    format!("unknown key column '{name}'"),
                ));
            }
        }
    }

    let mut columns = Vec::new();
    for field in schema.primary_key_fields() {
        let given = values.iter().find(|(name, _)| field.matches(name));

        let value = match given {
            Some((name, native)) => {
                let value = coerce::to_store_value(field, native)?.ok_or_else(|| {
                    Error::invalid_boundary(schema.path(), format!("null bound for '{name}'"))
                })?;
                KeyValue::Value(value)
            }
            None => match fill {
                Extreme::Min => KeyValue::Min,
                Extreme::Max => KeyValue::Max,
            },
        };

        columns.push(KeyColumn::new(field.column.clone(), value));
    }

    Ok(PrimaryKey::new(columns))
}

/// Both ends of a range scan. The scan runs forward when `start` resolves
/// to the minimum sentinel, backward otherwise.
pub fn build_range(schema: &Schema, start: &Boundary, end: &Boundary) -> Result<RangeBounds, Error> {
    Ok(RangeBounds {
        start: build_range_boundary(schema, start)?,
        end: build_range_boundary(schema, end)?,
        direction: Direction::from_start(start.polarity()),
    })
}

// ============================================================================
// READ
// ============================================================================

/// Map returned columns onto `record`.
///
/// Key columns win over attribute columns of the same name. Every value is
/// coerced before any slot is written, so a coercion failure leaves the
/// record untouched. Returns the number of slots written.
pub fn populate_row(
    schema: &Schema,
    record: &mut dyn Members,
    key_columns: &[Column],
    attribute_columns: &[Column],
) -> Result<usize, Error> {
    let mut returned: HashMap<&str, &Value> = HashMap::new();
    for column in key_columns {
        returned.insert(&column.name, &column.value);
    }
    for column in attribute_columns {
        returned.entry(&column.name).or_insert(&column.value);
    }

    for name in returned.keys() {
        if schema.field_by_column(name).is_none() {
            debug!(record = schema.path(), column = name, "returned column has no mapped field");
        }
    }

    let mut pending = Vec::new();
    for field in schema.fields() {
        let Some(value) = returned.get(field.column.as_str()) else {
            continue;
        };
        if let Some(native) = coerce::to_native_value(field, value)? {
            pending.push((field, native));
        }
    }

    let mut written = 0;
    for (field, native) in pending {
        let Some(target) = slot_mut(record, &field.path) else {
            continue;
        };
        coerce::assign_native(field, target, native)?;
        written += 1;
    }

    Ok(written)
}

/// Store-assigned value of the auto-increment key from a write response.
#[must_use]
pub fn returned_auto_increment(schema: &Schema, returned_keys: &[Column]) -> Option<i64> {
    let field = schema.auto_increment_field()?;

    returned_keys
        .iter()
        .find(|c| c.name == field.column)
        .and_then(|c| c.value.as_i64())
}

// ============================================================================
// HELPERS
// ============================================================================

fn key_columns(
    schema: &Schema,
    record: &dyn Members,
    placeholder: bool,
) -> Result<PrimaryKey, Error> {
    let mut columns = Vec::new();
    for field in schema.primary_key_fields() {
        if placeholder && field.auto_increment {
            columns.push(KeyColumn::new(field.column.clone(), KeyValue::AutoIncrement));
            continue;
        }

        let value = read(schema, field, record)?
            .ok_or_else(|| CoercionError::missing_key(field))?;
        columns.push(KeyColumn::new(field.column.clone(), value));
    }

    Ok(PrimaryKey::new(columns))
}

fn read(schema: &Schema, field: &Field, record: &dyn Members) -> Result<Option<Value>, Error> {
    let native = slot(record, &field.path)
        .ok_or_else(|| {
            Error::invalid_column(schema.path(), field.name, "record has no slot for this field")
        })?
        .to_native();

    Ok(coerce::to_store_value(field, &native)?)
}
