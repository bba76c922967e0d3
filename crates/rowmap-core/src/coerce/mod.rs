//! Type Coercion Engine.
//!
//! Converts between a field's native representation and the five store
//! primitives. Integer widths are interchangeable on write and checked on
//! read; `f32` widens to `f64` and narrows back only when in range.
//! Indirection layers are handled by the slot itself (`FieldValue` for
//! `Option`/`Box`), so this module only ever sees unwrapped leaves.


use crate::{
    model::Field,
    traits::FieldValue,
    types::Timestamp,
    value::{NativeValue, Value},
};
use derive_more::Display;
use rowmap_primitives::NativeKind;
use thiserror::Error as ThisError;
use tracing::debug;

///
/// CoercionError
///
/// A native/store pair with no defined conversion. This points at a
/// schema declaration defect, not at bad data.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("cannot coerce field '{field}' on {direction} (native {native}, store {store}): {reason}")]
pub struct CoercionError {
    pub field: String,
    pub direction: CoercionDirection,
    pub native: String,
    pub store: &'static str,
    pub reason: CoercionReason,
}

impl CoercionError {
    pub(crate) fn missing_key(field: &Field) -> Self {
        Self::new(field, CoercionDirection::Write, CoercionReason::MissingKey)
    }

    pub(crate) fn not_nullable(field: &Field, direction: CoercionDirection) -> Self {
        Self::new(field, direction, CoercionReason::NotNullable)
    }

    fn new(field: &Field, direction: CoercionDirection, reason: CoercionReason) -> Self {
        let store = field
            .native_type
            .scalar_kind()
            .map_or("none", |kind| kind.store_kind().label());

        Self {
            field: field.name.to_string(),
            direction,
            native: field.native_type.to_string(),
            store,
            reason,
        }
    }
}

///
/// CoercionDirection
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum CoercionDirection {
    #[display("write")]
    Write,

    #[display("read")]
    Read,
}

///
/// CoercionReason
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CoercionReason {
    #[error("value of kind '{found}' does not fit")]
    KindMismatch { found: &'static str },

    #[error("value {value} is out of range")]
    OutOfRange { value: String },

    #[error("record-typed members cannot be stored as a column")]
    NotAScalar,

    #[error("primary-key value is null")]
    MissingKey,

    #[error("null cannot be held by a member without `Option`")]
    NotNullable,
}

/// Convert a native value into the store primitive for `field`.
///
/// Returns `Ok(None)` when the value is null and the column should be
/// omitted. A null timestamp is written as an empty string.
pub fn to_store_value(field: &Field, native: &NativeValue) -> Result<Option<Value>, CoercionError> {
    let err = |reason| CoercionError::new(field, CoercionDirection::Write, reason);

    let kind = field
        .native_type
        .scalar_kind()
        .ok_or_else(|| err(CoercionReason::NotAScalar))?;

    let Some(found) = native.kind() else {
        return Ok((kind == NativeKind::Timestamp).then(|| Value::String(String::new())));
    };

    if !compatible(kind, found) {
        return Err(err(CoercionReason::KindMismatch {
            found: found.label(),
        }));
    }

    let out_of_range = |value: &dyn std::fmt::Display| {
        err(CoercionReason::OutOfRange {
            value: value.to_string(),
        })
    };

    let value = match native {
        NativeValue::Timestamp(ts) if !ts.has_four_digit_year() => return Err(out_of_range(ts)),
        NativeValue::Timestamp(ts) => Value::String(ts.to_rfc3339_nanos()),
        NativeValue::Text(s) => Value::String(s.clone()),
        NativeValue::Bytes(b) => Value::Binary(b.clone()),
        NativeValue::Int8(v) => Value::Integer(i64::from(*v)),
        NativeValue::Int16(v) => Value::Integer(i64::from(*v)),
        NativeValue::Int32(v) => Value::Integer(i64::from(*v)),
        NativeValue::Int64(v) => Value::Integer(*v),
        NativeValue::Isize(v) => Value::Integer(i64::try_from(*v).map_err(|_| out_of_range(v))?),
        NativeValue::Uint8(v) => Value::Integer(i64::from(*v)),
        NativeValue::Uint16(v) => Value::Integer(i64::from(*v)),
        NativeValue::Uint32(v) => Value::Integer(i64::from(*v)),
        NativeValue::Uint64(v) => Value::Integer(i64::try_from(*v).map_err(|_| out_of_range(v))?),
        NativeValue::Usize(v) => Value::Integer(i64::try_from(*v).map_err(|_| out_of_range(v))?),
        NativeValue::Float32(v) => Value::Double(f64::from(*v)),
        NativeValue::Float64(v) => Value::Double(*v),
        NativeValue::Bool(v) => Value::Boolean(*v),
        NativeValue::Null => return Ok(None),
    };

    Ok(Some(value))
}

/// Convert a store primitive back into the native leaf for `field`.
///
/// Returns `Ok(None)` when a timestamp column does not parse; the slot is
/// then left as it was, since the column may hold the empty sentinel.
pub fn to_native_value(field: &Field, value: &Value) -> Result<Option<NativeValue>, CoercionError> {
    let err = |reason| CoercionError::new(field, CoercionDirection::Read, reason);

    let kind = field
        .native_type
        .scalar_kind()
        .ok_or_else(|| err(CoercionReason::NotAScalar))?;

    let native = match (kind, value) {
        (NativeKind::Timestamp, Value::String(s)) => {
            return match Timestamp::parse_rfc3339_nanos(s) {
                Ok(ts) => Ok(Some(NativeValue::Timestamp(ts))),
                Err(e) => {
                    debug!(field = field.name, error = %e, "leaving unparsable timestamp unassigned");
                    Ok(None)
                }
            };
        }
        (NativeKind::Text, Value::String(s)) => NativeValue::Text(s.clone()),
        (NativeKind::Bytes, Value::Binary(b)) => NativeValue::Bytes(b.clone()),
        (NativeKind::Bool, Value::Boolean(b)) => NativeValue::Bool(*b),
        (kind, Value::Integer(v)) if kind.is_integer() => narrow_integer(kind, *v).ok_or_else(|| {
            err(CoercionReason::OutOfRange {
                value: v.to_string(),
            })
        })?,
        (NativeKind::Float64, Value::Double(v)) => NativeValue::Float64(*v),
        (NativeKind::Float32, Value::Double(v)) => narrow_float(*v).ok_or_else(|| {
            err(CoercionReason::OutOfRange {
                value: v.to_string(),
            })
        })?,
        (_, value) => {
            return Err(err(CoercionReason::KindMismatch {
                found: value.kind().label(),
            }));
        }
    };

    Ok(Some(native))
}

/// Read `value` into `slot`, allocating indirection layers as needed.
///
/// Returns whether the slot was written.
pub fn assign(field: &Field, slot: &mut dyn FieldValue, value: &Value) -> Result<bool, CoercionError> {
    let Some(native) = to_native_value(field, value)? else {
        return Ok(false);
    };

    assign_native(field, slot, native)?;

    Ok(true)
}

/// Write an already coerced leaf into `slot`.
pub(crate) fn assign_native(
    field: &Field,
    slot: &mut dyn FieldValue,
    native: NativeValue,
) -> Result<(), CoercionError> {
    slot.assign_native(native).map_err(|rejected| {
        CoercionError::new(
            field,
            CoercionDirection::Read,
            CoercionReason::KindMismatch {
                found: rejected.kind_label(),
            },
        )
    })
}

// Integer widths are interchangeable with each other, floats likewise.
fn compatible(declared: NativeKind, found: NativeKind) -> bool {
    declared == found
        || (declared.is_integer() && found.is_integer())
        || (declared.is_float() && found.is_float())
}

fn narrow_integer(kind: NativeKind, v: i64) -> Option<NativeValue> {
    let native = match kind {
        NativeKind::Int8 => NativeValue::Int8(i8::try_from(v).ok()?),
        NativeKind::Int16 => NativeValue::Int16(i16::try_from(v).ok()?),
        NativeKind::Int32 => NativeValue::Int32(i32::try_from(v).ok()?),
        NativeKind::Int64 => NativeValue::Int64(v),
        NativeKind::Isize => NativeValue::Isize(isize::try_from(v).ok()?),
        NativeKind::Uint8 => NativeValue::Uint8(u8::try_from(v).ok()?),
        NativeKind::Uint16 => NativeValue::Uint16(u16::try_from(v).ok()?),
        NativeKind::Uint32 => NativeValue::Uint32(u32::try_from(v).ok()?),
        NativeKind::Uint64 => NativeValue::Uint64(u64::try_from(v).ok()?),
        NativeKind::Usize => NativeValue::Usize(usize::try_from(v).ok()?),
        _ => return None,
    };

    Some(native)
}

#[allow(clippy::cast_possible_truncation)]
fn narrow_float(v: f64) -> Option<NativeValue> {
    if v.is_finite() && v.abs() > f64::from(f32::MAX) {
        return None;
    }

    Some(NativeValue::Float32(v as f32))
}
