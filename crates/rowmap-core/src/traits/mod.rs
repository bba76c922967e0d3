
use crate::{
    model::{NativeType, RecordModel},
    types::Timestamp,
    value::NativeValue,
};
use chrono::{DateTime, Utc};
use rowmap_primitives::NativeKind;

// ============================================================================
// RECORD DESCRIPTION
// ============================================================================
//
// These traits replace runtime reflection: the derive macro emits the
// static member model and the indexed slot accessors, and the schema
// layer works purely from those.
//

///
/// FieldValue
///
/// A value that can sit in a record member slot.
///
/// Leaf types convert to and from a [`NativeValue`]; `Option` and `Box`
/// add one indirection layer each; embedded records expose their own
/// members through `as_members`.
///

pub trait FieldValue {
    fn native_type() -> NativeType
    where
        Self: Sized;

    fn to_native(&self) -> NativeValue;

    /// Build a fresh value, allocating every indirection layer.
    /// Returns the input back when the kinds do not line up.
    fn from_native(value: NativeValue) -> Result<Self, NativeValue>
    where
        Self: Sized;

    /// Overwrite this slot in place. On error the slot is untouched.
    fn assign_native(&mut self, value: NativeValue) -> Result<(), NativeValue>;

    fn as_members(&self) -> Option<&dyn Members> {
        None
    }

    fn as_members_mut(&mut self) -> Option<&mut dyn Members> {
        None
    }
}

///
/// Members
///
/// Indexed access to the declared members of a record, in declaration
/// order. Indexes line up with `RecordModel::members`.
///

pub trait Members {
    fn member(&self, index: usize) -> Option<&dyn FieldValue>;

    fn member_mut(&mut self, index: usize) -> Option<&mut dyn FieldValue>;
}

///
/// Record
///

pub trait Record: Members + FieldValue + SchemaSource + Sized + 'static {
    fn model() -> &'static RecordModel;
}

///
/// Table
/// A record stored in a named table.
///

pub trait Table: Record {
    fn table_name(&self) -> &str;
}

///
/// SchemaSource
///
/// Any type a schema can be requested for. Pointer, slice and array
/// wrappers resolve to the type they wrap.
///

pub trait SchemaSource {
    fn source_type() -> NativeType;
}

impl<T: SchemaSource> SchemaSource for Option<T> {
    fn source_type() -> NativeType {
        T::source_type()
    }
}

impl<T: SchemaSource + ?Sized> SchemaSource for Box<T> {
    fn source_type() -> NativeType {
        T::source_type()
    }
}

impl<T: SchemaSource> SchemaSource for Vec<T> {
    fn source_type() -> NativeType {
        T::source_type()
    }
}

impl<T: SchemaSource> SchemaSource for [T] {
    fn source_type() -> NativeType {
        T::source_type()
    }
}

impl<T: SchemaSource, const N: usize> SchemaSource for [T; N] {
    fn source_type() -> NativeType {
        T::source_type()
    }
}

impl<T: SchemaSource + ?Sized> SchemaSource for &T {
    fn source_type() -> NativeType {
        T::source_type()
    }
}

// ============================================================================
// SLOT NAVIGATION
// ============================================================================

/// Follow a member index path from `root` down to one value slot.
#[must_use]
pub fn slot<'a>(root: &'a dyn Members, path: &[usize]) -> Option<&'a dyn FieldValue> {
    let (last, parents) = path.split_last()?;
    let mut current = root;
    for &index in parents {
        current = current.member(index)?.as_members()?;
    }

    current.member(*last)
}

/// Mutable counterpart of [`slot`].
pub fn slot_mut<'a>(root: &'a mut dyn Members, path: &[usize]) -> Option<&'a mut dyn FieldValue> {
    let (last, parents) = path.split_last()?;
    let mut current = root;
    for &index in parents {
        current = current.member_mut(index)?.as_members_mut()?;
    }

    current.member_mut(*last)
}

// ============================================================================
// LEAF IMPLEMENTATIONS
// ============================================================================

// impl_field_value
#[macro_export]
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl $crate::traits::FieldValue for $type {
                fn native_type() -> $crate::model::NativeType {
                    $crate::model::NativeType::scalar(::rowmap_primitives::NativeKind::$variant)
                }

                fn to_native(&self) -> $crate::value::NativeValue {
                    $crate::value::NativeValue::$variant(Clone::clone(self))
                }

                fn from_native(
                    value: $crate::value::NativeValue,
                ) -> Result<Self, $crate::value::NativeValue> {
                    match value {
                        $crate::value::NativeValue::$variant(v) => Ok(v),
                        other => Err(other),
                    }
                }

                fn assign_native(
                    &mut self,
                    value: $crate::value::NativeValue,
                ) -> Result<(), $crate::value::NativeValue> {
                    *self = Self::from_native(value)?;

                    Ok(())
                }
            }
        )*
    };
}

// impl_schema_source
// Leaf types resolve to themselves, which the mapper reports as not a record.
// `Vec<u8>` is left out; it goes through the `Vec<T>` wrapper impl.
macro_rules! impl_schema_source {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl SchemaSource for $type {
                fn source_type() -> NativeType {
                    <Self as FieldValue>::native_type()
                }
            }
        )*
    };
}

impl_field_value!(
    String => Text,
    Vec<u8> => Bytes,
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    isize => Isize,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    usize => Usize,
    f32 => Float32,
    f64 => Float64,
    Timestamp => Timestamp,
);

impl_schema_source!(
    String,
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    Timestamp,
    DateTime<Utc>,
);

impl FieldValue for DateTime<Utc> {
    fn native_type() -> NativeType {
        NativeType::scalar(NativeKind::Timestamp)
    }

    fn to_native(&self) -> NativeValue {
        NativeValue::Timestamp(Timestamp::from_datetime(*self))
    }

    fn from_native(value: NativeValue) -> Result<Self, NativeValue> {
        match value {
            NativeValue::Timestamp(ts) => Ok(ts.into()),
            other => Err(other),
        }
    }

    fn assign_native(&mut self, value: NativeValue) -> Result<(), NativeValue> {
        *self = Self::from_native(value)?;

        Ok(())
    }
}

// ============================================================================
// INDIRECTION
// ============================================================================

impl<T: FieldValue> FieldValue for Option<T> {
    fn native_type() -> NativeType {
        T::native_type().wrap()
    }

    fn to_native(&self) -> NativeValue {
        match self {
            Some(v) => v.to_native(),
            None => NativeValue::Null,
        }
    }

    fn from_native(value: NativeValue) -> Result<Self, NativeValue> {
        if value.is_null() {
            return Ok(None);
        }

        T::from_native(value).map(Some)
    }

    fn assign_native(&mut self, value: NativeValue) -> Result<(), NativeValue> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }

        match self {
            Some(inner) => inner.assign_native(value),
            None => {
                *self = Some(T::from_native(value)?);
                Ok(())
            }
        }
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    fn native_type() -> NativeType {
        T::native_type().wrap()
    }

    fn to_native(&self) -> NativeValue {
        (**self).to_native()
    }

    fn from_native(value: NativeValue) -> Result<Self, NativeValue> {
        T::from_native(value).map(Self::new)
    }

    fn assign_native(&mut self, value: NativeValue) -> Result<(), NativeValue> {
        (**self).assign_native(value)
    }
}
