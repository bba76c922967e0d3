#[macro_use]
mod macros;

use std::fmt;

///
/// NativeKind
///
/// Canonical leaf kind of a native record field, after every
/// `Option`/`Box` layer has been unwrapped.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NativeKind {
    Text,
    Bytes,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Isize,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Usize,
    Float32,
    Float64,
    Timestamp,
}

impl NativeKind {
    /// Return the full metadata descriptor for one native kind.
    #[must_use]
    pub const fn metadata(self) -> NativeMetadata {
        native_kind_registry!(metadata_from_registry, self)
    }

    /// Store primitive this kind is written as.
    #[must_use]
    pub const fn store_kind(self) -> StoreKind {
        self.metadata().store
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        self.metadata().label
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self.metadata().class,
            NumericClass::Signed | NumericClass::Unsigned
        )
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self.metadata().class, NumericClass::Float)
    }

    /// Bit width for numeric kinds, zero for everything else.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.metadata().bits
    }
}

impl fmt::Display for NativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

///
/// NativeMetadata
///
/// Capability metadata shared by the coercion engine and the schema layer.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NativeMetadata {
    pub label: &'static str,
    pub store: StoreKind,
    pub class: NumericClass,
    pub bits: u8,
}

///
/// NumericClass
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NumericClass {
    Signed,
    Unsigned,
    Float,
    Opaque,
}

///
/// StoreKind
///
/// The five primitive value kinds a wide-column store accepts.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum StoreKind {
    String,
    Integer,
    Binary,
    Double,
    Boolean,
}

impl StoreKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Binary => "binary",
            Self::Double => "double",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered list of all native kinds in registry order.
pub const ALL_NATIVE_KINDS: [NativeKind; 16] = native_kind_registry!(all_kinds_from_registry);
