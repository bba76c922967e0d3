use crate::types::Timestamp;
use rowmap_primitives::NativeKind;

///
/// NativeValue
///
/// A value as it lives in a record slot, with every `Option`/`Box` layer
/// already unwrapped. `Null` stands for an empty optional layer.
///

#[derive(Clone, Debug, PartialEq)]
pub enum NativeValue {
    Null,
    Text(String),
    Bytes(Vec<u8>),
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Isize(isize),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Usize(usize),
    Float32(f32),
    Float64(f64),
    Timestamp(Timestamp),
}

impl NativeValue {
    /// Leaf kind of this value; `None` for `Null`.
    #[must_use]
    pub const fn kind(&self) -> Option<NativeKind> {
        let kind = match self {
            Self::Null => return None,
            Self::Text(_) => NativeKind::Text,
            Self::Bytes(_) => NativeKind::Bytes,
            Self::Bool(_) => NativeKind::Bool,
            Self::Int8(_) => NativeKind::Int8,
            Self::Int16(_) => NativeKind::Int16,
            Self::Int32(_) => NativeKind::Int32,
            Self::Int64(_) => NativeKind::Int64,
            Self::Isize(_) => NativeKind::Isize,
            Self::Uint8(_) => NativeKind::Uint8,
            Self::Uint16(_) => NativeKind::Uint16,
            Self::Uint32(_) => NativeKind::Uint32,
            Self::Uint64(_) => NativeKind::Uint64,
            Self::Usize(_) => NativeKind::Usize,
            Self::Float32(_) => NativeKind::Float32,
            Self::Float64(_) => NativeKind::Float64,
            Self::Timestamp(_) => NativeKind::Timestamp,
        };

        Some(kind)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Label used in diagnostics.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.label(),
            None => "null",
        }
    }
}

// impl_native_from
macro_rules! impl_native_from {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for NativeValue {
                fn from(v: $type) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_native_from!(
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

impl From<&str> for NativeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for NativeValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
