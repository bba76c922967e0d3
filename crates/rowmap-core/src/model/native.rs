use crate::model::record::RecordModel;
use rowmap_primitives::NativeKind;
use std::fmt;

///
/// NativeType
///
/// Declared type of a record member: a base type plus the number of
/// `Option`/`Box` layers wrapped around it.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NativeType {
    pub base: BaseType,
    pub indirection: u8,
}

impl NativeType {
    #[must_use]
    pub const fn scalar(kind: NativeKind) -> Self {
        Self {
            base: BaseType::Scalar(kind),
            indirection: 0,
        }
    }

    #[must_use]
    pub const fn record(model: fn() -> &'static RecordModel) -> Self {
        Self {
            base: BaseType::Record(RecordRef(model)),
            indirection: 0,
        }
    }

    /// Add one layer of indirection.
    #[must_use]
    pub const fn wrap(self) -> Self {
        Self {
            base: self.base,
            indirection: self.indirection.saturating_add(1),
        }
    }

    #[must_use]
    pub const fn scalar_kind(&self) -> Option<NativeKind> {
        match self.base {
            BaseType::Scalar(kind) => Some(kind),
            BaseType::Record(_) => None,
        }
    }

    /// Record model of a member the resolver walks into: a record held
    /// directly, never through `Option` or `Box`.
    #[must_use]
    pub fn embedded_record(&self) -> Option<&'static RecordModel> {
        match self.base {
            BaseType::Record(record) if self.indirection == 0 => Some(record.model()),
            _ => None,
        }
    }

    /// Record model after unwrapping every layer.
    #[must_use]
    pub fn record_model(&self) -> Option<&'static RecordModel> {
        match self.base {
            BaseType::Record(record) => Some(record.model()),
            BaseType::Scalar(_) => None,
        }
    }

    #[must_use]
    pub fn base_label(&self) -> &'static str {
        match self.base {
            BaseType::Scalar(kind) => kind.label(),
            BaseType::Record(record) => record.model().path,
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.indirection {
            f.write_str("Option<")?;
        }
        f.write_str(self.base_label())?;
        for _ in 0..self.indirection {
            f.write_str(">")?;
        }

        Ok(())
    }
}

///
/// BaseType
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BaseType {
    Scalar(NativeKind),
    Record(RecordRef),
}

///
/// RecordRef
///
/// Lazy handle to a record model. Compared by the model's type identity.
///

#[derive(Clone, Copy)]
pub struct RecordRef(fn() -> &'static RecordModel);

impl RecordRef {
    #[must_use]
    pub fn model(self) -> &'static RecordModel {
        (self.0)()
    }
}

impl PartialEq for RecordRef {
    fn eq(&self, other: &Self) -> bool {
        self.model().type_id() == other.model().type_id()
    }
}

impl Eq for RecordRef {}

impl fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordRef").field(&self.model().path).finish()
    }
}
