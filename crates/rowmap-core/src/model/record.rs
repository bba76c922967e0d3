use crate::model::native::NativeType;
use std::any::TypeId;

///
/// RecordModel
///
/// Static description of one record type as declared in source.
/// Emitted by `#[derive(Record)]`; nothing here is resolved yet.
///

#[derive(Debug)]
pub struct RecordModel {
    /// Fully-qualified Rust path, used in diagnostics.
    pub path: &'static str,

    pub type_id: fn() -> TypeId,

    /// Members in declaration order.
    pub members: &'static [MemberModel],
}

impl RecordModel {
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }
}

///
/// MemberModel
///

#[derive(Debug)]
pub struct MemberModel {
    pub name: &'static str,
    pub visibility: Visibility,
    pub annotation: Annotation,
    pub native_type: fn() -> NativeType,
}

impl MemberModel {
    #[must_use]
    pub fn native_type(&self) -> NativeType {
        (self.native_type)()
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self.visibility, Visibility::Public)
    }
}

///
/// Visibility
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Visibility {
    Public,
    Restricted,
}

///
/// Annotation
///
/// Mapping metadata attached to a member, either as structured derive
/// options or as a raw `"column:id;primaryKey"` tag string.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Annotation {
    None,
    Attr(FieldAttr),
    Tag(&'static str),
}

///
/// FieldAttr
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldAttr {
    pub column: Option<&'static str>,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub statement: bool,
    pub sort: Option<i32>,
}
