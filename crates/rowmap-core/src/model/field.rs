use crate::model::native::NativeType;

///
/// Field
///
/// One persisted attribute of a resolved schema.
///
/// `declared_depth` is where the winning metadata was found; `depth` is
/// where the value slot lives once `statement` redeclarations are followed.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub column: String,
    pub native_type: NativeType,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub statement: bool,
    pub declared_depth: usize,
    pub depth: usize,
    pub sort: Option<i32>,

    /// Member indexes from the record root down to the value slot.
    pub(crate) path: Vec<usize>,

    /// Position of the canonical candidate in the depth-first walk.
    pub(crate) order: usize,
}

impl Field {
    #[must_use]
    pub const fn is_key(&self) -> bool {
        self.primary_key
    }

    /// Primary-key field whose value the store assigns on write.
    #[must_use]
    pub const fn is_auto_increment_key(&self) -> bool {
        self.primary_key && self.auto_increment
    }

    #[must_use]
    pub fn slot_path(&self) -> &[usize] {
        &self.path
    }

    /// Matches either the logical name or the store column name.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.column == name || self.name == name
    }
}
