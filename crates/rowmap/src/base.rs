use crate::{Record, types::Timestamp};

///
/// Model
///
/// Bookkeeping columns shared by most tables. Embed it as a public member;
/// its fields are promoted into the embedding record's schema.
///

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub struct Model {
    #[rowmap(column = "id", primary_key, auto_increment)]
    pub id: i64,

    #[rowmap(column = "created_at")]
    pub created_at: Option<Timestamp>,

    #[rowmap(column = "updated_at")]
    pub updated_at: Option<Timestamp>,

    #[rowmap(column = "deleted_at")]
    pub deleted_at: Option<Timestamp>,
}

impl Model {
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Stamp `created_at` (once) and `updated_at` with `now`.
    pub fn touch(&mut self, now: Timestamp) {
        if self.created_at.is_none() {
            self.created_at = Some(now);
        }
        self.updated_at = Some(now);
    }
}
