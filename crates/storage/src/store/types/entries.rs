#![forbid(unsafe_code)]

use mc_core::Document;

/// One immutable version of a `(parent, name)` key.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryRow {
    pub id: i64,
    pub parent: String,
    pub name: String,
    pub document: Document,
    pub created_at_ms: i64,
    pub deleted_at_ms: Option<i64>,
}

impl EntryRow {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at_ms.is_some()
    }

    pub fn is_live(&self) -> bool {
        !self.is_deleted()
    }
}
