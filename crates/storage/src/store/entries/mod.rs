#![forbid(unsafe_code)]

//! Entry log: the append-only `catalog` table and its latest-as-of reads.

use super::*;
use mc_core::{CatalogPath, Document};

impl SqliteStore {
    /// Appends a new version for `(parent, name)` stamped with the current time.
    pub fn append(
        &self,
        parent: &str,
        name: &str,
        document: &Document,
    ) -> Result<EntryRow, StoreError> {
        let mut conn = self.connect()?;
        let tx = begin_write_tx(&mut conn)?;
        let entry = append_entry_tx(&tx, parent, name, document, now_ms())?;
        tx.commit()?;
        Ok(entry)
    }

    /// Governing row for `(parent, name)` as of `as_of_ms` (default: now),
    /// tombstoned or not.
    pub fn latest(
        &self,
        parent: &str,
        name: &str,
        as_of_ms: Option<i64>,
    ) -> Result<Option<EntryRow>, StoreError> {
        let as_of_ms = as_of_ms.unwrap_or_else(now_ms);
        let mut conn = self.connect()?;
        let tx = begin_read_tx(&mut conn)?;
        let entry = latest_entry_tx(&tx, parent, name, as_of_ms)?;
        tx.commit()?;
        Ok(entry)
    }

    pub fn children(&self, parent: &str, as_of_ms: Option<i64>) -> Result<Vec<String>, StoreError> {
        let as_of_ms = as_of_ms.unwrap_or_else(now_ms);
        let mut conn = self.connect()?;
        let tx = begin_read_tx(&mut conn)?;
        let names = live_children_tx(&tx, parent, as_of_ms)?;
        tx.commit()?;
        Ok(names)
    }

    /// Tombstones `path` and its whole subtree across all historical rows.
    /// Returns the number of rows stamped.
    pub fn tombstone_bulk(&self, path: &CatalogPath, deleted_at_ms: i64) -> Result<usize, StoreError> {
        let mut conn = self.connect()?;
        let tx = begin_write_tx(&mut conn)?;
        let rows = tombstone_bulk_tx(&tx, path, deleted_at_ms)?;
        tx.commit()?;
        tracing::debug!(path = %path, rows, deleted_at_ms, "tombstoned catalog rows");
        Ok(rows)
    }

    pub fn search(&self, predicate: &str, as_of_ms: Option<i64>) -> Result<Vec<Document>, StoreError> {
        let as_of_ms = as_of_ms.unwrap_or_else(now_ms);
        let mut conn = self.connect()?;
        let tx = begin_read_tx(&mut conn)?;
        let documents = search_documents_tx(&tx, predicate, as_of_ms)?;
        tx.commit()?;
        Ok(documents)
    }

    /// Every stored version of `path`, oldest first, tombstones included.
    pub fn history(&self, path: &CatalogPath) -> Result<Vec<EntryRow>, StoreError> {
        let Some((parent, name)) = path.key() else {
            return Ok(Vec::new());
        };
        let mut conn = self.connect()?;
        let tx = begin_read_tx(&mut conn)?;
        let entries = entry_history_tx(&tx, &parent, &name)?;
        tx.commit()?;
        Ok(entries)
    }
}
