#![forbid(unsafe_code)]

use super::super::super::{EntryRow, StoreError};
use super::rows::{ENTRY_COLUMNS, query_entries};
use mc_core::Document;
use rusqlite::{Transaction, params};

/// Highest-id row for the key among rows created at or before `as_of_ms`.
/// Tombstoned rows are returned as-is.
pub(in crate::store) fn latest_entry_tx(
    tx: &Transaction<'_>,
    parent: &str,
    name: &str,
    as_of_ms: i64,
) -> Result<Option<EntryRow>, StoreError> {
    let mut stmt = tx.prepare(&format!(
        "SELECT {ENTRY_COLUMNS} FROM catalog \
         WHERE parent=?1 AND name=?2 AND created_at_ms <= ?3 \
         ORDER BY id DESC LIMIT 1"
    ))?;
    let entries = query_entries(&mut stmt, params![parent, name, as_of_ms])?;
    Ok(entries.into_iter().next())
}

pub(in crate::store) fn latest_live_document_tx(
    tx: &Transaction<'_>,
    parent: &str,
    name: &str,
    as_of_ms: i64,
) -> Result<Option<Document>, StoreError> {
    Ok(latest_entry_tx(tx, parent, name, as_of_ms)?
        .filter(EntryRow::is_live)
        .map(|entry| entry.document))
}
