#![forbid(unsafe_code)]

use super::super::super::{EntryRow, StoreError};
use super::rows::{ENTRY_COLUMNS, query_entries};
use rusqlite::{Transaction, params};

pub(in crate::store) fn entry_history_tx(
    tx: &Transaction<'_>,
    parent: &str,
    name: &str,
) -> Result<Vec<EntryRow>, StoreError> {
    let mut stmt = tx.prepare(&format!(
        "SELECT {ENTRY_COLUMNS} FROM catalog WHERE parent=?1 AND name=?2 ORDER BY id ASC"
    ))?;
    query_entries(&mut stmt, params![parent, name])
}
