#![forbid(unsafe_code)]

use super::super::super::{EntryRow, StoreError};
use super::super::encode_document;
use mc_core::Document;
use rusqlite::{Transaction, params};

pub(in crate::store) fn append_entry_tx(
    tx: &Transaction<'_>,
    parent: &str,
    name: &str,
    document: &Document,
    created_at_ms: i64,
) -> Result<EntryRow, StoreError> {
    if parent.is_empty() {
        return Err(StoreError::InvalidInput("parent must not be empty"));
    }
    if name.is_empty() {
        return Err(StoreError::InvalidInput("name must not be empty"));
    }

    tx.execute(
        "INSERT INTO catalog(parent, name, metadata, created_at_ms) VALUES (?1, ?2, ?3, ?4)",
        params![parent, name, encode_document(document)?, created_at_ms],
    )?;
    let id = tx.last_insert_rowid();
    tracing::debug!(id, parent, name, created_at_ms, "appended catalog entry");

    Ok(EntryRow {
        id,
        parent: parent.to_string(),
        name: name.to_string(),
        document: document.clone(),
        created_at_ms,
        deleted_at_ms: None,
    })
}
