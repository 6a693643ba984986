#![forbid(unsafe_code)]

use super::super::super::{EntryRow, StoreError};
use super::super::decode_document;
use rusqlite::{Params, Statement};

pub(in crate::store) const ENTRY_COLUMNS: &str =
    "id, parent, name, metadata, created_at_ms, deleted_at_ms";

pub(in crate::store) fn query_entries<P: Params>(
    stmt: &mut Statement<'_>,
    params: P,
) -> Result<Vec<EntryRow>, StoreError> {
    let mut rows = stmt.query(params)?;
    let mut out = Vec::new();

    while let Some(row) = rows.next()? {
        let raw_metadata = row.get::<_, String>(3)?;
        out.push(EntryRow {
            id: row.get(0)?,
            parent: row.get(1)?,
            name: row.get(2)?,
            document: decode_document(&raw_metadata)?,
            created_at_ms: row.get(4)?,
            deleted_at_ms: row.get(5)?,
        });
    }

    Ok(out)
}
