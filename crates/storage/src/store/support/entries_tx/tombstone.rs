#![forbid(unsafe_code)]

use super::super::super::StoreError;
use mc_core::CatalogPath;
use mc_core::paths::SEPARATOR;
use rusqlite::{Transaction, params};

/// Stamps `deleted_at_ms` on every historical row of `path` and of everything
/// beneath it. Rows are rewritten in place, not superseded: time-travel reads
/// that resolve to any of them observe the tombstone.
///
/// A row is stamped exactly when its path satisfies
/// [`CatalogPath::is_within`]`(path)`; the `substr` match below is that test
/// expressed over the `parent` column.
pub(in crate::store) fn tombstone_bulk_tx(
    tx: &Transaction<'_>,
    path: &CatalogPath,
    deleted_at_ms: i64,
) -> Result<usize, StoreError> {
    let Some((parent, name)) = path.key() else {
        let rows = tx.execute(
            "UPDATE catalog SET deleted_at_ms=?1",
            params![deleted_at_ms],
        )?;
        return Ok(rows);
    };

    let mut nested_prefix = path.as_str().to_string();
    nested_prefix.push(SEPARATOR);
    let prefix_len = i64::try_from(nested_prefix.chars().count())
        .map_err(|_| StoreError::InvalidInput("path too long"))?;

    let rows = tx.execute(
        "UPDATE catalog SET deleted_at_ms=?1 \
         WHERE parent=?2 \
            OR substr(parent, 1, ?3)=?4 \
            OR (parent=?5 AND name=?6)",
        params![
            deleted_at_ms,
            path.as_str(),
            prefix_len,
            nested_prefix,
            parent,
            name
        ],
    )?;
    Ok(rows)
}
