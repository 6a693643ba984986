#![forbid(unsafe_code)]

use super::super::super::StoreError;
use rusqlite::{Transaction, params};

/// Distinct child names under `parent` whose latest row as of `as_of_ms` is live.
pub(in crate::store) fn live_children_tx(
    tx: &Transaction<'_>,
    parent: &str,
    as_of_ms: i64,
) -> Result<Vec<String>, StoreError> {
    let mut stmt = tx.prepare(
        "SELECT c.name FROM catalog c \
         JOIN ( \
           SELECT MAX(id) AS id FROM catalog \
           WHERE parent=?1 AND created_at_ms <= ?2 \
           GROUP BY name \
         ) latest ON latest.id = c.id \
         WHERE c.deleted_at_ms IS NULL \
         ORDER BY c.name ASC",
    )?;
    let mut rows = stmt.query(params![parent, as_of_ms])?;
    let mut out = Vec::new();

    while let Some(row) = rows.next()? {
        out.push(row.get::<_, String>(0)?);
    }

    Ok(out)
}
