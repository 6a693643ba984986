#![forbid(unsafe_code)]

use super::super::super::StoreError;
use super::super::decode_document;
use mc_core::Document;
use rusqlite::{Transaction, params};

/// Evaluates `predicate` against the latest live row of every key.
///
/// `predicate` is spliced into the statement verbatim as an SQLite boolean
/// expression over `id`, `parent`, `name`, `metadata` and `created_at_ms`. It is
/// trusted input: callers own its provenance, and a malformed expression fails
/// with the SQLite error unchanged.
pub(in crate::store) fn search_documents_tx(
    tx: &Transaction<'_>,
    predicate: &str,
    as_of_ms: i64,
) -> Result<Vec<Document>, StoreError> {
    let sql = format!(
        "SELECT metadata FROM ( \
           SELECT c.id AS id, c.parent AS parent, c.name AS name, \
                  c.metadata AS metadata, c.created_at_ms AS created_at_ms \
           FROM catalog c \
           JOIN ( \
             SELECT MAX(id) AS id FROM catalog \
             WHERE created_at_ms <= ?1 \
             GROUP BY parent, name \
           ) latest ON latest.id = c.id \
           WHERE c.deleted_at_ms IS NULL \
         ) \
         WHERE (\n{predicate}\n) \
         ORDER BY id ASC"
    );
    let mut stmt = tx.prepare(&sql)?;
    let mut rows = stmt.query(params![as_of_ms])?;
    let mut out = Vec::new();

    while let Some(row) = rows.next()? {
        let raw = row.get::<_, String>(0)?;
        out.push(decode_document(&raw)?);
    }

    Ok(out)
}
