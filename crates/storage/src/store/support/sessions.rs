#![forbid(unsafe_code)]

use super::super::StoreError;
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Acquires the write lock at BEGIN; read-then-append sequences never upgrade a
/// shared lock.
pub(in crate::store) fn begin_write_tx(
    conn: &mut Connection,
) -> Result<Transaction<'_>, StoreError> {
    Ok(conn.transaction_with_behavior(TransactionBehavior::Immediate)?)
}

pub(in crate::store) fn begin_read_tx(conn: &mut Connection) -> Result<Transaction<'_>, StoreError> {
    Ok(conn.transaction_with_behavior(TransactionBehavior::Deferred)?)
}
