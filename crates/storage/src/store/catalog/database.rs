#![forbid(unsafe_code)]

use super::super::support::*;
use super::super::{SqliteStore, StoreError};
use super::Catalog;
use mc_core::document::{merge_facet, remove_facet};
use mc_core::{CatalogPath, Document};
use rusqlite::Transaction;
use serde_json::Value;
use std::sync::Arc;

/// Catalog backed by the SQLite entry log.
#[derive(Clone, Debug)]
pub struct DatabaseCatalog {
    store: Arc<SqliteStore>,
}

impl DatabaseCatalog {
    pub fn new(store: Arc<SqliteStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    fn touch_path(&self, path: &CatalogPath) -> Result<usize, StoreError> {
        let mut conn = self.store.connect()?;
        let tx = begin_write_tx(&mut conn)?;
        let created = touch_tx(&tx, path, now_ms())?;
        tx.commit()?;
        if created > 0 {
            tracing::debug!(path = %path, created, "created missing catalog directories");
        }
        Ok(created)
    }
}

/// Walks leaf to root appending an empty entry for every ancestor whose latest
/// row is missing or tombstoned. Stops at the first live ancestor: a live entry
/// always has live ancestors.
fn touch_tx(tx: &Transaction<'_>, path: &CatalogPath, now_ms: i64) -> Result<usize, StoreError> {
    let mut created = 0;
    for ancestor in path.ancestors().iter().rev() {
        let Some((parent, name)) = ancestor.key() else {
            continue;
        };
        match latest_entry_tx(tx, &parent, &name, now_ms)? {
            Some(entry) if entry.is_live() => break,
            _ => {
                append_entry_tx(tx, &parent, &name, &Document::new(), now_ms)?;
                created += 1;
            }
        }
    }
    Ok(created)
}

impl Catalog for DatabaseCatalog {
    fn touch(&self, path: &str) -> Result<(), StoreError> {
        self.touch_path(&CatalogPath::parse(path))?;
        Ok(())
    }

    fn write(&self, path: &str, type_name: &str, metadata: Value) -> Result<(), StoreError> {
        let path = CatalogPath::parse(path);
        let Some((parent, name)) = path.key() else {
            return Err(StoreError::InvalidInput("root path is not addressable"));
        };
        if type_name.is_empty() {
            return Err(StoreError::InvalidInput("type must not be empty"));
        }

        self.touch_path(&path)?;

        let mut conn = self.store.connect()?;
        let tx = begin_write_tx(&mut conn)?;
        let now_ms = now_ms();
        let existing = latest_live_document_tx(&tx, &parent, &name, now_ms)?.unwrap_or_default();
        if let Some(merged) = merge_facet(&existing, type_name, metadata) {
            append_entry_tx(&tx, &parent, &name, &merged, now_ms)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn rm(&self, path: &str, type_name: Option<&str>) -> Result<(), StoreError> {
        let path = CatalogPath::parse(path);
        let mut conn = self.store.connect()?;
        let tx = begin_write_tx(&mut conn)?;
        let now_ms = now_ms();

        match type_name {
            Some(type_name) => {
                let Some((parent, name)) = path.key() else {
                    return Ok(());
                };
                let Some(document) = latest_live_document_tx(&tx, &parent, &name, now_ms)? else {
                    return Ok(());
                };
                if !document.contains_key(type_name) {
                    return Ok(());
                }
                let reduced = remove_facet(&document, type_name);
                append_entry_tx(&tx, &parent, &name, &reduced, now_ms)?;
                tx.commit()?;
            }
            None => {
                let rows = tombstone_bulk_tx(&tx, &path, now_ms)?;
                tx.commit()?;
                tracing::info!(path = %path, rows, "removed catalog subtree");
            }
        }
        Ok(())
    }

    fn ls(&self, path: &str, as_of_ms: Option<i64>) -> Result<Option<Vec<String>>, StoreError> {
        let path = CatalogPath::parse(path);
        let as_of_ms = as_of_ms.unwrap_or_else(now_ms);
        let mut conn = self.store.connect()?;
        let tx = begin_read_tx(&mut conn)?;
        let names = live_children_tx(&tx, path.as_str(), as_of_ms)?;
        tx.commit()?;
        Ok(if names.is_empty() { None } else { Some(names) })
    }

    fn read(&self, path: &str, as_of_ms: Option<i64>) -> Result<Option<Document>, StoreError> {
        let path = CatalogPath::parse(path);
        let Some((parent, name)) = path.key() else {
            return Ok(None);
        };
        let as_of_ms = as_of_ms.unwrap_or_else(now_ms);
        let mut conn = self.store.connect()?;
        let tx = begin_read_tx(&mut conn)?;
        let document = latest_live_document_tx(&tx, &parent, &name, as_of_ms)?;
        tx.commit()?;
        Ok(document)
    }

    fn search(&self, predicate: &str, as_of_ms: Option<i64>) -> Result<Vec<Document>, StoreError> {
        self.store.search(predicate, as_of_ms)
    }
}
