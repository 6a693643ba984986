#![forbid(unsafe_code)]

mod catalog;
mod config;
mod entries;
mod error;
#[cfg(feature = "remote")]
mod remote;
mod support;
mod types;

pub use catalog::*;
pub use config::*;
pub use error::StoreError;
#[cfg(feature = "remote")]
pub use remote::RemoteCatalog;
pub use types::*;

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;
use support::*;

const DB_FILE_NAME: &str = "catalog.db";
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to one on-disk catalog database.
///
/// The store holds no connection of its own; every operation opens a
/// request-scoped connection through [`SqliteStore::connect`], so one store can
/// be shared across threads behind an `Arc`.
#[derive(Debug)]
pub struct SqliteStore {
    storage_dir: PathBuf,
    db_path: PathBuf,
    busy_timeout: Duration,
}

impl SqliteStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open_with_busy_timeout(storage_dir, DEFAULT_BUSY_TIMEOUT)
    }

    pub fn open_with_busy_timeout(
        storage_dir: impl AsRef<Path>,
        busy_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;

        let store = Self {
            db_path: storage_dir.join(DB_FILE_NAME),
            storage_dir,
            busy_timeout,
        };
        let conn = store.connect()?;
        install_schema(&conn)?;
        tracing::info!(db_path = %store.db_path.display(), "opened catalog store");

        Ok(store)
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Opens a fresh connection for one request.
    pub fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.db_path)?;
        conn.busy_timeout(self.busy_timeout)?;
        conn.execute_batch("PRAGMA synchronous=NORMAL;")?;
        Ok(conn)
    }
}
