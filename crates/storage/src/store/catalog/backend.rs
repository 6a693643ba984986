#![forbid(unsafe_code)]

use super::super::{BackendKind, CatalogConfig, SqliteStore, StoreError};
use super::{Catalog, DatabaseCatalog};
use mc_core::Document;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "remote")]
use super::super::RemoteCatalog;

/// Catalog selected by configuration.
#[derive(Clone, Debug)]
pub enum CatalogBackend {
    Database(DatabaseCatalog),
    #[cfg(feature = "remote")]
    Remote(RemoteCatalog),
}

impl CatalogBackend {
    pub fn open(config: &CatalogConfig) -> Result<Self, StoreError> {
        match config.backend {
            BackendKind::Sqlite => {
                let store = SqliteStore::open_with_busy_timeout(
                    &config.storage_dir,
                    Duration::from_millis(config.busy_timeout_ms),
                )?;
                Ok(Self::Database(DatabaseCatalog::new(Arc::new(store))))
            }
            #[cfg(feature = "remote")]
            BackendKind::Remote => {
                let Some(url) = config.url.as_deref() else {
                    return Err(StoreError::Config(
                        "remote backend requires `url`".to_string(),
                    ));
                };
                let timeout = (config.timeout_ms > 0).then(|| Duration::from_millis(config.timeout_ms));
                Ok(Self::Remote(RemoteCatalog::new(url, timeout)?))
            }
            #[cfg(not(feature = "remote"))]
            BackendKind::Remote => Err(StoreError::Config(
                "remote backend is not compiled in (enable the `remote` feature)".to_string(),
            )),
        }
    }
}

macro_rules! delegate {
    ($self:ident, $catalog:ident => $call:expr) => {
        match $self {
            CatalogBackend::Database($catalog) => $call,
            #[cfg(feature = "remote")]
            CatalogBackend::Remote($catalog) => $call,
        }
    };
}

impl Catalog for CatalogBackend {
    fn touch(&self, path: &str) -> Result<(), StoreError> {
        delegate!(self, catalog => catalog.touch(path))
    }

    fn write(&self, path: &str, type_name: &str, metadata: Value) -> Result<(), StoreError> {
        delegate!(self, catalog => catalog.write(path, type_name, metadata))
    }

    fn rm(&self, path: &str, type_name: Option<&str>) -> Result<(), StoreError> {
        delegate!(self, catalog => catalog.rm(path, type_name))
    }

    fn ls(&self, path: &str, as_of_ms: Option<i64>) -> Result<Option<Vec<String>>, StoreError> {
        delegate!(self, catalog => catalog.ls(path, as_of_ms))
    }

    fn read(&self, path: &str, as_of_ms: Option<i64>) -> Result<Option<Document>, StoreError> {
        delegate!(self, catalog => catalog.read(path, as_of_ms))
    }

    fn search(&self, predicate: &str, as_of_ms: Option<i64>) -> Result<Vec<Document>, StoreError> {
        delegate!(self, catalog => catalog.search(predicate, as_of_ms))
    }
}
