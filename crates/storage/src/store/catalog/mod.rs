#![forbid(unsafe_code)]

mod backend;
mod database;

pub use backend::CatalogBackend;
pub use database::DatabaseCatalog;

use super::StoreError;
use mc_core::Document;
use mc_core::metadata::MetadataType;
use serde_json::Value;

/// Operations a catalog backend exposes to callers.
///
/// Paths are plain strings normalized by [`mc_core::CatalogPath::parse`].
/// `as_of_ms` is a Unix timestamp in milliseconds; `None` means now. Absence is
/// reported as `Ok(None)`, never as an error.
pub trait Catalog {
    /// Makes `path` and all of its ancestors live.
    fn touch(&self, path: &str) -> Result<(), StoreError>;

    /// Sets the `type_name` facet of `path` to `metadata`, creating the path if
    /// needed. Writing an unchanged value does not add a version.
    fn write(&self, path: &str, type_name: &str, metadata: Value) -> Result<(), StoreError>;

    /// With a type, drops that facet and keeps the path. Without one, removes
    /// the path and its whole subtree.
    fn rm(&self, path: &str, type_name: Option<&str>) -> Result<(), StoreError>;

    fn ls(&self, path: &str, as_of_ms: Option<i64>) -> Result<Option<Vec<String>>, StoreError>;

    fn read(&self, path: &str, as_of_ms: Option<i64>) -> Result<Option<Document>, StoreError>;

    fn search(&self, predicate: &str, as_of_ms: Option<i64>) -> Result<Vec<Document>, StoreError>;

    fn write_typed<T: MetadataType>(&self, path: &str, metadata: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let value = serde_json::to_value(metadata)?;
        self.write(path, T::TYPE_NAME, value)
    }

    fn read_typed<T: MetadataType>(
        &self,
        path: &str,
        as_of_ms: Option<i64>,
    ) -> Result<Option<T>, StoreError>
    where
        Self: Sized,
    {
        let Some(mut document) = self.read(path, as_of_ms)? else {
            return Ok(None);
        };
        let Some(value) = document.remove(T::TYPE_NAME) else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_value(value)?))
    }
}
