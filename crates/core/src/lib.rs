#![forbid(unsafe_code)]

pub mod document;
pub mod metadata;
pub mod paths;

pub use document::Document;
pub use paths::CatalogPath;
