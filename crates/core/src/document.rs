#![forbid(unsafe_code)]

use serde_json::{Map, Value};

/// Full metadata document of one path: metadata type name to opaque value.
pub type Document = Map<String, Value>;

/// Merges `{type_name: metadata}` into `existing`.
///
/// Returns `None` when the merge would not change the document, so callers can
/// skip appending a redundant version.
pub fn merge_facet(existing: &Document, type_name: &str, metadata: Value) -> Option<Document> {
    if existing.get(type_name) == Some(&metadata) {
        return None;
    }
    let mut merged = existing.clone();
    merged.insert(type_name.to_string(), metadata);
    Some(merged)
}

/// Removes `type_name` from `existing`. The result may be empty; an empty
/// document still describes a live path.
pub fn remove_facet(existing: &Document, type_name: &str) -> Document {
    let mut reduced = existing.clone();
    reduced.remove(type_name);
    reduced
}
