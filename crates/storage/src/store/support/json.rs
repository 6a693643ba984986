#![forbid(unsafe_code)]

use super::super::StoreError;
use mc_core::Document;

pub(in crate::store) fn encode_document(document: &Document) -> Result<String, StoreError> {
    Ok(serde_json::to_string(document)?)
}

pub(in crate::store) fn decode_document(raw: &str) -> Result<Document, StoreError> {
    Ok(serde_json::from_str::<Document>(raw)?)
}
