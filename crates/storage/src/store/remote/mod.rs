#![forbid(unsafe_code)]

//! Catalog client for a catalog served over HTTP.
//!
//! Routes: `GET /{path}` lists, `GET /{path}?read=true` reads, `PUT /{path}`
//! touches (or writes with `?type=` and a JSON body), `DELETE /{path}` removes,
//! `GET /search?query=` searches. `as_of` travels as an RFC 3339 query value.

use super::{Catalog, StoreError};
use mc_core::{CatalogPath, Document};
use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Clone, Debug)]
pub struct RemoteCatalog {
    client: Client,
    base_url: Url,
}

impl RemoteCatalog {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, StoreError> {
        let base_url = base_url.trim();
        if base_url.is_empty() {
            return Err(StoreError::InvalidInput("remote url must not be empty"));
        }
        let base_url = Url::parse(base_url)
            .map_err(|_| StoreError::InvalidInput("remote url is not a valid url"))?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::InvalidInput("remote url cannot carry a path"));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends `segments` to the base url, percent-encoding each one so that
    /// `?`, `#`, `%` and the like stay inside their segment.
    fn url_with<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::InvalidInput("remote url cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn endpoint(&self, path: &CatalogPath) -> Result<Url, StoreError> {
        self.url_with(path.segments())
    }

    fn search_endpoint(&self) -> Result<Url, StoreError> {
        self.url_with(["search"])
    }

    fn with_as_of(request: RequestBuilder, as_of_ms: Option<i64>) -> Result<RequestBuilder, StoreError> {
        match as_of_ms {
            Some(as_of_ms) => Ok(request.query(&[("as_of", format_as_of(as_of_ms)?)])),
            None => Ok(request),
        }
    }

    fn send(request: RequestBuilder) -> Result<Response, StoreError> {
        let response = request.send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        tracing::warn!(status = status.as_u16(), body = %body, "remote catalog request failed");
        Err(StoreError::Remote {
            status: status.as_u16(),
            body,
        })
    }
}

/// Values the HTTP façade treats as "no metadata": a write carrying one of
/// them would silently degrade into a touch.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

pub(crate) fn format_as_of(as_of_ms: i64) -> Result<String, StoreError> {
    let nanos = i128::from(as_of_ms) * 1_000_000i128;
    let ts = OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .map_err(|_| StoreError::InvalidInput("as_of out of range"))?;
    ts.format(&Rfc3339)
        .map_err(|_| StoreError::InvalidInput("as_of out of range"))
}

impl Catalog for RemoteCatalog {
    fn touch(&self, path: &str) -> Result<(), StoreError> {
        let path = CatalogPath::parse(path);
        Self::send(self.client.put(self.endpoint(&path)?))?;
        Ok(())
    }

    /// The façade only writes when both `type_name` and `metadata` are
    /// non-empty (`""`, `0`, `false`, `null`, `[]` and `{}` count as empty), so
    /// such writes are rejected here instead of turning into a bare touch.
    fn write(&self, path: &str, type_name: &str, metadata: Value) -> Result<(), StoreError> {
        let path = CatalogPath::parse(path);
        if path.is_root() {
            return Err(StoreError::InvalidInput("root path is not addressable"));
        }
        if type_name.is_empty() {
            return Err(StoreError::InvalidInput("type must not be empty"));
        }
        if is_blank(&metadata) {
            return Err(StoreError::InvalidInput("remote metadata must not be empty"));
        }
        let request = self
            .client
            .put(self.endpoint(&path)?)
            .query(&[("type", type_name)])
            .json(&metadata);
        Self::send(request)?;
        Ok(())
    }

    fn rm(&self, path: &str, type_name: Option<&str>) -> Result<(), StoreError> {
        let path = CatalogPath::parse(path);
        let mut request = self.client.delete(self.endpoint(&path)?);
        if let Some(type_name) = type_name {
            request = request.query(&[("type", type_name)]);
        }
        Self::send(request)?;
        Ok(())
    }

    fn ls(&self, path: &str, as_of_ms: Option<i64>) -> Result<Option<Vec<String>>, StoreError> {
        let path = CatalogPath::parse(path);
        let request = Self::with_as_of(self.client.get(self.endpoint(&path)?), as_of_ms)?;
        let names = Self::send(request)?.json::<Option<Vec<String>>>()?;
        Ok(names.filter(|names| !names.is_empty()))
    }

    /// An empty remote document is indistinguishable from absence over this
    /// protocol and is reported as `None`.
    fn read(&self, path: &str, as_of_ms: Option<i64>) -> Result<Option<Document>, StoreError> {
        let path = CatalogPath::parse(path);
        let request = self
            .client
            .get(self.endpoint(&path)?)
            .query(&[("read", "true")]);
        let request = Self::with_as_of(request, as_of_ms)?;
        let document = Self::send(request)?.json::<Option<Document>>()?;
        Ok(document.filter(|document| !document.is_empty()))
    }

    fn search(&self, predicate: &str, as_of_ms: Option<i64>) -> Result<Vec<Document>, StoreError> {
        let request = self
            .client
            .get(self.search_endpoint()?)
            .query(&[("query", predicate)]);
        let request = Self::with_as_of(request, as_of_ms)?;
        Ok(Self::send(request)?.json::<Vec<Document>>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_normalized_path() {
        let catalog = RemoteCatalog::new("http://localhost:8000/", None).expect("client");
        assert_eq!(catalog.base_url(), "http://localhost:8000/");
        assert_eq!(
            catalog
                .endpoint(&CatalogPath::parse("databases//pg/"))
                .expect("endpoint")
                .as_str(),
            "http://localhost:8000/databases/pg"
        );
        assert_eq!(
            catalog.endpoint(&CatalogPath::root()).expect("endpoint").as_str(),
            "http://localhost:8000/"
        );
    }

    #[test]
    fn endpoint_encodes_url_syntax_inside_segments() {
        let catalog = RemoteCatalog::new("http://localhost:8000", None).expect("client");
        assert_eq!(
            catalog
                .endpoint(&CatalogPath::parse("/db/tables/what?#1"))
                .expect("endpoint")
                .as_str(),
            "http://localhost:8000/db/tables/what%3F%231"
        );
        assert_eq!(
            catalog
                .endpoint(&CatalogPath::parse("/db/100%"))
                .expect("endpoint")
                .as_str(),
            "http://localhost:8000/db/100%25"
        );
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let catalog = RemoteCatalog::new("http://localhost:8000/api/", None).expect("client");
        assert_eq!(
            catalog
                .endpoint(&CatalogPath::parse("/db"))
                .expect("endpoint")
                .as_str(),
            "http://localhost:8000/api/db"
        );
        assert_eq!(
            catalog.search_endpoint().expect("search").as_str(),
            "http://localhost:8000/api/search"
        );
    }

    #[test]
    fn blank_values_match_the_facade_falsiness() {
        for value in [
            Value::Null,
            serde_json::json!(false),
            serde_json::json!(0),
            serde_json::json!(0.0),
            serde_json::json!(""),
            serde_json::json!([]),
            serde_json::json!({}),
        ] {
            assert!(is_blank(&value), "{value}");
        }
        for value in [
            serde_json::json!(true),
            serde_json::json!(1),
            serde_json::json!("x"),
            serde_json::json!([0]),
            serde_json::json!({"a": null}),
        ] {
            assert!(!is_blank(&value), "{value}");
        }
    }

    #[test]
    fn as_of_is_rfc3339_utc() {
        assert_eq!(format_as_of(0).unwrap(), "1970-01-01T00:00:00Z");
        assert_eq!(
            format_as_of(1_700_000_000_123).unwrap(),
            "2023-11-14T22:13:20.123Z"
        );
    }

    #[test]
    fn empty_base_url_is_rejected() {
        assert!(matches!(
            RemoteCatalog::new("  ", None),
            Err(StoreError::InvalidInput(_))
        ));
        assert!(matches!(
            RemoteCatalog::new("not a url", None),
            Err(StoreError::InvalidInput(_))
        ));
    }
}
