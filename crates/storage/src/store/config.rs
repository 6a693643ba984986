#![forbid(unsafe_code)]

use super::StoreError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_BACKEND: &str = "METACATALOG_BACKEND";
pub const ENV_STORAGE_DIR: &str = "METACATALOG_STORAGE_DIR";
pub const ENV_URL: &str = "METACATALOG_URL";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    Sqlite,
    Remote,
}

impl BackendKind {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "database" | "db" => Some(Self::Sqlite),
            "remote" | "http" => Some(Self::Remote),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Remote => "remote",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub backend: BackendKind,
    /// Directory holding `catalog.db` (sqlite backend).
    pub storage_dir: PathBuf,
    pub busy_timeout_ms: u64,
    /// Base URL of a catalog HTTP server (remote backend).
    pub url: Option<String>,
    /// Per-request timeout for the remote backend; 0 disables it.
    pub timeout_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Sqlite,
            storage_dir: PathBuf::from(".metacatalog"),
            busy_timeout_ms: 5_000,
            url: None,
            timeout_ms: 10_000,
        }
    }
}

impl CatalogConfig {
    pub fn from_yaml_str(raw: &str) -> Result<Self, StoreError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(|err| StoreError::Config(format!("invalid yaml: {err}")))
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&raw)
    }

    /// Applies `METACATALOG_*` environment variables on top of `self`.
    pub fn apply_env_overrides(self) -> Result<Self, StoreError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    pub fn apply_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, StoreError> {
        if let Some(raw) = lookup(ENV_BACKEND) {
            self.backend = BackendKind::from_str(&raw)
                .ok_or_else(|| StoreError::Config(format!("unknown backend: {raw}")))?;
        }
        if let Some(raw) = lookup(ENV_STORAGE_DIR).filter(|v| !v.trim().is_empty()) {
            self.storage_dir = PathBuf::from(raw);
        }
        if let Some(raw) = lookup(ENV_URL).filter(|v| !v.trim().is_empty()) {
            self.url = Some(raw);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = CatalogConfig::from_yaml_str("").expect("parse");
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.backend, BackendKind::Sqlite);
    }

    #[test]
    fn yaml_overrides_selected_fields() {
        let config = CatalogConfig::from_yaml_str(
            "backend: remote\nurl: http://localhost:8000\ntimeout_ms: 0\n",
        )
        .expect("parse");
        assert_eq!(config.backend, BackendKind::Remote);
        assert_eq!(config.url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.timeout_ms, 0);
        assert_eq!(config.busy_timeout_ms, 5_000);
    }

    #[test]
    fn unknown_yaml_fields_are_rejected() {
        let err = CatalogConfig::from_yaml_str("storage_directory: /tmp\n").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn env_overrides_apply_on_top() {
        let env = HashMap::from([
            (ENV_BACKEND, "HTTP".to_string()),
            (ENV_URL, "http://catalog:8000".to_string()),
            (ENV_STORAGE_DIR, "  ".to_string()),
        ]);
        let config = CatalogConfig::default()
            .apply_overrides(|key| env.get(key).cloned())
            .expect("overrides");
        assert_eq!(config.backend, BackendKind::Remote);
        assert_eq!(config.url.as_deref(), Some("http://catalog:8000"));
        assert_eq!(config.storage_dir, PathBuf::from(".metacatalog"));
    }

    #[test]
    fn unknown_backend_is_a_config_error() {
        let err = CatalogConfig::default()
            .apply_overrides(|key| (key == ENV_BACKEND).then(|| "mongo".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("unknown backend: mongo"));
    }
}
