//! The user-facing settings aggregate

use crate::components::{CacheSettings, InputSettings, ReportingSettings, StorageSettings};
use serde::Deserialize;
use std::path::PathBuf;

/// Pipeline settings as authored, one section per concern.
///
/// Building or deserializing this never fails on field combinations; a
/// section may be left out entirely and every field in it is optional.
/// Validation happens in [`Resolver`](crate::Resolver).
///
/// Settings are read, never written back: only the resolved
/// [`PipelineConfig`](crate::PipelineConfig) serializes, with secrets
/// redacted.
///
/// # Example TOML
///
/// ```toml
/// root_dir = "."
///
/// [reporting]
/// kind = "console"
///
/// [storage]
/// kind = "s3"
/// bucket_name = "aiuc-dev-1"
/// region_name = "eu-north-1"
///
/// [cache]
/// kind = "file"
/// base_dir = "cache_car-v0"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    /// Project root; relative base directories are interpreted against it
    pub root_dir: Option<PathBuf>,
    /// Reporting section
    pub reporting: ReportingSettings,
    /// Storage section
    pub storage: StorageSettings,
    /// Cache section
    pub cache: CacheSettings,
    /// Input section
    pub input: InputSettings,
}

impl GraphSettings {
    /// Settings with every section left to defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project root.
    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(root_dir.into());
        self
    }

    /// Replace the reporting section.
    pub fn with_reporting(mut self, reporting: ReportingSettings) -> Self {
        self.reporting = reporting;
        self
    }

    /// Replace the storage section.
    pub fn with_storage(mut self, storage: StorageSettings) -> Self {
        self.storage = storage;
        self
    }

    /// Replace the cache section.
    pub fn with_cache(mut self, cache: CacheSettings) -> Self {
        self.cache = cache;
        self
    }

    /// Replace the input section.
    pub fn with_input(mut self, input: InputSettings) -> Self {
        self.input = input;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_default_settings() {
        let settings: GraphSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, GraphSettings::default());
    }

    #[test]
    fn sections_are_independent() {
        let settings: GraphSettings = serde_json::from_str(
            r#"{ "cache": { "kind": "none" }, "reporting": { "kind": "nonsense", "bucket_name": "b" } }"#,
        )
        .unwrap();

        assert_eq!(settings.cache.kind.as_deref(), Some("none"));
        assert_eq!(settings.reporting.kind.as_deref(), Some("nonsense"));
        assert_eq!(settings.storage, StorageSettings::default());
        assert_eq!(settings.input, InputSettings::default());
    }

    #[test]
    fn conflicting_discriminator_keys_still_deserialize() {
        let settings: GraphSettings = serde_json::from_str(
            r#"{ "reporting": { "kind": "file", "type": "console" }, "cache": { "type": "none" } }"#,
        )
        .unwrap();

        assert_eq!(settings.reporting.discriminator(), Some("file"));
        assert_eq!(settings.cache.discriminator(), Some("none"));
    }

    #[test]
    fn secrets_reach_resolution_unredacted() {
        let settings: GraphSettings = serde_json::from_str(
            r#"{ "storage": { "kind": "blob", "container_name": "artifacts", "connection_string": "AccountKey=hunter2" } }"#,
        )
        .unwrap();

        let config = crate::resolve_settings(&settings).unwrap();
        match &config.storage {
            crate::StorageConfig::Blob(target) => assert_eq!(
                target.connection_string.as_ref().map(|s| s.expose()),
                Some("AccountKey=hunter2")
            ),
            other => panic!("expected blob storage, got {:?}", other),
        }

        let rendered = serde_json::to_string(&config).unwrap();
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn builder_replaces_only_the_named_section() {
        let settings = GraphSettings::new()
            .with_root_dir("/srv/project")
            .with_cache(CacheSettings::new("memory"));

        assert_eq!(settings.root_dir, Some(PathBuf::from("/srv/project")));
        assert_eq!(settings.cache.kind.as_deref(), Some("memory"));
        assert_eq!(settings.reporting, ReportingSettings::default());
    }
}
