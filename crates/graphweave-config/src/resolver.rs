//! Variant resolution
//!
//! [`Resolver`] maps each settings section to its closed variant enum. It is
//! the only code that decides whether a section is valid for the backend it
//! names, and it does so without touching the filesystem, network or
//! environment: a named bucket or directory is never checked for existence.

use crate::components::{
    cache::resolve_cache, input::resolve_input, reporting::resolve_reporting,
    storage::resolve_storage, CacheConfig, CacheSettings, InputConfig, InputSettings,
    ReportingConfig, ReportingSettings, StorageConfig, StorageSettings,
};
use crate::defaults::ConfigDefaults;
use crate::error::{ConfigError, ConfigResult};
use crate::kind::{BackendKind, InputFileType};
use crate::settings::GraphSettings;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Fully resolved configuration handed to the pipeline builder.
///
/// Immutable once built; share it across workers behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineConfig {
    /// Project root
    pub root_dir: PathBuf,
    /// Reporting backend
    pub reporting: ReportingConfig,
    /// Storage backend
    pub storage: StorageConfig,
    /// Cache backend
    pub cache: CacheConfig,
    /// Input location and format
    pub input: InputConfig,
}

/// Resolves settings sections against a defaults table.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    defaults: ConfigDefaults,
}

impl Resolver {
    /// Create a resolver using the given defaults.
    pub fn new(defaults: ConfigDefaults) -> Self {
        Self { defaults }
    }

    /// Defaults applied to optional fields.
    pub fn defaults(&self) -> &ConfigDefaults {
        &self.defaults
    }

    /// Resolve every concern.
    ///
    /// Fails on the first invalid section; no partial configuration is
    /// returned.
    pub fn resolve(&self, settings: &GraphSettings) -> ConfigResult<PipelineConfig> {
        let config = PipelineConfig {
            root_dir: settings
                .root_dir
                .clone()
                .unwrap_or_else(|| self.defaults.root_dir.clone()),
            reporting: self.resolve_reporting(&settings.reporting)?,
            storage: self.resolve_storage(&settings.storage)?,
            cache: self.resolve_cache(&settings.cache)?,
            input: self.resolve_input(&settings.input)?,
        };

        debug!(
            reporting = %config.reporting.kind(),
            storage = %config.storage.kind(),
            cache = %config.cache.kind(),
            input = %config.input.kind(),
            "resolved pipeline configuration"
        );
        Ok(config)
    }

    /// Resolve the reporting section.
    pub fn resolve_reporting(&self, settings: &ReportingSettings) -> ConfigResult<ReportingConfig> {
        let kind = select(settings.discriminator(), self.defaults.reporting_kind)?;
        let resolved = resolve_reporting(kind, settings, &self.defaults)?;
        ensure_dispatched(kind, resolved.kind())?;
        Ok(resolved)
    }

    /// Resolve the storage section.
    pub fn resolve_storage(&self, settings: &StorageSettings) -> ConfigResult<StorageConfig> {
        let kind = select(settings.discriminator(), self.defaults.storage_kind)?;
        let resolved = resolve_storage(kind, settings, &self.defaults)?;
        ensure_dispatched(kind, resolved.kind())?;
        Ok(resolved)
    }

    /// Resolve the cache section.
    pub fn resolve_cache(&self, settings: &CacheSettings) -> ConfigResult<CacheConfig> {
        let kind = select(settings.discriminator(), self.defaults.cache_kind)?;
        let resolved = resolve_cache(kind, settings, &self.defaults)?;
        ensure_dispatched(kind, resolved.kind())?;
        Ok(resolved)
    }

    /// Resolve the input section.
    pub fn resolve_input(&self, settings: &InputSettings) -> ConfigResult<InputConfig> {
        let kind = select(settings.discriminator(), self.defaults.input_kind)?;
        let file_type: InputFileType =
            select(settings.file_type.as_deref(), self.defaults.input_file_type)?;
        let resolved = resolve_input(kind, file_type, settings, &self.defaults)?;
        ensure_dispatched(kind, resolved.kind())?;
        ensure_dispatched(file_type, resolved.file_type())?;
        Ok(resolved)
    }
}

/// Resolve every concern with the stock defaults table.
pub fn resolve_settings(settings: &GraphSettings) -> ConfigResult<PipelineConfig> {
    Resolver::default().resolve(settings)
}

/// Parse a discriminator, falling back to the default when absent.
fn select<K: BackendKind>(raw: Option<&str>, default: K) -> ConfigResult<K> {
    let kind = match raw {
        Some(raw) => K::parse(raw)?,
        None => default,
    };
    debug!(concern = %K::CONCERN, kind = %kind, defaulted = raw.is_none(), "selected backend");
    Ok(kind)
}

/// Guard against a resolution branch producing a variant of another kind.
fn ensure_dispatched<K: BackendKind>(dispatched: K, produced: K) -> ConfigResult<()> {
    if dispatched == produced {
        Ok(())
    } else {
        Err(ConfigError::UnreachableVariant {
            concern: K::CONCERN,
            kind: dispatched.as_str().to_string(),
        })
    }
}
