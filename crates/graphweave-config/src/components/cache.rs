//! Cache configuration: where LLM responses are memoised between runs

use super::remote::{or_default, BlobTarget, RemoteFields, S3Target};
use crate::defaults::ConfigDefaults;
use crate::error::ConfigResult;
use crate::kind::{CacheKind, Concern};
use crate::secret::Secret;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Cache settings as authored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Backend discriminator (`file`, `memory`, `none`, `blob`, `s3`)
    pub kind: Option<String>,
    /// Alternate key for `kind`; `kind` wins when both are set
    #[serde(rename = "type")]
    pub type_alias: Option<String>,
    /// Directory or key prefix for cache entries
    pub base_dir: Option<String>,
    /// Blob storage connection string
    pub connection_string: Option<Secret>,
    /// Blob container name
    pub container_name: Option<String>,
    /// Blob account endpoint
    pub storage_account_blob_url: Option<String>,
    /// Alternate key for `storage_account_blob_url`
    pub blob_url: Option<String>,
    /// Object store bucket
    pub bucket_name: Option<String>,
    /// Object store region
    pub region_name: Option<String>,
}

impl CacheSettings {
    /// Start a section for the given backend kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Set the base directory.
    pub fn with_base_dir(mut self, base_dir: impl Into<String>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Set the blob container.
    pub fn with_container_name(mut self, name: impl Into<String>) -> Self {
        self.container_name = Some(name.into());
        self
    }

    /// Set the object store bucket.
    pub fn with_bucket_name(mut self, name: impl Into<String>) -> Self {
        self.bucket_name = Some(name.into());
        self
    }

    /// Set the object store region.
    pub fn with_region_name(mut self, region: impl Into<String>) -> Self {
        self.region_name = Some(region.into());
        self
    }

    /// The discriminator as written, from `kind` or else `type`.
    pub fn discriminator(&self) -> Option<&str> {
        self.kind.as_deref().or(self.type_alias.as_deref())
    }

    pub(crate) fn remote(&self) -> RemoteFields<'_> {
        RemoteFields {
            base_dir: self.base_dir.as_deref(),
            connection_string: self.connection_string.as_ref(),
            container_name: self.container_name.as_deref(),
            storage_account_blob_url: self
                .storage_account_blob_url
                .as_deref()
                .or(self.blob_url.as_deref()),
            bucket_name: self.bucket_name.as_deref(),
            region_name: self.region_name.as_deref(),
        }
    }
}

/// Resolved cache backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CacheConfig {
    /// Cache entries under a local directory
    File {
        /// Cache directory
        base_dir: PathBuf,
    },
    /// Cache kept in memory for the run
    Memory,
    /// No caching
    None,
    /// Cache entries in a blob container
    Blob(BlobTarget),
    /// Cache entries in a bucket
    S3(S3Target),
}

impl CacheConfig {
    /// Discriminator of this variant.
    pub fn kind(&self) -> CacheKind {
        match self {
            CacheConfig::File { .. } => CacheKind::File,
            CacheConfig::Memory => CacheKind::Memory,
            CacheConfig::None => CacheKind::None,
            CacheConfig::Blob(_) => CacheKind::Blob,
            CacheConfig::S3(_) => CacheKind::S3,
        }
    }

    /// Whether responses are cached at all.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, CacheConfig::None)
    }
}

pub(crate) fn resolve_cache(
    kind: CacheKind,
    settings: &CacheSettings,
    defaults: &ConfigDefaults,
) -> ConfigResult<CacheConfig> {
    const CONCERN: Concern = Concern::Cache;
    let remote = settings.remote();

    Ok(match kind {
        CacheKind::File => CacheConfig::File {
            base_dir: PathBuf::from(or_default(
                settings.base_dir.as_deref(),
                &defaults.cache_base_dir,
            )),
        },
        CacheKind::Memory => CacheConfig::Memory,
        CacheKind::None => CacheConfig::None,
        CacheKind::Blob => CacheConfig::Blob(remote.blob(CONCERN, kind.as_str())?),
        CacheKind::S3 => CacheConfig::S3(remote.s3(CONCERN, kind.as_str())?),
    })
}
