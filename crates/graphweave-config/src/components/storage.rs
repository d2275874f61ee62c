//! Storage configuration: where pipeline output artifacts are written

use super::remote::{or_default, BlobTarget, RemoteFields, S3Target};
use crate::defaults::ConfigDefaults;
use crate::error::ConfigResult;
use crate::kind::{Concern, StorageKind};
use crate::secret::Secret;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage settings as authored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Backend discriminator (`file`, `memory`, `blob`, `s3`)
    pub kind: Option<String>,
    /// Alternate key for `kind`; `kind` wins when both are set
    #[serde(rename = "type")]
    pub type_alias: Option<String>,
    /// Directory or key prefix for artifacts
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

impl StorageSettings {
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

    /// Set the blob connection string.
    pub fn with_connection_string(mut self, value: impl Into<Secret>) -> Self {
        self.connection_string = Some(value.into());
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

/// Resolved storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Artifacts under a local directory
    File {
        /// Output directory
        base_dir: PathBuf,
    },
    /// Artifacts kept in memory
    Memory,
    /// Artifacts in a blob container
    Blob(BlobTarget),
    /// Artifacts in a bucket
    S3(S3Target),
}

impl StorageConfig {
    /// Discriminator of this variant.
    pub fn kind(&self) -> StorageKind {
        match self {
            StorageConfig::File { .. } => StorageKind::File,
            StorageConfig::Memory => StorageKind::Memory,
            StorageConfig::Blob(_) => StorageKind::Blob,
            StorageConfig::S3(_) => StorageKind::S3,
        }
    }
}

pub(crate) fn resolve_storage(
    kind: StorageKind,
    settings: &StorageSettings,
    defaults: &ConfigDefaults,
) -> ConfigResult<StorageConfig> {
    const CONCERN: Concern = Concern::Storage;
    let remote = settings.remote();

    Ok(match kind {
        StorageKind::File => StorageConfig::File {
            base_dir: PathBuf::from(or_default(
                settings.base_dir.as_deref(),
                &defaults.storage_base_dir,
            )),
        },
        StorageKind::Memory => StorageConfig::Memory,
        StorageKind::Blob => StorageConfig::Blob(remote.blob(CONCERN, kind.as_str())?),
        StorageKind::S3 => StorageConfig::S3(remote.s3(CONCERN, kind.as_str())?),
    })
}
