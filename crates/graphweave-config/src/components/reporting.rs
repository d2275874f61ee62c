//! Reporting configuration: where run logs and telemetry go

use super::remote::{or_default, BlobTarget, RemoteFields, S3Target};
use crate::defaults::ConfigDefaults;
use crate::error::ConfigResult;
use crate::kind::{Concern, ReportingKind};
use crate::secret::Secret;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Reporting settings as authored.
///
/// Carries every field any reporting backend may use. Which of them matter
/// is decided by `kind` at resolution time; the rest are ignored.
///
/// ```toml
/// [reporting]
/// kind = "s3"
/// base_dir = "output/run1/reports"
/// bucket_name = "aiuc-dev-1"
/// region_name = "eu-north-1"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportingSettings {
    /// Backend discriminator (`file`, `console`, `blob`, `s3`)
    pub kind: Option<String>,
    /// Alternate key for `kind`; `kind` wins when both are set
    #[serde(rename = "type")]
    pub type_alias: Option<String>,
    /// Directory or key prefix for reports
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
    /// Object key for the run log
    pub object_name: Option<String>,
}

impl ReportingSettings {
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

    /// Set the blob account endpoint.
    pub fn with_storage_account_blob_url(mut self, url: impl Into<String>) -> Self {
        self.storage_account_blob_url = Some(url.into());
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

    /// Set the run log object key.
    pub fn with_object_name(mut self, name: impl Into<String>) -> Self {
        self.object_name = Some(name.into());
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

/// Resolved reporting backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReportingConfig {
    /// Log files under a local directory
    File {
        /// Directory the log files are written to
        base_dir: PathBuf,
    },
    /// Log to standard output
    Console,
    /// Log blobs in a container
    Blob(BlobTarget),
    /// Log object in a bucket
    S3 {
        /// Bucket location
        #[serde(flatten)]
        target: S3Target,
        /// Key of the run log object
        object_name: String,
    },
}

impl ReportingConfig {
    /// Discriminator of this variant.
    pub fn kind(&self) -> ReportingKind {
        match self {
            ReportingConfig::File { .. } => ReportingKind::File,
            ReportingConfig::Console => ReportingKind::Console,
            ReportingConfig::Blob(_) => ReportingKind::Blob,
            ReportingConfig::S3 { .. } => ReportingKind::S3,
        }
    }
}

pub(crate) fn resolve_reporting(
    kind: ReportingKind,
    settings: &ReportingSettings,
    defaults: &ConfigDefaults,
) -> ConfigResult<ReportingConfig> {
    const CONCERN: Concern = Concern::Reporting;
    let remote = settings.remote();

    Ok(match kind {
        ReportingKind::File => ReportingConfig::File {
            base_dir: PathBuf::from(or_default(
                settings.base_dir.as_deref(),
                &defaults.reporting_base_dir,
            )),
        },
        ReportingKind::Console => ReportingConfig::Console,
        ReportingKind::Blob => ReportingConfig::Blob(remote.blob(CONCERN, kind.as_str())?),
        ReportingKind::S3 => ReportingConfig::S3 {
            target: remote.s3(CONCERN, kind.as_str())?,
            object_name: or_default(
                settings.object_name.as_deref(),
                &defaults.reporting_object_name,
            ),
        },
    })
}
