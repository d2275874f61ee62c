//! Blob-container and object-store targets shared by every concern

use crate::error::{ConfigError, ConfigResult};
use crate::kind::Concern;
use crate::secret::Secret;
use serde::Serialize;

/// Location inside an Azure-style blob container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlobTarget {
    /// Storage account connection string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<Secret>,
    /// Container holding the data
    pub container_name: String,
    /// Account blob endpoint, used when no connection string is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_account_blob_url: Option<String>,
    /// Prefix inside the container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,
}

/// Location inside an S3-style bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct S3Target {
    /// Key prefix inside the bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,
    /// Bucket holding the data
    pub bucket_name: String,
    /// Bucket region; the client default applies when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
}

/// Borrowed view of the remote-location fields a settings section carries.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RemoteFields<'a> {
    pub base_dir: Option<&'a str>,
    pub connection_string: Option<&'a Secret>,
    pub container_name: Option<&'a str>,
    pub storage_account_blob_url: Option<&'a str>,
    pub bucket_name: Option<&'a str>,
    pub region_name: Option<&'a str>,
}

impl RemoteFields<'_> {
    /// Narrow to a blob target. `container_name` is required.
    pub fn blob(&self, concern: Concern, kind: &str) -> ConfigResult<BlobTarget> {
        Ok(BlobTarget {
            connection_string: self
                .connection_string
                .filter(|secret| !secret.is_blank())
                .cloned(),
            container_name: require(self.container_name, concern, kind, "container_name")?,
            storage_account_blob_url: optional(self.storage_account_blob_url),
            base_dir: optional(self.base_dir),
        })
    }

    /// Narrow to an object-store target. `bucket_name` is required.
    pub fn s3(&self, concern: Concern, kind: &str) -> ConfigResult<S3Target> {
        Ok(S3Target {
            base_dir: optional(self.base_dir),
            bucket_name: require(self.bucket_name, concern, kind, "bucket_name")?,
            region_name: optional(self.region_name),
        })
    }
}

/// A required field; blank strings count as missing.
pub(crate) fn require(
    value: Option<&str>,
    concern: Concern,
    kind: &str,
    field: &'static str,
) -> ConfigResult<String> {
    optional(value).ok_or_else(|| ConfigError::MissingRequiredField {
        concern,
        kind: kind.to_string(),
        field,
    })
}

/// An optional field; blank strings collapse to `None`. Non-blank values
/// are kept exactly as written.
pub(crate) fn optional(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// An optional field with a fallback from the defaults table.
pub(crate) fn or_default(value: Option<&str>, default: &str) -> String {
    optional(value).unwrap_or_else(|| default.to_string())
}
