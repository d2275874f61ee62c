//! Input configuration: where source documents come from and how to read them
//!
//! Input has two discriminators. `kind` picks the location backend and
//! `file_type` picks the document format; CSV-only fields are dropped when
//! the format is plain text.

use super::remote::{optional, or_default, BlobTarget, RemoteFields, S3Target};
use crate::defaults::ConfigDefaults;
use crate::error::ConfigResult;
use crate::kind::{Concern, InputFileType, InputKind};
use crate::secret::Secret;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input settings as authored.
///
/// ```toml
/// [input]
/// kind = "file"
/// file_type = "csv"
/// base_dir = "input"
/// file_pattern = '.*\.csv$'
/// source_column = "url"
/// text_column = "content"
/// title_column = "title"
/// document_attribute_columns = ["id", "model_name"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Location discriminator (`file`, `blob`, `s3`)
    pub kind: Option<String>,
    /// Alternate key for `kind`; `kind` wins when both are set
    #[serde(rename = "type")]
    pub type_alias: Option<String>,
    /// Format discriminator (`text`, `csv`)
    pub file_type: Option<String>,
    /// Directory or key prefix holding documents
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
    /// Text encoding of the documents
    pub encoding: Option<String>,
    /// Regex selecting document file names
    pub file_pattern: Option<String>,
    /// CSV column with the document source
    pub source_column: Option<String>,
    /// CSV column with the document text
    pub text_column: Option<String>,
    /// CSV column with the document title
    pub title_column: Option<String>,
    /// CSV column with the document timestamp
    pub timestamp_column: Option<String>,
    /// strftime format of the timestamp column
    pub timestamp_format: Option<String>,
    /// CSV columns copied onto each document as attributes
    pub document_attribute_columns: Option<Vec<String>>,
}

impl InputSettings {
    /// Start a section for the given location kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Set the document format.
    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = Some(file_type.into());
        self
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

    /// Set the file name pattern.
    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = Some(pattern.into());
        self
    }

    /// Set the CSV text column.
    pub fn with_text_column(mut self, column: impl Into<String>) -> Self {
        self.text_column = Some(column.into());
        self
    }

    /// Set the CSV title column.
    pub fn with_title_column(mut self, column: impl Into<String>) -> Self {
        self.title_column = Some(column.into());
        self
    }

    /// Set the CSV attribute columns.
    pub fn with_document_attribute_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.document_attribute_columns = Some(columns.into_iter().map(Into::into).collect());
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

/// Resolved input location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InputSource {
    /// Documents under a local directory
    File {
        /// Directory to scan
        base_dir: PathBuf,
    },
    /// Documents in a blob container
    Blob(BlobTarget),
    /// Documents in a bucket
    S3(S3Target),
}

impl InputSource {
    /// Discriminator of this variant.
    pub fn kind(&self) -> InputKind {
        match self {
            InputSource::File { .. } => InputKind::File,
            InputSource::Blob(_) => InputKind::Blob,
            InputSource::S3(_) => InputKind::S3,
        }
    }
}

/// Resolved document format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "file_type", rename_all = "lowercase")]
pub enum InputFormat {
    /// One document per file
    Text,
    /// One document per row
    Csv {
        /// Column with the document source
        #[serde(skip_serializing_if = "Option::is_none")]
        source_column: Option<String>,
        /// Column with the document text
        text_column: String,
        /// Column with the document title
        #[serde(skip_serializing_if = "Option::is_none")]
        title_column: Option<String>,
        /// Column with the document timestamp
        #[serde(skip_serializing_if = "Option::is_none")]
        timestamp_column: Option<String>,
        /// strftime format of the timestamp column
        #[serde(skip_serializing_if = "Option::is_none")]
        timestamp_format: Option<String>,
        /// Columns copied onto documents as attributes
        document_attribute_columns: Vec<String>,
    },
}

impl InputFormat {
    /// Discriminator of this variant.
    pub fn file_type(&self) -> InputFileType {
        match self {
            InputFormat::Text => InputFileType::Text,
            InputFormat::Csv { .. } => InputFileType::Csv,
        }
    }
}

/// Resolved input configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputConfig {
    /// Where the documents live
    pub source: InputSource,
    /// How each document is read
    pub format: InputFormat,
    /// Text encoding
    pub encoding: String,
    /// Regex selecting document file names
    pub file_pattern: String,
}

impl InputConfig {
    /// Location discriminator.
    pub fn kind(&self) -> InputKind {
        self.source.kind()
    }

    /// Format discriminator.
    pub fn file_type(&self) -> InputFileType {
        self.format.file_type()
    }
}

pub(crate) fn resolve_input(
    kind: InputKind,
    file_type: InputFileType,
    settings: &InputSettings,
    defaults: &ConfigDefaults,
) -> ConfigResult<InputConfig> {
    const CONCERN: Concern = Concern::Input;
    let remote = settings.remote();

    let source = match kind {
        InputKind::File => InputSource::File {
            base_dir: PathBuf::from(or_default(
                settings.base_dir.as_deref(),
                &defaults.input_base_dir,
            )),
        },
        InputKind::Blob => InputSource::Blob(remote.blob(CONCERN, kind.as_str())?),
        InputKind::S3 => InputSource::S3(remote.s3(CONCERN, kind.as_str())?),
    };

    let format = match file_type {
        InputFileType::Text => InputFormat::Text,
        InputFileType::Csv => InputFormat::Csv {
            source_column: optional(settings.source_column.as_deref()),
            text_column: or_default(settings.text_column.as_deref(), &defaults.input_text_column),
            title_column: optional(settings.title_column.as_deref()),
            timestamp_column: optional(settings.timestamp_column.as_deref()),
            timestamp_format: optional(settings.timestamp_format.as_deref()),
            document_attribute_columns: settings
                .document_attribute_columns
                .iter()
                .flatten()
                .filter_map(|column| optional(Some(column.as_str())))
                .collect(),
        },
    };

    Ok(InputConfig {
        source,
        format,
        encoding: or_default(settings.encoding.as_deref(), &defaults.input_encoding),
        file_pattern: or_default(
            settings.file_pattern.as_deref(),
            defaults.input_pattern_for(file_type),
        ),
    })
}
