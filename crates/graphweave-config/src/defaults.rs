//! Default values for optional settings fields.
//!
//! The named constants are the authoring-time default table. They are
//! gathered into a [`ConfigDefaults`] value that is passed to the
//! [`Resolver`](crate::Resolver) explicitly, so resolution never reads
//! ambient state and tests can swap any single default:
//!
//! ```rust
//! use graphweave_config::ConfigDefaults;
//!
//! let defaults = ConfigDefaults {
//!     reporting_base_dir: "logs".to_string(),
//!     ..ConfigDefaults::default()
//! };
//! assert_eq!(defaults.storage_base_dir, graphweave_config::DEFAULT_STORAGE_BASE_DIR);
//! ```
//!
//! Required fields (bucket and container names) have no entry here. A
//! missing required field is an error, not a default.

use crate::kind::{CacheKind, InputFileType, InputKind, ReportingKind, StorageKind};
use std::path::PathBuf;

/// Project root used when the settings do not name one.
pub const DEFAULT_ROOT_DIR: &str = ".";

/// Reporting backend used when `reporting.kind` is absent.
pub const DEFAULT_REPORTING_KIND: ReportingKind = ReportingKind::File;
/// Directory for file reporting.
pub const DEFAULT_REPORTING_BASE_DIR: &str = "output/reports";
/// Object key for the run log written to an object store.
pub const DEFAULT_REPORTING_OBJECT_NAME: &str = "indexing-engine.log";

/// Storage backend used when `storage.kind` is absent.
pub const DEFAULT_STORAGE_KIND: StorageKind = StorageKind::File;
/// Directory for file storage.
pub const DEFAULT_STORAGE_BASE_DIR: &str = "output/artifacts";

/// Cache backend used when `cache.kind` is absent.
pub const DEFAULT_CACHE_KIND: CacheKind = CacheKind::File;
/// Directory for the file cache.
pub const DEFAULT_CACHE_BASE_DIR: &str = "cache";

/// Input location used when `input.kind` is absent.
pub const DEFAULT_INPUT_KIND: InputKind = InputKind::File;
/// Input format used when `input.file_type` is absent.
pub const DEFAULT_INPUT_FILE_TYPE: InputFileType = InputFileType::Text;
/// Directory input documents are read from.
pub const DEFAULT_INPUT_BASE_DIR: &str = "input";
/// Text encoding of input documents.
pub const DEFAULT_INPUT_ENCODING: &str = "utf-8";
/// File name pattern for text input.
pub const DEFAULT_INPUT_TEXT_PATTERN: &str = r".*\.txt$";
/// File name pattern for CSV input.
pub const DEFAULT_INPUT_CSV_PATTERN: &str = r".*\.csv$";
/// CSV column holding document text.
pub const DEFAULT_INPUT_TEXT_COLUMN: &str = "text";

/// Defaults applied to optional fields during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDefaults {
    /// Project root
    pub root_dir: PathBuf,
    /// Reporting backend when unset
    pub reporting_kind: ReportingKind,
    /// File reporting directory
    pub reporting_base_dir: String,
    /// Object-store run log key
    pub reporting_object_name: String,
    /// Storage backend when unset
    pub storage_kind: StorageKind,
    /// File storage directory
    pub storage_base_dir: String,
    /// Cache backend when unset
    pub cache_kind: CacheKind,
    /// File cache directory
    pub cache_base_dir: String,
    /// Input location when unset
    pub input_kind: InputKind,
    /// Input format when unset
    pub input_file_type: InputFileType,
    /// File input directory
    pub input_base_dir: String,
    /// Input text encoding
    pub input_encoding: String,
    /// Text input file pattern
    pub input_text_pattern: String,
    /// CSV input file pattern
    pub input_csv_pattern: String,
    /// CSV text column
    pub input_text_column: String,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            reporting_kind: DEFAULT_REPORTING_KIND,
            reporting_base_dir: DEFAULT_REPORTING_BASE_DIR.to_string(),
            reporting_object_name: DEFAULT_REPORTING_OBJECT_NAME.to_string(),
            storage_kind: DEFAULT_STORAGE_KIND,
            storage_base_dir: DEFAULT_STORAGE_BASE_DIR.to_string(),
            cache_kind: DEFAULT_CACHE_KIND,
            cache_base_dir: DEFAULT_CACHE_BASE_DIR.to_string(),
            input_kind: DEFAULT_INPUT_KIND,
            input_file_type: DEFAULT_INPUT_FILE_TYPE,
            input_base_dir: DEFAULT_INPUT_BASE_DIR.to_string(),
            input_encoding: DEFAULT_INPUT_ENCODING.to_string(),
            input_text_pattern: DEFAULT_INPUT_TEXT_PATTERN.to_string(),
            input_csv_pattern: DEFAULT_INPUT_CSV_PATTERN.to_string(),
            input_text_column: DEFAULT_INPUT_TEXT_COLUMN.to_string(),
        }
    }
}

impl ConfigDefaults {
    /// Default file pattern for the given input format.
    pub fn input_pattern_for(&self, file_type: InputFileType) -> &str {
        match file_type {
            InputFileType::Text => &self.input_text_pattern,
            InputFileType::Csv => &self.input_csv_pattern,
        }
    }
}
