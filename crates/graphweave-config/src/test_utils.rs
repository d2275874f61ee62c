//! Test utilities for settings and resolution testing.

use crate::components::{CacheSettings, InputSettings, ReportingSettings, StorageSettings};
use crate::kind::{CacheKind, InputFileType, InputKind, ReportingKind, StorageKind};
use crate::settings::GraphSettings;
use std::io::Write;
use tempfile::NamedTempFile;

/// Reporting section with every field populated for the given kind.
pub fn complete_reporting(kind: ReportingKind) -> ReportingSettings {
    ReportingSettings::new(kind.as_str())
        .with_base_dir("output/test/reports")
        .with_connection_string("UseDevelopmentStorage=true")
        .with_container_name("test-reports")
        .with_storage_account_blob_url("https://devstore.blob.example")
        .with_bucket_name("test-bucket")
        .with_region_name("eu-north-1")
        .with_object_name("test.log")
}

/// Storage section with every field populated for the given kind.
pub fn complete_storage(kind: StorageKind) -> StorageSettings {
    StorageSettings::new(kind.as_str())
        .with_base_dir("output/test/artifacts")
        .with_connection_string("UseDevelopmentStorage=true")
        .with_container_name("test-artifacts")
        .with_bucket_name("test-bucket")
        .with_region_name("eu-north-1")
}

/// Cache section with every field populated for the given kind.
pub fn complete_cache(kind: CacheKind) -> CacheSettings {
    CacheSettings::new(kind.as_str())
        .with_base_dir("cache/test")
        .with_container_name("test-cache")
        .with_bucket_name("test-bucket")
        .with_region_name("eu-north-1")
}

/// Input section with every field populated for the given kind and format.
pub fn complete_input(kind: InputKind, file_type: InputFileType) -> InputSettings {
    InputSettings::new(kind.as_str())
        .with_file_type(file_type.as_str())
        .with_base_dir("input/test")
        .with_container_name("test-input")
        .with_bucket_name("test-bucket")
        .with_text_column("content")
        .with_title_column("title")
        .with_document_attribute_columns(["id"])
}

/// Settings reproducing the object-store run from the workflow example.
pub fn object_store_settings() -> GraphSettings {
    GraphSettings::new()
        .with_reporting(
            ReportingSettings::new("s3")
                .with_base_dir("output/run1/reports")
                .with_bucket_name("aiuc-dev-1")
                .with_region_name("eu-north-1"),
        )
        .with_storage(
            StorageSettings::new("s3")
                .with_base_dir("output/run1/artifacts")
                .with_bucket_name("aiuc-dev-1")
                .with_region_name("eu-north-1"),
        )
        .with_cache(CacheSettings::new("file").with_base_dir("cache_car-v0"))
        .with_input(
            InputSettings::new("file")
                .with_file_type("csv")
                .with_base_dir("input")
                .with_file_pattern(r".*\.csv$")
                .with_text_column("content")
                .with_title_column("title")
                .with_document_attribute_columns(["id", "model_name", "make_name", "src"]),
        )
}

/// Write settings text to a temp file with the given extension.
pub fn write_settings_file(contents: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{}", extension))
        .tempfile()
        .expect("Failed to create temp settings file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp settings file");
    file
}
