//! End-to-end resolution of realistic settings documents

use graphweave_config::{
    create_pipeline, object_store_settings, resolve_settings, CacheConfig, ConfigDefaults,
    ConfigError, Concern, GraphSettings, InputFormat, InputSource, PipelineBuilder,
    PipelineConfig, ReportingConfig, ReportingSettings, Resolver, S3Target, SettingsFormat,
    SettingsLoader, StorageConfig,
};
use std::path::PathBuf;
use std::sync::Arc;

#[test]
fn object_store_reporting_gets_default_object_name() {
    let settings = GraphSettings::new().with_reporting(
        ReportingSettings::new("object-store")
            .with_bucket_name("aiuc-dev-1")
            .with_region_name("eu-north-1")
            .with_base_dir("output/run1/reports"),
    );

    let config = resolve_settings(&settings).unwrap();

    assert_eq!(
        config.reporting,
        ReportingConfig::S3 {
            target: S3Target {
                base_dir: Some("output/run1/reports".to_string()),
                bucket_name: "aiuc-dev-1".to_string(),
                region_name: Some("eu-north-1".to_string()),
            },
            object_name: "indexing-engine.log".to_string(),
        }
    );
}

#[test]
fn object_store_reporting_without_bucket_fails() {
    let settings = GraphSettings::new()
        .with_reporting(ReportingSettings::new("object-store").with_region_name("eu-north-1"));

    let err = resolve_settings(&settings).unwrap_err();

    assert_eq!(
        err,
        ConfigError::MissingRequiredField {
            concern: Concern::Reporting,
            kind: "s3".to_string(),
            field: "bucket_name",
        }
    );
    assert!(err.to_string().contains("bucket_name"));
    assert!(err.is_authoring_error());
}

#[test]
fn custom_defaults_table_changes_object_name() {
    let defaults = ConfigDefaults {
        reporting_object_name: "run.log".to_string(),
        ..ConfigDefaults::default()
    };
    let settings =
        GraphSettings::new().with_reporting(ReportingSettings::new("s3").with_bucket_name("b"));

    let config = Resolver::new(defaults).resolve(&settings).unwrap();
    match config.reporting {
        ReportingConfig::S3 { object_name, .. } => assert_eq!(object_name, "run.log"),
        other => panic!("expected s3 reporting, got {:?}", other),
    }
}

#[test]
fn full_object_store_workflow_resolves_every_concern() {
    let config = resolve_settings(&object_store_settings()).unwrap();

    assert_eq!(
        config.storage,
        StorageConfig::S3(S3Target {
            base_dir: Some("output/run1/artifacts".to_string()),
            bucket_name: "aiuc-dev-1".to_string(),
            region_name: Some("eu-north-1".to_string()),
        })
    );
    assert_eq!(
        config.cache,
        CacheConfig::File {
            base_dir: PathBuf::from("cache_car-v0")
        }
    );
    assert_eq!(
        config.input.source,
        InputSource::File {
            base_dir: PathBuf::from("input")
        }
    );
    match &config.input.format {
        InputFormat::Csv {
            text_column,
            title_column,
            document_attribute_columns,
            ..
        } => {
            assert_eq!(text_column, "content");
            assert_eq!(title_column.as_deref(), Some("title"));
            assert_eq!(
                document_attribute_columns,
                &["id", "model_name", "make_name", "src"]
            );
        }
        other => panic!("expected csv input, got {:?}", other),
    }
}

#[test]
fn settings_document_resolves_like_builder_settings() {
    let document = r#"
[reporting]
kind = "s3"
base_dir = "output/run1/reports"
bucket_name = "aiuc-dev-1"
region_name = "eu-north-1"

[storage]
kind = "s3"
base_dir = "output/run1/artifacts"
bucket_name = "aiuc-dev-1"
region_name = "eu-north-1"

[cache]
kind = "file"
base_dir = "cache_car-v0"

[input]
kind = "file"
file_type = "csv"
base_dir = "input"
file_pattern = '.*\.csv$'
text_column = "content"
title_column = "title"
document_attribute_columns = ["id", "model_name", "make_name", "src"]
"#;

    let settings = SettingsLoader::load_from_str(document, SettingsFormat::Toml).unwrap();

    assert_eq!(settings, object_store_settings());
    assert_eq!(
        resolve_settings(&settings).unwrap(),
        resolve_settings(&object_store_settings()).unwrap()
    );
}

#[test]
fn resolved_configuration_serializes_without_secrets() {
    let settings: GraphSettings = serde_json::from_str(
        r#"{
            "storage": {
                "kind": "blob",
                "container_name": "artifacts",
                "connection_string": "DefaultEndpointsProtocol=https;AccountKey=c2VjcmV0"
            }
        }"#,
    )
    .unwrap();

    let config = resolve_settings(&settings).unwrap();
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["storage"]["kind"], "blob");
    assert_eq!(json["storage"]["container_name"], "artifacts");
    assert_eq!(json["storage"]["connection_string"], "[REDACTED]");
    assert!(!json.to_string().contains("c2VjcmV0"));
}

struct WorkerCount;

impl PipelineBuilder for WorkerCount {
    type Pipeline = usize;

    fn build(&self, config: Arc<PipelineConfig>) -> anyhow::Result<usize> {
        let workers: Vec<_> = (0..4).map(|_| Arc::clone(&config)).collect();
        Ok(workers
            .iter()
            .filter(|config| config.cache.is_enabled())
            .count())
    }
}

#[test]
fn resolved_configuration_is_shared_across_workers() {
    let enabled = create_pipeline(
        &object_store_settings(),
        ConfigDefaults::default(),
        &WorkerCount,
    )
    .unwrap();
    assert_eq!(enabled, 4);
}
