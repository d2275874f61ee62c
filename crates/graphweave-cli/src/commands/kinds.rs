use anyhow::Result;
use colored::Colorize;
use graphweave_config::{
    BackendKind, CacheKind, Concern, ConfigDefaults, InputFileType, InputKind, ReportingKind,
    StorageKind,
};
use serde_json::json;

use crate::cli::OutputFormat;

/// One row of the listing: a discriminator, its accepted values and its default.
struct KindRow {
    label: String,
    kinds: Vec<&'static str>,
    default: &'static str,
}

fn row<K: BackendKind>(label: impl Into<String>, default: K) -> KindRow {
    KindRow {
        label: label.into(),
        kinds: K::ALL.iter().map(|kind| kind.as_str()).collect(),
        default: default.as_str(),
    }
}

fn rows(defaults: &ConfigDefaults) -> Vec<KindRow> {
    vec![
        row::<ReportingKind>(Concern::Reporting.as_str(), defaults.reporting_kind),
        row::<StorageKind>(Concern::Storage.as_str(), defaults.storage_kind),
        row::<CacheKind>(Concern::Cache.as_str(), defaults.cache_kind),
        row::<InputKind>(Concern::Input.as_str(), defaults.input_kind),
        row::<InputFileType>("input.file_type", defaults.input_file_type),
    ]
}

/// Execute kinds subcommand
pub async fn execute(format: OutputFormat) -> Result<()> {
    let rows = rows(&ConfigDefaults::default());

    match format {
        OutputFormat::Json => {
            let value: serde_json::Map<String, serde_json::Value> = rows
                .iter()
                .map(|r| {
                    (
                        r.label.clone(),
                        json!({ "kinds": r.kinds, "default": r.default }),
                    )
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            for r in &rows {
                let kinds: Vec<String> = r
                    .kinds
                    .iter()
                    .map(|kind| {
                        if *kind == r.default {
                            format!("{} {}", kind, "(default)".dimmed())
                        } else {
                            kind.to_string()
                        }
                    })
                    .collect();
                println!("{} {}", format!("{}:", r.label).bold(), kinds.join(", "));
            }
        }
    }

    Ok(())
}
