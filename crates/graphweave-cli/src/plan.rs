//! Rendering of a resolved configuration as a pipeline plan

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use graphweave_config::{Concern, PipelineBuilder, PipelineConfig};
use serde_json::{Map, Value};
use std::fmt::Write;
use std::sync::Arc;

/// Pipeline builder that renders the configuration instead of running it.
///
/// Rendering goes through the `Serialize` impls of the resolved variants,
/// so secret values appear redacted.
#[derive(Debug, Clone, Copy)]
pub struct PlanPrinter {
    format: OutputFormat,
}

impl PlanPrinter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl PipelineBuilder for PlanPrinter {
    type Pipeline = String;

    fn build(&self, config: Arc<PipelineConfig>) -> Result<String> {
        let value = serde_json::to_value(config.as_ref())
            .context("Failed to serialize resolved configuration")?;

        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(&value).context("Failed to render JSON plan")
            }
            OutputFormat::Text => render_text(&value),
        }
    }
}

fn render_text(value: &Value) -> Result<String> {
    let mut out = String::new();

    if let Some(root) = value.get("root_dir").and_then(Value::as_str) {
        writeln!(out, "{} {}", "root_dir:".bold(), root)?;
    }

    for concern in Concern::ALL {
        let section = value
            .get(concern.as_str())
            .and_then(Value::as_object)
            .with_context(|| format!("resolved configuration has no {} section", concern))?;

        writeln!(
            out,
            "{} {}",
            format!("{}:", concern).bold(),
            section_label(section).cyan()
        )?;

        let mut fields = Vec::new();
        flatten("", section, &mut fields);
        for (key, rendered) in fields {
            writeln!(out, "  {}: {}", key, rendered)?;
        }
    }

    Ok(out)
}

/// `kind`, plus `file_type` for input.
fn section_label(section: &Map<String, Value>) -> String {
    let kind = section
        .get("kind")
        .or_else(|| section.get("source").and_then(|s| s.get("kind")))
        .and_then(Value::as_str)
        .unwrap_or("?");

    match section
        .get("format")
        .and_then(|f| f.get("file_type"))
        .and_then(Value::as_str)
    {
        Some(file_type) => format!("{} ({})", kind, file_type),
        None => kind.to_string(),
    }
}

/// Collect leaf fields with dotted keys, skipping discriminators.
fn flatten(prefix: &str, object: &Map<String, Value>, out: &mut Vec<(String, String)>) {
    for (key, value) in object {
        if key == "kind" || key == "file_type" {
            continue;
        }
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::Object(nested) => flatten(&path, nested, out),
            Value::String(s) => out.push((path, s.clone())),
            Value::Array(items) => {
                let items: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect();
                out.push((path, format!("[{}]", items.join(", "))));
            }
            other => out.push((path, other.to_string())),
        }
    }
}
