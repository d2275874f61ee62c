use anyhow::{Context, Result};
use graphweave_config::{create_pipeline, ConfigDefaults, SettingsLoader};
use std::path::PathBuf;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::plan::PlanPrinter;

/// Execute resolve subcommand
pub async fn execute(file: PathBuf, format: OutputFormat) -> Result<()> {
    let settings = SettingsLoader::load_from_file(&file)
        .await
        .with_context(|| format!("Failed to load settings from {}", file.display()))?;
    debug!(path = %file.display(), "settings loaded");

    let rendered = create_pipeline(&settings, ConfigDefaults::default(), &PlanPrinter::new(format))
        .with_context(|| format!("Invalid settings in {}", file.display()))?;

    print!("{}", rendered);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
