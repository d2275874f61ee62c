use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

/// Settings written by `gw init`. Must resolve with the stock defaults.
pub const EXAMPLE_SETTINGS: &str = r#"# graphweave pipeline settings
#
# Every section and field is optional. `kind` picks the backend; fields a
# backend does not use are ignored. Run `gw kinds` for the accepted values.

root_dir = "."

[reporting]
kind = "file"
base_dir = "output/reports"
# kind = "s3"
# bucket_name = "my-bucket"
# region_name = "eu-north-1"
# object_name = "indexing-engine.log"

[storage]
kind = "file"
base_dir = "output/artifacts"
# kind = "blob"
# container_name = "artifacts"
# connection_string = "DefaultEndpointsProtocol=https;..."

[cache]
kind = "file"
base_dir = "cache"

[input]
kind = "file"
file_type = "text"
base_dir = "input"
encoding = "utf-8"
file_pattern = '.*\.txt$'
# file_type = "csv"
# text_column = "text"
# title_column = "title"
# document_attribute_columns = ["id"]
"#;

/// Execute init subcommand
pub async fn execute(path: PathBuf, force: bool) -> Result<()> {
    if tokio::fs::try_exists(&path).await.unwrap_or(false) && !force {
        println!("Use {} to overwrite", "--force".yellow());
        anyhow::bail!("Settings file already exists at: {}", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    tokio::fs::write(&path, EXAMPLE_SETTINGS)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote example settings");

    println!(
        "{} Created settings file at: {}",
        "Success:".green().bold(),
        path.display()
    );
    println!(
        "\n{}",
        format!("Check it with: gw resolve {}", path.display()).dimmed()
    );

    Ok(())
}
