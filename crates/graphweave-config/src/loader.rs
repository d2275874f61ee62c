//! Settings file loading
//!
//! Reads a [`GraphSettings`] document from TOML, YAML or JSON. This is the
//! only I/O in the crate; the resolver never calls it.

use crate::error::LoadError;
use crate::settings::GraphSettings;
use std::path::Path;
use tracing::debug;

/// Supported settings file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    /// `.toml`
    Toml,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl SettingsFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(SettingsFormat::Toml),
            "yaml" | "yml" => Some(SettingsFormat::Yaml),
            "json" => Some(SettingsFormat::Json),
            _ => None,
        }
    }

    /// Format name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsFormat::Toml => "toml",
            SettingsFormat::Yaml => "yaml",
            SettingsFormat::Json => "json",
        }
    }
}

/// Loads settings documents.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Read and parse a settings file, picking the format from its extension.
    pub async fn load_from_file(path: impl AsRef<Path>) -> Result<GraphSettings, LoadError> {
        let path = path.as_ref();
        let format = SettingsFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        debug!(path = %path.display(), format = format.as_str(), "loading settings");

        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::load_from_str(&contents, format).map_err(|err| match err {
            LoadError::UnsupportedFormat { .. } => LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            },
            other => other,
        })
    }

    /// Parse settings text in the given format.
    pub fn load_from_str(contents: &str, format: SettingsFormat) -> Result<GraphSettings, LoadError> {
        match format {
            SettingsFormat::Json => serde_json::from_str(contents).map_err(|e| LoadError::Parse {
                format: format.as_str(),
                message: e.to_string(),
            }),
            SettingsFormat::Toml => parse_toml(contents),
            SettingsFormat::Yaml => parse_yaml(contents),
        }
    }
}

#[cfg(feature = "toml")]
fn parse_toml(contents: &str) -> Result<GraphSettings, LoadError> {
    toml::from_str(contents).map_err(|e| LoadError::Parse {
        format: "toml",
        message: e.to_string(),
    })
}

#[cfg(not(feature = "toml"))]
fn parse_toml(_contents: &str) -> Result<GraphSettings, LoadError> {
    Err(LoadError::UnsupportedFormat {
        path: "<toml>".into(),
    })
}

#[cfg(feature = "yaml")]
fn parse_yaml(contents: &str) -> Result<GraphSettings, LoadError> {
    // An empty YAML document parses as null rather than an empty map.
    if contents.trim().is_empty() {
        return Ok(GraphSettings::default());
    }
    serde_yaml::from_str(contents).map_err(|e| LoadError::Parse {
        format: "yaml",
        message: e.to_string(),
    })
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(_contents: &str) -> Result<GraphSettings, LoadError> {
    Err(LoadError::UnsupportedFormat {
        path: "<yaml>".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_settings_file;
    use std::path::PathBuf;

    #[test]
    fn format_detection() {
        assert_eq!(
            SettingsFormat::from_path(Path::new("settings.TOML")),
            Some(SettingsFormat::Toml)
        );
        assert_eq!(
            SettingsFormat::from_path(Path::new("settings.yml")),
            Some(SettingsFormat::Yaml)
        );
        assert_eq!(
            SettingsFormat::from_path(Path::new("settings.json")),
            Some(SettingsFormat::Json)
        );
        assert_eq!(SettingsFormat::from_path(Path::new("settings.ini")), None);
        assert_eq!(SettingsFormat::from_path(Path::new("settings")), None);
    }

    #[tokio::test]
    async fn loads_toml_file() {
        let file = write_settings_file(
            r#"
root_dir = "/srv/graph"

[reporting]
type = "s3"
bucket_name = "aiuc-dev-1"
"#,
            "toml",
        );

        let settings = SettingsLoader::load_from_file(file.path()).await.unwrap();
        assert_eq!(settings.root_dir, Some(PathBuf::from("/srv/graph")));
        assert_eq!(settings.reporting.discriminator(), Some("s3"));
        assert_eq!(settings.reporting.bucket_name.as_deref(), Some("aiuc-dev-1"));
    }

    #[tokio::test]
    async fn loads_yaml_file() {
        let file = write_settings_file(
            "cache:\n  kind: none\ninput:\n  file_type: csv\n  document_attribute_columns: [id, src]\n",
            "yaml",
        );

        let settings = SettingsLoader::load_from_file(file.path()).await.unwrap();
        assert_eq!(settings.cache.kind.as_deref(), Some("none"));
        assert_eq!(
            settings.input.document_attribute_columns,
            Some(vec!["id".to_string(), "src".to_string()])
        );
    }

    #[test]
    fn empty_documents_are_default_settings() {
        for format in [SettingsFormat::Toml, SettingsFormat::Yaml] {
            let settings = SettingsLoader::load_from_str("", format).unwrap();
            assert_eq!(settings, GraphSettings::default());
        }
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let err = SettingsLoader::load_from_file("/nonexistent/graphweave/settings.toml")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn unknown_extension_is_rejected_before_reading() {
        let err = SettingsLoader::load_from_file("/nonexistent/settings.ini")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = SettingsLoader::load_from_str("{ not json", SettingsFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Parse { format: "json", .. }));
    }
}
