//! Error types for settings loading, variant resolution and pipeline assembly.

use crate::kind::Concern;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for variant resolution.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors produced while resolving settings into backend variants.
///
/// None of these are transient: the same settings always produce the same
/// error, so callers should fix the settings instead of retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The selected backend needs an attribute the settings do not provide.
    #[error("{concern} backend `{kind}` requires `{field}` but it was not set")]
    MissingRequiredField {
        /// Concern whose section failed to resolve
        concern: Concern,
        /// Backend kind that was selected
        kind: String,
        /// Name of the missing settings field
        field: &'static str,
    },

    /// The discriminator names a backend outside the closed set.
    #[error("unknown {concern} kind `{kind}`")]
    UnknownVariant {
        /// Concern whose discriminator was rejected
        concern: Concern,
        /// Discriminator value as written by the user
        kind: String,
    },

    /// A kind was dispatched to a branch producing a different variant.
    #[error("internal error: {concern} kind `{kind}` has no matching resolution branch")]
    UnreachableVariant {
        /// Concern being resolved
        concern: Concern,
        /// Kind that was dispatched
        kind: String,
    },
}

impl ConfigError {
    /// Concern the error refers to.
    pub fn concern(&self) -> Concern {
        match self {
            ConfigError::MissingRequiredField { concern, .. }
            | ConfigError::UnknownVariant { concern, .. }
            | ConfigError::UnreachableVariant { concern, .. } => *concern,
        }
    }

    /// Backend kind the error refers to.
    pub fn kind(&self) -> &str {
        match self {
            ConfigError::MissingRequiredField { kind, .. }
            | ConfigError::UnknownVariant { kind, .. }
            | ConfigError::UnreachableVariant { kind, .. } => kind,
        }
    }

    /// Whether the user can fix this by editing their settings.
    ///
    /// `UnreachableVariant` is a programming error and returns `false`.
    pub fn is_authoring_error(&self) -> bool {
        !matches!(self, ConfigError::UnreachableVariant { .. })
    }
}

/// Errors produced while reading a settings file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The settings text is not valid for its format.
    #[error("failed to parse {format} settings: {message}")]
    Parse {
        /// Format the text was parsed as
        format: &'static str,
        /// Parser message
        message: String,
    },

    /// The file extension maps to no known format, or its feature is disabled.
    #[error("unsupported settings format for {path}")]
    UnsupportedFormat {
        /// Offending path
        path: PathBuf,
    },
}

/// Errors from [`create_pipeline`](crate::create_pipeline).
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// Some concern failed to resolve; the builder was never called.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The pipeline builder rejected the resolved configuration.
    #[error("pipeline builder failed: {0}")]
    Builder(#[source] anyhow::Error),
}
