//! Pipeline concerns and their closed sets of backend kinds.
//!
//! Every kind enum is declared through [`backend_kinds!`], which emits the
//! enum, its `ALL` list and its parser from a single declaration. A variant
//! added to the enum therefore shows up in `ALL` and in the parser without
//! further edits, and the compiler flags every `match` that lacks a branch
//! for it.

use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;

/// An independently configurable pipeline facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Concern {
    /// Run logs and telemetry sink
    Reporting,
    /// Output artifact storage
    Storage,
    /// LLM response cache
    Cache,
    /// Source documents
    Input,
}

impl Concern {
    /// Every concern, in assembly order.
    pub const ALL: &'static [Concern] = &[
        Concern::Reporting,
        Concern::Storage,
        Concern::Cache,
        Concern::Input,
    ];

    /// Settings section name for this concern.
    pub fn as_str(&self) -> &'static str {
        match self {
            Concern::Reporting => "reporting",
            Concern::Storage => "storage",
            Concern::Cache => "cache",
            Concern::Input => "input",
        }
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common surface of the generated kind enums.
pub trait BackendKind: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Concern this discriminator belongs to.
    const CONCERN: Concern;

    /// Every value of the discriminator.
    const ALL: &'static [Self];

    /// Canonical wire name.
    fn as_str(&self) -> &'static str;

    /// Parse a user-written discriminator.
    ///
    /// Matching ignores case and surrounding whitespace. Unrecognised values
    /// fail with [`ConfigError::UnknownVariant`].
    fn parse(raw: &str) -> Result<Self, ConfigError>;
}

/// Declare a closed discriminator enum for one concern.
///
/// Each variant maps to a canonical wire name plus optional aliases.
macro_rules! backend_kinds {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $concern:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl BackendKind for $name {
            const CONCERN: Concern = Concern::$concern;

            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            fn parse(raw: &str) -> Result<Self, ConfigError> {
                let trimmed = raw.trim();
                match trimmed.to_ascii_lowercase().as_str() {
                    $($wire $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(ConfigError::UnknownVariant {
                        concern: Concern::$concern,
                        kind: trimmed.to_string(),
                    }),
                }
            }
        }

        impl $name {
            /// Canonical wire name.
            pub fn as_str(&self) -> &'static str {
                <Self as BackendKind>::as_str(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as BackendKind>::parse(s)
            }
        }
    };
}

backend_kinds! {
    /// Reporting sink backends.
    pub enum ReportingKind: Reporting {
        /// Log files on the local filesystem
        File => "file",
        /// Standard output
        Console => "console",
        /// Azure-style blob container
        Blob => "blob" | "blob-store" | "blob_store",
        /// S3-style object store
        S3 => "s3" | "object-store" | "object_store",
    }
}

backend_kinds! {
    /// Artifact storage backends.
    pub enum StorageKind: Storage {
        /// Local filesystem
        File => "file",
        /// In-process memory, discarded on exit
        Memory => "memory",
        /// Azure-style blob container
        Blob => "blob" | "blob-store" | "blob_store",
        /// S3-style object store
        S3 => "s3" | "object-store" | "object_store",
    }
}

backend_kinds! {
    /// LLM cache backends.
    pub enum CacheKind: Cache {
        /// Local filesystem
        File => "file",
        /// In-process memory, discarded on exit
        Memory => "memory",
        /// Caching disabled
        None => "none",
        /// Azure-style blob container
        Blob => "blob" | "blob-store" | "blob_store",
        /// S3-style object store
        S3 => "s3" | "object-store" | "object_store",
    }
}

backend_kinds! {
    /// Locations input documents are read from.
    pub enum InputKind: Input {
        /// Local filesystem
        File => "file",
        /// Azure-style blob container
        Blob => "blob" | "blob-store" | "blob_store",
        /// S3-style object store
        S3 => "s3" | "object-store" | "object_store",
    }
}

backend_kinds! {
    /// Document formats the input stage understands.
    pub enum InputFileType: Input {
        /// One document per plain-text file
        Text => "text" | "txt",
        /// One document per CSV row
        Csv => "csv",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_canonical_names_and_aliases() {
        assert_eq!(ReportingKind::parse("s3"), Ok(ReportingKind::S3));
        assert_eq!(ReportingKind::parse("object-store"), Ok(ReportingKind::S3));
        assert_eq!(ReportingKind::parse("blob-store"), Ok(ReportingKind::Blob));
        assert_eq!(StorageKind::parse("  Memory "), Ok(StorageKind::Memory));
        assert_eq!(CacheKind::parse("NONE"), Ok(CacheKind::None));
        assert_eq!(InputFileType::parse("txt"), Ok(InputFileType::Text));
    }

    #[test]
    fn parse_rejects_unknown_values_with_concern() {
        let err = CacheKind::parse(" redis ").unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownVariant {
                concern: Concern::Cache,
                kind: "redis".to_string(),
            }
        );

        assert!(matches!(
            ReportingKind::parse(""),
            Err(ConfigError::UnknownVariant { concern: Concern::Reporting, .. })
        ));
    }

    #[test]
    fn every_kind_round_trips_through_its_wire_name() {
        fn check<K: BackendKind>() {
            for kind in K::ALL {
                assert_eq!(K::parse(kind.as_str()).as_ref(), Ok(kind));
                assert_eq!(kind.to_string(), kind.as_str());
            }
        }

        check::<ReportingKind>();
        check::<StorageKind>();
        check::<CacheKind>();
        check::<InputKind>();
        check::<InputFileType>();
    }

    #[test]
    fn kinds_serialize_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&ReportingKind::S3).unwrap(),
            "\"s3\""
        );
        assert_eq!(serde_json::to_string(&CacheKind::None).unwrap(), "\"none\"");
        assert_eq!(serde_json::to_string(&Concern::Input).unwrap(), "\"input\"");
    }
}
