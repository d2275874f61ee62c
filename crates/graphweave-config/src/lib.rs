//! # Graphweave Configuration Library
//!
//! Turns loosely-typed, user-authored pipeline settings into a closed set of
//! validated backend variants, one per pipeline concern.
//!
//! ## Layers
//!
//! - [`GraphSettings`]: the authoring surface. Every field is optional and
//!   every section can be omitted; building one never fails.
//! - [`Resolver`]: the only place that knows which fields each backend
//!   requires. Pure, no I/O.
//! - [`PipelineConfig`]: the resolved result, handed to a [`PipelineBuilder`]
//!   through [`create_pipeline`].
//!
//! ## Quick Start
//!
//! ```rust
//! use graphweave_config::{ConfigDefaults, GraphSettings, ReportingSettings, Resolver};
//!
//! let settings = GraphSettings::default().with_reporting(
//!     ReportingSettings::new("s3")
//!         .with_bucket_name("aiuc-dev-1")
//!         .with_region_name("eu-north-1"),
//! );
//!
//! let config = Resolver::new(ConfigDefaults::default()).resolve(&settings)?;
//! assert_eq!(config.reporting.kind().as_str(), "s3");
//! # Ok::<(), graphweave_config::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod assembly;
pub mod components;
mod defaults;
mod error;
mod kind;
mod loader;
mod resolver;
mod secret;
mod settings;

#[cfg(any(test, feature = "test-utils"))]
mod test_utils;

pub use assembly::*;
pub use components::*;
pub use defaults::*;
pub use error::*;
pub use kind::*;
pub use loader::*;
pub use resolver::*;
pub use secret::*;
pub use settings::*;

#[cfg(any(test, feature = "test-utils"))]
pub use test_utils::*;
