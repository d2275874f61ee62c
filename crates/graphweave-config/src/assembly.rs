//! Hand-off from resolved configuration to pipeline construction

use crate::defaults::ConfigDefaults;
use crate::error::AssemblyError;
use crate::resolver::{PipelineConfig, Resolver};
use crate::settings::GraphSettings;
use std::sync::Arc;
use tracing::info;

/// Consumer of a resolved configuration.
///
/// Implementations may read any field of the variants they receive. They
/// are only ever called with a configuration that resolved completely.
pub trait PipelineBuilder {
    /// What the builder produces.
    type Pipeline;

    /// Construct the pipeline.
    fn build(&self, config: Arc<PipelineConfig>) -> anyhow::Result<Self::Pipeline>;
}

/// Resolve `settings` and pass the result to `builder`.
///
/// The builder is not called when any concern fails to resolve.
pub fn create_pipeline<B>(
    settings: &GraphSettings,
    defaults: ConfigDefaults,
    builder: &B,
) -> Result<B::Pipeline, AssemblyError>
where
    B: PipelineBuilder + ?Sized,
{
    let config = Arc::new(Resolver::new(defaults).resolve(settings)?);

    info!(
        reporting = %config.reporting.kind(),
        storage = %config.storage.kind(),
        cache = %config.cache.kind(),
        input = %config.input.kind(),
        "handing configuration to pipeline builder"
    );

    builder.build(config).map_err(AssemblyError::Builder)
}
