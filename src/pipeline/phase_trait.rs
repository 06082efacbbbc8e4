use super::context::PipelineContext;
use crate::detection::ScanError;
use async_trait::async_trait;

/// One step of the generation pipeline
///
/// Only a scan failure is fatal; every other problem is recorded on the
/// context as a skipped artifact and the phase still returns `Ok`.
#[async_trait]
pub trait WorkflowPhase: Send + Sync {
    fn name(&self) -> &'static str;

    async fn execute(&self, context: &mut PipelineContext<'_>) -> Result<(), ScanError>;
}
