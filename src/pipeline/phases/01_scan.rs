use crate::detection::{InventoryBuilder, ScanError};
use crate::pipeline::context::PipelineContext;
use crate::pipeline::phase_trait::WorkflowPhase;
use async_trait::async_trait;
use tracing::debug;

pub struct ScanPhase;

#[async_trait]
impl WorkflowPhase for ScanPhase {
    fn name(&self) -> &'static str {
        "ScanPhase"
    }

    async fn execute(&self, context: &mut PipelineContext<'_>) -> Result<(), ScanError> {
        let inventory = InventoryBuilder::new(context.project_dir()).build()?;
        debug!(files = inventory.len(), "Scan phase complete");
        context.inventory = Some(inventory);
        Ok(())
    }
}
