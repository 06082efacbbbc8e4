use crate::detection::ScanError;
use crate::generation::{render_dockerfile, ArtifactKind, GeneratedArtifact};
use crate::pipeline::context::PipelineContext;
use crate::pipeline::phase_trait::WorkflowPhase;
use crate::pipeline::report::SkipReason;
use async_trait::async_trait;

pub struct DockerfilePhase;

#[async_trait]
impl WorkflowPhase for DockerfilePhase {
    fn name(&self) -> &'static str {
        "DockerfilePhase"
    }

    async fn execute(&self, context: &mut PipelineContext<'_>) -> Result<(), ScanError> {
        let framework = context.framework();
        let Some(body) = render_dockerfile(framework, context.options.python_variant) else {
            context.skip(ArtifactKind::Dockerfile, SkipReason::UnknownFramework);
            return Ok(());
        };

        context.dockerfile =
            context.write_artifact(GeneratedArtifact::new(ArtifactKind::Dockerfile, body));
        Ok(())
    }
}
