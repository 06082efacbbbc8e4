use crate::detection::{Inventory, ScanError};
use crate::generation::{render_dockerignore, ArtifactKind, AssistedGenerator, GeneratedArtifact};
use crate::pipeline::context::PipelineContext;
use crate::pipeline::phase_trait::WorkflowPhase;
use crate::pipeline::report::SkipReason;
use async_trait::async_trait;

/// Writes `.dockerignore` unconditionally, then the README if compose exists
pub struct IgnoreReadmePhase;

#[async_trait]
impl WorkflowPhase for IgnoreReadmePhase {
    fn name(&self) -> &'static str {
        "IgnoreReadmePhase"
    }

    async fn execute(&self, context: &mut PipelineContext<'_>) -> Result<(), ScanError> {
        let ignore_body = match context.inventory.as_ref() {
            Some(inventory) => render_dockerignore(inventory),
            None => render_dockerignore(&Inventory::default()),
        };
        context.write_artifact(GeneratedArtifact::new(
            ArtifactKind::DockerIgnore,
            ignore_body,
        ));

        let Some(compose) = context.compose.as_ref() else {
            context.skip(
                ArtifactKind::Readme,
                SkipReason::MissingUpstream {
                    artifact: ArtifactKind::Compose,
                },
            );
            return Ok(());
        };

        let rendered = AssistedGenerator::new(context.generator)
            .render_docker_readme(&compose.body)
            .await;

        match rendered {
            Ok(body) => {
                context.write_artifact(GeneratedArtifact::new(ArtifactKind::Readme, body));
            }
            Err(e) => context.skip(
                ArtifactKind::Readme,
                SkipReason::GenerationFailed {
                    message: e.to_string(),
                },
            ),
        }
        Ok(())
    }
}
