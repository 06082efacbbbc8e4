use crate::detection::ScanError;
use crate::generation::{ArtifactKind, AssistedGenerator, GeneratedArtifact};
use crate::pipeline::context::PipelineContext;
use crate::pipeline::phase_trait::WorkflowPhase;
use crate::pipeline::report::SkipReason;
use async_trait::async_trait;

pub struct ComposePhase;

#[async_trait]
impl WorkflowPhase for ComposePhase {
    fn name(&self) -> &'static str {
        "ComposePhase"
    }

    async fn execute(&self, context: &mut PipelineContext<'_>) -> Result<(), ScanError> {
        let Some(dockerfile) = context.dockerfile.as_ref() else {
            context.skip(
                ArtifactKind::Compose,
                SkipReason::MissingUpstream {
                    artifact: ArtifactKind::Dockerfile,
                },
            );
            return Ok(());
        };

        let rendered = AssistedGenerator::new(context.generator)
            .render_compose_file(&dockerfile.body)
            .await;

        match rendered {
            Ok(body) => {
                context.compose =
                    context.write_artifact(GeneratedArtifact::new(ArtifactKind::Compose, body));
            }
            Err(e) => context.skip(
                ArtifactKind::Compose,
                SkipReason::GenerationFailed {
                    message: e.to_string(),
                },
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{BackendError, MockGenerator, MockResponse};
    use crate::pipeline::PipelineOptions;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_no_dockerfile_means_no_request() {
        let dir = TempDir::new().unwrap();
        let options = PipelineOptions::new(dir.path());
        let mock = MockGenerator::new();
        let mut context = PipelineContext::new(&options, &mock);

        ComposePhase.execute(&mut context).await.unwrap();

        assert!(mock.received_prompts().is_empty());
        assert_eq!(
            context.skipped()[0].reason,
            SkipReason::MissingUpstream {
                artifact: ArtifactKind::Dockerfile
            }
        );
    }

    #[tokio::test]
    async fn test_backend_failure_is_recorded() {
        let dir = TempDir::new().unwrap();
        let options = PipelineOptions::new(dir.path());
        let mock = MockGenerator::new();
        mock.add_response(MockResponse::error(BackendError::ApiError {
            message: "connection refused".to_string(),
        }));
        let mut context = PipelineContext::new(&options, &mock);
        context.dockerfile = Some(GeneratedArtifact::new(
            ArtifactKind::Dockerfile,
            "FROM ruby:2.7\n",
        ));

        ComposePhase.execute(&mut context).await.unwrap();

        assert!(context.compose.is_none());
        assert!(!dir.path().join("docker-compose.yml").exists());
        match &context.skipped()[0].reason {
            SkipReason::GenerationFailed { message } => {
                assert!(message.contains("connection refused"))
            }
            other => panic!("unexpected reason: {:?}", other),
        }
    }
}
