use crate::detection::{classify, FrameworkLabel, PythonVariant, ScanError};
use crate::pipeline::context::PipelineContext;
use crate::pipeline::phase_trait::WorkflowPhase;
use async_trait::async_trait;
use tracing::{info, warn};

pub struct ClassifyPhase;

#[async_trait]
impl WorkflowPhase for ClassifyPhase {
    fn name(&self) -> &'static str {
        "ClassifyPhase"
    }

    async fn execute(&self, context: &mut PipelineContext<'_>) -> Result<(), ScanError> {
        let framework = context
            .inventory
            .as_ref()
            .map(classify)
            .unwrap_or(FrameworkLabel::Unknown);

        info!(framework = %framework, "Detected framework");

        let variant = context.options.python_variant;
        if framework == FrameworkLabel::Python && variant != PythonVariant::None {
            info!("Overriding Python framework to: {}", variant);
        }
        if framework == FrameworkLabel::Unknown {
            warn!(
                repo = %context.project_dir().display(),
                "Could not determine project type; no marker files found"
            );
        }

        context.framework = Some(framework);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::Inventory;
    use crate::llm::StubGenerator;
    use crate::pipeline::PipelineOptions;

    #[tokio::test]
    async fn test_classify_sets_framework() {
        let options = PipelineOptions::new(".");
        let stub = StubGenerator::new();
        let mut context = PipelineContext::new(&options, &stub);
        context.inventory = Some(Inventory::from_paths(["pom.xml", "src/Main.java"]));

        ClassifyPhase.execute(&mut context).await.unwrap();
        assert_eq!(context.framework, Some(FrameworkLabel::Java));
    }

    #[tokio::test]
    async fn test_variant_does_not_change_label() {
        let options = PipelineOptions::new(".").with_python_variant(PythonVariant::Flask);
        let stub = StubGenerator::new();
        let mut context = PipelineContext::new(&options, &stub);
        context.inventory = Some(Inventory::from_paths(["requirements.txt"]));

        ClassifyPhase.execute(&mut context).await.unwrap();
        assert_eq!(context.framework, Some(FrameworkLabel::Python));
    }
}
