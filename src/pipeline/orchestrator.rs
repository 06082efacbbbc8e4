use super::config::PipelineOptions;
use super::context::PipelineContext;
use super::phase_trait::WorkflowPhase;
use super::phases::{
    classify::ClassifyPhase, compose::ComposePhase, dockerfile::DockerfilePhase,
    ignore_readme::IgnoreReadmePhase, scan::ScanPhase,
};
use super::report::PipelineReport;
use crate::detection::ScanError;
use crate::llm::TextGenerator;
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct PipelineOrchestrator {
    phases: Vec<Box<dyn WorkflowPhase>>,
}

impl Default for PipelineOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineOrchestrator {
    pub fn new() -> Self {
        Self {
            phases: vec![
                Box::new(ScanPhase),
                Box::new(ClassifyPhase),
                Box::new(DockerfilePhase),
                Box::new(ComposePhase),
                Box::new(IgnoreReadmePhase),
            ],
        }
    }

    pub fn phase_names(&self) -> Vec<&'static str> {
        self.phases.iter().map(|p| p.name()).collect()
    }

    /// Runs every phase in order against `options.project_dir`
    ///
    /// Fails only when the project directory cannot be scanned; in that case
    /// nothing is written.
    pub async fn execute(
        &self,
        options: &PipelineOptions,
        generator: &dyn TextGenerator,
    ) -> Result<PipelineReport, ScanError> {
        let start = Instant::now();
        info!(
            repo = %options.project_dir.display(),
            generator = generator.name(),
            "Starting pipeline orchestration"
        );

        let mut context = PipelineContext::new(options, generator);

        for phase in &self.phases {
            info!(phase = phase.name(), "Phase");
            let phase_start = Instant::now();

            phase.execute(&mut context).await?;

            debug!(
                phase = phase.name(),
                duration_ms = phase_start.elapsed().as_millis() as u64,
                "Phase complete"
            );
        }

        let report = context.into_report(start.elapsed().as_millis() as u64);

        if report.is_complete() {
            info!(
                framework = %report.framework,
                artifacts = report.produced.len(),
                duration_ms = report.duration_ms,
                "Pipeline complete"
            );
        } else {
            warn!(
                framework = %report.framework,
                produced = report.produced.len(),
                skipped = report.skipped.len(),
                duration_ms = report.duration_ms,
                "Pipeline completed partially"
            );
        }

        Ok(report)
    }
}
