//! Shared state threaded through the pipeline phases

use super::config::PipelineOptions;
use super::report::{PipelineReport, ProducedArtifact, SkipReason, SkippedArtifact};
use crate::detection::{FrameworkLabel, Inventory, PythonVariant};
use crate::generation::{ArtifactKind, GeneratedArtifact};
use crate::llm::TextGenerator;
use std::path::Path;
use tracing::{error, warn};

/// Per-run state; each phase reads what earlier phases left behind
pub struct PipelineContext<'a> {
    pub options: &'a PipelineOptions,
    pub generator: &'a dyn TextGenerator,
    pub inventory: Option<Inventory>,
    pub framework: Option<FrameworkLabel>,
    /// Set only once the Dockerfile is on disk
    pub dockerfile: Option<GeneratedArtifact>,
    /// Set only once the compose file is on disk
    pub compose: Option<GeneratedArtifact>,
    produced: Vec<ProducedArtifact>,
    skipped: Vec<SkippedArtifact>,
}

impl<'a> PipelineContext<'a> {
    pub fn new(options: &'a PipelineOptions, generator: &'a dyn TextGenerator) -> Self {
        Self {
            options,
            generator,
            inventory: None,
            framework: None,
            dockerfile: None,
            compose: None,
            produced: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.options.project_dir
    }

    pub fn framework(&self) -> FrameworkLabel {
        self.framework.unwrap_or(FrameworkLabel::Unknown)
    }

    /// Writes `artifact` into the project directory and records the outcome
    ///
    /// Returns the artifact back only if it reached the disk.
    pub fn write_artifact(&mut self, artifact: GeneratedArtifact) -> Option<GeneratedArtifact> {
        match artifact.write_to(&self.options.project_dir) {
            Ok(path) => {
                self.produced.push(ProducedArtifact {
                    kind: artifact.kind,
                    path,
                });
                Some(artifact)
            }
            Err(e) => {
                error!(artifact = %artifact.kind, error = %e, "Failed to write artifact");
                self.skip(
                    artifact.kind,
                    SkipReason::WriteFailed {
                        message: e.to_string(),
                    },
                );
                None
            }
        }
    }

    pub fn skip(&mut self, kind: ArtifactKind, reason: SkipReason) {
        warn!(artifact = %kind, reason = %reason, "Artifact skipped");
        self.skipped.push(SkippedArtifact { kind, reason });
    }

    pub fn produced(&self) -> &[ProducedArtifact] {
        &self.produced
    }

    pub fn skipped(&self) -> &[SkippedArtifact] {
        &self.skipped
    }

    pub fn into_report(self, duration_ms: u64) -> PipelineReport {
        let framework = self.framework();
        // variant only shapes the python template
        let python_variant = if framework == FrameworkLabel::Python {
            self.options.python_variant
        } else {
            PythonVariant::None
        };

        PipelineReport {
            project_dir: self.options.project_dir.clone(),
            framework,
            python_variant,
            produced: self.produced,
            skipped: self.skipped,
            duration_ms,
        }
    }
}
