//! Terminal report of a pipeline run

use crate::detection::{FrameworkLabel, PythonVariant};
use crate::generation::ArtifactKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Why an artifact was not written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// No marker evidence, so no Dockerfile template applies
    UnknownFramework,
    GenerationFailed { message: String },
    /// The artifact this one is generated from was not produced
    MissingUpstream { artifact: ArtifactKind },
    WriteFailed { message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownFramework => write!(f, "framework could not be determined"),
            SkipReason::GenerationFailed { message } => {
                write!(f, "generation failed: {}", message)
            }
            SkipReason::MissingUpstream { artifact } => {
                write!(f, "{} was not produced", artifact)
            }
            SkipReason::WriteFailed { message } => write!(f, "write failed: {}", message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedArtifact {
    pub kind: ArtifactKind,
    #[serde(flatten)]
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub project_dir: PathBuf,
    pub framework: FrameworkLabel,
    /// Variant applied to the Dockerfile; `none` unless the project is python
    pub python_variant: PythonVariant,
    pub produced: Vec<ProducedArtifact>,
    pub skipped: Vec<SkippedArtifact>,
    pub duration_ms: u64,
}

impl PipelineReport {
    /// True when every artifact was written
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn was_produced(&self, kind: ArtifactKind) -> bool {
        self.produced.iter().any(|p| p.kind == kind)
    }

    pub fn skip_reason(&self, kind: ArtifactKind) -> Option<&SkipReason> {
        self.skipped
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| &s.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(skipped: Vec<SkippedArtifact>) -> PipelineReport {
        PipelineReport {
            project_dir: PathBuf::from("/work/app"),
            framework: FrameworkLabel::Python,
            python_variant: PythonVariant::None,
            produced: vec![ProducedArtifact {
                kind: ArtifactKind::Dockerfile,
                path: PathBuf::from("/work/app/Dockerfile"),
            }],
            skipped,
            duration_ms: 12,
        }
    }

    #[test]
    fn test_complete_when_nothing_skipped() {
        let report = report(vec![]);
        assert!(report.is_complete());
        assert!(report.was_produced(ArtifactKind::Dockerfile));
        assert!(!report.was_produced(ArtifactKind::Readme));
    }

    #[test]
    fn test_partial_report_names_reason() {
        let report = report(vec![SkippedArtifact {
            kind: ArtifactKind::Readme,
            reason: SkipReason::MissingUpstream {
                artifact: ArtifactKind::Compose,
            },
        }]);

        assert!(!report.is_complete());
        assert_eq!(
            report.skip_reason(ArtifactKind::Readme).unwrap().to_string(),
            "docker-compose.yml was not produced"
        );
        assert!(report.skip_reason(ArtifactKind::Dockerfile).is_none());
    }

    #[test]
    fn test_skipped_serialization() {
        let skipped = SkippedArtifact {
            kind: ArtifactKind::Compose,
            reason: SkipReason::GenerationFailed {
                message: "timeout".to_string(),
            },
        };
        let json = serde_json::to_value(&skipped).unwrap();
        assert_eq!(json["kind"], "docker-compose.yml");
        assert_eq!(json["reason"], "generation_failed");
        assert_eq!(json["message"], "timeout");
    }
}
