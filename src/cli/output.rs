//! Completion report formatting for JSON, YAML and human-readable text

use anyhow::{Context, Result};

use crate::pipeline::PipelineReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &PipelineReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize pipeline report to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(report)
                .context("Failed to serialize pipeline report to YAML"),
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    fn format_human(&self, report: &PipelineReport) -> String {
        let mut output = String::new();

        if report.is_complete() {
            output.push_str("\u{2713} Docker Artifacts Generated\n");
        } else {
            output.push_str("\u{26A0} Docker Artifacts Generated (Partial)\n");
        }
        output.push_str(&"\u{2501}".repeat(42));
        output.push_str("\n\n");

        output.push_str(&format!("Project:    {}\n", report.project_dir.display()));
        output.push_str(&format!("Framework:  {}\n", report.framework));
        if report.python_variant != crate::detection::PythonVariant::None {
            output.push_str(&format!("Variant:    {}\n", report.python_variant));
        }
        output.push('\n');

        if !report.produced.is_empty() {
            output.push_str("Written:\n");
            for (i, artifact) in report.produced.iter().enumerate() {
                let connector = if i + 1 == report.produced.len() {
                    "\u{2514}"
                } else {
                    "\u{251C}"
                };
                output.push_str(&format!(
                    "{}\u{2500} {:<20} {}\n",
                    connector,
                    artifact.kind.file_name(),
                    artifact.path.display()
                ));
            }
            output.push('\n');
        }

        if !report.skipped.is_empty() {
            output.push_str("\u{26A0} Skipped:\n");
            for skipped in &report.skipped {
                output.push_str(&format!(
                    "  - {}: {}\n",
                    skipped.kind.file_name(),
                    skipped.reason
                ));
            }
            output.push('\n');
        }

        output.push_str(&format!("Processed in {}ms\n", report.duration_ms));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{FrameworkLabel, PythonVariant};
    use crate::generation::ArtifactKind;
    use crate::pipeline::{ProducedArtifact, SkipReason, SkippedArtifact};
    use std::path::PathBuf;

    fn create_test_report() -> PipelineReport {
        PipelineReport {
            project_dir: PathBuf::from("/work/shop"),
            framework: FrameworkLabel::Python,
            python_variant: PythonVariant::Flask,
            produced: vec![
                ProducedArtifact {
                    kind: ArtifactKind::Dockerfile,
                    path: PathBuf::from("/work/shop/Dockerfile"),
                },
                ProducedArtifact {
                    kind: ArtifactKind::DockerIgnore,
                    path: PathBuf::from("/work/shop/.dockerignore"),
                },
            ],
            skipped: vec![
                SkippedArtifact {
                    kind: ArtifactKind::Compose,
                    reason: SkipReason::GenerationFailed {
                        message: "Request timed out after 30 seconds".to_string(),
                    },
                },
                SkippedArtifact {
                    kind: ArtifactKind::Readme,
                    reason: SkipReason::MissingUpstream {
                        artifact: ArtifactKind::Compose,
                    },
                },
            ],
            duration_ms: 42,
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter.format(&create_test_report()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["framework"], "python");
        assert_eq!(value["python_variant"], "flask");
        assert_eq!(value["skipped"][1]["reason"], "missing_upstream");
        assert_eq!(value["skipped"][1]["artifact"], "docker-compose.yml");
    }

    #[test]
    fn test_yaml_format() {
        let formatter = OutputFormatter::new(OutputFormat::Yaml);
        let output = formatter.format(&create_test_report()).unwrap();

        assert!(output.contains("framework: python"));
        let parsed: PipelineReport = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed, create_test_report());
    }

    #[test]
    fn test_human_format() {
        let formatter = OutputFormatter::new(OutputFormat::Human);
        let output = formatter.format(&create_test_report()).unwrap();

        assert!(output.contains("(Partial)"));
        assert!(output.contains("Framework:  python"));
        assert!(output.contains("Variant:    flask"));
        assert!(output.contains("/work/shop/Dockerfile"));
        assert!(output.contains("docker-compose.yml: generation failed: Request timed out"));
        assert!(output.contains("dockerreadme.md: docker-compose.yml was not produced"));
    }

    #[test]
    fn test_human_format_complete() {
        let mut report = create_test_report();
        report.skipped.clear();
        report.python_variant = PythonVariant::None;

        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&report)
            .unwrap();
        assert!(output.starts_with("\u{2713} Docker Artifacts Generated\n"));
        assert!(!output.contains("Skipped"));
        assert!(!output.contains("Variant:"));
    }
}
