use crate::detection::PythonVariant;
use std::path::PathBuf;

/// Inputs to a single pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub project_dir: PathBuf,
    pub python_variant: PythonVariant,
}

impl PipelineOptions {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            python_variant: PythonVariant::None,
        }
    }

    pub fn with_python_variant(mut self, python_variant: PythonVariant) -> Self {
        self.python_variant = python_variant;
        self
    }
}
