use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// The four files the pipeline can write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    #[serde(rename = "Dockerfile")]
    Dockerfile,
    #[serde(rename = "docker-compose.yml")]
    Compose,
    #[serde(rename = ".dockerignore")]
    DockerIgnore,
    #[serde(rename = "dockerreadme.md")]
    Readme,
}

impl ArtifactKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            ArtifactKind::Dockerfile => "Dockerfile",
            ArtifactKind::Compose => "docker-compose.yml",
            ArtifactKind::DockerIgnore => ".dockerignore",
            ArtifactKind::Readme => "dockerreadme.md",
        }
    }

    /// Pipeline order
    pub fn all() -> &'static [Self] {
        &[
            ArtifactKind::Dockerfile,
            ArtifactKind::Compose,
            ArtifactKind::DockerIgnore,
            ArtifactKind::Readme,
        ]
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A rendered file body, not yet written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub body: String,
}

impl GeneratedArtifact {
    pub fn new(kind: ArtifactKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            body: body.into(),
        }
    }

    pub fn file_name(&self) -> &'static str {
        self.kind.file_name()
    }

    /// Writes the body into `dir`, replacing any existing file of the same name
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let output_path = dir.join(self.file_name());
        fs::write(&output_path, self.body.as_bytes())?;
        info!(
            artifact = self.file_name(),
            path = %output_path.display(),
            bytes = self.body.len(),
            "Artifact written"
        );
        Ok(output_path)
    }
}
