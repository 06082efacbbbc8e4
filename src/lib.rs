//! dockergen - container configuration generator
//!
//! Inspects a project directory, classifies its stack from marker files and
//! writes a Dockerfile, `docker-compose.yml`, `.dockerignore` and
//! `dockerreadme.md` into it.
//!
//! # Example Usage
//!
//! ```no_run
//! use dockergen::{PipelineOptions, PipelineOrchestrator, PythonVariant, StubGenerator};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = PipelineOptions::new("/path/to/project")
//!     .with_python_variant(PythonVariant::Flask);
//!
//! let report = PipelineOrchestrator::new()
//!     .execute(&options, &StubGenerator::new())
//!     .await?;
//!
//! for skipped in &report.skipped {
//!     println!("{} skipped: {}", skipped.kind, skipped.reason);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`detection`]: file inventory, evidence queries and framework classification
//! - [`generation`]: Dockerfile templates, `.dockerignore` rules and AI-assisted artifacts
//! - [`llm`]: the [`TextGenerator`] abstraction and its implementations
//! - [`pipeline`]: phase orchestration and the run report

pub mod cli;
pub mod config;
pub mod detection;
pub mod generation;
pub mod llm;
pub mod pipeline;
pub mod util;

pub use config::{ConfigError, DockerGenConfig, GeneratorKind};
pub use detection::{
    classify, FrameworkLabel, Inventory, InventoryBuilder, PythonVariant, ScanError,
};
pub use generation::{
    render_dockerfile, render_dockerignore, ArtifactKind, AssistedGenerator, GeneratedArtifact,
    GenerationError,
};
pub use llm::{BackendError, GenAIGenerator, MockGenerator, StubGenerator, TextGenerator};
pub use pipeline::{PipelineOptions, PipelineOrchestrator, PipelineReport, SkipReason};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
