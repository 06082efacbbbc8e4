pub mod config;
pub mod context;
pub mod orchestrator;
pub mod phase_trait;
pub mod phases;
pub mod report;

pub use config::PipelineOptions;
pub use context::PipelineContext;
pub use orchestrator::PipelineOrchestrator;
pub use phase_trait::WorkflowPhase;
pub use report::{PipelineReport, ProducedArtifact, SkipReason, SkippedArtifact};
