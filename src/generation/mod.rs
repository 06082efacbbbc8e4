//! Artifact synthesis
//!
//! Deterministic bodies (Dockerfile, `.dockerignore`) come from fixed
//! templates and inventory evidence. The compose file and README are
//! delegated to a [`crate::llm::TextGenerator`].

pub mod artifact;
pub mod assisted;
pub mod ignore;
pub mod prompt;
pub mod templates;

pub use artifact::{ArtifactKind, GeneratedArtifact};
pub use assisted::{unwrap_code_fence, AssistedGenerator, GenerationError};
pub use self::ignore::render_dockerignore;
pub use prompt::{compose_prompt, readme_prompt, SYSTEM_ROLE};
pub use templates::{render_dockerfile, DockerfileTemplate, DOCKERFILE_TEMPLATES};
