//! Compose file and README generation through a [`TextGenerator`]
//!
//! Failures here are never fatal to a run: callers turn a
//! [`GenerationError`] into a skipped artifact and carry on.

use super::prompt::{compose_prompt, readme_prompt, SYSTEM_ROLE};
use crate::llm::{BackendError, TextGenerator};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

const FENCE: &str = "```";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Text generation failed: {0}")]
    Backend(#[from] BackendError),
    #[error("Text generation returned no content")]
    EmptyResponse,
}

/// Renders the AI-assisted artifacts with a borrowed generator
pub struct AssistedGenerator<'a> {
    generator: &'a dyn TextGenerator,
}

impl<'a> AssistedGenerator<'a> {
    pub fn new(generator: &'a dyn TextGenerator) -> Self {
        Self { generator }
    }

    /// Compose file for a project built from `dockerfile_body`
    pub async fn render_compose_file(
        &self,
        dockerfile_body: &str,
    ) -> Result<String, GenerationError> {
        self.request("docker-compose.yml", &compose_prompt(dockerfile_body))
            .await
    }

    /// README describing how to build and run `compose_body`
    pub async fn render_docker_readme(
        &self,
        compose_body: &str,
    ) -> Result<String, GenerationError> {
        self.request("dockerreadme.md", &readme_prompt(compose_body))
            .await
    }

    async fn request(&self, artifact: &str, prompt: &str) -> Result<String, GenerationError> {
        let start = Instant::now();
        debug!(
            artifact,
            generator = self.generator.name(),
            prompt_len = prompt.len(),
            "Requesting generated content"
        );

        let raw = match self.generator.generate(SYSTEM_ROLE, prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(artifact, error = %e, "Text generation failed");
                return Err(e.into());
            }
        };

        let content = unwrap_code_fence(&raw);
        if content.is_empty() {
            warn!(artifact, "Text generation returned empty content");
            return Err(GenerationError::EmptyResponse);
        }

        info!(
            artifact,
            bytes = content.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Generated content received"
        );

        let mut body = content.to_string();
        if !body.ends_with('\n') {
            body.push('\n');
        }
        Ok(body)
    }
}

/// Strips a single Markdown code fence wrapping the whole response
///
/// Returns the trimmed text unchanged when it is not exactly one fenced block.
pub fn unwrap_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix(FENCE) else {
        return trimmed;
    };
    let Some(rest) = rest.strip_suffix(FENCE) else {
        return trimmed;
    };

    // Opening fence line may carry an info string such as `yaml`.
    let inner = match rest.split_once('\n') {
        Some((info, body)) if !info.trim().contains(char::is_whitespace) => body,
        _ => return trimmed,
    };

    if inner.contains(FENCE) {
        return trimmed;
    }
    inner.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{MockGenerator, MockResponse, StubGenerator, STUB_COMPOSE, STUB_README};

    #[test]
    fn test_unwrap_plain_text() {
        assert_eq!(unwrap_code_fence("  services:\n  app: {}\n"), "services:\n  app: {}");
    }

    #[test]
    fn test_unwrap_fenced_with_language() {
        let raw = "```yaml\nversion: \"3.8\"\nservices:\n  app:\n    build: .\n```\n";
        assert_eq!(
            unwrap_code_fence(raw),
            "version: \"3.8\"\nservices:\n  app:\n    build: ."
        );
    }

    #[test]
    fn test_unwrap_fenced_without_language() {
        assert_eq!(unwrap_code_fence("```\nhello\n```"), "hello");
    }

    #[test]
    fn test_unwrap_leaves_multiple_blocks() {
        let raw = "```bash\ndocker compose up\n```\ntext\n```bash\ndocker compose down\n```";
        assert_eq!(unwrap_code_fence(raw), raw);
    }

    #[test]
    fn test_unwrap_empty_fence() {
        assert_eq!(unwrap_code_fence("```yaml\n```"), "");
    }

    #[tokio::test]
    async fn test_compose_uses_dockerfile_in_prompt() {
        let mock = MockGenerator::new();
        mock.add_response(MockResponse::text("services:\n  app:\n    build: ."));

        let assisted = AssistedGenerator::new(&mock);
        let compose = assisted
            .render_compose_file("FROM python:3.9-slim\n")
            .await
            .unwrap();

        assert_eq!(compose, "services:\n  app:\n    build: .\n");
        let prompts = mock.received_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("FROM python:3.9-slim"));
    }

    #[tokio::test]
    async fn test_backend_error_propagates() {
        let mock = MockGenerator::new();
        mock.add_response(MockResponse::error(BackendError::TimeoutError { seconds: 30 }));

        let err = AssistedGenerator::new(&mock)
            .render_compose_file("FROM scratch\n")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GenerationError::Backend(BackendError::TimeoutError { seconds: 30 })
        );
    }

    #[tokio::test]
    async fn test_whitespace_response_is_empty() {
        let mock = MockGenerator::new();
        mock.add_response(MockResponse::text("  \n\t"));

        let err = AssistedGenerator::new(&mock)
            .render_docker_readme("services: {}\n")
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::EmptyResponse);
    }

    #[tokio::test]
    async fn test_stub_routes_by_prompt() {
        let stub = StubGenerator::new();
        let assisted = AssistedGenerator::new(&stub);

        let compose = assisted.render_compose_file("FROM scratch\n").await.unwrap();
        let readme = assisted.render_docker_readme(&compose).await.unwrap();

        assert_eq!(compose.trim(), STUB_COMPOSE.trim());
        assert_eq!(readme.trim(), STUB_README.trim());
    }
}
