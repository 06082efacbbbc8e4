//! Deterministic offline text generator
//!
//! Used when no hosted service should be contacted (`--offline`,
//! `DOCKERGEN_GENERATOR=stub`). Answers are canned and chosen by keywords in
//! the prompt, so repeated runs produce byte-identical artifacts.

use super::client::TextGenerator;
use super::error::BackendError;
use async_trait::async_trait;
use tracing::warn;

pub const STUB_COMPOSE: &str = "version: \"3.8\"\n\
services:\n\
\x20 app:\n\
\x20   build: .\n\
\x20   ports:\n\
\x20     - \"80:80\"\n";

pub const STUB_README: &str = "# Docker Project README\n\n\
This project uses Docker to containerize the application.\n\n\
## Running the Containers\n\n\
1. Build the images: `docker-compose build`\n\
2. Start the services: `docker-compose up`\n\
3. Stop the services: `docker-compose down`\n";

pub const STUB_FALLBACK: &str = "Generated text.";

#[derive(Debug, Default, Clone, Copy)]
pub struct StubGenerator;

impl StubGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Picks the canned answer for a prompt
    pub fn respond(user_prompt: &str) -> &'static str {
        if user_prompt.to_lowercase().contains("dockerreadme") {
            STUB_README
        } else if user_prompt.contains("docker-compose") {
            STUB_COMPOSE
        } else {
            STUB_FALLBACK
        }
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(
        &self,
        _system_role: &str,
        user_prompt: &str,
    ) -> Result<String, BackendError> {
        warn!("AI generation not available; using default text");
        Ok(Self::respond(user_prompt).to_string())
    }

    fn name(&self) -> &str {
        "stub"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_prompt() {
        let answer = StubGenerator::respond("Generate a docker-compose.yml file for ...");
        assert_eq!(answer, STUB_COMPOSE);
        assert!(answer.contains("services:\n  app:\n    build: .\n"));
    }

    #[test]
    fn test_readme_prompt_mentions_compose_too() {
        let answer = StubGenerator::respond(
            "Based on the following docker-compose.yml content ... Generate a README (dockerreadme.md)",
        );
        assert_eq!(answer, STUB_README);
    }

    #[test]
    fn test_readme_keyword_is_case_insensitive() {
        assert_eq!(StubGenerator::respond("write DockerReadme.md"), STUB_README);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(StubGenerator::respond("anything else"), STUB_FALLBACK);
    }

    #[tokio::test]
    async fn test_generate_is_deterministic() {
        let generator = StubGenerator::new();
        let first = generator.generate("sys", "docker-compose").await.unwrap();
        let second = generator.generate("sys", "docker-compose").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(generator.name(), "stub");
    }
}
