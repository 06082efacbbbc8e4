//! GenAI-based text generator
//!
//! Hosted chat completion through the `genai` crate. The adapter is pinned to
//! the configured provider with a service target resolver, so a model name
//! never silently routes to a different provider.

use super::client::TextGenerator;
use super::error::BackendError;
use async_trait::async_trait;
use genai::adapter::AdapterKind;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use genai::resolver::{AuthData, Endpoint, ServiceTargetResolver};
use genai::{Client, ModelIden, ServiceTarget};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Model used when talking to Groq without an explicit override
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// Environment variable that replaces the provider's default base URL
pub const API_BASE_URL_ENV: &str = "DOCKERGEN_API_BASE_URL";

/// Sampling parameters sent with every completion request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingSettings {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            temperature: 0.5,
            max_tokens: 1024,
            top_p: 1.0,
        }
    }
}

/// Returns the base URL genai should call for a provider, if supported
pub fn default_endpoint(provider: AdapterKind) -> Option<&'static str> {
    match provider {
        AdapterKind::Groq => Some("https://api.groq.com/openai/v1/"),
        AdapterKind::OpenAI => Some("https://api.openai.com/v1/"),
        AdapterKind::Anthropic => Some("https://api.anthropic.com/v1/"),
        AdapterKind::Ollama => Some("http://localhost:11434/v1/"),
        AdapterKind::Gemini => Some("https://generativelanguage.googleapis.com/v1beta/"),
        AdapterKind::Xai => Some("https://api.x.ai/v1/"),
        _ => None,
    }
}

/// Text generator backed by a hosted chat-completion API
pub struct GenAIGenerator {
    client: Client,
    model: String,
    provider: AdapterKind,
    timeout: Duration,
    sampling: SamplingSettings,
}

impl GenAIGenerator {
    /// Creates a generator for `provider`/`model` with default sampling
    ///
    /// Credentials are read by genai from the provider's standard variable
    /// (`GROQ_API_KEY`, `OPENAI_API_KEY`, ...) when a request is made, so a
    /// missing key surfaces as a failed generation rather than here.
    pub fn new(
        provider: AdapterKind,
        model: String,
        timeout: Duration,
    ) -> Result<Self, BackendError> {
        let endpoint_url = match std::env::var(API_BASE_URL_ENV).ok() {
            Some(url) => {
                debug!(
                    "Using custom endpoint for {}: {}",
                    provider.as_str(),
                    url
                );
                url
            }
            None => default_endpoint(provider)
                .ok_or_else(|| BackendError::ConfigurationError {
                    message: format!(
                        "Provider {} is not supported; set {} to use a custom endpoint",
                        provider.as_str(),
                        API_BASE_URL_ENV
                    ),
                })?
                .to_string(),
        };

        let model_clone = model.clone();
        let resolver = ServiceTargetResolver::from_resolver_fn(
            move |_service_target: ServiceTarget| -> Result<ServiceTarget, genai::resolver::Error> {
                let endpoint = Endpoint::from_owned(endpoint_url.clone());

                let auth = match provider.default_key_env_name() {
                    Some(api_key_var) => AuthData::from_env(api_key_var),
                    None => AuthData::from_single(""),
                };

                Ok(ServiceTarget {
                    endpoint,
                    auth,
                    model: ModelIden::new(provider, &model_clone),
                })
            },
        );

        let client = Client::builder()
            .with_service_target_resolver(resolver)
            .build();

        debug!(
            "Creating GenAI generator: provider={}, model={}",
            provider.as_str(),
            model,
        );

        Ok(Self {
            client,
            model,
            provider,
            timeout,
            sampling: SamplingSettings::default(),
        })
    }

    pub fn with_sampling(mut self, sampling: SamplingSettings) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn provider(&self) -> AdapterKind {
        self.provider
    }
}

#[async_trait]
impl TextGenerator for GenAIGenerator {
    async fn generate(
        &self,
        system_role: &str,
        user_prompt: &str,
    ) -> Result<String, BackendError> {
        let chat_req = ChatRequest::new(vec![
            ChatMessage::system(system_role.to_string()),
            ChatMessage::user(user_prompt.to_string()),
        ]);

        let options = ChatOptions::default()
            .with_temperature(self.sampling.temperature)
            .with_max_tokens(self.sampling.max_tokens)
            .with_top_p(self.sampling.top_p);

        debug!(
            "Sending request to {}: prompt_length={}",
            self.provider.as_str(),
            user_prompt.len()
        );

        let start = Instant::now();

        let response = match tokio::time::timeout(
            self.timeout,
            self.client.exec_chat(&self.model, chat_req, Some(&options)),
        )
        .await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                error!("{} API error: {}", self.provider.as_str(), e);
                return Err(BackendError::ApiError {
                    message: format!("{} request failed: {}", self.provider.as_str(), e),
                });
            }
            Err(_) => {
                error!(
                    "{} request timed out after {}s",
                    self.provider.as_str(),
                    self.timeout.as_secs()
                );
                return Err(BackendError::TimeoutError {
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        info!(
            "{} generation completed in {:.2}s",
            self.provider.as_str(),
            start.elapsed().as_secs_f64()
        );

        let content = response
            .first_text()
            .ok_or_else(|| BackendError::InvalidResponse {
                message: "No text content in response".to_string(),
            })?
            .to_string();

        debug!(
            "{} response length: {} characters",
            self.provider.as_str(),
            content.len()
        );

        Ok(content)
    }

    fn name(&self) -> &str {
        self.provider.as_str()
    }

    fn model_info(&self) -> Option<String> {
        Some(self.model.clone())
    }
}

impl std::fmt::Debug for GenAIGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAIGenerator")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("sampling", &self.sampling)
            .finish()
    }
}
