//! Configuration management for dockergen
//!
//! Settings are loaded from environment variables with defaults, then
//! overridden by command-line flags.
//!
//! # Environment Variables
//!
//! - `DOCKERGEN_PROVIDER`: genai adapter (groq|openai|claude|anthropic|ollama|gemini|grok|xai) - default: "groq"
//! - `DOCKERGEN_MODEL`: model name - default: provider-specific ("llama-3.3-70b-versatile" for Groq)
//! - `DOCKERGEN_GENERATOR`: text generator (remote|stub) - default: "remote"
//! - `DOCKERGEN_REQUEST_TIMEOUT`: timeout in seconds - default: "30"
//! - `DOCKERGEN_LOG_LEVEL`: logging level - default: "info"
//! - `DOCKERGEN_TEMPERATURE`: sampling temperature - default: "0.5"
//! - `DOCKERGEN_MAX_TOKENS`: completion token limit - default: "1024"
//! - `DOCKERGEN_API_BASE_URL`: replaces the provider's base URL (optional)
//!
//! Provider credentials are read by the genai library itself: `GROQ_API_KEY`,
//! `OPENAI_API_KEY`, `ANTHROPIC_API_KEY`, `GEMINI_API_KEY`, `XAI_API_KEY`.
//!
//! # Example
//!
//! ```no_run
//! use dockergen::DockerGenConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DockerGenConfig::load()?;
//! config.validate()?;
//! let generator = config.create_generator()?;
//! # Ok(())
//! # }
//! ```

use crate::llm::{
    BackendError, GenAIGenerator, SamplingSettings, StubGenerator, TextGenerator,
    DEFAULT_GROQ_MODEL,
};
use genai::adapter::AdapterKind;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const PROVIDER_ENV: &str = "DOCKERGEN_PROVIDER";
pub const MODEL_ENV: &str = "DOCKERGEN_MODEL";
pub const GENERATOR_ENV: &str = "DOCKERGEN_GENERATOR";
pub const REQUEST_TIMEOUT_ENV: &str = "DOCKERGEN_REQUEST_TIMEOUT";
pub const LOG_LEVEL_ENV: &str = "DOCKERGEN_LOG_LEVEL";
pub const TEMPERATURE_ENV: &str = "DOCKERGEN_TEMPERATURE";
pub const MAX_TOKENS_ENV: &str = "DOCKERGEN_MAX_TOKENS";

const DEFAULT_PROVIDER: AdapterKind = AdapterKind::Groq;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TEMPERATURE: f64 = 0.5;
const DEFAULT_MAX_TOKENS: u32 = 1024;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid provider: {0}. Valid options: groq, openai, claude, ollama, gemini, grok")]
    InvalidProvider(String),

    #[error("Invalid generator: {0}. Valid options: remote, stub")]
    InvalidGenerator(String),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Generator initialization failed: {0}")]
    BackendInitError(#[from] BackendError),
}

/// Which [`TextGenerator`] a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorKind {
    /// Hosted chat completion through genai
    #[default]
    Remote,
    /// Canned offline answers
    Stub,
}

impl FromStr for GeneratorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(GeneratorKind::Remote),
            "stub" => Ok(GeneratorKind::Stub),
            other => Err(ConfigError::InvalidGenerator(other.to_string())),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::Remote => write!(f, "remote"),
            GeneratorKind::Stub => write!(f, "stub"),
        }
    }
}

/// Maps a provider name (including the common aliases) to a genai adapter
pub fn parse_provider(s: &str) -> Result<AdapterKind, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "groq" => Ok(AdapterKind::Groq),
        "openai" => Ok(AdapterKind::OpenAI),
        "claude" | "anthropic" => Ok(AdapterKind::Anthropic),
        "ollama" => Ok(AdapterKind::Ollama),
        "gemini" => Ok(AdapterKind::Gemini),
        "grok" | "xai" => Ok(AdapterKind::Xai),
        other => Err(ConfigError::InvalidProvider(other.to_string())),
    }
}

/// Model used for a provider when none is configured
pub fn default_model(provider: AdapterKind) -> &'static str {
    match provider {
        AdapterKind::OpenAI => "gpt-4o-mini",
        AdapterKind::Anthropic => "claude-3-5-haiku-latest",
        AdapterKind::Ollama => "qwen2.5-coder:7b",
        AdapterKind::Gemini => "gemini-2.0-flash",
        AdapterKind::Xai => "grok-3-mini",
        _ => DEFAULT_GROQ_MODEL,
    }
}

#[derive(Debug, Clone)]
pub struct DockerGenConfig {
    pub provider: AdapterKind,
    pub model: String,
    pub generator: GeneratorKind,
    pub request_timeout_secs: u64,
    pub temperature: f64,
    pub max_tokens: u32,
    /// trace, debug, info, warn or error
    pub log_level: String,
}

impl Default for DockerGenConfig {
    /// Reads `DOCKERGEN_*` variables; unset or unparseable values fall back
    /// to the defaults.
    fn default() -> Self {
        let provider = env::var(PROVIDER_ENV)
            .ok()
            .and_then(|s| parse_provider(&s).ok())
            .unwrap_or(DEFAULT_PROVIDER);

        let model = env::var(MODEL_ENV)
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| default_model(provider).to_string());

        let generator = env::var(GENERATOR_ENV)
            .ok()
            .and_then(|s| s.parse::<GeneratorKind>().ok())
            .unwrap_or_default();

        let request_timeout_secs = env::var(REQUEST_TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let temperature = env::var(TEMPERATURE_ENV)
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);

        let max_tokens = env::var(MAX_TOKENS_ENV)
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let log_level = env::var(LOG_LEVEL_ENV)
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            provider,
            model,
            generator,
            request_timeout_secs,
            temperature,
            max_tokens,
            log_level,
        }
    }
}

impl DockerGenConfig {
    /// Like [`Default::default`], but a set-yet-invalid provider or
    /// generator name is an error instead of being ignored
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(raw) = env::var(PROVIDER_ENV) {
            parse_provider(&raw)?;
        }
        if let Ok(raw) = env::var(GENERATOR_ENV) {
            raw.parse::<GeneratorKind>()?;
        }
        Ok(Self::default())
    }

    /// Switches provider; the model follows unless set explicitly afterwards
    pub fn with_provider(mut self, provider: AdapterKind) -> Self {
        if self.provider != provider && env::var(MODEL_ENV).is_err() {
            self.model = default_model(provider).to_string();
        }
        self.provider = provider;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_generator(mut self, generator: GeneratorKind) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into().to_lowercase();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }
        if self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ConfigError::ValidationFailed(
                "Request timeout cannot exceed 10 minutes".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::ValidationFailed(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }

        if self.max_tokens == 0 {
            return Err(ConfigError::ValidationFailed(
                "Max tokens must be greater than 0".to_string(),
            ));
        }

        if self.generator == GeneratorKind::Remote && self.model.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Model name cannot be empty".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn sampling(&self) -> SamplingSettings {
        SamplingSettings {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            ..SamplingSettings::default()
        }
    }

    /// Builds the configured text generator
    pub fn create_generator(&self) -> Result<Arc<dyn TextGenerator>, ConfigError> {
        match self.generator {
            GeneratorKind::Stub => Ok(Arc::new(StubGenerator::new())),
            GeneratorKind::Remote => {
                let generator = GenAIGenerator::new(
                    self.provider,
                    self.model.clone(),
                    Duration::from_secs(self.request_timeout_secs),
                )?
                .with_sampling(self.sampling());
                Ok(Arc::new(generator))
            }
        }
    }
}

impl fmt::Display for DockerGenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dockergen Configuration:")?;
        writeln!(f, "  Generator: {}", self.generator)?;
        writeln!(f, "  Provider: {}", self.provider.as_lower_str())?;
        writeln!(f, "  Model: {}", self.model)?;
        writeln!(f, "  Request Timeout: {}s", self.request_timeout_secs)?;
        writeln!(f, "  Temperature: {}", self.temperature)?;
        writeln!(f, "  Max Tokens: {}", self.max_tokens)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
