//! Text generation layer
//!
//! A trait-based abstraction over the external text generation service, so
//! the hosted backend (GenAI), the offline stub and the scripted mock can be
//! used interchangeably.

mod client;
mod error;
mod genai;
mod mock;
mod stub;

pub use self::genai::{
    default_endpoint, GenAIGenerator, SamplingSettings, API_BASE_URL_ENV, DEFAULT_GROQ_MODEL,
};
pub use client::TextGenerator;
pub use error::BackendError;
pub use mock::{MockGenerator, MockResponse};
pub use stub::{StubGenerator, STUB_COMPOSE, STUB_FALLBACK, STUB_README};
