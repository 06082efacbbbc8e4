use super::error::BackendError;
use async_trait::async_trait;

/// A hosted or local service that turns a free-text instruction into free text.
///
/// Implementations must report every failure (network, auth, timeout) as a
/// `BackendError`; callers treat any error as "no content".
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system_role: &str, user_prompt: &str)
        -> Result<String, BackendError>;

    fn name(&self) -> &str;

    fn model_info(&self) -> Option<String> {
        None
    }
}
