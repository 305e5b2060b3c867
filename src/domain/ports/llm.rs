use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Hosted text-generation model behind the tools. One-shot completions
/// only; conversational state lives in the reasoning loop, not here.
#[async_trait]
pub trait LlmService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;

    /// Completion with a system preamble steering register and language.
    async fn complete_with_system(&self, system: &str, prompt: &str)
        -> Result<String, DomainError>;
}
