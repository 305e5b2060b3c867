use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// The reasoning loop behind the public endpoint: given an instruction,
/// selects and runs tools until it can produce a final answer.
#[async_trait]
pub trait Orchestrator: Send + Sync {
    async fn execute(&self, instruction: &str) -> Result<String, DomainError>;
}
