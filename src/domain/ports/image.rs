use async_trait::async_trait;

use crate::domain::errors::DomainError;

#[async_trait]
pub trait ImageService: Send + Sync {
    /// Generates one image and returns it base64-encoded.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}
