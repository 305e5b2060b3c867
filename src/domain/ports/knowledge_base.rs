use async_trait::async_trait;

use crate::domain::entities::{RetrievedDocument, SourceKind};
use crate::domain::errors::DomainError;

#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Similarity search over the whole index. `limit` is the only tunable.
    async fn retrieve(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<RetrievedDocument>, DomainError>;

    /// Same search, restricted to documents under one source folder.
    async fn retrieve_from_source(
        &self,
        query: &str,
        limit: usize,
        source: SourceKind,
    ) -> Result<Vec<RetrievedDocument>, DomainError>;
}
