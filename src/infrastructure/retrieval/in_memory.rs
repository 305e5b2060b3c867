use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::{ports::KnowledgeBase, DomainError, RetrievedDocument, SourceKind};

/// In-memory stand-in for the managed knowledge base, used by tests and
/// local development. Ranks by case-insensitive term overlap with the query.
pub struct InMemoryKnowledgeBase {
    documents: RwLock<Vec<RetrievedDocument>>,
}

impl InMemoryKnowledgeBase {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }

    pub fn with_documents(documents: Vec<RetrievedDocument>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    pub fn insert(&self, document: RetrievedDocument) -> Result<(), DomainError> {
        let mut store = self
            .documents
            .write()
            .map_err(|e| DomainError::internal(e.to_string()))?;
        store.push(document);
        Ok(())
    }

    fn search(
        &self,
        query: &str,
        limit: usize,
        folder: Option<&str>,
    ) -> Result<Vec<RetrievedDocument>, DomainError> {
        let store = self
            .documents
            .read()
            .map_err(|e| DomainError::internal(e.to_string()))?;

        let mut results: Vec<(RetrievedDocument, f32)> = store
            .iter()
            .filter(|doc| match folder {
                Some(folder) => doc
                    .source_uri
                    .as_deref()
                    .is_some_and(|uri| uri.contains(&format!("/{folder}/"))),
                None => true,
            })
            .filter_map(|doc| {
                let score = term_overlap(query, &doc.content);
                (score > 0.0).then(|| (doc.clone().with_score(score), score))
            })
            .collect();

        results.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(results.into_iter().take(limit).map(|(doc, _)| doc).collect())
    }
}

impl Default for InMemoryKnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

/// Fraction of query terms present in the content.
fn term_overlap(query: &str, content: &str) -> f32 {
    let content = content.to_lowercase();
    let query = query.to_lowercase();
    let terms: Vec<&str> = query.split_whitespace().collect();
    if terms.is_empty() {
        return 0.0;
    }

    let hits = terms.iter().filter(|term| content.contains(**term)).count();
    hits as f32 / terms.len() as f32
}

#[async_trait]
impl KnowledgeBase for InMemoryKnowledgeBase {
    async fn retrieve(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<RetrievedDocument>, DomainError> {
        self.search(query, limit, None)
    }

    async fn retrieve_from_source(
        &self,
        query: &str,
        limit: usize,
        source: SourceKind,
    ) -> Result<Vec<RetrievedDocument>, DomainError> {
        self.search(query, limit, Some(source.as_folder()))
    }
}
