use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ports::KnowledgeBase, DomainError, RetrievedDocument, SourceKind};
use crate::infrastructure::config::Settings;

/// Client for the managed knowledge-base query API. Retrieval, ranking and
/// index maintenance all live in the hosted service; this adapter only maps
/// its wire shape onto the domain. No retry, no backoff, no timeout.
pub struct ManagedKnowledgeBase {
    client: reqwest::Client,
    base_url: String,
    knowledge_base_id: String,
    api_key: Option<String>,
    materials_bucket: String,
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    max_results: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_prefix: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    results: Vec<QueryResult>,
}

#[derive(Debug, Deserialize)]
struct QueryResult {
    content: String,
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    score: Option<f32>,
    #[serde(default)]
    metadata: serde_json::Map<String, serde_json::Value>,
}

impl From<QueryResult> for RetrievedDocument {
    fn from(result: QueryResult) -> Self {
        Self {
            content: result.content,
            source_uri: result.uri,
            score: result.score,
            metadata: result.metadata,
        }
    }
}

impl ManagedKnowledgeBase {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: settings.knowledge_base_url.trim_end_matches('/').to_string(),
            knowledge_base_id: settings.knowledge_base_id.clone(),
            api_key: settings.knowledge_base_api_key.clone(),
            materials_bucket: settings.materials_bucket.clone(),
        }
    }

    fn source_prefix(&self, source: SourceKind) -> String {
        format!("s3://{}/{}/", self.materials_bucket, source.as_folder())
    }

    async fn query(
        &self,
        query: &str,
        limit: usize,
        source_prefix: Option<String>,
    ) -> Result<Vec<RetrievedDocument>, DomainError> {
        let url = format!(
            "{}/v1/knowledge-bases/{}/query",
            self.base_url, self.knowledge_base_id
        );

        let mut request = self.client.post(&url).json(&QueryRequest {
            query,
            max_results: limit,
            source_prefix,
        });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::external(format!("knowledge base request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::external(format!(
                "knowledge base returned {status}: {body}"
            )));
        }

        let parsed: QueryResponse = response
            .json()
            .await
            .map_err(|e| DomainError::external(format!("knowledge base response invalid: {e}")))?;

        Ok(parsed.results.into_iter().map(RetrievedDocument::from).collect())
    }
}

#[async_trait]
impl KnowledgeBase for ManagedKnowledgeBase {
    async fn retrieve(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<RetrievedDocument>, DomainError> {
        self.query(query, limit, None).await
    }

    async fn retrieve_from_source(
        &self,
        query: &str,
        limit: usize,
        source: SourceKind,
    ) -> Result<Vec<RetrievedDocument>, DomainError> {
        let prefix = self.source_prefix(source);
        self.query(query, limit, Some(prefix)).await
    }
}
