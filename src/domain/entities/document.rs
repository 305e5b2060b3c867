use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A ranked document returned by the knowledge base for one query.
/// Lives only for the tool invocation that fetched it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedDocument {
    pub content: String,
    pub source_uri: Option<String>,
    pub score: Option<f32>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl RetrievedDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source_uri: None,
            score: None,
            metadata: Map::new(),
        }
    }

    pub fn with_source_uri(mut self, uri: impl Into<String>) -> Self {
        self.source_uri = Some(uri.into());
        self
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Source-type folder the knowledge base organizes documents under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Textbook,
    ExamPaper,
}

impl SourceKind {
    pub fn as_folder(&self) -> &'static str {
        match self {
            Self::Textbook => "textbook",
            Self::ExamPaper => "exam_paper",
        }
    }
}

/// Citation payload handed back to the caller alongside a generated answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub content: String,
    pub metadata: Map<String, Value>,
    #[serde(rename = "sourceUri")]
    pub source_uri: Option<String>,
}

impl From<RetrievedDocument> for Resource {
    fn from(doc: RetrievedDocument) -> Self {
        Self {
            content: doc.content,
            metadata: doc.metadata,
            source_uri: doc.source_uri,
        }
    }
}
