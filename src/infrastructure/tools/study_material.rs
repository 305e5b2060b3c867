use rig::completion::ToolDefinition;
use rig::tool::Tool;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::application::StudyService;
use crate::domain::{SourceKind, ToolReply};

#[derive(Debug, thiserror::Error)]
#[error("Study material error: {0}")]
pub struct StudyMaterialError(pub String);

#[derive(Debug, Deserialize, Serialize)]
pub struct StudyMaterialArgs {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceKind>,
}

/// Answers syllabus questions from the indexed study material, returning
/// the source documents alongside the answer for citation.
pub struct StudyMaterialTool {
    service: Arc<StudyService>,
}

impl StudyMaterialTool {
    pub fn new(service: Arc<StudyService>) -> Self {
        Self { service }
    }
}

impl Tool for StudyMaterialTool {
    const NAME: &'static str = "study_material";

    type Error = StudyMaterialError;
    type Args = StudyMaterialArgs;
    type Output = ToolReply;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Answer a question about the SPM syllabus from the indexed study \
                          material. Returns the answer together with the source documents it \
                          was drawn from."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The student's question"
                    },
                    "source": {
                        "type": "string",
                        "enum": ["textbook", "exam_paper"],
                        "description": "Restrict the search to one source folder"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        let reply = self
            .service
            .answer(&args.query, args.source)
            .await
            .map_err(|e| StudyMaterialError(e.to_string()))?;

        Ok(ToolReply::StudyMaterial(reply))
    }
}
