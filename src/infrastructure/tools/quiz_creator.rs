use rig::completion::ToolDefinition;
use rig::tool::Tool;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::application::QuizService;
use crate::domain::ToolReply;

#[derive(Debug, thiserror::Error)]
#[error("Quiz creator error: {0}")]
pub struct QuizCreatorError(pub String);

#[derive(Debug, Deserialize, Serialize)]
pub struct QuizCreatorArgs {
    pub subject: String,
}

/// Builds an exam-register multiple-choice quiz about a subject from the
/// indexed study material.
pub struct QuizCreatorTool {
    service: Arc<QuizService>,
}

impl QuizCreatorTool {
    pub fn new(service: Arc<QuizService>) -> Self {
        Self { service }
    }
}

impl Tool for QuizCreatorTool {
    const NAME: &'static str = "quiz_creator";

    type Error = QuizCreatorError;
    type Args = QuizCreatorArgs;
    type Output = ToolReply;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Create a short multiple-choice practice quiz about a subject, drawn \
                          from the indexed study material. The reply carries either the quiz \
                          or an error explaining why none could be made."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "subject": {
                        "type": "string",
                        "description": "The subject or chapter to be quizzed on"
                    }
                },
                "required": ["subject"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        let reply = self
            .service
            .create(&args.subject)
            .await
            .map_err(|e| QuizCreatorError(e.to_string()))?;

        Ok(ToolReply::QuizCreator(reply))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::application::Prompts;
    use crate::domain::{ports::LlmService, DomainError};
    use crate::infrastructure::InMemoryKnowledgeBase;

    struct UnusedLlm;

    #[async_trait]
    impl LlmService for UnusedLlm {
        async fn complete(&self, _prompt: &str) -> Result<String, DomainError> {
            Err(DomainError::internal("not expected to be called"))
        }

        async fn complete_with_system(
            &self,
            _system: &str,
            _prompt: &str,
        ) -> Result<String, DomainError> {
            Err(DomainError::internal("not expected to be called"))
        }
    }

    fn tool_with_empty_index() -> QuizCreatorTool {
        QuizCreatorTool::new(Arc::new(QuizService::new(
            Arc::new(InMemoryKnowledgeBase::new()),
            Arc::new(UnusedLlm),
            Arc::new(Prompts::default()),
        )))
    }

    #[tokio::test]
    async fn test_definition_schema() {
        let definition = tool_with_empty_index().definition(String::new()).await;

        assert_eq!(definition.name, "quiz_creator");
        assert_eq!(definition.parameters["required"], json!(["subject"]));
    }

    #[tokio::test]
    async fn test_call_wraps_error_reply_in_tagged_union() {
        let tool = tool_with_empty_index();

        let reply = tool
            .call(QuizCreatorArgs {
                subject: "Pangkalan Data".to_string(),
            })
            .await
            .unwrap();

        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["agent"], "quiz_creator");
        assert!(json["response"]["error"]
            .as_str()
            .unwrap()
            .contains("Pangkalan Data"));
        assert!(json["response"].get("quiz").is_none());
    }
}
