use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::prompts::Prompts;
use crate::domain::{
    ports::{KnowledgeBase, LlmService},
    DomainError, Resource, SourceKind, StudyMaterialReply,
};

/// How many documents one answer draws from.
const RETRIEVAL_LIMIT: usize = 5;

/// Answers syllabus questions from retrieved study material, returning the
/// source documents alongside the generated text for citation.
pub struct StudyService {
    knowledge_base: Arc<dyn KnowledgeBase>,
    llm: Arc<dyn LlmService>,
    prompts: Arc<Prompts>,
}

impl StudyService {
    pub fn new(
        knowledge_base: Arc<dyn KnowledgeBase>,
        llm: Arc<dyn LlmService>,
        prompts: Arc<Prompts>,
    ) -> Self {
        Self {
            knowledge_base,
            llm,
            prompts,
        }
    }

    /// Retrieves material for the query and generates an answer from it.
    ///
    /// Zero retrieved documents is a defined result, not an error: the reply
    /// carries a fixed text and an empty resource list, and the model is not
    /// called. With a `source`, retrieval is restricted to that folder.
    #[instrument(skip(self))]
    pub async fn answer(
        &self,
        query: &str,
        source: Option<SourceKind>,
    ) -> Result<StudyMaterialReply, DomainError> {
        info!(%query, "searching study material");

        let documents = match source {
            Some(source) => {
                self.knowledge_base
                    .retrieve_from_source(query, RETRIEVAL_LIMIT, source)
                    .await?
            }
            None => self.knowledge_base.retrieve(query, RETRIEVAL_LIMIT).await?,
        };

        if documents.is_empty() {
            return Ok(StudyMaterialReply::no_material());
        }

        let context = documents
            .iter()
            .map(|doc| doc.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        let vars = HashMap::from([
            ("context".to_string(), context),
            ("question".to_string(), query.to_string()),
        ]);
        let prompt = Prompts::render(&self.prompts.study.user, &vars);

        let text = self
            .llm
            .complete_with_system(&self.prompts.study.system, &prompt)
            .await?;

        Ok(StudyMaterialReply {
            text,
            resources: documents.into_iter().map(Resource::from).collect(),
        })
    }
}
