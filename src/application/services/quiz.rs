use std::collections::HashMap;
use std::sync::Arc;

use tracing::instrument;

use crate::application::prompts::Prompts;
use crate::domain::{
    ports::{KnowledgeBase, LlmService},
    DomainError, Quiz, QuizReply,
};

/// How many documents quiz questions are drawn from.
const RETRIEVAL_LIMIT: usize = 4;

/// Builds practice quizzes from retrieved study material.
pub struct QuizService {
    knowledge_base: Arc<dyn KnowledgeBase>,
    llm: Arc<dyn LlmService>,
    prompts: Arc<Prompts>,
}

impl QuizService {
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

    /// Creates a quiz about the subject.
    ///
    /// Zero retrieved documents yields the error-shaped reply, not a failure.
    /// Model output that does not parse as a valid quiz is `MalformedOutput`
    /// and propagates to the caller.
    #[instrument(skip(self))]
    pub async fn create(&self, subject: &str) -> Result<QuizReply, DomainError> {
        let documents = self.knowledge_base.retrieve(subject, RETRIEVAL_LIMIT).await?;

        if documents.is_empty() {
            return Ok(QuizReply::Error {
                error: format!("No study material found for subject '{subject}'"),
            });
        }

        let context = documents
            .iter()
            .map(|doc| doc.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        let vars = HashMap::from([
            ("subject".to_string(), subject.to_string()),
            ("context".to_string(), context),
        ]);
        let prompt = Prompts::render(&self.prompts.quiz.user, &vars);

        let raw = self
            .llm
            .complete_with_system(&self.prompts.quiz.system, &prompt)
            .await?;
        let quiz = Quiz::from_model_output(&raw)?;

        Ok(QuizReply::Quiz(quiz))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{RetrievedDocument, QUIZ_OPTION_COUNT, QUIZ_QUESTION_COUNT};
    use crate::infrastructure::InMemoryKnowledgeBase;

    struct CannedLlm {
        calls: AtomicUsize,
        reply: String,
    }

    impl CannedLlm {
        fn new(reply: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: reply.to_string(),
            }
        }
    }

    #[async_trait]
    impl LlmService for CannedLlm {
        async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
            self.complete_with_system("", prompt).await
        }

        async fn complete_with_system(
            &self,
            _system: &str,
            _prompt: &str,
        ) -> Result<String, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    fn seeded_knowledge_base() -> Arc<InMemoryKnowledgeBase> {
        Arc::new(InMemoryKnowledgeBase::with_documents(vec![
            RetrievedDocument::new("Pengkomputeran covers number systems and logic gates.")
                .with_source_uri("s3://edutech-materials/textbook/chapter1.pdf"),
        ]))
    }

    fn valid_quiz_json() -> String {
        serde_json::json!({
            "quiz": [
                {
                    "question": "Which base does the binary number system use?",
                    "options": {"A": "Two", "B": "Eight", "C": "Ten", "D": "Sixteen"},
                    "answer": "A",
                    "explanation": "Binary is base two."
                },
                {
                    "question": "Which gate outputs true only when both inputs are true?",
                    "options": {"A": "OR", "B": "AND", "C": "NOT", "D": "XOR"},
                    "answer": "B"
                },
                {
                    "question": "How many bits form a byte?",
                    "options": {"A": "2", "B": "4", "C": "8", "D": "16"},
                    "answer": "C"
                }
            ]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_no_material_yields_error_reply_without_model_call() {
        let llm = Arc::new(CannedLlm::new("unused"));
        let service = QuizService::new(
            Arc::new(InMemoryKnowledgeBase::new()),
            llm.clone(),
            Arc::new(Prompts::default()),
        );

        let reply = service.create("Pengkomputeran").await.unwrap();

        match reply {
            QuizReply::Error { error } => assert!(error.contains("Pengkomputeran")),
            QuizReply::Quiz(_) => panic!("expected the error-shaped reply"),
        }
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_model_output_becomes_quiz() {
        let service = QuizService::new(
            seeded_knowledge_base(),
            Arc::new(CannedLlm::new(&valid_quiz_json())),
            Arc::new(Prompts::default()),
        );

        let reply = service.create("Pengkomputeran").await.unwrap();

        match reply {
            QuizReply::Quiz(quiz) => {
                assert_eq!(quiz.quiz.len(), QUIZ_QUESTION_COUNT);
                for question in &quiz.quiz {
                    assert_eq!(question.options.len(), QUIZ_OPTION_COUNT);
                    assert!(question.options.contains_key(&question.answer));
                }
            }
            QuizReply::Error { error } => panic!("expected a quiz, got error: {error}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_model_output_propagates() {
        let service = QuizService::new(
            seeded_knowledge_base(),
            Arc::new(CannedLlm::new("Sure! Here is your quiz: 1. What is ...")),
            Arc::new(Prompts::default()),
        );

        let err = service.create("Pengkomputeran").await.unwrap_err();
        assert!(matches!(err, DomainError::MalformedOutput(_)));
    }
}
