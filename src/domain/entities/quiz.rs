use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

pub const QUIZ_QUESTION_COUNT: usize = 3;
pub const QUIZ_OPTION_COUNT: usize = 4;

/// The quiz shape the frontend consumes: questions with lettered options
/// and the correct option named by its key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub quiz: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: BTreeMap<String, String>,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Quiz {
    /// Parses raw model output as a quiz, strictly.
    ///
    /// Output that is not JSON, has the wrong question or option count, or
    /// names an answer key that is not among the options is rejected as
    /// malformed. There is no repair pass.
    pub fn from_model_output(raw: &str) -> Result<Self, DomainError> {
        let quiz: Quiz = serde_json::from_str(raw.trim())
            .map_err(|e| DomainError::malformed(format!("quiz is not valid JSON: {e}")))?;
        quiz.validate()?;
        Ok(quiz)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.quiz.len() != QUIZ_QUESTION_COUNT {
            return Err(DomainError::malformed(format!(
                "expected {} questions, got {}",
                QUIZ_QUESTION_COUNT,
                self.quiz.len()
            )));
        }

        for (i, question) in self.quiz.iter().enumerate() {
            if question.options.len() != QUIZ_OPTION_COUNT {
                return Err(DomainError::malformed(format!(
                    "question {} has {} options, expected {}",
                    i + 1,
                    question.options.len(),
                    QUIZ_OPTION_COUNT
                )));
            }
            if !question.options.contains_key(&question.answer) {
                return Err(DomainError::malformed(format!(
                    "question {} answer '{}' is not one of its options",
                    i + 1,
                    question.answer
                )));
            }
        }

        Ok(())
    }
}
