mod document;
mod quiz;
mod reply;

pub use document::{Resource, RetrievedDocument, SourceKind};
pub use quiz::{Quiz, QuizQuestion, QUIZ_OPTION_COUNT, QUIZ_QUESTION_COUNT};
pub use reply::{ImageReply, QuizReply, StudyMaterialReply, ToolReply, NO_MATERIAL_TEXT};
