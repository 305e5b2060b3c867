use serde::{Deserialize, Serialize};

use crate::domain::entities::document::Resource;
use crate::domain::entities::quiz::Quiz;

/// Fixed reply text when retrieval finds nothing to answer from.
pub const NO_MATERIAL_TEXT: &str =
    "No study material was found for this question. Please try another topic.";

/// A tool invocation result, tagged by the producing tool. This is the shape
/// every observation fed back into the reasoning loop carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "agent", content = "response", rename_all = "snake_case")]
pub enum ToolReply {
    StudyMaterial(StudyMaterialReply),
    QuizCreator(QuizReply),
    ImageGenerator(ImageReply),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyMaterialReply {
    pub text: String,
    pub resources: Vec<Resource>,
}

impl StudyMaterialReply {
    /// The defined empty-result state: fixed text, no citations.
    pub fn no_material() -> Self {
        Self {
            text: NO_MATERIAL_TEXT.to_string(),
            resources: Vec::new(),
        }
    }
}

/// Quiz generation reply. Success and failure carry distinct shapes; callers
/// check which field is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuizReply {
    Quiz(Quiz),
    Error { error: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageReply {
    /// Base64-encoded image data from the first generated artifact.
    pub image: String,
}
