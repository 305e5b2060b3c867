mod image;
mod knowledge_base;
mod llm;
mod orchestrator;

pub use image::ImageService;
pub use knowledge_base::KnowledgeBase;
pub use llm::LlmService;
pub use orchestrator::Orchestrator;
