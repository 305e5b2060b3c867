pub mod agent;
pub mod config;
pub mod image;
pub mod llm;
pub mod retrieval;
pub mod tools;

pub use agent::AgentOrchestrator;
pub use config::{ConfigError, Settings};
pub use image::StabilityImageClient;
pub use llm::AnthropicLlm;
pub use retrieval::{InMemoryKnowledgeBase, ManagedKnowledgeBase};
pub use tools::{ImageGeneratorTool, QuizCreatorTool, StudyMaterialTool};
