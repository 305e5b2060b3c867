mod image_generator;
mod quiz_creator;
mod study_material;

pub use image_generator::ImageGeneratorTool;
pub use quiz_creator::QuizCreatorTool;
pub use study_material::StudyMaterialTool;
