mod illustration;
mod quiz;
mod study;

pub use illustration::IllustrationService;
pub use quiz::QuizService;
pub use study::StudyService;
