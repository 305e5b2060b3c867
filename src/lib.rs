//! EduTech assistant backend: an agentic HTTP service that answers SPM
//! study questions from a managed knowledge base, generates practice
//! quizzes and produces educational diagrams.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
