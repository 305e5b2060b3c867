//! Application layer - Use cases and orchestration.
//!
//! This module contains application services that orchestrate domain logic
//! and infrastructure. Services depend on domain ports (traits) rather than
//! concrete implementations. The prompt templates scripting these use cases
//! live here too.

pub mod prompts;
pub mod services;

pub use prompts::Prompts;
pub use services::{IllustrationService, QuizService, StudyService};
