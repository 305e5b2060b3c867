use async_trait::async_trait;
use rig::client::{CompletionClient, ProviderClient};
use rig::completion::Prompt;
use rig::providers::anthropic;
use std::sync::Arc;

use crate::application::{IllustrationService, Prompts, QuizService, StudyService};
use crate::domain::{ports::Orchestrator, DomainError};
use crate::infrastructure::config::{Settings, MAX_AGENT_TURNS, MODEL_MAX_TOKENS, MODEL_TEMPERATURE};
use crate::infrastructure::tools::{ImageGeneratorTool, QuizCreatorTool, StudyMaterialTool};

/// The reason/act/observe loop behind the public endpoint.
///
/// Tool selection, observation feedback and recovery from malformed
/// tool-call output are owned by the agent framework; this type only
/// supplies the three tools and the instruction text. Step-limit
/// exhaustion and tool failures surface as one external-service error.
pub struct AgentOrchestrator {
    client: anthropic::Client,
    model: String,
    preamble: String,
    max_turns: usize,
    study: Arc<StudyService>,
    quiz: Arc<QuizService>,
    illustration: Arc<IllustrationService>,
}

impl AgentOrchestrator {
    pub fn new(
        settings: &Settings,
        prompts: &Prompts,
        study: Arc<StudyService>,
        quiz: Arc<QuizService>,
        illustration: Arc<IllustrationService>,
    ) -> Self {
        Self {
            client: anthropic::Client::from_env(),
            model: settings.llm_model.clone(),
            preamble: prompts.orchestrator.system.clone(),
            max_turns: MAX_AGENT_TURNS,
            study,
            quiz,
            illustration,
        }
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }
}

#[async_trait]
impl Orchestrator for AgentOrchestrator {
    async fn execute(&self, instruction: &str) -> Result<String, DomainError> {
        let agent = self
            .client
            .agent(&self.model)
            .preamble(&self.preamble)
            .temperature(MODEL_TEMPERATURE)
            .max_tokens(MODEL_MAX_TOKENS)
            .tool(StudyMaterialTool::new(self.study.clone()))
            .tool(QuizCreatorTool::new(self.quiz.clone()))
            .tool(ImageGeneratorTool::new(self.illustration.clone()))
            .build();

        agent
            .prompt(instruction)
            .multi_turn(self.max_turns)
            .await
            .map_err(|e| DomainError::external(format!("Agent failed: {e}")))
    }
}
