use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edutech_agent::api::{create_router, AppState};
use edutech_agent::application::{IllustrationService, Prompts, QuizService, StudyService};
use edutech_agent::infrastructure::{
    AgentOrchestrator, AnthropicLlm, ManagedKnowledgeBase, Settings, StabilityImageClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edutech_agent=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let settings = Arc::new(Settings::from_env()?);
    info!(
        knowledge_base = %settings.knowledge_base_id,
        model = %settings.llm_model,
        "Configuration loaded"
    );

    let prompts = Arc::new(Prompts::default());

    let knowledge_base = Arc::new(ManagedKnowledgeBase::new(&settings));
    let llm = Arc::new(AnthropicLlm::new(&settings.llm_model));
    let image = Arc::new(StabilityImageClient::new(&settings));

    let study = Arc::new(StudyService::new(
        knowledge_base.clone(),
        llm.clone(),
        prompts.clone(),
    ));
    let quiz = Arc::new(QuizService::new(knowledge_base, llm, prompts.clone()));
    let illustration = Arc::new(IllustrationService::new(image, prompts.clone()));

    let orchestrator = Arc::new(AgentOrchestrator::new(
        &settings,
        &prompts,
        study,
        quiz,
        illustration,
    ));

    let state = AppState::new(orchestrator, settings.clone()).with_prompts(prompts);
    let app = create_router(state);

    let addr = SocketAddr::new(settings.server_host.parse()?, settings.server_port);
    info!("API server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
