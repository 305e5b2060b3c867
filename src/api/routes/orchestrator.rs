use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::application::Prompts;

#[derive(Debug, Deserialize)]
pub struct OrchestratorRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct OrchestratorResponse {
    pub success: bool,
    pub output: String,
}

/// Wraps the raw query in the instruction template and hands it to the
/// reasoning loop. Blocks until the loop finishes; there is no job queue
/// and no timeout in front of it.
pub async fn run_orchestrator(
    State(state): State<AppState>,
    Json(request): Json<OrchestratorRequest>,
) -> Result<Json<OrchestratorResponse>, ApiError> {
    let vars = HashMap::from([("query".to_string(), request.query)]);
    let instruction = Prompts::render(&state.prompts.orchestrator.instruction, &vars);

    let output = state.orchestrator.execute(&instruction).await?;

    Ok(Json(OrchestratorResponse {
        success: true,
        output,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    use crate::api::routes::create_router;
    use crate::api::state::AppState;
    use crate::domain::errors::DomainError;
    use crate::domain::ports::Orchestrator;
    use crate::infrastructure::Settings;

    struct StubOrchestrator {
        reply: Option<String>,
        last_instruction: Mutex<Option<String>>,
    }

    impl StubOrchestrator {
        fn replying(output: &str) -> Self {
            Self {
                reply: Some(output.to_string()),
                last_instruction: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                last_instruction: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl Orchestrator for StubOrchestrator {
        async fn execute(&self, instruction: &str) -> Result<String, DomainError> {
            *self.last_instruction.lock().unwrap() = Some(instruction.to_string());
            match &self.reply {
                Some(output) => Ok(output.clone()),
                None => Err(DomainError::external("model unavailable")),
            }
        }
    }

    fn test_state(orchestrator: Arc<StubOrchestrator>) -> AppState {
        let settings = Settings::from_lookup(|var| match var {
            "KNOWLEDGE_BASE_ID" => Some("kb-test".to_string()),
            "KNOWLEDGE_BASE_REGION" => Some("ap-southeast-1".to_string()),
            "MATERIALS_BUCKET" => Some("edutech-materials".to_string()),
            _ => None,
        })
        .unwrap();

        AppState::new(orchestrator, Arc::new(settings))
    }

    fn post_query(query: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/orchestrator")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({ "query": query }).to_string(),
            ))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_run_orchestrator_returns_output() {
        let orchestrator = Arc::new(StubOrchestrator::replying(
            "Photosynthesis turns light into chemical energy.",
        ));
        let app = create_router(test_state(orchestrator.clone()));

        let response = app
            .oneshot(post_query("What is photosynthesis?"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["output"], "Photosynthesis turns light into chemical energy.");
    }

    #[tokio::test]
    async fn test_query_is_embedded_in_instruction() {
        let orchestrator = Arc::new(StubOrchestrator::replying("ok"));
        let app = create_router(test_state(orchestrator.clone()));

        app.oneshot(post_query("Apakah fotosintesis?")).await.unwrap();

        let instruction = orchestrator.last_instruction.lock().unwrap().clone().unwrap();
        assert!(instruction.contains("Apakah fotosintesis?"));
        assert_ne!(instruction, "Apakah fotosintesis?");
    }

    #[tokio::test]
    async fn test_orchestrator_failure_becomes_500_with_detail() {
        let orchestrator = Arc::new(StubOrchestrator::failing());
        let app = create_router(test_state(orchestrator));

        let response = app
            .oneshot(post_query("What is photosynthesis?"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "External service error: model unavailable");
    }

    #[tokio::test]
    async fn test_missing_query_field_is_rejected() {
        let orchestrator = Arc::new(StubOrchestrator::replying("ok"));
        let app = create_router(test_state(orchestrator.clone()));

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/orchestrator")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(orchestrator.last_instruction.lock().unwrap().is_none());
    }
}
