use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::state::SystemInfo;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub started_at: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness payload. `started_at` is the process start time, not the
/// current time; repeated calls return the same value.
pub async fn root(State(system): State<SystemInfo>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "API is running".to_string(),
        started_at: system.started_at,
    })
}

/// Always healthy; performs no downstream calls.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::api::routes::system_routes;
    use crate::api::state::SystemInfo;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_exact_body() {
        let app = system_routes().with_state(SystemInfo::at_startup());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_root_reports_stable_started_at() {
        let app = system_routes().with_state(SystemInfo::at_startup());

        let first = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let second = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let first = body_json(first).await;
        let second = body_json(second).await;

        assert_eq!(first["message"], "API is running");
        assert_eq!(first["started_at"], second["started_at"]);
    }
}
