pub mod orchestrator;
pub mod system;

use axum::extract::FromRef;
use axum::http::{header, Method};
use axum::{routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::state::{AppState, SystemInfo};

pub fn create_router(state: AppState) -> Router {
    let cors = build_cors(&state.settings.cors_allowed_origins);

    Router::new()
        .merge(system_routes())
        .route("/api/orchestrator", post(orchestrator::run_orchestrator))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Liveness routes, generic over the state so the reduced binary can mount
/// them directly on a bare [`SystemInfo`].
pub fn system_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    SystemInfo: FromRef<S>,
{
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health_check))
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(origins)
    }
}
