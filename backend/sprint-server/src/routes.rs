use crate::{
    AppState, create_sprint, delete_sprint, get_sprint, health, list_sprints, update_sprint,
};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/sprints",
            get(list_sprints).post(create_sprint).put(update_sprint),
        )
        .route("/sprints/{id}", get(get_sprint).delete(delete_sprint));

    // axum refuses to nest at the root
    let prefix = state.api_config.route_prefix().to_string();
    let router = if prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(&prefix, api)
    };

    router
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/metrics", get(health::metrics))
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
