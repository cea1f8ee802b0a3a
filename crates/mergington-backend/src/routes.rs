use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{AppState, config::Config, handlers};

fn cors(config: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(config.allowed_origins.clone())
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST])
}

/// Setup the routes for the server and configure CORS and request tracing
pub fn setup_routes(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health::get))
        .route("/activities", get(handlers::activities::list))
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::activities::signup),
        )
        .route(
            "/activities/{activity_name}/unregister",
            post(handlers::activities::unregister),
        )
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(cors(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
