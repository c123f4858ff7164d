// src/routes.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, patch, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{checklist, health, interview, sanitize},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (sanitize, interviews, checklists).
/// * Applies global middleware (Trace, CORS, body size limit).
/// * Injects global state (store + config).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Skipping invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let interview_routes = Router::new()
        .route(
            "/",
            get(interview::list_interviews).post(interview::create_interview),
        )
        .route(
            "/{id}",
            get(interview::get_interview)
                .put(interview::update_interview)
                .delete(interview::delete_interview),
        )
        .route("/{id}/checklist", get(checklist::get_checklist))
        .route("/{id}/checklist/items", post(checklist::add_item))
        .route(
            "/{id}/checklist/items/{item_id}",
            patch(checklist::update_item).delete(checklist::remove_item),
        );

    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/sanitize", post(sanitize::sanitize_html))
        .nest("/api/interviews", interview_routes)
        // Global Middleware (outermost first)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}
