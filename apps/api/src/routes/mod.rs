pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeFile;

use crate::state::AppState;
use crate::survey::handlers;

/// Static landing page, resolved relative to the workspace root.
const SURVEY_PAGE: &str = "apps/api/static/survey.html";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(SURVEY_PAGE))
        .route("/health", get(health::health_handler))
        .route("/api/analyze-survey", post(handlers::handle_analyze_survey))
        .with_state(state)
}
