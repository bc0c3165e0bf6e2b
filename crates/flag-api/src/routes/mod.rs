//! Route definitions
//!
//! API routes are mounted under /api; health routes stay at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, reactions, terms};
use crate::response::ApiError;
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", term_routes())
        .fallback(route_not_found)
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Term and reaction routes
fn term_routes() -> Router<AppState> {
    Router::new()
        .route("/terms", get(terms::list_terms).post(terms::create_term))
        .route("/terms/:id", get(terms::get_term))
        .route("/terms/:id/flag", post(reactions::set_flag))
        .route("/terms/:id/like", post(reactions::set_like))
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
