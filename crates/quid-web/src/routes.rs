//! Route definitions for the web interface

use crate::{
    handlers::{api, pages},
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Build the complete web application router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Page routes
        .route("/", get(pages::dashboard))
        // Browser form flows, redirect back to the page
        .route("/dashboard/retry", post(pages::retry_form))
        .route("/quests", post(pages::create_quest_form))
        // Dashboard API routes
        .route("/api/dashboard", get(api::api_dashboard))
        .route("/api/dashboard/retry", post(api::api_retry))
        .route("/api/quests", post(api::api_create_quest))
        // Health check
        .route("/health", get(api::health_check))
}
