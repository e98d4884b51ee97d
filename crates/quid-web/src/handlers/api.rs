//! JSON API handlers backed by the shared view model

use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use quid_dashboard::DashboardState;
use std::sync::Arc;
use tracing::info;

/// Current dashboard state as status-tagged JSON
pub async fn api_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardState> {
    Json(state.dashboard.state())
}

/// Trigger a retry of a failed load
///
/// Accepted only while the dashboard is in the error state.
pub async fn api_retry(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let accepted = state.dashboard.retry();
    Json(serde_json::json!({ "accepted": accepted }))
}

/// Record an intent to create a new quest
pub async fn api_create_quest(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<serde_json::Value>) {
    info!("quest creation requested via API");
    state.dashboard.create_quest();

    (
        StatusCode::ACCEPTED,
        Json(serde_json::json!({ "status": "accepted" })),
    )
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
