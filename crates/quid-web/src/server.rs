//! Web server setup and configuration

use crate::{routes::build_routes, state::AppState};
use axum::Router;
use quid_core::Config;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the complete web application with all routes and state
///
/// The view model's initial fetch is started here, so the dashboard is
/// already loading by the time the first request arrives.
pub fn build_app(config: Config) -> Router {
    let state = Arc::new(AppState::new(config));
    state.dashboard.initialize();

    build_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the application over an explicit state, without initializing
///
/// Used by tests that control the fetch lifecycle themselves.
pub fn build_app_with_state(state: Arc<AppState>) -> Router {
    build_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
