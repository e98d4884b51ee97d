//! Page handlers for serving rendered HTML

use crate::{render, state::AppState};
use axum::extract::State;
use axum::response::{Html, Redirect};
use std::sync::Arc;

/// Dashboard page, rendered from the current view model state
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render::page(&state.dashboard.state()))
}

/// Browser-facing retry form on the error panel
///
/// Redirects back to the dashboard page so the user sees the reloading
/// dashboard, not an API payload.
pub async fn retry_form(State(state): State<Arc<AppState>>) -> Redirect {
    state.dashboard.retry();
    Redirect::to("/")
}

/// Browser-facing create-quest form
pub async fn create_quest_form(State(state): State<Arc<AppState>>) -> Redirect {
    state.dashboard.create_quest();
    Redirect::to("/")
}
