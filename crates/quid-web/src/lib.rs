//! Quid Creator Dashboard Web Interface
//!
//! Server-rendered dashboard page plus a small JSON API over the shared
//! [`quid_dashboard::DashboardViewModel`].

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod handlers;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

// Re-export the main entry points
pub use server::{build_app, build_app_with_state};
pub use state::AppState;
