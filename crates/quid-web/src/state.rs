//! Application state management

use crate::api_client::ApiClient;
use quid_core::Config;
use quid_core::config::SourceMode;
use quid_dashboard::{DashboardSource, DashboardViewModel, MockDashboardSource};
use std::sync::Arc;
use std::time::Duration;

/// Application state holding configuration and the shared view model
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Shared dashboard view model
    pub dashboard: DashboardViewModel,
}

impl AppState {
    /// Create new application state
    ///
    /// The dashboard source is selected by `config.source.mode`: the
    /// built-in mock fixture or a remote Quid backend.
    pub fn new(config: Config) -> Self {
        let source: Arc<dyn DashboardSource> = match config.source.mode {
            SourceMode::Mock => Arc::new(
                MockDashboardSource::new()
                    .with_delay(Duration::from_millis(config.source.mock_delay_ms)),
            ),
            SourceMode::Remote => {
                let mut client = ApiClient::new(config.source.remote_base_url.clone())
                    .with_timeout(Duration::from_secs(config.source.request_timeout_secs));
                if let Some(ref api_key) = config.source.api_key {
                    client = client.with_api_key(api_key);
                }
                Arc::new(client)
            }
        };

        Self {
            config,
            dashboard: DashboardViewModel::new(source),
        }
    }

    /// Create application state over an explicit source
    ///
    /// Used by tests to wire in failing or counting sources.
    pub fn with_source(config: Config, source: Arc<dyn DashboardSource>) -> Self {
        Self {
            config,
            dashboard: DashboardViewModel::new(source),
        }
    }
}
