//! HTTP client for fetching dashboard data from a Quid backend

use async_trait::async_trait;
use quid_core::DashboardSnapshot;
use quid_dashboard::{DashboardError, DashboardResult, DashboardSource};
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// API client implementing [`DashboardSource`] over a remote backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Set the API key for authentication
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout
    ///
    /// If the timeout-configured client cannot be built, the previous
    /// client is kept and a warning is logged.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        match Client::builder().timeout(timeout).build() {
            Ok(client) => self.client = client,
            Err(error) => {
                warn!(%error, "failed to apply HTTP client timeout, keeping previous client");
            }
        }
        self
    }

    /// Fetch the creator dashboard snapshot from the backend
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the backend responds
    /// with a non-success status, or the body cannot be parsed.
    pub async fn get_dashboard(&self) -> DashboardResult<DashboardSnapshot> {
        let url = format!("{}/api/creator/dashboard", self.base_url);

        let mut request = self.client.get(&url);

        if let Some(ref api_key) = self.api_key {
            request = request.header("X-API-Key", api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DashboardError::fetch_failed(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(DashboardError::fetch_failed(format!(
                "backend returned {}",
                response.status()
            )));
        }

        response
            .json::<DashboardSnapshot>()
            .await
            .map_err(|e| DashboardError::fetch_failed(format!("invalid response body: {e}")))
    }
}

#[async_trait]
impl DashboardSource for ApiClient {
    async fn fetch_dashboard_data(&self) -> DashboardResult<DashboardSnapshot> {
        self.get_dashboard().await
    }

    fn name(&self) -> &str {
        "api"
    }
}
