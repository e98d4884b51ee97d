//! Error types for dashboard data loading

use thiserror::Error;

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Errors that can occur while loading dashboard data
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Fetching the dashboard snapshot failed
    #[error("Failed to fetch dashboard data: {message}")]
    FetchFailed {
        /// Error message
        message: String,
    },

    /// Fetch timed out
    #[error("Dashboard fetch timed out after {seconds} seconds")]
    Timeout {
        /// Timeout duration
        seconds: u64,
    },

    /// Data source unavailable
    #[error("Dashboard source unavailable: {service}")]
    SourceUnavailable {
        /// Source name
        service: String,
    },

    /// The source returned a snapshot that failed validation
    #[error("Invalid dashboard snapshot: {reason}")]
    InvalidSnapshot {
        /// Failure reason
        reason: String,
    },
}

impl DashboardError {
    /// Create a fetch failed error
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::FetchFailed {
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub const fn timeout(seconds: u64) -> Self {
        Self::Timeout { seconds }
    }

    /// Create a source unavailable error
    pub fn source_unavailable(service: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            service: service.into(),
        }
    }

    /// Create an invalid snapshot error
    pub fn invalid_snapshot(reason: impl Into<String>) -> Self {
        Self::InvalidSnapshot {
            reason: reason.into(),
        }
    }

    /// Check if error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::FetchFailed { .. } | Self::Timeout { .. } | Self::SourceUnavailable { .. }
        )
    }
}

impl From<DashboardError> for quid_core::Error {
    fn from(err: DashboardError) -> Self {
        Self::Other(err.to_string())
    }
}
