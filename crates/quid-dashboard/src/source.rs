//! Dashboard data source abstraction

use crate::error::DashboardResult;
use async_trait::async_trait;
use quid_core::DashboardSnapshot;

/// Provider of creator dashboard data
///
/// Implementations fetch a complete [`DashboardSnapshot`] in one call.
/// The view model treats the snapshot as atomic: either everything the
/// dashboard shows arrives, or the fetch fails as a whole.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Fetch the current dashboard snapshot
    async fn fetch_dashboard_data(&self) -> DashboardResult<DashboardSnapshot>;

    /// Source name for logging
    fn name(&self) -> &str;
}
