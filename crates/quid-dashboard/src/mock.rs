//! Mock dashboard source serving fixture data

use crate::error::{DashboardError, DashboardResult};
use crate::source::DashboardSource;
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use quid_core::{DashboardSnapshot, DashboardStats, Quest, QuestResponse};
use rust_decimal::Decimal;
use tokio::time::{Duration, sleep};
use uuid::Uuid;

/// Default simulated network delay
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(1500);

/// Mock dashboard source for development and testing
///
/// Serves a fixed snapshot after a configurable simulated delay, or a
/// configurable failure for exercising error paths.
#[derive(Debug)]
pub struct MockDashboardSource {
    /// Simulated network delay
    delay: Duration,

    /// Should fail fetches
    should_fail: bool,

    /// Failure message
    failure_message: String,

    /// Serve an empty snapshot instead of the fixture data
    serve_empty: bool,
}

impl MockDashboardSource {
    /// Create a new mock source with the default delay
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_MOCK_DELAY,
            should_fail: false,
            failure_message: "Mock failure".to_string(),
            serve_empty: false,
        }
    }

    /// Set the simulated delay
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Configure to fail fetches
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.should_fail = true;
        self.failure_message = message.into();
        self
    }

    /// Serve an empty snapshot, for exercising empty states
    #[must_use]
    pub const fn with_empty_data(mut self) -> Self {
        self.serve_empty = true;
        self
    }

    /// Build the fixture snapshot
    fn generate_snapshot() -> DashboardSnapshot {
        let now = Utc::now();

        let quests = vec![
            Quest {
                id: Uuid::new_v4(),
                title: "Review our new onboarding flow".to_string(),
                category: "Product Feedback".to_string(),
                budget: Decimal::new(25_000, 2),
                due_date: now + ChronoDuration::days(5),
                submission_count: 18,
            },
            Quest {
                id: Uuid::new_v4(),
                title: "Test the mobile checkout experience".to_string(),
                category: "Usability Testing".to_string(),
                budget: Decimal::new(40_000, 2),
                due_date: now + ChronoDuration::days(12),
                submission_count: 7,
            },
            Quest {
                id: Uuid::new_v4(),
                title: "Survey: subscription pricing preferences".to_string(),
                category: "Market Research".to_string(),
                budget: Decimal::new(15_000, 2),
                due_date: now + ChronoDuration::days(3),
                submission_count: 23,
            },
        ];

        let responses = vec![
            QuestResponse {
                id: Uuid::new_v4(),
                respondent_name: "Sarah Chen".to_string(),
                respondent_avatar: None,
                quest_title: "Review our new onboarding flow".to_string(),
                submitted_at: now - ChronoDuration::minutes(5),
            },
            QuestResponse {
                id: Uuid::new_v4(),
                respondent_name: "Marcus Webb".to_string(),
                respondent_avatar: None,
                quest_title: "Test the mobile checkout experience".to_string(),
                submitted_at: now - ChronoDuration::hours(2),
            },
            QuestResponse {
                id: Uuid::new_v4(),
                respondent_name: "Ana Maria Silva".to_string(),
                respondent_avatar: None,
                quest_title: "Survey: subscription pricing preferences".to_string(),
                submitted_at: now - ChronoDuration::days(1),
            },
        ];

        DashboardSnapshot {
            quests,
            responses,
            stats: DashboardStats {
                active_quests: 12,
                total_responses: 48,
                total_rewards: Decimal::new(215_002, 2),
            },
        }
    }
}

impl Default for MockDashboardSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DashboardSource for MockDashboardSource {
    async fn fetch_dashboard_data(&self) -> DashboardResult<DashboardSnapshot> {
        // Simulate network delay
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        if self.should_fail {
            return Err(DashboardError::fetch_failed(&self.failure_message));
        }

        if self.serve_empty {
            return Ok(DashboardSnapshot {
                quests: Vec::new(),
                responses: Vec::new(),
                stats: DashboardStats::default(),
            });
        }

        Ok(Self::generate_snapshot())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
