//! Core data types for the Quid creator dashboard

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Quest identifier type
pub type QuestId = Uuid;

/// Response identifier type
pub type ResponseId = Uuid;

/// A quest a creator has posted and is collecting responses for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Quest {
    /// Unique identifier for the quest
    pub id: QuestId,

    /// Quest title shown on the dashboard card
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Category label (e.g. "Product Feedback")
    #[validate(length(min = 1, max = 100))]
    pub category: String,

    /// Total reward budget in USD
    pub budget: Decimal,

    /// Submission deadline
    pub due_date: DateTime<Utc>,

    /// Number of submissions received so far
    pub submission_count: u32,
}

/// A respondent's submission against one of the creator's quests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct QuestResponse {
    /// Unique identifier for the response
    pub id: ResponseId,

    /// Display name of the respondent
    #[validate(length(min = 1, max = 255))]
    pub respondent_name: String,

    /// Avatar URL for the respondent, initials are shown when absent
    #[validate(length(max = 2048))]
    pub respondent_avatar: Option<String>,

    /// Title of the quest this response was submitted to
    #[validate(length(min = 1, max = 255))]
    pub quest_title: String,

    /// When the response was submitted
    pub submitted_at: DateTime<Utc>,
}

/// Aggregate counters for the creator's dashboard header cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardStats {
    /// Number of quests currently accepting responses
    pub active_quests: u32,

    /// Total responses received across all quests
    pub total_responses: u32,

    /// Total rewards paid out, in USD
    pub total_rewards: Decimal,
}

/// One successful dashboard fetch: top quests, recent responses, and the
/// aggregate stats computed by the provider.
///
/// The stats may cover more than the listed quests and responses; the lists
/// are the top-N slices the dashboard displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Active quests, most relevant first
    pub quests: Vec<Quest>,

    /// Recent responses, newest first
    pub responses: Vec<QuestResponse>,

    /// Aggregate statistics
    pub stats: DashboardStats,
}
