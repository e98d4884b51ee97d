//! Server-side HTML rendering for the dashboard page
//!
//! Every component function is pure: data in, markup out. Strings that
//! originate outside the server (quest titles, respondent names) are
//! HTML-escaped before interpolation.

use chrono::{DateTime, Utc};
use quid_core::{DashboardStats, Quest, QuestResponse};
use quid_core::utils::{avatar_initials, format_relative_time, format_usd};
use quid_dashboard::DashboardState;

/// Static page shell with header and sidebar chrome
const SHELL: &str = include_str!("../templates/shell.html");

/// Render the full dashboard page for the given state
#[must_use]
pub fn page(state: &DashboardState) -> String {
    let content = match state {
        DashboardState::Loading => skeleton(),
        DashboardState::Error { message } => error_panel(message),
        DashboardState::Ready { snapshot } => {
            let now = Utc::now();
            format!(
                "<h1 class=\"page-title\">Dashboard</h1>\n{}\n<div class=\"columns\">\n{}\n{}\n</div>",
                stats_overview(&snapshot.stats),
                quests_section(&snapshot.quests),
                responses_section(&snapshot.responses, now),
            )
        }
    };

    SHELL.replace("{{content}}", &content)
}

/// Skeleton placeholders shown while data loads
#[must_use]
pub fn skeleton() -> String {
    let mut html = String::from("<div class=\"stats-grid\">");
    for _ in 0..3 {
        html.push_str("<div class=\"skeleton skeleton-stat\"></div>");
    }
    html.push_str("</div><div style=\"margin-top:2rem\">");
    for _ in 0..3 {
        html.push_str("<div class=\"skeleton skeleton-card\"></div>");
    }
    html.push_str("</div>");
    html
}

/// Error panel with a retry button
#[must_use]
pub fn error_panel(message: &str) -> String {
    format!(
        "<div class=\"error-panel\">\
         <h2 class=\"error-title\">Error Loading Dashboard</h2>\
         <p class=\"error-message\">{}</p>\
         <form method=\"post\" action=\"/dashboard/retry\">\
         <button type=\"submit\" class=\"retry-button\">Try Again</button>\
         </form>\
         </div>",
        escape_html(message)
    )
}

/// Aggregate statistics cards plus the create-quest button
#[must_use]
pub fn stats_overview(stats: &DashboardStats) -> String {
    format!(
        "<div class=\"stats-row\">\
         <div class=\"stats-grid\">\
         <div class=\"stat-card\"><p class=\"stat-value\">{}</p><p class=\"stat-label\">Active Quests</p></div>\
         <div class=\"stat-card\"><p class=\"stat-value\">{}</p><p class=\"stat-label\">Total Responses</p></div>\
         <div class=\"stat-card\"><p class=\"stat-value\">{}</p><p class=\"stat-label\">Total Rewards</p></div>\
         </div>\
         <form method=\"post\" action=\"/quests\">\
         <button type=\"submit\" class=\"create-quest-button\">+ Create a New Survey</button>\
         </form>\
         </div>",
        stats.active_quests,
        stats.total_responses,
        format_usd(stats.total_rewards),
    )
}

/// Active quests column, or its empty state
#[must_use]
pub fn quests_section(quests: &[Quest]) -> String {
    let mut html = String::from(
        "<section><div class=\"section-header\">\
         <h2 class=\"section-title\">Active Quests</h2>",
    );
    if !quests.is_empty() {
        html.push_str("<button class=\"view-all\">View all</button>");
    }
    html.push_str("</div>");

    if quests.is_empty() {
        html.push_str(
            "<div class=\"empty-state\">\
             <p>No active quests yet.</p>\
             <form method=\"post\" action=\"/quests\">\
             <button type=\"submit\" class=\"retry-button\">Create your first quest</button>\
             </form>\
             </div>",
        );
    } else {
        for quest in quests {
            html.push_str(&quest_card(quest));
        }
    }

    html.push_str("</section>");
    html
}

/// Single quest card
#[must_use]
pub fn quest_card(quest: &Quest) -> String {
    format!(
        "<div class=\"quest-card\">\
         <p class=\"quest-title\">{}</p>\
         <p class=\"quest-category\">{}</p>\
         <div class=\"quest-meta\">\
         <span>Budget: {}</span>\
         <span>Due: {}</span>\
         <span>{} submissions</span>\
         </div>\
         </div>",
        escape_html(&quest.title),
        escape_html(&quest.category),
        format_usd(quest.budget),
        quest.due_date.format("%b %d, %Y"),
        quest.submission_count,
    )
}

/// Recent responses column, or its empty state
#[must_use]
pub fn responses_section(responses: &[QuestResponse], now: DateTime<Utc>) -> String {
    let mut html = String::from(
        "<section><div class=\"section-header\">\
         <h2 class=\"section-title\">Recent Responses</h2>",
    );
    if !responses.is_empty() {
        html.push_str("<button class=\"view-all\">View all</button>");
    }
    html.push_str("</div>");

    if responses.is_empty() {
        html.push_str("<div class=\"empty-state\"><p>No responses yet.</p></div>");
    } else {
        html.push_str("<div class=\"responses-panel\">");
        for response in responses {
            html.push_str(&response_preview(response, now));
        }
        html.push_str("</div>");
    }

    html.push_str("</section>");
    html
}

/// Single response row in the feed
#[must_use]
pub fn response_preview(response: &QuestResponse, now: DateTime<Utc>) -> String {
    let avatar = response.respondent_avatar.as_deref().map_or_else(
        || {
            format!(
                "<div class=\"avatar\">{}</div>",
                escape_html(&avatar_initials(&response.respondent_name))
            )
        },
        |url| {
            format!(
                "<img class=\"avatar\" src=\"{}\" alt=\"\">",
                escape_html(url)
            )
        },
    );

    format!(
        "<div class=\"response-preview\">\
         {}\
         <div class=\"response-body\">\
         <p class=\"response-name\">{}</p>\
         <p class=\"response-quest\">{}</p>\
         </div>\
         <span class=\"response-time\">{}</span>\
         </div>",
        avatar,
        escape_html(&response.respondent_name),
        escape_html(&response.quest_title),
        format_relative_time(response.submitted_at, now),
    )
}

/// Escape text for safe interpolation into HTML
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
