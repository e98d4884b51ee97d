//! Utility functions for the Quid creator dashboard

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Format a timestamp relative to a reference instant
///
/// Produces the short labels shown next to quest responses, such as
/// `"just now"`, `"5m ago"`, `"2h ago"`, or `"3d ago"`.
#[must_use]
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let seconds = elapsed.num_seconds().max(0);

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3600)
    } else {
        format!("{}d ago", seconds / 86_400)
    }
}

/// Format a monetary amount as a USD display string
///
/// Renders two decimal places with thousands separators, e.g.
/// `2,150.02 USD`.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let raw = format!("{rounded:.2}");

    let (sign, digits) = raw
        .strip_prefix('-')
        .map_or(("", raw.as_str()), |rest| ("-", rest));
    let (whole, frac) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac} USD")
}

/// Derive up to two uppercase initials from a display name
///
/// Used for avatar placeholders when a respondent has no avatar image.
#[must_use]
pub fn avatar_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .map(|c| c.to_uppercase().to_string())
        .take(2)
        .collect()
}
