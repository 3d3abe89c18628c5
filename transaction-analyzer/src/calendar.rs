//! Weekday helpers

use chrono::{DateTime, Datelike, Utc, Weekday};

/// Saturday and Sunday
pub const DEFAULT_WEEKEND: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// Check if the timestamp falls on one of the weekend days (UTC)
pub fn is_weekend(timestamp: &DateTime<Utc>, weekend_days: &[Weekday]) -> bool {
    weekend_days.contains(&timestamp.weekday())
}
