//! Human readable "time since" values for activity badges.

use chrono::{DateTime, Utc};

/// Formats the time passed between `since` and `now` using the largest
/// whole unit, e.g. `3 days ago`. Years are counted by calendar date, so a
/// leap day does not shift the boundary. Timestamps in the future read
/// `just now`.
pub fn elapsed(since: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if let Some(years) = now.years_since(since).filter(|years| *years > 0) {
        return format!("{years} years ago");
    }

    let duration = now.signed_duration_since(since);
    if duration.num_days() > 0 {
        format!("{} days ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{} hours ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{} minutes ago", duration.num_minutes())
    } else if duration.num_seconds() > 0 {
        format!("{} seconds ago", duration.num_seconds())
    } else {
        "just now".to_string()
    }
}
