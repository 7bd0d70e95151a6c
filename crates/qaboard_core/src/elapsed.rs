//! Elapsed-time display strings for post metadata.
//!
//! Rules, evaluated in order against the whole-second difference:
//! - under a minute: `<N> seconds ago`
//! - under an hour: `<N> minutes ago`
//! - under a day: `<N> hours ago`
//! - same calendar year as `now`: `<Mon> <DD> at <HH:MM>`
//! - otherwise: `<Mon> <DD>, <YYYY> at <HH:MM>`
//!
//! Calendar fields are read in the time zone of the arguments.

use crate::model::Timestamp;
use chrono::{DateTime, Datelike, Local, TimeZone};
use std::fmt::Display;

const SECONDS_PER_MINUTE: i64 = 60;
const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;

/// Formats the time between `then` and `now`.
pub fn format_elapsed<Tz>(then: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let diff_seconds = (now.timestamp_millis() - then.timestamp_millis()).div_euclid(1000);
    if diff_seconds < SECONDS_PER_MINUTE {
        return format!("{diff_seconds} seconds ago");
    }

    let diff_minutes = diff_seconds / SECONDS_PER_MINUTE;
    if diff_minutes < MINUTES_PER_HOUR {
        return format!("{diff_minutes} minutes ago");
    }

    let diff_hours = diff_minutes / MINUTES_PER_HOUR;
    if diff_hours < HOURS_PER_DAY {
        return format!("{diff_hours} hours ago");
    }

    if then.year() == now.year() {
        then.format("%b %d at %H:%M").to_string()
    } else {
        then.format("%b %d, %Y at %H:%M").to_string()
    }
}

/// Formats the time since `then` against the current local clock.
pub fn time_elapsed_since(then: Timestamp) -> String {
    let now = Local::now();
    format_elapsed(&then.with_timezone(&Local), &now)
}
