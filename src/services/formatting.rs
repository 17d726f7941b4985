//! Text formatting for durations, distances, costs and itinerary clock times.
//!
//! Every duration shown anywhere in a schedule goes through [`format_duration`].

use chrono::{NaiveDate, NaiveDateTime};

use crate::defaults::{MILES_PER_METER, SECONDS_PER_DAY};
use crate::types::ScheduleTime;

/// Format seconds as "Xh Ym", dropping zero leading units.
///
/// Sub-minute values are shown in seconds; zero is "0m".
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        "0m".to_string()
    }
}

pub fn meters_to_miles(meters: u64) -> f64 {
    meters as f64 * MILES_PER_METER
}

/// Format meters as miles with one decimal place.
pub fn format_distance(meters: u64) -> String {
    format!("{:.1} mi", meters_to_miles(meters))
}

/// Mileage cost for a distance at `rate_per_mile`, as dollars and cents.
pub fn estimate_cost(meters: u64, rate_per_mile: f64) -> String {
    format!("${:.2}", meters_to_miles(meters) * rate_per_mile)
}

/// Total elapsed time in days/hours/minutes.
pub fn format_visit_days(seconds: u64) -> String {
    let days = seconds / SECONDS_PER_DAY;
    if days == 0 {
        return format_duration(seconds);
    }
    let rest = seconds % SECONDS_PER_DAY;
    format!("{}d {}h {}m", days, rest / 3600, (rest % 3600) / 60)
}

/// 12-hour clock text ("09:30 AM").
pub fn format_clock_time(at: NaiveDateTime) -> String {
    at.format("%I:%M %p").to_string()
}

/// Stamp `at` with its day offset relative to midnight of `start_date`.
pub fn schedule_time(at: NaiveDateTime, start_date: NaiveDate) -> ScheduleTime {
    let day_offset = (at.date() - start_date).num_days();
    let clock = format_clock_time(at);
    let display = if day_offset >= 1 {
        format!("{} (+{}d)", clock, day_offset)
    } else {
        clock
    };

    ScheduleTime {
        at,
        day_offset,
        display,
    }
}
