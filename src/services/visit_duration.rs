//! Per-visit duration parsing.
//!
//! The plan form offers free text such as "30 minutes" or "1 hour". Only
//! the leading number and the first unit word are read; anything that
//! does not match falls back to one hour instead of failing the plan, and
//! so does an amount longer than a year.

use tracing::warn;

use crate::defaults::{DEFAULT_VISIT_DURATION_SECONDS, MAX_VISIT_DURATION_SECONDS};

/// Convert a visit duration like "45 minutes" or "1.5 hours" to seconds.
pub fn parse_visit_duration(text: &str) -> u64 {
    let normalized = text.trim().to_lowercase();

    let numeric_len = normalized
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(normalized.len());
    let amount = normalized[..numeric_len].parse::<f64>().ok();

    let unit_seconds = if normalized.contains("hour") {
        Some(3600.0)
    } else if normalized.contains("minute") {
        Some(60.0)
    } else {
        None
    };

    match (amount, unit_seconds) {
        (Some(amount), Some(unit)) if amount.is_finite() => {
            let seconds = (amount * unit).round();
            if seconds <= MAX_VISIT_DURATION_SECONDS as f64 {
                return seconds as u64;
            }
            warn!(
                "Visit duration {:?} exceeds {}s, defaulting to {}s",
                text, MAX_VISIT_DURATION_SECONDS, DEFAULT_VISIT_DURATION_SECONDS
            );
            DEFAULT_VISIT_DURATION_SECONDS
        }
        _ => {
            warn!(
                "Unrecognised visit duration {:?}, defaulting to {}s",
                text, DEFAULT_VISIT_DURATION_SECONDS
            );
            DEFAULT_VISIT_DURATION_SECONDS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes() {
        assert_eq!(parse_visit_duration("30 minutes"), 1800);
        assert_eq!(parse_visit_duration("1 minute"), 60);
        assert_eq!(parse_visit_duration("45 Minutes"), 2700);
    }

    #[test]
    fn test_hours() {
        assert_eq!(parse_visit_duration("1 hour"), 3600);
        assert_eq!(parse_visit_duration("2 hours"), 7200);
        assert_eq!(parse_visit_duration("1.5 hours"), 5400);
        assert_eq!(parse_visit_duration("  3 hours  "), 10_800);
    }

    #[test]
    fn test_leading_number_and_first_unit_only() {
        // Only the leading amount counts; the hour unit wins.
        assert_eq!(parse_visit_duration("1 hour 30 minutes"), 3600);
    }

    #[test]
    fn test_unrecognised_falls_back_to_one_hour() {
        assert_eq!(parse_visit_duration(""), DEFAULT_VISIT_DURATION_SECONDS);
        assert_eq!(parse_visit_duration("half a day"), DEFAULT_VISIT_DURATION_SECONDS);
        assert_eq!(parse_visit_duration("90"), DEFAULT_VISIT_DURATION_SECONDS);
        assert_eq!(parse_visit_duration("hours"), DEFAULT_VISIT_DURATION_SECONDS);
        assert_eq!(parse_visit_duration("30 mins"), DEFAULT_VISIT_DURATION_SECONDS);
    }

    #[test]
    fn test_long_visits_are_not_clamped() {
        assert_eq!(parse_visit_duration("26 hours"), 26 * 3600);
        assert_eq!(parse_visit_duration("8784 hours"), MAX_VISIT_DURATION_SECONDS);
    }

    #[test]
    fn test_amounts_beyond_a_year_fall_back() {
        assert_eq!(parse_visit_duration("8785 hours"), DEFAULT_VISIT_DURATION_SECONDS);
        assert_eq!(
            parse_visit_duration("100000000000 hours"),
            DEFAULT_VISIT_DURATION_SECONDS
        );
        assert_eq!(
            parse_visit_duration("99999999999999999999999 hours"),
            DEFAULT_VISIT_DURATION_SECONDS
        );
    }
}
