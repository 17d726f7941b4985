//! Past-start-time validation.
//!
//! `now` is always supplied by the caller so the check stays deterministic.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::PlanningError;

fn hour_minute(t: NaiveTime) -> (u32, u32) {
    (t.hour(), t.minute())
}

/// True when `selected_date` is today and `selected_time` (hour:minute) is
/// already behind `now`. Other dates never count as past.
pub fn is_start_in_past(
    selected_date: NaiveDate,
    selected_time: NaiveTime,
    now: NaiveDateTime,
) -> bool {
    selected_date == now.date() && hour_minute(selected_time) < hour_minute(now.time())
}

/// Same check, reported as `PlanningError::PastStartTime`.
pub fn ensure_start_not_in_past(
    selected_date: NaiveDate,
    selected_time: NaiveTime,
    now: NaiveDateTime,
) -> Result<(), PlanningError> {
    if is_start_in_past(selected_date, selected_time, now) {
        return Err(PlanningError::PastStartTime {
            date: selected_date,
            time: selected_time,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn now() -> NaiveDateTime {
        date(2024, 1, 1).and_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn test_earlier_today_is_past() {
        assert!(is_start_in_past(date(2024, 1, 1), hm(8, 0), now()));
        assert!(is_start_in_past(date(2024, 1, 1), hm(8, 59), now()));
    }

    #[test]
    fn test_future_date_is_never_past() {
        assert!(!is_start_in_past(date(2024, 1, 2), hm(8, 0), now()));
        assert!(!is_start_in_past(date(2024, 1, 2), hm(0, 0), now()));
    }

    #[test]
    fn test_same_minute_is_not_past() {
        let now = date(2024, 1, 1).and_hms_opt(9, 0, 45).unwrap();
        assert!(!is_start_in_past(date(2024, 1, 1), hm(9, 0), now));
        assert!(!is_start_in_past(date(2024, 1, 1), hm(9, 1), now));
    }

    #[test]
    fn test_other_dates_are_not_checked() {
        assert!(!is_start_in_past(date(2023, 12, 31), hm(8, 0), now()));
    }

    #[test]
    fn test_ensure_reports_past_start() {
        let err = ensure_start_not_in_past(date(2024, 1, 1), hm(7, 30), now()).unwrap_err();
        assert!(matches!(err, PlanningError::PastStartTime { .. }));
        assert!(ensure_start_not_in_past(date(2024, 1, 1), hm(10, 0), now()).is_ok());
    }
}
