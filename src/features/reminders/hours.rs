//! # Feature: Active Hours Gate
//!
//! Decides whether reminders may be sent right now and, during the nightly
//! quiet window, how long to sleep until sending reopens. Pure time-of-day
//! arithmetic on local wall-clock values; the caller supplies `now`.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Window configurable via ACTIVE_HOURS (was fixed 08:00-22:00)
//! - 1.0.0: Initial creation with the fixed 08:00-22:00 window

use chrono::{Duration as ChronoDuration, NaiveDateTime, NaiveTime};
use std::time::Duration;

/// Daily window in which reminders may be delivered.
///
/// Both bounds are inclusive: sends are permitted at exactly the start and
/// exactly the end of the window. The window must not wrap past midnight
/// (config validation enforces start < end).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveHours {
    start: NaiveTime,
    end: NaiveTime,
}

impl Default for ActiveHours {
    /// The stock window: 08:00 through 22:00 local time.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(8, 0, 0).expect("valid literal time"),
            end: NaiveTime::from_hms_opt(22, 0, 0).expect("valid literal time"),
        }
    }
}

impl ActiveHours {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Whether the given time of day falls inside the window.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }

    /// Whole seconds from `now` until the window next opens.
    ///
    /// Before the opening time this targets the same day; at or past it, the
    /// opening time the next calendar day. Sub-second remainders are
    /// truncated. Dates are treated as plain local time with no daylight
    /// saving adjustment.
    pub fn until_reopen(&self, now: NaiveDateTime) -> Duration {
        let today_open = now.date().and_time(self.start);
        let target = if now.time() < self.start {
            today_open
        } else {
            today_open + ChronoDuration::days(1)
        };
        Duration::from_secs((target - now).num_seconds() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 14)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    fn time(hour: u32, min: u32, sec: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, sec).unwrap()
    }

    #[test]
    fn test_contains_inside_window() {
        let hours = ActiveHours::default();
        assert!(hours.contains(time(8, 0, 0)));
        assert!(hours.contains(time(12, 30, 15)));
        assert!(hours.contains(time(22, 0, 0)));
    }

    #[test]
    fn test_contains_outside_window() {
        let hours = ActiveHours::default();
        assert!(!hours.contains(time(7, 59, 59)));
        assert!(!hours.contains(time(22, 0, 1)));
        assert!(!hours.contains(time(0, 0, 0)));
        assert!(!hours.contains(time(23, 59, 59)));
    }

    #[test]
    fn test_contains_custom_window() {
        let hours = ActiveHours::new(time(10, 0, 0), time(18, 0, 0));
        assert!(hours.contains(time(10, 0, 0)));
        assert!(hours.contains(time(18, 0, 0)));
        assert!(!hours.contains(time(9, 59, 59)));
        assert!(!hours.contains(time(18, 0, 1)));
    }

    #[test]
    fn test_until_reopen_after_open_targets_next_day() {
        let hours = ActiveHours::default();
        // 09:30 -> 08:00 tomorrow: 22h30m
        assert_eq!(hours.until_reopen(at(9, 30, 0)), Duration::from_secs(81000));
        // 23:00 -> 08:00 tomorrow: 9h
        assert_eq!(hours.until_reopen(at(23, 0, 0)), Duration::from_secs(32400));
        // 22:00 -> 08:00 tomorrow: 10h
        assert_eq!(hours.until_reopen(at(22, 0, 0)), Duration::from_secs(36000));
        // Exactly at opening time the target is a full day away
        assert_eq!(hours.until_reopen(at(8, 0, 0)), Duration::from_secs(86400));
    }

    #[test]
    fn test_until_reopen_before_open_targets_same_day() {
        let hours = ActiveHours::default();
        // 07:00 -> 08:00 today: 1h
        assert_eq!(hours.until_reopen(at(7, 0, 0)), Duration::from_secs(3600));
        // Midnight -> 08:00 today: 8h
        assert_eq!(hours.until_reopen(at(0, 0, 0)), Duration::from_secs(28800));
        assert_eq!(hours.until_reopen(at(7, 59, 59)), Duration::from_secs(1));
    }

    #[test]
    fn test_until_reopen_custom_window() {
        let hours = ActiveHours::new(time(10, 0, 0), time(18, 0, 0));
        assert_eq!(hours.until_reopen(at(9, 0, 0)), Duration::from_secs(3600));
        assert_eq!(
            hours.until_reopen(at(18, 30, 0)),
            Duration::from_secs(15 * 3600 + 1800)
        );
    }

    #[test]
    fn test_until_reopen_crosses_month_boundary() {
        let hours = ActiveHours::default();
        let end_of_month = NaiveDate::from_ymd_opt(2024, 5, 31)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        // Noon on May 31 -> 08:00 on June 1: 20h
        assert_eq!(
            hours.until_reopen(end_of_month),
            Duration::from_secs(72000)
        );
    }
}
