// SPDX-License-Identifier: MPL-2.0
//! Relative post-time formatting ("3 days ago").
//!
//! The computation is split from the rendering: [`TimeAgo::between`] picks
//! the largest unit that fits, [`fmt::Display`] renders the English phrase,
//! and the UI localizes the same value through Fluent.

use chrono::{DateTime, Utc};
use std::fmt;

/// Calendar-ish units, from largest to smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    /// Units in the order they are tried.
    pub const DESCENDING: [TimeUnit; 7] = [
        TimeUnit::Year,
        TimeUnit::Month,
        TimeUnit::Week,
        TimeUnit::Day,
        TimeUnit::Hour,
        TimeUnit::Minute,
        TimeUnit::Second,
    ];

    /// Length of one unit in seconds.
    #[must_use]
    pub fn seconds(self) -> i64 {
        match self {
            TimeUnit::Year => 31_536_000,
            TimeUnit::Month => 2_592_000,
            TimeUnit::Week => 604_800,
            TimeUnit::Day => 86_400,
            TimeUnit::Hour => 3_600,
            TimeUnit::Minute => 60,
            TimeUnit::Second => 1,
        }
    }

    /// Singular English name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Year => "year",
            TimeUnit::Month => "month",
            TimeUnit::Week => "week",
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
        }
    }

    /// Fluent message key used to localize this unit.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            TimeUnit::Year => "time-ago-years",
            TimeUnit::Month => "time-ago-months",
            TimeUnit::Week => "time-ago-weeks",
            TimeUnit::Day => "time-ago-days",
            TimeUnit::Hour => "time-ago-hours",
            TimeUnit::Minute => "time-ago-minutes",
            TimeUnit::Second => "time-ago-seconds",
        }
    }
}

/// How long ago something happened, expressed in a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAgo {
    pub count: u64,
    pub unit: TimeUnit,
}

impl TimeAgo {
    /// Computes the relative time between `posted_at` and `now`.
    ///
    /// A `posted_at` later than `now` degrades to `0 seconds`.
    #[must_use]
    pub fn between(posted_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let delta = (now - posted_at).num_seconds();
        if delta <= 0 {
            return Self::zero();
        }

        TimeUnit::DESCENDING
            .iter()
            .find_map(|&unit| {
                let quotient = delta / unit.seconds();
                (quotient >= 1).then(|| TimeAgo {
                    count: quotient.unsigned_abs(),
                    unit,
                })
            })
            .unwrap_or_else(Self::zero)
    }

    fn zero() -> Self {
        TimeAgo {
            count: 0,
            unit: TimeUnit::Second,
        }
    }
}

impl fmt::Display for TimeAgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.count == 1 { "" } else { "s" };
        write!(f, "{} {}{} ago", self.count, self.unit.name(), plural)
    }
}

/// Formats `posted_at` relative to `now` as an English phrase.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use tubegrid::format::format_time_ago;
///
/// let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
/// assert_eq!(format_time_ago(now - Duration::days(2), now), "2 days ago");
/// ```
#[must_use]
pub fn format_time_ago(posted_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    TimeAgo::between(posted_at, now).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn ninety_seconds_is_one_minute() {
        let now = now();
        assert_eq!(
            format_time_ago(now - Duration::seconds(90), now),
            "1 minute ago"
        );
    }

    #[test]
    fn two_days_uses_plural() {
        let now = now();
        assert_eq!(format_time_ago(now - Duration::days(2), now), "2 days ago");
    }

    #[test]
    fn same_instant_is_zero_seconds() {
        let now = now();
        assert_eq!(format_time_ago(now, now), "0 seconds ago");
    }

    #[test]
    fn future_timestamp_degrades_to_zero_seconds() {
        let now = now();
        let ago = TimeAgo::between(now + Duration::days(3), now);
        assert_eq!(ago.unit, TimeUnit::Second);
        assert_eq!(ago.count, 0);
        assert_eq!(ago.to_string(), "0 seconds ago");
    }

    #[test]
    fn picks_largest_fitting_unit() {
        let now = now();
        assert_eq!(
            TimeAgo::between(now - Duration::days(8), now),
            TimeAgo {
                count: 1,
                unit: TimeUnit::Week
            }
        );
        assert_eq!(
            TimeAgo::between(now - Duration::days(45), now),
            TimeAgo {
                count: 1,
                unit: TimeUnit::Month
            }
        );
        assert_eq!(
            TimeAgo::between(now - Duration::days(800), now),
            TimeAgo {
                count: 2,
                unit: TimeUnit::Year
            }
        );
    }

    #[test]
    fn singular_has_no_trailing_s() {
        let now = now();
        assert_eq!(format_time_ago(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(format_time_ago(now - Duration::seconds(1), now), "1 second ago");
    }

    #[test]
    fn just_under_a_unit_falls_to_the_next_one() {
        let now = now();
        assert_eq!(
            format_time_ago(now - Duration::seconds(3599), now),
            "59 minutes ago"
        );
    }
}
