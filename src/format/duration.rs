// SPDX-License-Identifier: MPL-2.0
//! Clip duration formatting.

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MINUTE: u64 = 60;

/// Formats a duration in seconds as a colon-separated clock string.
///
/// - With hours: `H:MM:SS` (hours unpadded)
/// - Without hours: `M:SS` (minutes unpadded)
///
/// # Examples
///
/// ```
/// use tubegrid::format::format_duration;
///
/// assert_eq!(format_duration(5), "0:05");
/// assert_eq!(format_duration(3725), "1:02:05");
/// ```
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / SECS_PER_HOUR;
    let minutes = (seconds % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let secs = seconds % SECS_PER_MINUTE;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_as_minutes_and_seconds() {
        assert_eq!(format_duration(0), "0:00");
    }

    #[test]
    fn under_one_hour_pads_seconds_only() {
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(600), "10:00");
    }

    #[test]
    fn exactly_one_hour_switches_to_hour_format() {
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3599), "59:59");
    }

    #[test]
    fn hours_pad_minutes_and_seconds() {
        assert_eq!(format_duration(3725), "1:02:05");
        assert_eq!(format_duration(36_000 + 61), "10:01:01");
    }

    #[test]
    fn very_long_durations_keep_unpadded_hours() {
        assert_eq!(format_duration(100 * 3600), "100:00:00");
    }
}
