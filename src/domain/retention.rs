//! Human-readable retention durations.
//!
//! Turns an `Expire` rule's `everySeconds` into the string shown in the
//! retention column, e.g. `3600` → `"1 hour"` and `90061` →
//! `"1 day 1 hour 1 minute 1 second"`.

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: u64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: u64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: u64 = 86400;

/// Retention string for buckets without an `Expire` rule.
pub const FOREVER: &str = "forever";

const UNITS: [(u64, &str); 4] = [
    (SECONDS_PER_DAY, "day"),
    (SECONDS_PER_HOUR, "hour"),
    (SECONDS_PER_MINUTE, "minute"),
    (1, "second"),
];

/// Formats a retention interval for display.
///
/// The interval is split into days, hours, minutes and seconds. Each non-zero
/// unit is rendered as `"<n> <unit>"` (pluralized when `n != 1`), largest unit
/// first, separated by single spaces. A zero interval renders as
/// `"0 seconds"`, so the result is never empty.
///
/// # Examples
///
/// ```
/// use bucket_list::domain::format_duration;
///
/// assert_eq!(format_duration(3600), "1 hour");
/// assert_eq!(format_duration(604_800), "7 days");
/// assert_eq!(format_duration(90_000), "1 day 1 hour");
/// assert_eq!(format_duration(0), "0 seconds");
/// ```
#[must_use]
pub fn format_duration(every_seconds: u64) -> String {
    if every_seconds == 0 {
        return "0 seconds".to_string();
    }

    let mut remaining = every_seconds;
    let mut parts = Vec::with_capacity(UNITS.len());

    for (size, unit) in UNITS {
        let count = remaining / size;
        remaining %= size;
        if count == 0 {
            continue;
        }
        let plural = if count == 1 { "" } else { "s" };
        parts.push(format!("{count} {unit}{plural}"));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_single_units() {
        assert_eq!(format_duration(1), "1 second");
        assert_eq!(format_duration(59), "59 seconds");
        assert_eq!(format_duration(60), "1 minute");
        assert_eq!(format_duration(7200), "2 hours");
        assert_eq!(format_duration(86_400), "1 day");
    }

    #[test]
    fn formats_mixed_units_largest_first() {
        assert_eq!(format_duration(90_061), "1 day 1 hour 1 minute 1 second");
        assert_eq!(format_duration(3 * 86_400 + 30 * 60), "3 days 30 minutes");
    }

    #[test]
    fn zero_is_non_empty() {
        assert_eq!(format_duration(0), "0 seconds");
    }

    proptest! {
        #[test]
        fn prop_format_is_deterministic_and_non_empty(secs in any::<u64>()) {
            let first = format_duration(secs);
            prop_assert!(!first.is_empty());
            prop_assert_eq!(first, format_duration(secs));
        }
    }
}
