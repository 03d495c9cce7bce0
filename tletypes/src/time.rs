use crate::constants::{EPOCH_YEAR_PIVOT, GHAA_REFERENCE_UNIX_SECONDS, SECONDS_PER_DAY};
use chrono::prelude::*;
use chrono::Duration;

pub type UtcTimestamp = DateTime<Utc>;

const NANOS_PER_DAY: f64 = SECONDS_PER_DAY * 1E9;

/// 57-99 map to 1957-1999, 00-56 map to 2000-2056
pub const fn resolve_two_digit_year(yy: u8) -> i32 {
    if yy >= EPOCH_YEAR_PIVOT {
        1900 + yy as i32
    } else {
        2000 + yy as i32
    }
}

/// Resolve a year and 1-based fractional day of year into an instant.
///
/// Day 1.0 is January 1st 00:00:00 UTC. Returns `None` when the day is
/// outside the year's calendar or not finite.
pub fn epoch_instant(year: i32, day_of_year: f64) -> Option<UtcTimestamp> {
    if !day_of_year.is_finite() || day_of_year < 1.0 {
        return None;
    }
    let day_index = day_of_year.trunc() as u32;
    // Rejects day 366 on non-leap years
    NaiveDate::from_yo_opt(year, day_index)?;

    let start = NaiveDate::from_yo_opt(year, 1)?.and_hms_opt(0, 0, 0)?.and_utc();
    let offset = Duration::nanoseconds(((day_of_year - 1.0) * NANOS_PER_DAY).round() as i64);
    start.checked_add_signed(offset)
}

/// Signed seconds from `from` to `to`, negative when `to` is earlier
pub fn seconds_between(from: UtcTimestamp, to: UtcTimestamp) -> f64 {
    let d = to.signed_duration_since(from);
    match d.num_nanoseconds() {
        Some(ns) => ns as f64 * 1E-9,
        None => d.num_milliseconds() as f64 * 1E-3,
    }
}

/// The fixed instant the Greenwich hour angle is referenced to
pub fn ghaa_reference_instant() -> UtcTimestamp {
    DateTime::from_timestamp(GHAA_REFERENCE_UNIX_SECONDS, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn two_digit_year_pivot() {
        assert_eq!(resolve_two_digit_year(57), 1957);
        assert_eq!(resolve_two_digit_year(99), 1999);
        assert_eq!(resolve_two_digit_year(56), 2056);
        assert_eq!(resolve_two_digit_year(0), 2000);
        assert_eq!(resolve_two_digit_year(8), 2008);
    }

    #[test]
    fn day_one_is_new_year() {
        let t = epoch_instant(2023, 1.0).unwrap();
        assert_eq!(t, "2023-01-01T00:00:00Z".parse::<UtcTimestamp>().unwrap());
    }

    #[test]
    fn fractional_day() {
        let t = epoch_instant(2008, 264.5).unwrap();
        assert_eq!(t, "2008-09-20T12:00:00Z".parse::<UtcTimestamp>().unwrap());
    }

    #[test]
    fn rejects_out_of_calendar_days() {
        assert!(epoch_instant(2023, 0.5).is_none());
        assert!(epoch_instant(2023, 366.2).is_none());
        assert!(epoch_instant(2024, 366.2).is_some());
        assert!(epoch_instant(2024, 367.0).is_none());
        assert!(epoch_instant(2024, f64::NAN).is_none());
    }

    #[test]
    fn signed_seconds() {
        let a = epoch_instant(2023, 10.0).unwrap();
        let b = epoch_instant(2023, 10.5).unwrap();
        assert_relative_eq!(seconds_between(a, b), 43_200.0);
        assert_relative_eq!(seconds_between(b, a), -43_200.0);
        assert_eq!(seconds_between(a, a), 0.0);
    }

    #[test]
    fn ghaa_reference_is_j2000() {
        assert_eq!(
            ghaa_reference_instant(),
            "2000-01-01T12:00:00Z".parse::<UtcTimestamp>().unwrap()
        );
    }
}
