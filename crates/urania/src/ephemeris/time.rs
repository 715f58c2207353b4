//! Julian Day conversions.
//!
//! The engine's uniform time axis is the Julian Day in UT; calendar and
//! local-time representations exist only at the boundaries. The
//! conversions here are pure calendar arithmetic anchored at the Unix
//! epoch (JD 2440587.5 = 1970-01-01T00:00:00Z).

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::ephemeris::types::JulianDay;
use crate::error::AstroError;

const JD_UNIX_EPOCH: f64 = 2_440_587.5;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day at 00:00 UT of a calendar date.
pub fn julian_day_from_ymd(year: i32, month: u32, day: u32) -> Result<JulianDay, AstroError> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(AstroError::InvalidDate { year, month, day })?;
    let days = date.signed_duration_since(NaiveDate::default()).num_days() as f64;
    Ok(JD_UNIX_EPOCH + days)
}

/// Julian Day for a UTC instant.
pub fn julian_day_from_utc(datetime: DateTime<Utc>) -> JulianDay {
    JD_UNIX_EPOCH + datetime.timestamp_millis() as f64 / MILLIS_PER_DAY
}

/// Julian Day (UT) for a local civil time and a fractional-hour UTC
/// offset. The offset is subtracted from the local clock reading and
/// the result folded straight into the day fraction, so readings that
/// cross midnight land on the correct day.
pub fn julian_day_from_local(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    utc_offset_hours: f64,
) -> Result<JulianDay, AstroError> {
    let civil_hours =
        hour as f64 + minute as f64 / 60.0 + second as f64 / 3600.0 - utc_offset_hours;
    Ok(julian_day_from_ymd(year, month, day)? + civil_hours / 24.0)
}

/// UTC instant for a Julian Day, at millisecond resolution.
pub fn utc_from_julian_day(jd: JulianDay) -> DateTime<Utc> {
    let millis = ((jd - JD_UNIX_EPOCH) * MILLIS_PER_DAY).round() as i64;
    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Number of days in a calendar month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, AstroError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(AstroError::InvalidMonth { month })?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(AstroError::InvalidMonth { month })?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        let jd = julian_day_from_ymd(2000, 1, 1).unwrap() + 0.5;
        assert_eq!(jd, 2_451_545.0);
    }

    #[test]
    fn local_offset_fold() {
        // 14:00 at UTC+2 is 12:00 UT
        let local = julian_day_from_local(2000, 1, 1, 14, 0, 0, 2.0).unwrap();
        assert_eq!(local, 2_451_545.0);
        // 01:00 at UTC+2 is 23:00 UT of the previous day
        let before_midnight = julian_day_from_local(2000, 1, 1, 1, 0, 0, 2.0).unwrap();
        assert!(before_midnight < julian_day_from_ymd(2000, 1, 1).unwrap());
    }

    #[test]
    fn julian_day_round_trip() {
        let jd = 2_460_000.25;
        let dt = utc_from_julian_day(jd);
        assert!((julian_day_from_utc(dt) - jd).abs() < 1e-8);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2025, 2).unwrap(), 28);
        assert_eq!(days_in_month(2025, 12).unwrap(), 31);
        assert_eq!(days_in_month(2025, 4).unwrap(), 30);
        assert!(days_in_month(2025, 13).is_err());
    }

    #[test]
    fn invalid_date_rejected() {
        assert!(julian_day_from_ymd(2025, 2, 30).is_err());
    }
}
