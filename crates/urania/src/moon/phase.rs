//! Lunar phase descriptors from the Sun-Moon angular separation.
//!
//! The phase angle alone drives every descriptor. Age in days uses the
//! mean synodic month with no perturbation correction, a documented
//! approximation good to roughly half a day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::angles;
use crate::ephemeris::{self, Body, EphemerisProvider, JulianDay};
use crate::error::AstroError;

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588;

/// The eight named phases in waxing order, each owning a 45-degree band
/// centered on its midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseName {
    pub const ALL: [PhaseName; 8] = [
        PhaseName::NewMoon,
        PhaseName::WaxingCrescent,
        PhaseName::FirstQuarter,
        PhaseName::WaxingGibbous,
        PhaseName::FullMoon,
        PhaseName::WaningGibbous,
        PhaseName::LastQuarter,
        PhaseName::WaningCrescent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PhaseName::NewMoon => "New Moon",
            PhaseName::WaxingCrescent => "Waxing Crescent",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::FullMoon => "Full Moon",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::LastQuarter => "Last Quarter",
            PhaseName::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lunar phase descriptors for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPhase {
    pub phase: PhaseName,
    /// Elapsed days since the last New Moon, in [0, synodic month).
    pub age_days: f64,
    /// Illuminated fraction of the disc, in [0, 1].
    pub illuminated_fraction: f64,
    /// age_days divided by the synodic month.
    pub cycle_fraction: f64,
}

/// Derive phase descriptors from Sun and Moon ecliptic longitudes.
pub fn phase_from_longitudes(sun_longitude: f64, moon_longitude: f64) -> MoonPhase {
    let phase_angle = angles::normalize(moon_longitude - sun_longitude);
    let illuminated_fraction = (1.0 - phase_angle.to_radians().cos()) / 2.0;
    let band = ((phase_angle / 45.0).round() as usize) % 8;
    let cycle_fraction = phase_angle / 360.0;
    MoonPhase {
        phase: PhaseName::ALL[band],
        age_days: cycle_fraction * SYNODIC_MONTH_DAYS,
        illuminated_fraction,
        cycle_fraction,
    }
}

/// Compute the lunar phase at a UT Julian Day.
pub fn moon_phase_at<P: EphemerisProvider>(
    provider: &P,
    jd: JulianDay,
) -> Result<MoonPhase, AstroError> {
    let sun = provider.longitude_of(Body::Sun, jd)?;
    let moon = provider.longitude_of(Body::Moon, jd)?;
    Ok(phase_from_longitudes(sun, moon))
}

/// One calendar day of a monthly phase listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyMoonPhase {
    pub date: NaiveDate,
    pub julian_day: JulianDay,
    pub phase: MoonPhase,
}

/// Lunar phases for every day of a calendar month, sampled at 12:00 UT.
///
/// Daily granularity is a deliberate precision trade-off for calendar
/// display; the listing has exactly as many entries as the month has
/// days.
pub fn month_moon_phases<P: EphemerisProvider>(
    provider: &P,
    year: i32,
    month: u32,
) -> Result<Vec<DailyMoonPhase>, AstroError> {
    let day_count = ephemeris::days_in_month(year, month)?;
    let mut listing = Vec::with_capacity(day_count as usize);
    for day in 1..=day_count {
        let jd = ephemeris::julian_day_from_ymd(year, month, day)? + 0.5;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(AstroError::InvalidDate { year, month, day })?;
        listing.push(DailyMoonPhase {
            date,
            julian_day: jd,
            phase: moon_phase_at(provider, jd)?,
        });
    }
    Ok(listing)
}
