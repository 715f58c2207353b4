//! Cusp-transit search: coarse scan plus bisection refinement.
//!
//! No closed form exists for cusp-crossing times (the cusp longitude
//! itself moves non-uniformly with sidereal time, and for the Ascendant
//! with latitude-dependent trigonometry), so the finder samples the
//! signed body-minus-cusp difference through the month and bisects
//! every bracketed sign change. The scan cannot miss a crossing as long
//! as the step stays below the minimum plausible time between
//! consecutive crossings for the fastest supported body; two crossings
//! inside one step window collapse into one detected bracket, a known
//! limitation.

use log::debug;

use crate::angles;
use crate::chart::{self, ChartAngle, PointId, Position};
use crate::config::EngineConfig;
use crate::ephemeris::{self, Body, EphemerisProvider, GeoLocation, JulianDay};
use crate::error::AstroError;
use crate::transits::types::{TransitEvent, TransitQuery};

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Find every cusp crossing of a body within a calendar month.
///
/// Scans all four angular cusps from the first local midnight of the
/// month to the first local midnight of the next, then merges the
/// events ordered by instant. Any provider failure aborts the whole
/// search; no partial lists are returned.
pub fn month_transits<P: EphemerisProvider>(
    provider: &P,
    query: &TransitQuery,
    config: &EngineConfig,
) -> Result<Vec<TransitEvent>, AstroError> {
    config.check_step(query.step_minutes)?;

    let start_jd = ephemeris::julian_day_from_ymd(query.year, query.month, 1)?
        - query.utc_offset_hours / 24.0;
    let (next_year, next_month) = if query.month == 12 {
        (query.year + 1, 1)
    } else {
        (query.year, query.month + 1)
    };
    let end_jd = ephemeris::julian_day_from_ymd(next_year, next_month, 1)?
        - query.utc_offset_hours / 24.0;
    let step_days = query.step_minutes as f64 / MINUTES_PER_DAY;

    let mut events = Vec::new();
    for angle in ChartAngle::ALL {
        let track = CuspTrack {
            provider,
            body: query.body,
            angle,
            location: query.location,
        };
        for jd in track.scan(start_jd, end_jd, step_days, config)? {
            events.push(make_event(provider, query, angle, jd)?);
        }
    }
    events.sort_by(|a, b| a.julian_day.total_cmp(&b.julian_day));

    debug!(
        "{} transits of {} over {:04}-{:02}",
        events.len(),
        query.body,
        query.year,
        query.month
    );
    Ok(events)
}

/// One body chased against one cusp: evaluates the signed crossing
/// distance and hunts its zeros.
struct CuspTrack<'a, P> {
    provider: &'a P,
    body: Body,
    angle: ChartAngle,
    location: GeoLocation,
}

impl<P: EphemerisProvider> CuspTrack<'_, P> {
    /// Signed angular distance from the cusp to the body at an
    /// instant, in (-180, 180]. A crossing is a zero of this function.
    fn distance(&self, jd: JulianDay) -> Result<f64, AstroError> {
        let body_longitude = self.provider.longitude_of(self.body, jd)?;
        let cusp_longitude = chart::compute_angles(self.provider, jd, self.location)?
            .get(self.angle);
        Ok(angles::to_signed(body_longitude - cusp_longitude))
    }

    /// Coarse scan: step through the range and bisect every bracketed
    /// sign change, yielding refined crossing instants in order.
    fn scan(
        &self,
        start_jd: JulianDay,
        end_jd: JulianDay,
        step_days: f64,
        config: &EngineConfig,
    ) -> Result<Vec<JulianDay>, AstroError> {
        let mut crossings = Vec::new();
        let mut t_prev = start_jd;
        let mut d_prev = self.distance(t_prev)?;

        loop {
            let t_next = (t_prev + step_days).min(end_jd);
            let d_next = self.distance(t_next)?;

            if is_genuine_crossing(d_prev, d_next) {
                let jd = self.refine(t_prev, d_prev, t_next, config)?;
                debug!("{} crosses {} at JD {:.5}", self.body, self.angle, jd);
                crossings.push(jd);
            }

            if t_next >= end_jd {
                return Ok(crossings);
            }
            t_prev = t_next;
            d_prev = d_next;
        }
    }

    /// Halve the bracket around a sign change until it is at most the
    /// configured width. The iteration cap guarantees termination on
    /// any floating-point input.
    fn refine(
        &self,
        mut t_low: JulianDay,
        mut d_low: f64,
        mut t_high: JulianDay,
        config: &EngineConfig,
    ) -> Result<JulianDay, AstroError> {
        let tolerance_days = config.bisection_tolerance_seconds / SECONDS_PER_DAY;

        for _ in 0..config.max_bisection_iterations {
            if t_high - t_low <= tolerance_days {
                break;
            }
            let t_mid = 0.5 * (t_low + t_high);
            let d_mid = self.distance(t_mid)?;
            if d_low * d_mid <= 0.0 {
                t_high = t_mid;
            } else {
                t_low = t_mid;
                d_low = d_mid;
            }
        }

        Ok(0.5 * (t_low + t_high))
    }
}

/// A sign change brackets a crossing only when the jump between the two
/// samples is small; a jump of nearly a full turn is the signed
/// representation wrapping at +-180, not a zero.
fn is_genuine_crossing(before: f64, after: f64) -> bool {
    (before == 0.0 || before * after < 0.0) && (before - after).abs() < 180.0
}

fn make_event<P: EphemerisProvider>(
    provider: &P,
    query: &TransitQuery,
    angle: ChartAngle,
    jd: JulianDay,
) -> Result<TransitEvent, AstroError> {
    let longitude = provider.longitude_of(query.body, jd)?;
    let position = Position::new(PointId::Body(query.body), longitude);

    let offset_seconds = (query.utc_offset_hours * 3600.0).round() as i32;
    let offset = chrono::FixedOffset::east_opt(offset_seconds).ok_or(
        AstroError::InvalidUtcOffset {
            hours: query.utc_offset_hours,
        },
    )?;
    let datetime_utc = ephemeris::utc_from_julian_day(jd);

    Ok(TransitEvent {
        body: query.body,
        angle,
        julian_day: jd,
        datetime_utc,
        datetime_local: datetime_utc.with_timezone(&offset),
        position,
    })
}
