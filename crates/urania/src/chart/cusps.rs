//! Angular cusp computation.
//!
//! The Midheaven follows from local sidereal time and the obliquity of
//! the ecliptic; the Ascendant additionally needs the geographic
//! latitude. Both use the standard spherical-astronomy arctangent
//! formulas with the two-argument arctangent supplying the quadrant.
//! Descendant and Imum Coeli are the opposite points.

use log::debug;

use crate::angles;
use crate::chart::types::ChartAngles;
use crate::ephemeris::{EphemerisProvider, GeoLocation, JulianDay};
use crate::error::AstroError;

/// Compute the four angular cusps for a UT instant and location.
///
/// The Ascendant formula is singular at the poles; latitudes of
/// exactly +-90 are rejected rather than producing NaN.
pub fn compute_angles<P: EphemerisProvider>(
    provider: &P,
    jd: JulianDay,
    location: GeoLocation,
) -> Result<ChartAngles, AstroError> {
    if location.latitude.abs() >= 90.0 {
        return Err(AstroError::PolarLatitude {
            latitude: location.latitude,
        });
    }

    let theta = provider.sidereal_time(jd, location.longitude).to_radians();
    let eps = provider.obliquity(jd).to_radians();
    let phi = location.latitude.to_radians();

    let midheaven = angles::normalize(theta.sin().atan2(theta.cos() * eps.cos()).to_degrees());
    let ascendant = angles::normalize(
        theta
            .cos()
            .atan2(-(theta.sin() * eps.cos() + phi.tan() * eps.sin()))
            .to_degrees(),
    );

    if !ascendant.is_finite() || !midheaven.is_finite() {
        return Err(AstroError::DegenerateCusp { julian_day: jd });
    }

    debug!(
        "angles at JD {:.5}: asc {:.4} mc {:.4}",
        jd, ascendant, midheaven
    );

    Ok(ChartAngles {
        ascendant,
        midheaven,
        descendant: angles::normalize(ascendant + 180.0),
        imum_coeli: angles::normalize(midheaven + 180.0),
    })
}
