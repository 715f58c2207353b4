//! Default ephemeris provider backed by the `astro` crate.
//!
//! The `astro` crate evaluates the Meeus/VSOP87 series in pure Rust and
//! needs no external data files, so the adapter is a plain value that
//! can be constructed once per process and shared read-only.

use astro::planet::Planet;

use crate::angles;
use crate::ephemeris::types::{Body, EphemerisProvider, JulianDay};
use crate::error::AstroError;

/// Meeus-series ephemeris adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeeusEphemeris;

impl MeeusEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl EphemerisProvider for MeeusEphemeris {
    fn longitude_of(&self, body: Body, jd: JulianDay) -> Result<f64, AstroError> {
        let lon_rad = match body {
            Body::Sun => {
                let (point, _) = astro::sun::geocent_ecl_pos(jd);
                point.long
            }
            Body::Moon => {
                let (point, _) = astro::lunar::geocent_ecl_pos(jd);
                point.long
            }
            Body::Pluto => {
                let (long, lat, radius) = astro::pluto::heliocent_pos(jd);
                geocentric_longitude(long, lat, radius, jd)
            }
            _ => {
                let (long, lat, radius) = astro::planet::heliocent_coords(&planet_of(body), jd);
                geocentric_longitude(long, lat, radius, jd)
            }
        };

        let lon = angles::normalize(lon_rad.to_degrees());
        if !lon.is_finite() {
            return Err(AstroError::NonFiniteLongitude {
                body: body.name().to_string(),
                julian_day: jd,
            });
        }
        Ok(lon)
    }

    fn obliquity(&self, jd: JulianDay) -> f64 {
        astro::ecliptic::mn_oblq_IAU(jd).to_degrees()
    }

    fn sidereal_time(&self, jd: JulianDay, geo_longitude: f64) -> f64 {
        angles::normalize(astro::time::mn_sidr(jd).to_degrees() + geo_longitude)
    }
}

fn planet_of(body: Body) -> Planet {
    match body {
        Body::Mercury => Planet::Mercury,
        Body::Venus => Planet::Venus,
        Body::Mars => Planet::Mars,
        Body::Jupiter => Planet::Jupiter,
        Body::Saturn => Planet::Saturn,
        Body::Uranus => Planet::Uranus,
        Body::Neptune => Planet::Neptune,
        // Sun, Moon and Pluto are handled before this mapping is consulted
        Body::Sun | Body::Moon | Body::Pluto => unreachable!("no VSOP87 series for {body}"),
    }
}

/// Reduce heliocentric ecliptic coordinates (radians, AU) to a
/// geocentric ecliptic longitude in radians, by differencing against
/// the heliocentric position of the Earth at the same instant.
fn geocentric_longitude(long: f64, lat: f64, radius: f64, jd: JulianDay) -> f64 {
    let (earth_long, earth_lat, earth_radius) =
        astro::planet::heliocent_coords(&Planet::Earth, jd);

    let x = radius * lat.cos() * long.cos() - earth_radius * earth_lat.cos() * earth_long.cos();
    let y = radius * lat.cos() * long.sin() - earth_radius * earth_lat.cos() * earth_long.sin();

    y.atan2(x)
}
