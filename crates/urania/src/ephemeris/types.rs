use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AstroError;

/// A point in time as a Julian Day number in Universal Time.
///
/// The fractional part encodes time-of-day. Values are always
/// UT-normalized before reaching a provider; they never carry a
/// timezone.
pub type JulianDay = f64;

/// Geographic coordinates, latitude in [-90, 90], longitude in
/// [-180, 180] with east positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The supported celestial bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = AstroError;

    /// Resolve a body name from the request boundary, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Body::ALL
            .iter()
            .copied()
            .find(|body| body.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AstroError::UnknownBody {
                name: s.to_string(),
            })
    }
}

/// The raw ephemeris primitive the engine consumes.
///
/// Implementations are stateless and reentrant; the engine treats every
/// call as a pure function of its arguments. A handle is passed
/// explicitly into the chart-angle and transit computations rather than
/// reached through global state.
pub trait EphemerisProvider {
    /// Instantaneous geocentric ecliptic longitude of a body, in
    /// degrees [0, 360), at a UT Julian Day.
    fn longitude_of(&self, body: Body, jd: JulianDay) -> Result<f64, AstroError>;

    /// Obliquity of the ecliptic in degrees.
    fn obliquity(&self, jd: JulianDay) -> f64;

    /// Local sidereal time in degrees [0, 360) for a geographic
    /// longitude (east positive).
    fn sidereal_time(&self, jd: JulianDay, geo_longitude: f64) -> f64;
}
