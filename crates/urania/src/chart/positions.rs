//! Whole-chart position computation: the ten bodies plus the four
//! angular cusps, each classified onto the zodiac wheel.

use serde::{Deserialize, Serialize};

use crate::chart::cusps;
use crate::chart::types::{ChartAngle, ChartAngles, PointId, Position};
use crate::ephemeris::{Body, EphemerisProvider, GeoLocation, JulianDay};
use crate::error::AstroError;

/// All positions for one instant and location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    pub julian_day: JulianDay,
    /// The ten bodies followed by the four cusps, in fixed order.
    pub positions: Vec<Position>,
    pub angles: ChartAngles,
}

impl Chart {
    pub fn position_of(&self, point: PointId) -> Option<&Position> {
        self.positions.iter().find(|p| p.point == point)
    }
}

/// Compute every body and cusp position for a UT instant and location.
pub fn compute_chart<P: EphemerisProvider>(
    provider: &P,
    jd: JulianDay,
    location: GeoLocation,
) -> Result<Chart, AstroError> {
    let angles = cusps::compute_angles(provider, jd, location)?;

    let mut positions = Vec::with_capacity(Body::ALL.len() + ChartAngle::ALL.len());
    for body in Body::ALL {
        let longitude = provider.longitude_of(body, jd)?;
        positions.push(Position::new(PointId::Body(body), longitude));
    }
    for angle in ChartAngle::ALL {
        positions.push(Position::new(PointId::Angle(angle), angles.get(angle)));
    }

    Ok(Chart {
        julian_day: jd,
        positions,
        angles,
    })
}
