use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ephemeris::Body;
use crate::zodiac::{self, Sign};

/// The four angular cusps of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartAngle {
    Ascendant,
    Descendant,
    Midheaven,
    ImumCoeli,
}

impl ChartAngle {
    pub const ALL: [ChartAngle; 4] = [
        ChartAngle::Ascendant,
        ChartAngle::Descendant,
        ChartAngle::Midheaven,
        ChartAngle::ImumCoeli,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartAngle::Ascendant => "Ascendant",
            ChartAngle::Descendant => "Descendant",
            ChartAngle::Midheaven => "Midheaven",
            ChartAngle::ImumCoeli => "Imum Coeli",
        }
    }
}

impl fmt::Display for ChartAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier of a charted point: a celestial body or an angular cusp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointId {
    Body(Body),
    Angle(ChartAngle),
}

impl PointId {
    pub fn name(self) -> &'static str {
        match self {
            PointId::Body(body) => body.name(),
            PointId::Angle(angle) => angle.name(),
        }
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified position: derived once per computation, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub point: PointId,
    pub sign: Sign,
    /// 1, 2 or 3.
    pub decan: u8,
    /// Always in [0, 30).
    pub degree_in_sign: f64,
    /// Normalized absolute ecliptic longitude, [0, 360).
    pub longitude: f64,
}

impl Position {
    /// Classify a longitude and attach the point identifier.
    pub fn new(point: PointId, longitude: f64) -> Self {
        let classified = zodiac::classify(longitude);
        Self {
            point,
            sign: classified.sign,
            decan: classified.decan,
            degree_in_sign: classified.degree_in_sign,
            longitude: classified.longitude,
        }
    }
}

/// The four angular cusp longitudes for one instant and location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    pub ascendant: f64,
    pub midheaven: f64,
    pub descendant: f64,
    pub imum_coeli: f64,
}

impl ChartAngles {
    pub fn get(&self, angle: ChartAngle) -> f64 {
        match angle {
            ChartAngle::Ascendant => self.ascendant,
            ChartAngle::Descendant => self.descendant,
            ChartAngle::Midheaven => self.midheaven,
            ChartAngle::ImumCoeli => self.imum_coeli,
        }
    }
}
