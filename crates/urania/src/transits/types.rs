use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::chart::{ChartAngle, Position};
use crate::ephemeris::{Body, GeoLocation, JulianDay};

/// A month-long transit search: which body, where, and how finely to
/// scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitQuery {
    pub year: i32,
    pub month: u32,
    pub location: GeoLocation,
    pub body: Body,
    /// Fractional hours east of UTC; bounds the local month.
    pub utc_offset_hours: f64,
    /// Coarse-scan step in minutes, within the configured bounds.
    pub step_minutes: u32,
}

/// One instant at which a body's longitude equals a cusp's longitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitEvent {
    pub body: Body,
    pub angle: ChartAngle,
    pub julian_day: JulianDay,
    pub datetime_utc: DateTime<Utc>,
    pub datetime_local: DateTime<FixedOffset>,
    /// The body's classified position at the refined instant.
    pub position: Position,
}
