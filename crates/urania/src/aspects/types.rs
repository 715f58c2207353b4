use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chart::PointId;

/// The five major aspects, in fixed table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectType {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectType {
    /// Candidate angles are tested in this order; exact ties between
    /// two angles resolve to the earlier entry.
    pub const TABLE: [AspectType; 5] = [
        AspectType::Conjunction,
        AspectType::Sextile,
        AspectType::Square,
        AspectType::Trine,
        AspectType::Opposition,
    ];

    /// The aspect's defining angle in degrees.
    pub fn angle(self) -> f64 {
        match self {
            AspectType::Conjunction => 0.0,
            AspectType::Sextile => 60.0,
            AspectType::Square => 90.0,
            AspectType::Trine => 120.0,
            AspectType::Opposition => 180.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectType::Conjunction => "Conjunction",
            AspectType::Sextile => "Sextile",
            AspectType::Square => "Square",
            AspectType::Trine => "Trine",
            AspectType::Opposition => "Opposition",
        }
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A qualifying angular relationship between two charted points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub first: PointId,
    pub second: PointId,
    pub aspect_type: AspectType,
    /// The aspect's defining angle.
    pub exact_angle: f64,
    /// Shortest-arc separation of the pair, in [0, 180].
    pub separation: f64,
    /// Absolute deviation from the exact angle.
    pub orb: f64,
}
