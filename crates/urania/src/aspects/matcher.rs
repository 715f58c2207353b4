//! Aspect matching over a set of named longitudes.

use crate::angles;
use crate::aspects::types::{Aspect, AspectType};
use crate::chart::{PointId, Position};
use crate::error::AstroError;

/// Enumerate qualifying aspects between every unordered pair of
/// positions, within an orb tolerance in degrees.
///
/// Output is in pair-enumeration order (stable, not sorted by orb).
/// The orb must be positive.
pub fn find_aspects(positions: &[Position], orb: f64) -> Result<Vec<Aspect>, AstroError> {
    if orb <= 0.0 {
        return Err(AstroError::NonPositiveOrb { orb });
    }

    let mut found = Vec::new();
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let first = &positions[i];
            let second = &positions[j];
            if let Some(aspect) = match_pair(
                first.point,
                first.longitude,
                second.point,
                second.longitude,
                orb,
            ) {
                found.push(aspect);
            }
        }
    }
    Ok(found)
}

/// Match a single pair of longitudes against the aspect table.
///
/// A pair yields at most one aspect. Should an oversized orb make two
/// table angles qualify, the nearer one wins; an exact tie resolves to
/// the earlier table entry.
pub fn match_pair(
    first: PointId,
    first_longitude: f64,
    second: PointId,
    second_longitude: f64,
    orb: f64,
) -> Option<Aspect> {
    let separation = angles::separation(first_longitude, second_longitude);

    let mut best: Option<(AspectType, f64)> = None;
    for candidate in AspectType::TABLE {
        let deviation = (separation - candidate.angle()).abs();
        if deviation <= orb && best.map_or(true, |(_, best_dev)| deviation < best_dev) {
            best = Some((candidate, deviation));
        }
    }

    best.map(|(aspect_type, deviation)| Aspect {
        first,
        second,
        aspect_type,
        exact_angle: aspect_type.angle(),
        separation,
        orb: deviation,
    })
}
