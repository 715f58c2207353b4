pub mod cards;
pub mod phase;

pub use cards::lenormand_card;
pub use phase::{
    month_moon_phases, moon_phase_at, phase_from_longitudes, DailyMoonPhase, MoonPhase, PhaseName,
    SYNODIC_MONTH_DAYS,
};

use serde::{Deserialize, Serialize};

use crate::angles;
use crate::chart::ChartAngles;

/// Which half of the chart the Moon occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartHalf {
    /// Between the Ascendant and the Descendant, measured forward.
    Rising,
    /// Between the Descendant and the Ascendant.
    Setting,
}

/// Locate the Moon relative to the horizon axis of a chart.
pub fn moon_chart_half(moon_longitude: f64, chart_angles: &ChartAngles) -> ChartHalf {
    let from_ascendant = angles::normalize(moon_longitude - chart_angles.ascendant);
    let axis_span = angles::normalize(chart_angles.descendant - chart_angles.ascendant);
    if from_ascendant < axis_span {
        ChartHalf::Rising
    } else {
        ChartHalf::Setting
    }
}
