pub mod angles;
pub mod aspects;
pub mod chart;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod moon;
pub mod transits;
pub mod zodiac;

pub use aspects::{find_aspects, Aspect, AspectType};
pub use chart::{compute_angles, compute_chart, Chart, ChartAngle, ChartAngles, PointId, Position};
pub use config::EngineConfig;
pub use ephemeris::{Body, EphemerisProvider, GeoLocation, JulianDay, MeeusEphemeris};
pub use error::{AstroError, ErrorKind};
pub use moon::{moon_phase_at, month_moon_phases, MoonPhase, PhaseName};
pub use transits::{month_transits, TransitEvent, TransitQuery};
pub use zodiac::{classify, Sign, SignPosition};
