//! Error taxonomy for the computation engine.

use thiserror::Error;

/// Errors raised by the engine.
///
/// Every variant belongs to one of three kinds (see [`ErrorKind`]):
/// bad parameters reaching the core, mathematically undefined cases, or
/// ephemeris computation failures. None of these are retryable; the
/// engine is a deterministic function of its inputs.
#[derive(Debug, Error)]
pub enum AstroError {
    #[error("unsupported body name: {name}")]
    UnknownBody { name: String },

    #[error("step size must be within [{min}, {max}] minutes, got {minutes}")]
    StepOutOfRange { minutes: u32, min: u32, max: u32 },

    #[error("orb must be positive, got {orb}")]
    NonPositiveOrb { orb: f64 },

    #[error("invalid month number {month}")]
    InvalidMonth { month: u32 },

    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("UTC offset {hours} hours is not representable")]
    InvalidUtcOffset { hours: f64 },

    #[error("ascendant is undefined at latitude {latitude}")]
    PolarLatitude { latitude: f64 },

    #[error("chart angle computation produced a non-finite value at JD {julian_day}")]
    DegenerateCusp { julian_day: f64 },

    #[error("ephemeris computation failed for {body} at JD {julian_day}: {message}")]
    Ephemeris {
        body: String,
        julian_day: f64,
        message: String,
    },

    #[error("ephemeris returned a non-finite longitude for {body} at JD {julian_day}")]
    NonFiniteLongitude { body: String, julian_day: f64 },
}

/// The three failure categories surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A bad or unsupported parameter reached the core.
    Configuration,
    /// A mathematically singular or undefined case.
    Domain,
    /// The ephemeris provider failed or returned a non-finite value.
    Computation,
}

impl AstroError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AstroError::UnknownBody { .. }
            | AstroError::StepOutOfRange { .. }
            | AstroError::NonPositiveOrb { .. }
            | AstroError::InvalidMonth { .. }
            | AstroError::InvalidDate { .. }
            | AstroError::InvalidUtcOffset { .. } => ErrorKind::Configuration,
            AstroError::PolarLatitude { .. } | AstroError::DegenerateCusp { .. } => ErrorKind::Domain,
            AstroError::Ephemeris { .. } | AstroError::NonFiniteLongitude { .. } => {
                ErrorKind::Computation
            }
        }
    }
}
