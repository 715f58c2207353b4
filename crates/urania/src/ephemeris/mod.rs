pub mod adapter;
pub mod time;
pub mod types;

pub use adapter::MeeusEphemeris;
pub use time::{
    days_in_month, julian_day_from_local, julian_day_from_utc, julian_day_from_ymd,
    utc_from_julian_day,
};
pub use types::{Body, EphemerisProvider, GeoLocation, JulianDay};
