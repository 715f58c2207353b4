pub mod types;

pub use types::{Element, Sign};

use serde::{Deserialize, Serialize};

use crate::angles;

/// A longitude classified onto the zodiac wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPosition {
    pub sign: Sign,
    /// 1, 2 or 3.
    pub decan: u8,
    /// Always in [0, 30).
    pub degree_in_sign: f64,
    /// The normalized input, in [0, 360).
    pub longitude: f64,
}

/// Classify an ecliptic longitude into sign, decan and degree-in-sign.
///
/// The input may be unnormalized; it is folded into [0, 360) first.
/// Input must be finite.
pub fn classify(longitude: f64) -> SignPosition {
    let lon = angles::normalize(longitude);
    let sign_index = (lon / 30.0).floor() as usize;
    let sign = Sign::from_index(sign_index);
    let degree_in_sign = lon - sign_index as f64 * 30.0;
    let decan = (degree_in_sign / 10.0).floor() as u8 + 1;
    SignPosition {
        sign,
        decan,
        degree_in_sign,
        longitude: lon,
    }
}
