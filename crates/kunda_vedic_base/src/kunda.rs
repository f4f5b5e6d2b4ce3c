//! Kunda (D-81 harmonic) position of a Lagna.
//!
//! The Kunda longitude is the Lagna longitude multiplied by 81 and reduced to
//! the circle. One degree of Lagna therefore sweeps 81 degrees of Kunda, which
//! is what makes small Lagna shifts visible during rectification.
//!
//! This is the plain harmonic product, not the sign-stepped D81 amsha
//! (Navamsha-of-Navamsha) mapping: the two differ by a per-rashi rotation.

use tracing::debug;

use crate::lagna::LagnaPosition;
use crate::rashi::{Rashi, RashiInfo, rashi_from_longitude};
use crate::util::normalize_360;

/// Harmonic factor of the Kunda chart.
pub const KUNDA_HARMONIC: f64 = 81.0;

/// Multiply a longitude by a harmonic factor and reduce it to [0, 360).
pub fn harmonic_longitude(lon_deg: f64, factor: f64) -> f64 {
    normalize_360(lon_deg * factor)
}

/// Kunda longitude for a Lagna longitude in decimal degrees.
pub fn kunda_longitude(lagna_lon_deg: f64) -> f64 {
    harmonic_longitude(lagna_lon_deg, KUNDA_HARMONIC)
}

/// Kunda longitude plus the rashi it falls in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KundaPosition {
    /// Kunda longitude in [0, 360), or NaN for non-finite Lagna input.
    pub longitude: f64,
    /// `None` when the longitude is not finite.
    pub rashi_info: Option<RashiInfo>,
}

impl KundaPosition {
    pub fn rashi(&self) -> Option<Rashi> {
        self.rashi_info.map(|info| info.rashi)
    }
}

/// Kunda position for a Lagna longitude in decimal degrees.
pub fn kunda_position(lagna_lon_deg: f64) -> KundaPosition {
    let longitude = kunda_longitude(lagna_lon_deg);
    let rashi_info = longitude.is_finite().then(|| rashi_from_longitude(longitude));
    KundaPosition {
        longitude,
        rashi_info,
    }
}

/// Everything derived from one Lagna input, before rectification.
#[derive(Debug, Clone, PartialEq)]
pub struct KundaChart {
    pub lagna: LagnaPosition,
    /// Lagna longitude in decimal degrees.
    pub lagna_longitude: f64,
    pub kunda: KundaPosition,
}

impl KundaChart {
    pub fn from_lagna(lagna: LagnaPosition) -> Self {
        let lagna_longitude = lagna.longitude();
        let kunda = kunda_position(lagna_longitude);
        debug!(
            lagna_longitude,
            kunda_longitude = kunda.longitude,
            kunda_rashi = ?kunda.rashi(),
            "computed kunda"
        );
        Self {
            lagna,
            lagna_longitude,
            kunda,
        }
    }
}
