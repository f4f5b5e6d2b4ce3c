//! Rashi (zodiac sign) table and DMS (degrees-minutes-seconds) helpers.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Each rashi carries the 2-letter
//! code used on the Lagna input line (AR, TA, ... PI).

use crate::util::normalize_360;

/// Span of one rashi in degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Two-letter input/report code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Mesha => "AR",
            Self::Vrishabha => "TA",
            Self::Mithuna => "GE",
            Self::Karka => "CN",
            Self::Simha => "LE",
            Self::Kanya => "VI",
            Self::Tula => "LI",
            Self::Vrischika => "SC",
            Self::Dhanu => "SA",
            Self::Makara => "CP",
            Self::Kumbha => "AQ",
            Self::Meena => "PI",
        }
    }

    /// Reverse lookup from a two-letter code, case-insensitive.
    pub fn from_code(code: &str) -> Option<Rashi> {
        let upper = code.trim().to_ascii_uppercase();
        ALL_RASHIS.iter().copied().find(|r| r.code() == upper)
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Rashi at `index % 12`.
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Starting longitude of the rashi: index x 30 deg.
    pub const fn offset_deg(self) -> f64 {
        self.index() as f64 * RASHI_SPAN_DEG
    }

    /// Longitude of the middle of the rashi (offset + 15 deg).
    pub const fn midpoint_deg(self) -> f64 {
        self.offset_deg() + RASHI_SPAN_DEG / 2.0
    }

    /// The rashi `steps` signs forward, wrapping after Meena.
    ///
    /// `nth_from(0)` is the rashi itself; `nth_from(6)` is the 7th sign.
    pub const fn nth_from(self, steps: u8) -> Rashi {
        Self::from_index((self.index() + steps % 12) % 12)
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Determine the rashi a longitude falls in.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
/// Out-of-circle input is wrapped first, so the lookup is total.
pub fn rashi_from_longitude(lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(lon_deg);
    let rashi_idx = (lon / RASHI_SPAN_DEG).floor() as u8;
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let rashi_idx = rashi_idx.min(11);
    let degrees_in_rashi = lon - (rashi_idx as f64) * RASHI_SPAN_DEG;
    let rashi = ALL_RASHIS[rashi_idx as usize];
    let dms = deg_to_dms(degrees_in_rashi);

    RashiInfo {
        rashi,
        rashi_index: rashi_idx,
        dms,
        degrees_in_rashi,
    }
}
