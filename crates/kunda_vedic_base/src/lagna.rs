//! Lagna (Ascendant) input parsing and conversion to decimal degrees.
//!
//! A Lagna is written as `[Sign,]Degrees,Minutes,Seconds`, for example
//! `Li,14,14,9` or `14,14,9`. The sign is a 2-letter rashi code; when it is
//! omitted the position is taken to be in Mesha. Degrees, minutes and seconds
//! are real numbers and, unless [`RangePolicy::Strict`] is selected, are not
//! range-checked.

use tracing::{debug, warn};

use crate::config::{KundaConfig, RangePolicy, SignPolicy};
use crate::error::{DmsField, KundaError};
use crate::rashi::{RASHI_SPAN_DEG, Rashi};

/// How the rashi of a parsed Lagna was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignOrigin {
    /// Given explicitly and recognized.
    Explicit,
    /// No sign field; Mesha assumed.
    Defaulted,
    /// Unrecognized code mapped to Mesha (lenient policy). Holds the
    /// upper-cased code as typed.
    Fallback(String),
}

/// A Lagna position: rashi plus degrees, minutes and seconds within it.
#[derive(Debug, Clone, PartialEq)]
pub struct LagnaPosition {
    pub rashi: Rashi,
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub origin: SignOrigin,
}

impl LagnaPosition {
    /// Position with an explicitly known rashi.
    pub fn new(rashi: Rashi, degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            rashi,
            degrees,
            minutes,
            seconds,
            origin: SignOrigin::Explicit,
        }
    }

    /// Decimal-degree longitude of this position on the 0-360 circle.
    pub fn longitude(&self) -> f64 {
        dms_to_longitude(self.rashi, self.degrees, self.minutes, self.seconds)
    }
}

/// Convert a rashi plus DMS triple to a single decimal-degree longitude.
///
/// `offset(rashi) + d + m/60 + s/3600`. Components are used as given, so
/// `degrees = 45` lands outside the rashi.
pub fn dms_to_longitude(rashi: Rashi, degrees: f64, minutes: f64, seconds: f64) -> f64 {
    rashi.offset_deg() + degrees + minutes / 60.0 + seconds / 3600.0
}

/// Parse a Lagna descriptor under the given policies.
pub fn parse_lagna(input: &str, config: &KundaConfig) -> Result<LagnaPosition, KundaError> {
    let parts: Vec<&str> = input.trim().split(',').map(str::trim).collect();
    if parts.len() < 3 || parts.len() > 4 {
        return Err(KundaError::Format(parts.len()));
    }

    let (origin, rashi, dms) = if parts.len() == 4 {
        let code = parts[0].to_ascii_uppercase();
        match Rashi::from_code(&code) {
            Some(r) => (SignOrigin::Explicit, r, &parts[1..]),
            None => match config.sign_policy {
                SignPolicy::Strict => return Err(KundaError::UnknownSign(code)),
                SignPolicy::Lenient => {
                    warn!(code = %code, "unrecognized sign code, assuming Mesha");
                    (SignOrigin::Fallback(code), Rashi::Mesha, &parts[1..])
                }
            },
        }
    } else {
        (SignOrigin::Defaulted, Rashi::Mesha, &parts[..])
    };

    let degrees = parse_component(dms[0], DmsField::Degrees)?;
    let minutes = parse_component(dms[1], DmsField::Minutes)?;
    let seconds = parse_component(dms[2], DmsField::Seconds)?;

    if config.range_policy == RangePolicy::Strict {
        check_range(DmsField::Degrees, degrees, RASHI_SPAN_DEG)?;
        check_range(DmsField::Minutes, minutes, 60.0)?;
        check_range(DmsField::Seconds, seconds, 60.0)?;
    }

    debug!(
        rashi = rashi.code(),
        degrees, minutes, seconds, "parsed lagna"
    );

    Ok(LagnaPosition {
        rashi,
        degrees,
        minutes,
        seconds,
        origin,
    })
}

fn parse_component(raw: &str, field: DmsField) -> Result<f64, KundaError> {
    raw.parse::<f64>().map_err(|_| KundaError::NumericParse {
        field,
        value: raw.to_string(),
    })
}

fn check_range(field: DmsField, value: f64, limit: f64) -> Result<(), KundaError> {
    // NaN fails both comparisons and is rejected here
    if (0.0..limit).contains(&value) {
        Ok(())
    } else {
        Err(KundaError::OutOfRange { field, value })
    }
}
