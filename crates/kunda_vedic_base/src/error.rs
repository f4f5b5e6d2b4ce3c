//! Error types for Lagna parsing and validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Component of a Lagna position, used to point at the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmsField {
    Degrees,
    Minutes,
    Seconds,
}

impl DmsField {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Degrees => "degrees",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }
}

/// Errors from reading a Lagna descriptor.
///
/// The math stages downstream of the parser are total and never fail.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KundaError {
    /// Wrong number of comma-separated fields (carries the count seen).
    Format(usize),
    /// A degrees/minutes/seconds field is not a real number.
    NumericParse { field: DmsField, value: String },
    /// Sign code not in the 12-rashi table (strict sign policy only).
    UnknownSign(String),
    /// Component outside its natural range (strict range policy only).
    OutOfRange { field: DmsField, value: f64 },
}

impl Display for KundaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(count) => write!(
                f,
                "invalid input format ({count} fields). Please use 'Lagna,degrees,minutes,seconds' (e.g., Li,14,14,9 or 14,14,9)"
            ),
            Self::NumericParse { field, value } => {
                write!(f, "invalid {} value '{value}': not a number", field.name())
            }
            Self::UnknownSign(code) => write!(
                f,
                "unknown sign code '{code}' (expected one of AR, TA, GE, CN, LE, VI, LI, SC, SA, CP, AQ, PI)"
            ),
            Self::OutOfRange { field, value } => {
                let limit = match field {
                    DmsField::Degrees => 30,
                    DmsField::Minutes | DmsField::Seconds => 60,
                };
                write!(f, "{} out of range: {value} (expected 0 <= x < {limit})", field.name())
            }
        }
    }
}

impl Error for KundaError {}
