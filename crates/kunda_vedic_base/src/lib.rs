//! Kunda (D-81 harmonic) calculation and Lagna rectification.
//!
//! This crate provides:
//! - Lagna descriptor parsing (`[Sign,]D,M,S`) with lenient or strict policies
//! - Conversion of rashi + DMS to decimal longitude
//! - The 81st-harmonic Kunda position and its rashi
//! - Rectification analysis against the 1st, 5th, 7th and 9th sign windows
//!
//! All functions are pure; nothing is cached between calls.

pub mod config;
pub mod error;
pub mod kunda;
pub mod lagna;
pub mod rashi;
pub mod rectify;
pub mod util;

pub use config::{KundaConfig, RangePolicy, SignPolicy};
pub use error::{DmsField, KundaError};
pub use kunda::{
    KUNDA_HARMONIC, KundaChart, KundaPosition, harmonic_longitude, kunda_longitude, kunda_position,
};
pub use lagna::{LagnaPosition, SignOrigin, dms_to_longitude, parse_lagna};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN_DEG, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude,
};
pub use rectify::{
    House, LagnaAdjustment, RectificationReport, TARGET_HOUSES, TargetAssessment, TargetStatus,
    TargetWindow, WINDOW_HALF_WIDTH_DEG, assess, rectified_lagna, rectify, target_windows,
    window_contains,
};
pub use util::normalize_360;

/// Parse a Lagna descriptor and compute its Kunda chart and rectification report.
pub fn analyze(
    input: &str,
    config: &KundaConfig,
) -> Result<(KundaChart, RectificationReport), KundaError> {
    let lagna = parse_lagna(input, config)?;
    let chart = KundaChart::from_lagna(lagna);
    let report = rectify(&chart);
    Ok((chart, report))
}
