//! Rectification analysis of a Kunda position.
//!
//! A Lagna is considered well placed when its Kunda falls in the Lagna rashi
//! itself, one of its trines (5th and 9th signs) or the 7th sign. Each target
//! is a window of +/-15 deg around the middle of the target rashi. For every
//! window the Kunda misses, the forward arc to the window center is divided
//! by the harmonic factor to give the Lagna shift that would bring the Kunda
//! there.

use tracing::debug;

use crate::kunda::{KUNDA_HARMONIC, KundaChart};
use crate::lagna::LagnaPosition;
use crate::rashi::{Dms, Rashi, RashiInfo};
use crate::util::{FULL_CIRCLE_DEG, forward_arc, normalize_360};

/// Half-width of a target window in degrees.
pub const WINDOW_HALF_WIDTH_DEG: f64 = 15.0;

const ARCSEC_PER_RASHI: u32 = 30 * 3600;
const ARCSEC_PER_CIRCLE: u32 = 12 * ARCSEC_PER_RASHI;

/// House of a target rashi, counted from the Lagna rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    First,
    Fifth,
    Seventh,
    Ninth,
}

/// Target houses in report order.
pub const TARGET_HOUSES: [House; 4] = [House::First, House::Fifth, House::Seventh, House::Ninth];

impl House {
    /// Signs counted forward from the Lagna rashi (First = 0).
    pub const fn steps(self) -> u8 {
        match self {
            Self::First => 0,
            Self::Fifth => 4,
            Self::Seventh => 6,
            Self::Ninth => 8,
        }
    }
}

/// A target window around the middle of a rashi.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetWindow {
    pub rashi: Rashi,
    pub house: House,
    /// Window center: rashi offset + 15 deg.
    pub center_deg: f64,
}

impl TargetWindow {
    pub fn new(lagna_rashi: Rashi, house: House) -> Self {
        let rashi = lagna_rashi.nth_from(house.steps());
        Self {
            rashi,
            house,
            center_deg: rashi.midpoint_deg(),
        }
    }

    /// Window start, wrapped to be non-negative.
    pub fn start(&self) -> f64 {
        let s = self.center_deg - WINDOW_HALF_WIDTH_DEG;
        if s < 0.0 { s + FULL_CIRCLE_DEG } else { s }
    }

    /// Window end, wrapped to be at most 360.
    pub fn end(&self) -> f64 {
        let e = self.center_deg + WINDOW_HALF_WIDTH_DEG;
        if e > FULL_CIRCLE_DEG { e - FULL_CIRCLE_DEG } else { e }
    }

    pub fn contains(&self, lon_deg: f64) -> bool {
        window_contains(self.start(), self.end(), lon_deg)
    }
}

/// Inclusive membership in `[start, end]`.
///
/// When `start > end` the window straddles 0 deg and is read as
/// `[start, 360) U [0, end]`.
pub fn window_contains(start: f64, end: f64, lon_deg: f64) -> bool {
    if start > end {
        lon_deg >= start || lon_deg <= end
    } else {
        lon_deg >= start && lon_deg <= end
    }
}

/// The four target windows for a Lagna rashi: 1st, 5th, 7th and 9th signs.
pub fn target_windows(lagna_rashi: Rashi) -> [TargetWindow; 4] {
    TARGET_HOUSES.map(|house| TargetWindow::new(lagna_rashi, house))
}

/// Lagna shift needed to move the Kunda onto a window center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagnaAdjustment {
    /// Forward Kunda arc to the window center, in [0, 360).
    pub kunda_arc_deg: f64,
    /// Corresponding Lagna shift in degrees (arc / 81).
    pub lagna_deg: f64,
}

impl LagnaAdjustment {
    pub fn from_kunda_arc(kunda_arc_deg: f64) -> Self {
        Self {
            kunda_arc_deg,
            lagna_deg: kunda_arc_deg / KUNDA_HARMONIC,
        }
    }

    /// Lagna shift in arc-minutes, unfloored.
    pub fn total_minutes(&self) -> f64 {
        self.lagna_deg * 60.0
    }

    /// Whole arc-minutes of the shift. NaN stays NaN.
    pub fn whole_minutes(&self) -> f64 {
        self.total_minutes().floor()
    }

    /// Whole arc-seconds left over after the whole minutes. NaN stays NaN.
    pub fn whole_seconds(&self) -> f64 {
        let m = self.total_minutes();
        ((m - m.floor()) * 60.0).floor()
    }

    pub fn is_finite(&self) -> bool {
        self.lagna_deg.is_finite()
    }
}

/// Outcome for one target window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetStatus {
    /// Kunda already inside the window.
    Satisfied,
    /// Kunda outside; shift the Lagna forward by this much.
    Adjust(LagnaAdjustment),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetAssessment {
    pub window: TargetWindow,
    pub status: TargetStatus,
}

impl TargetAssessment {
    pub fn is_satisfied(&self) -> bool {
        matches!(self.status, TargetStatus::Satisfied)
    }

    pub fn adjustment(&self) -> Option<&LagnaAdjustment> {
        match &self.status {
            TargetStatus::Satisfied => None,
            TargetStatus::Adjust(adj) => Some(adj),
        }
    }
}

/// Check a Kunda longitude against one window.
pub fn assess(window: TargetWindow, kunda_lon_deg: f64) -> TargetAssessment {
    let status = if window.contains(kunda_lon_deg) {
        TargetStatus::Satisfied
    } else {
        let arc = forward_arc(kunda_lon_deg, window.center_deg);
        TargetStatus::Adjust(LagnaAdjustment::from_kunda_arc(arc))
    };
    TargetAssessment { window, status }
}

/// Result of checking a chart against all target windows.
#[derive(Debug, Clone, PartialEq)]
pub struct RectificationReport {
    /// One entry per target window, in [`TARGET_HOUSES`] order.
    pub assessments: Vec<TargetAssessment>,
    /// True when the Kunda falls in at least one window.
    pub is_kunda_correct: bool,
}

impl RectificationReport {
    /// Target rashis in report order.
    pub fn target_rashis(&self) -> Vec<Rashi> {
        self.assessments.iter().map(|a| a.window.rashi).collect()
    }

    /// Windows the Kunda misses, with their adjustments.
    pub fn adjustments(&self) -> impl Iterator<Item = (&TargetWindow, &LagnaAdjustment)> {
        self.assessments
            .iter()
            .filter_map(|a| a.adjustment().map(|adj| (&a.window, adj)))
    }

    /// The missed window reachable with the smallest Lagna shift.
    ///
    /// `None` when every window is satisfied or the shifts are not finite.
    pub fn nearest(&self) -> Option<(&TargetWindow, &LagnaAdjustment)> {
        self.adjustments()
            .filter(|(_, adj)| adj.is_finite())
            .min_by(|(_, a), (_, b)| a.lagna_deg.total_cmp(&b.lagna_deg))
    }
}

/// Check a Kunda chart against the 1st, 5th, 7th and 9th sign windows.
pub fn rectify(chart: &KundaChart) -> RectificationReport {
    let kunda = chart.kunda.longitude;
    let assessments: Vec<TargetAssessment> = target_windows(chart.lagna.rashi)
        .into_iter()
        .map(|w| assess(w, kunda))
        .collect();
    let is_kunda_correct = assessments.iter().any(TargetAssessment::is_satisfied);
    debug!(
        kunda,
        is_kunda_correct,
        missed = assessments.iter().filter(|a| !a.is_satisfied()).count(),
        "rectification analysed"
    );
    RectificationReport {
        assessments,
        is_kunda_correct,
    }
}

/// Lagna moved forward by an adjustment, rounded to the nearest arc-second.
///
/// `None` when the moved longitude is not finite.
pub fn rectified_lagna(lagna: &LagnaPosition, adjustment: &LagnaAdjustment) -> Option<RashiInfo> {
    let lon = normalize_360(lagna.longitude() + adjustment.lagna_deg);
    if !lon.is_finite() {
        return None;
    }
    // Whole arc-seconds around the circle; rounding may land exactly on 360
    let total = (lon * 3600.0).round() as u32 % ARCSEC_PER_CIRCLE;
    let rashi_index = (total / ARCSEC_PER_RASHI) as u8;
    let within = total % ARCSEC_PER_RASHI;
    Some(RashiInfo {
        rashi: Rashi::from_index(rashi_index),
        rashi_index,
        dms: Dms {
            degrees: (within / 3600) as u16,
            minutes: ((within % 3600) / 60) as u8,
            seconds: (within % 60) as f64,
        },
        degrees_in_rashi: within as f64 / 3600.0,
    })
}
