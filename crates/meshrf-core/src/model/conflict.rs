// ── Conflict result domain types ──

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::device::Device;
use crate::config::SeverityThresholds;

/// Presentation band for an interference score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Band a score against the configured thresholds:
    /// `score > high` is High, `score > medium` is Medium, else Low.
    pub fn classify(score: f64, thresholds: &SeverityThresholds) -> Self {
        if score > thresholds.high {
            Self::High
        } else if score > thresholds.medium {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// One detected interference issue between an unordered device pair.
///
/// Produced once per qualifying pair per run and never mutated after
/// construction. The full result set is stable-sorted descending by
/// [`score`](Self::score) immediately after generation; that ordering is
/// a public invariant of the result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictResult {
    pub device_a: Arc<Device>,
    pub device_b: Arc<Device>,
    /// Absolute frequency-overlap width in MHz. Always >= 0.
    pub overlap_mhz: f64,
    /// Great-circle distance between the two sites in meters, when both
    /// sites carry valid coordinates.
    pub distance_m: Option<f64>,
    /// Directional overlap fraction in [0, 1], when both devices carry
    /// facing and coordinates. Absent means "unknown, assume full factor".
    pub spatial_overlap: Option<f64>,
    /// Multi-factor interference score. Non-negative, unbounded.
    pub score: f64,
    pub recommendation: String,
}

impl ConflictResult {
    pub fn severity(&self, thresholds: &SeverityThresholds) -> Severity {
        Severity::classify(self.score, thresholds)
    }
}
