// ── Engine configuration ──
//
// Every tunable the analysis uses is carried here and injected explicitly.
// The engine holds no ambient globals: callers construct an
// `AnalyzerConfig` (usually `default()`) and hand it in.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Common 5 GHz center frequencies (MHz) used as the candidate pool for
/// alternative-frequency suggestions.
pub const DEFAULT_CANDIDATE_FREQUENCIES: &[f64] = &[
    // UNII-1 and UNII-2
    5180.0, 5200.0, 5220.0, 5240.0, 5260.0, 5280.0, 5300.0, 5320.0,
    // UNII-2e
    5500.0, 5520.0, 5540.0, 5560.0, 5580.0, 5600.0, 5620.0, 5640.0, 5660.0, 5680.0, 5700.0,
    // UNII-3
    5745.0, 5765.0, 5785.0, 5805.0, 5825.0,
];

/// Score thresholds separating the severity bands.
///
/// `score > high` is High, `score > medium` is Medium, everything else is
/// Low. Scores at or below `action` are treated as negligible by the
/// recommendation engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityThresholds {
    pub high: f64,
    pub medium: f64,
    pub action: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            high: 70.0,
            medium: 40.0,
            action: 20.0,
        }
    }
}

/// Configuration for a single analysis run.
///
/// Built by the caller, passed to `InterferenceAnalyzer` -- core never
/// reads config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// DBSCAN neighborhood radius over z-score normalized features.
    pub eps: f64,
    /// DBSCAN minimum neighborhood size (the point itself counts).
    pub min_samples: usize,
    /// Severity band thresholds.
    pub thresholds: SeverityThresholds,
    /// Fallback channel width (MHz) when a device omits its own.
    pub default_channel_width_mhz: f64,
    /// Candidate center frequencies for alternative-frequency suggestions.
    pub candidate_frequencies_mhz: Vec<f64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            eps: 30.0,
            min_samples: 2,
            thresholds: SeverityThresholds::default(),
            default_channel_width_mhz: 20.0,
            candidate_frequencies_mhz: DEFAULT_CANDIDATE_FREQUENCIES.to_vec(),
        }
    }
}

impl AnalyzerConfig {
    /// Check the tunables for structural validity.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(CoreError::validation(format!(
                "eps must be finite and positive, got {}",
                self.eps
            )));
        }
        if self.min_samples == 0 {
            return Err(CoreError::validation("min_samples must be at least 1"));
        }
        let t = &self.thresholds;
        if !(t.high.is_finite() && t.medium.is_finite() && t.action.is_finite()) {
            return Err(CoreError::validation("severity thresholds must be finite"));
        }
        if t.medium >= t.high || t.action > t.medium {
            return Err(CoreError::validation(format!(
                "severity thresholds must be ordered action <= medium < high, got {}/{}/{}",
                t.action, t.medium, t.high
            )));
        }
        if !self.default_channel_width_mhz.is_finite() || self.default_channel_width_mhz <= 0.0 {
            return Err(CoreError::validation(
                "default_channel_width_mhz must be finite and positive",
            ));
        }
        if self.candidate_frequencies_mhz.is_empty() {
            return Err(CoreError::validation(
                "candidate_frequencies_mhz must not be empty",
            ));
        }
        Ok(())
    }
}
