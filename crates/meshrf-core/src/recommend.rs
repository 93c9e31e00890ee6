// ── Mitigation recommendations ──
//
// Turns a scored conflict into operator-facing text: an alternative
// frequency when the candidate pool has a free slot, a power reduction
// for hot transmitters, an antenna re-aim when both ends are directional,
// and a generic band change as the fallback.

use std::sync::Arc;

use crate::config::AnalyzerConfig;
use crate::model::{Device, Severity};

/// Transmit power above which a reduction is suggested, in dBm.
const POWER_REDUCTION_THRESHOLD_DBM: f64 = 15.0;
/// Suggested reduction step, in dB.
const POWER_REDUCTION_STEP_DB: f64 = 3.0;

/// Compose the recommendation for one scored conflict.
///
/// `devices` is the full registry; the alternative-frequency search needs
/// to know every frequency currently in use, not just the pair's.
pub fn recommend(
    device_a: &Device,
    device_b: &Device,
    score: f64,
    devices: &[Arc<Device>],
    config: &AnalyzerConfig,
) -> String {
    if score < config.thresholds.action {
        return "Low interference risk. No action needed.".into();
    }

    let mut suggestions = Vec::new();

    if let Some((target, alternative)) = alternative_frequency(device_a, device_b, devices, config)
    {
        let current = target.frequency_mhz.unwrap_or_default();
        suggestions.push(format!(
            "Change {} frequency from {current} MHz to {alternative} MHz.",
            target.name
        ));
    }

    for device in [device_a, device_b] {
        if let Some(power) = device.tx_power_dbm {
            if power > POWER_REDUCTION_THRESHOLD_DBM {
                suggestions.push(format!(
                    "Reduce transmit power of {} from {power} dBm to {} dBm.",
                    device.name,
                    power - POWER_REDUCTION_STEP_DB
                ));
            }
        }
    }

    if device_a.facing.is_some() && device_b.facing.is_some() {
        suggestions.push(format!(
            "Adjust antenna direction of {} or {} to reduce overlap.",
            device_a.name, device_b.name
        ));
    }

    if suggestions.is_empty() {
        suggestions.push("Consider changing frequency of one device to a different band.".into());
    }

    let severity = Severity::classify(score, &config.thresholds);
    format!("Interference Severity: {severity}. {}", suggestions.join(" "))
}

/// Find an alternative center frequency for one of the pair.
///
/// Static pool lookup, no channel-planning optimization: the first
/// configured candidate unused by *any* registry device wins, and it is
/// offered to whichever of the pair currently sits on a listed candidate
/// (first device checked first).
fn alternative_frequency<'a>(
    device_a: &'a Device,
    device_b: &'a Device,
    devices: &[Arc<Device>],
    config: &AnalyzerConfig,
) -> Option<(&'a Device, f64)> {
    let in_use = |candidate: f64| {
        devices
            .iter()
            .filter_map(|d| d.frequency_mhz)
            .any(|f| on_frequency(f, candidate))
    };

    let first_free = config
        .candidate_frequencies_mhz
        .iter()
        .copied()
        .find(|c| !in_use(*c))?;

    let listed = |device: &Device| {
        device.frequency_mhz.is_some_and(|f| {
            config
                .candidate_frequencies_mhz
                .iter()
                .any(|c| on_frequency(f, *c))
        })
    };

    if listed(device_a) {
        Some((device_a, first_free))
    } else if listed(device_b) {
        Some((device_b, first_free))
    } else {
        None
    }
}

/// Exact center-frequency comparison. Candidates and reported frequencies
/// are whole MHz values, so bitwise equality is the intended semantics.
#[allow(clippy::float_cmp)]
fn on_frequency(a: f64, b: f64) -> bool {
    a == b
}
