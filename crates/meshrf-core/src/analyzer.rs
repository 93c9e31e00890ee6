// ── Pairwise overlap analysis ──
//
// Evaluates every unordered device pair for frequency overlap, physical
// distance, and directional (spatial) overlap, then scores the pair and
// attaches a recommendation. Geometry failures degrade to absent values;
// they never abort the run.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AnalyzerConfig;
use crate::geo;
use crate::model::{ConflictResult, Device};
use crate::recommend::recommend;
use crate::score::interference_score;

/// Detect interference between all qualifying device pairs.
///
/// Only devices with both frequency and channel width participate.
/// Pairs sharing a site id are skipped: co-located radios are assumed
/// intentionally coordinated. The returned set is stable-sorted
/// descending by score -- a public invariant.
pub fn detect(devices: &[Arc<Device>], config: &AnalyzerConfig) -> Vec<Arc<ConflictResult>> {
    let candidates: Vec<&Arc<Device>> = devices
        .iter()
        .filter(|d| d.frequency_range().is_some())
        .collect();

    if candidates.len() < 2 {
        warn!(
            candidates = candidates.len(),
            "not enough devices with frequency information for interference detection"
        );
        return Vec::new();
    }

    let mut results = Vec::new();
    for (i, device_a) in candidates.iter().enumerate() {
        for device_b in &candidates[i + 1..] {
            if let Some(result) = analyze_pair(device_a, device_b, devices, config) {
                results.push(Arc::new(result));
            }
        }
    }

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    info!(issues = results.len(), "detected potential interference issues");
    results
}

fn analyze_pair(
    device_a: &Arc<Device>,
    device_b: &Arc<Device>,
    devices: &[Arc<Device>],
    config: &AnalyzerConfig,
) -> Option<ConflictResult> {
    // Co-located radios are excluded by design, not flagged.
    if device_a.site_id == device_b.site_id {
        return None;
    }

    let range_a = device_a.frequency_range()?;
    let range_b = device_b.frequency_range()?;
    if !range_a.overlaps(&range_b) {
        return None;
    }
    let overlap_mhz = range_a.overlap_width(&range_b);

    let distance_m = pair_distance(device_a, device_b);
    let spatial_overlap = spatial_overlap(device_a, device_b);

    let score = interference_score(
        overlap_mhz,
        distance_m,
        spatial_overlap,
        device_a,
        device_b,
        config.default_channel_width_mhz,
    );
    let recommendation = recommend(device_a, device_b, score, devices, config);

    Some(ConflictResult {
        device_a: Arc::clone(device_a),
        device_b: Arc::clone(device_b),
        overlap_mhz,
        distance_m,
        spatial_overlap,
        score,
        recommendation,
    })
}

/// Great-circle distance between the two devices' sites, when both carry
/// coordinates. Geometry errors are logged and yield `None`.
fn pair_distance(device_a: &Device, device_b: &Device) -> Option<f64> {
    let from = device_a.location()?;
    let to = device_b.location()?;
    match geo::distance_m(from, to) {
        Ok(distance) => Some(distance),
        Err(error) => {
            warn!(
                device_a = %device_a.id,
                device_b = %device_b.id,
                %error,
                "error calculating distance"
            );
            None
        }
    }
}

/// Directional overlap fraction in [0, 1].
///
/// Requires facing and coordinates on both devices. A device "faces" the
/// other when the deviation between its pointed bearing and the bearing
/// toward the other device is at most half its beam width. Both facing:
/// average of each side's `1 - deviation/half_beam`; one facing: half of
/// that side's value; neither: 0. Any geometry failure yields `None`,
/// which the scorer treats as "unknown, assume full factor".
fn spatial_overlap(device_a: &Device, device_b: &Device) -> Option<f64> {
    let facing_a = device_a.facing?;
    let facing_b = device_b.facing?;
    let location_a = device_a.location()?;
    let location_b = device_b.location()?;

    let bearing_a_to_b = match geo::initial_bearing_deg(location_a, location_b) {
        Ok(bearing) => bearing,
        Err(error) => {
            warn!(
                device_a = %device_a.id,
                device_b = %device_b.id,
                %error,
                "error calculating spatial overlap"
            );
            return None;
        }
    };
    let bearing_b_to_a = geo::reciprocal_bearing_deg(bearing_a_to_b);

    let deviation_a = geo::angular_deviation_deg(facing_a.direction.bearing_deg(), bearing_a_to_b);
    let deviation_b = geo::angular_deviation_deg(facing_b.direction.bearing_deg(), bearing_b_to_a);

    let half_beam_a = facing_a.half_beam_deg();
    let half_beam_b = facing_b.half_beam_deg();
    let faces_a = deviation_a <= half_beam_a;
    let faces_b = deviation_b <= half_beam_b;

    let overlap = match (faces_a, faces_b) {
        (true, true) => {
            let overlap_a = 1.0 - deviation_a / half_beam_a;
            let overlap_b = 1.0 - deviation_b / half_beam_b;
            (overlap_a + overlap_b) / 2.0
        }
        (true, false) => 0.5 * (1.0 - deviation_a / half_beam_a),
        (false, true) => 0.5 * (1.0 - deviation_b / half_beam_b),
        (false, false) => 0.0,
    };
    Some(overlap)
}
