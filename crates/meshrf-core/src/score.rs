// ── Interference scoring ──
//
// Combines frequency overlap, distance, spatial facing, and transmit
// power into one severity score. Four multiplicative factors; every
// factor defaults to 1.0 when its inputs are unknown, so missing data
// never suppresses an issue.

use crate::model::Device;

/// Frequency factor: the overlap as a percentage of the narrower channel.
pub fn frequency_factor(
    overlap_mhz: f64,
    device_a: &Device,
    device_b: &Device,
    default_channel_width_mhz: f64,
) -> f64 {
    let min_width = device_a
        .channel_width_mhz
        .unwrap_or(default_channel_width_mhz)
        .min(
            device_b
                .channel_width_mhz
                .unwrap_or(default_channel_width_mhz),
        );
    (overlap_mhz / min_width) * 100.0
}

/// Distance factor: sigmoid over log10(distance), scaled into [0.1, 1.0].
///
/// Roughly 1.0 at <= 100 m, 0.5 near 1000 m, 0.1 at >= 5000 m. Unknown
/// distance yields 1.0 (assume worst case).
pub fn distance_factor(distance_m: Option<f64>) -> f64 {
    match distance_m {
        Some(d) => 0.1 + 0.9 / (1.0 + ((d.log10() - 3.0) * 2.0).exp()),
        None => 1.0,
    }
}

/// Spatial factor: scales directly with how much the antennas face each
/// other. Unknown overlap yields 1.0 (assume full factor).
pub fn spatial_factor(spatial_overlap: Option<f64>) -> f64 {
    match spatial_overlap {
        Some(overlap) => 0.2 + 0.8 * overlap,
        None => 1.0,
    }
}

/// Power factor: normalized around a ~20 dBm maximum, in [0.5, 1.5] for
/// typical power levels. Requires both devices to report power.
pub fn power_factor(device_a: &Device, device_b: &Device) -> f64 {
    match (device_a.tx_power_dbm, device_b.tx_power_dbm) {
        (Some(a), Some(b)) => 0.5 + ((a + b) / 2.0) / 20.0,
        _ => 1.0,
    }
}

/// Final interference score: the product of all four factors.
/// Non-negative and unbounded above.
pub fn interference_score(
    overlap_mhz: f64,
    distance_m: Option<f64>,
    spatial_overlap: Option<f64>,
    device_a: &Device,
    device_b: &Device,
    default_channel_width_mhz: f64,
) -> f64 {
    frequency_factor(overlap_mhz, device_a, device_b, default_channel_width_mhz)
        * distance_factor(distance_m)
        * spatial_factor(spatial_overlap)
        * power_factor(device_a, device_b)
}
