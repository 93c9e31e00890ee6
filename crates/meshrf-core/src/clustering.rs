// ── Density-based clustering of conflicts ──
//
// Groups conflict results by feature similarity (the two center
// frequencies and the interference score) to surface systemic patterns
// rather than isolated pairs. Classic DBSCAN over z-score normalized
// features; noise points belong to no cluster. Iteration is index-ordered
// throughout, so cluster ids and statistics are deterministic.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::config::AnalyzerConfig;
use crate::model::{Cluster, ConflictResult, DeviceCount, FrequencyCount};

const NOISE: isize = -1;
const UNVISITED: isize = -2;

/// Cluster the score-sorted result list.
///
/// Returns clusters in discovery order. Fewer than 2 results means there
/// is nothing to group; returns empty.
pub fn cluster(results: &[Arc<ConflictResult>], config: &AnalyzerConfig) -> Vec<Cluster> {
    if results.len() < 2 {
        warn!(
            results = results.len(),
            "not enough interference results for clustering"
        );
        return Vec::new();
    }

    let features = normalized_features(results);
    let labels = dbscan(&features, config.eps, config.min_samples);

    let cluster_count = labels
        .iter()
        .filter(|l| **l >= 0)
        .max()
        .map_or(0, |max| usize::try_from(*max).unwrap_or(0) + 1);
    debug!(clusters = cluster_count, "dbscan labeling complete");

    (0..cluster_count)
        .map(|id| {
            let members: Vec<usize> = labels
                .iter()
                .enumerate()
                .filter(|(_, label)| {
                    usize::try_from(**label).is_ok_and(|l| l == id)
                })
                .map(|(index, _)| index)
                .collect();
            build_cluster(id, &members, results)
        })
        .collect()
}

/// Feature matrix: one row per result, columns z-score normalized with
/// the population standard deviation. A zero-variance column normalizes
/// to 0.0 instead of dividing by zero.
fn normalized_features(results: &[Arc<ConflictResult>]) -> Vec<[f64; 3]> {
    let raw: Vec<[f64; 3]> = results
        .iter()
        .map(|r| {
            [
                r.device_a.frequency_mhz.unwrap_or(0.0),
                r.device_b.frequency_mhz.unwrap_or(0.0),
                r.score,
            ]
        })
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let n = raw.len() as f64;
    let mut normalized = raw.clone();
    for column in 0..3 {
        let mean = raw.iter().map(|row| row[column]).sum::<f64>() / n;
        let variance = raw
            .iter()
            .map(|row| (row[column] - mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();
        for (row, raw_row) in normalized.iter_mut().zip(&raw) {
            row[column] = if std_dev > 0.0 {
                (raw_row[column] - mean) / std_dev
            } else {
                0.0
            };
        }
    }
    normalized
}

fn euclidean(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Indices of every point within `eps` of `point`, the point itself
/// included.
fn region_query(features: &[[f64; 3]], point: usize, eps: f64) -> Vec<usize> {
    features
        .iter()
        .enumerate()
        .filter(|(_, other)| euclidean(&features[point], other) <= eps)
        .map(|(index, _)| index)
        .collect()
}

/// Classic DBSCAN. Labels: cluster id >= 0, or -1 for noise.
fn dbscan(features: &[[f64; 3]], eps: f64, min_samples: usize) -> Vec<isize> {
    let mut labels = vec![UNVISITED; features.len()];
    let mut next_cluster: isize = 0;

    for point in 0..features.len() {
        if labels[point] != UNVISITED {
            continue;
        }
        let neighbors = region_query(features, point, eps);
        if neighbors.len() < min_samples {
            labels[point] = NOISE;
            continue;
        }

        labels[point] = next_cluster;
        let mut seeds = neighbors;
        let mut cursor = 0;
        while cursor < seeds.len() {
            let candidate = seeds[cursor];
            cursor += 1;

            if labels[candidate] == NOISE {
                // Border point reached from a core point.
                labels[candidate] = next_cluster;
            }
            if labels[candidate] != UNVISITED {
                continue;
            }
            labels[candidate] = next_cluster;

            let candidate_neighbors = region_query(features, candidate, eps);
            if candidate_neighbors.len() >= min_samples {
                seeds.extend(candidate_neighbors);
            }
        }
        next_cluster += 1;
    }

    labels
}

/// Derive the per-cluster statistics from its member results.
fn build_cluster(id: usize, members: &[usize], results: &[Arc<ConflictResult>]) -> Cluster {
    let member_results: Vec<&Arc<ConflictResult>> =
        members.iter().filter_map(|i| results.get(*i)).collect();

    #[allow(clippy::cast_precision_loss)]
    let mean_score = member_results.iter().map(|r| r.score).sum::<f64>()
        / member_results.len().max(1) as f64;

    let mut device_counts: IndexMap<&str, usize> = IndexMap::new();
    let mut frequency_counts: IndexMap<u64, (f64, usize)> = IndexMap::new();
    for result in &member_results {
        for device in [&result.device_a, &result.device_b] {
            *device_counts.entry(device.name.as_str()).or_default() += 1;
            let frequency = device.frequency_mhz.unwrap_or(0.0);
            frequency_counts
                .entry(frequency.to_bits())
                .or_insert((frequency, 0))
                .1 += 1;
        }
    }

    // Stable sort keeps first-insertion order on ties.
    let mut devices: Vec<DeviceCount> = device_counts
        .into_iter()
        .map(|(name, count)| DeviceCount {
            name: name.to_owned(),
            count,
        })
        .collect();
    devices.sort_by(|a, b| b.count.cmp(&a.count));
    devices.truncate(3);

    let mut frequencies: Vec<FrequencyCount> = frequency_counts
        .into_values()
        .map(|(frequency_mhz, count)| FrequencyCount {
            frequency_mhz,
            count,
        })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    frequencies.truncate(3);

    Cluster {
        id,
        size: member_results.len(),
        mean_score,
        top_devices: devices,
        top_frequencies: frequencies,
        members: members.to_vec(),
    }
}
