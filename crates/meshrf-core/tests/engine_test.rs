#![allow(clippy::unwrap_used)]
// End-to-end tests for the analysis engine over JSON snapshot fixtures.

use meshrf_core::{AnalyzerConfig, InterferenceAnalyzer, Severity, Snapshot};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Fixtures ────────────────────────────────────────────────────────

/// Two sites ~50 m apart plus a frequency-less straggler. Devices on
/// 5180 and 5185 MHz at 20 MHz width overlap by 15 MHz; the 5500 MHz
/// device overlaps nothing.
fn mesh_snapshot() -> Snapshot {
    serde_json::from_value(json!({
        "devices": [
            { "id": "dev-hub",    "name": "Hub Omni",    "model": "LAP-120", "type": "ap", "siteId": "site-1" },
            { "id": "dev-leaf",   "name": "Leaf Node",   "model": "LAP-120", "type": "ap", "siteId": "site-2" },
            { "id": "dev-far",    "name": "Distant Node","model": "LAP-120", "type": "ap", "siteId": "site-3" },
            { "id": "dev-hub-2",  "name": "Hub Omni 2",  "model": "LAP-120", "type": "ap", "siteId": "site-1" },
            { "id": "dev-silent", "name": "Bare Node",   "model": "LBE-5",   "type": "station", "siteId": "site-2" }
        ],
        "sites": [
            { "id": "site-1", "name": "HQ Rooftop", "latitude": 40.712_80, "longitude": -74.006_00, "elevation": 30.0 },
            { "id": "site-2", "name": "Annex",      "latitude": 40.713_25, "longitude": -74.006_00, "elevation": 25.0 },
            { "id": "site-3", "name": "Depot",      "latitude": 40.750_00, "longitude": -74.000_00 }
        ],
        "radios": [
            { "deviceId": "dev-hub",   "ssid": "mesh-1", "frequency": 5180, "channelWidth": 20 },
            { "deviceId": "dev-leaf",  "ssid": "mesh-2", "frequency": 5185, "channelWidth": 20 },
            { "deviceId": "dev-far",   "ssid": "mesh-3", "frequency": 5500, "channelWidth": 20 },
            { "deviceId": "dev-hub-2", "ssid": "mesh-4", "frequency": 5180, "channelWidth": 20 }
        ]
    }))
    .unwrap()
}

/// Two directional devices pointed straight at each other across ~111 m,
/// both transmitting hot.
fn facing_snapshot() -> Snapshot {
    serde_json::from_value(json!({
        "devices": [
            { "id": "dev-a", "name": "Alpha North", "type": "ap", "siteId": "site-a" },
            { "id": "dev-b", "name": "Beta South",  "type": "ap", "siteId": "site-b" }
        ],
        "sites": [
            { "id": "site-a", "name": "South End", "latitude": 40.700_00, "longitude": -74.000_00 },
            { "id": "site-b", "name": "North End", "latitude": 40.701_00, "longitude": -74.000_00 }
        ],
        "radios": [
            { "deviceId": "dev-a", "frequency": 5180, "channelWidth": 20, "txPower": 18 },
            { "deviceId": "dev-b", "frequency": 5180, "channelWidth": 20, "txPower": 18 }
        ]
    }))
    .unwrap()
}

// ── End-to-end behavior ─────────────────────────────────────────────

#[test]
fn detects_adjacent_channel_conflicts_across_sites() {
    let report = InterferenceAnalyzer::default().analyze(&mesh_snapshot());

    assert_eq!(report.summary.total_devices, 5);
    assert_eq!(report.summary.devices_with_frequency, 4);
    // hub/leaf and hub-2/leaf; the co-located hub pair and the 5500 MHz
    // device produce nothing.
    assert_eq!(report.summary.total_interference_issues, 2);

    for issue in &report.all_issues {
        assert_eq!(issue.frequency_overlap_mhz, 15.0);
        let distance = issue.distance_m.unwrap();
        assert!((distance - 50.0).abs() < 1.0, "got {distance}");
        // 15/20 overlap at ~50 m: 75.0 * ~0.938.
        assert!(
            (issue.interference_score - 70.34).abs() < 0.1,
            "got {}",
            issue.interference_score
        );
        assert!(issue.recommendation.starts_with("Interference Severity: High. "));
    }
    assert_eq!(report.summary.high_severity_issues, 2);
    assert_eq!(report.summary.medium_severity_issues, 0);
    assert_eq!(report.summary.low_severity_issues, 0);
}

#[test]
fn co_located_pair_is_never_reported() {
    let report = InterferenceAnalyzer::default().analyze(&mesh_snapshot());
    for issue in &report.all_issues {
        // Both hubs sit on site-1 and share 5180 MHz; any result pairing
        // them would be a co-location leak.
        let names = [issue.device_a.name.as_str(), issue.device_b.name.as_str()];
        assert!(
            !(names.contains(&"Hub Omni") && names.contains(&"Hub Omni 2")),
            "co-located pair reported: {names:?}"
        );
    }
}

#[test]
fn results_are_sorted_descending_and_ranked() {
    let report = InterferenceAnalyzer::default().analyze(&mesh_snapshot());
    for pair in report.all_issues.windows(2) {
        assert!(pair[0].interference_score >= pair[1].interference_score);
    }
    let ranks: Vec<usize> = report.top_issues.iter().map(|t| t.rank).collect();
    assert_eq!(ranks, vec![1, 2]);
}

#[test]
fn recommends_the_first_free_candidate_frequency() {
    let report = InterferenceAnalyzer::default().analyze(&mesh_snapshot());
    let top = &report.top_issues[0].issue;
    // 5180 and 5500 are taken; 5185 is off-plan; 5200 is the first free
    // candidate and the 5180 MHz device is the one sitting on the plan.
    assert!(
        top.recommendation.contains("frequency from 5180 MHz to 5200 MHz."),
        "got: {}",
        top.recommendation
    );
}

#[test]
fn facing_pair_gets_spatial_and_power_treatment() {
    let report = InterferenceAnalyzer::default().analyze(&facing_snapshot());
    assert_eq!(report.summary.total_interference_issues, 1);

    let issue = &report.all_issues[0];
    // Full 20 MHz overlap at ~111 m with hot, mutually-facing antennas.
    assert_eq!(issue.frequency_overlap_mhz, 20.0);
    assert!(issue.interference_score > 100.0, "got {}", issue.interference_score);
    assert!(issue.recommendation.contains("Reduce transmit power of Alpha North from 18 dBm to 15 dBm."));
    assert!(issue.recommendation.contains("Reduce transmit power of Beta South from 18 dBm to 15 dBm."));
    assert!(issue.recommendation.contains("Adjust antenna direction of Alpha North or Beta South"));
}

#[test]
fn spatial_overlap_is_full_for_mutually_facing_pair() {
    let analyzer = InterferenceAnalyzer::default();
    let snapshot = facing_snapshot();
    let devices = meshrf_core::registry::build(&snapshot);
    let results = meshrf_core::analyzer::detect(&devices, analyzer.config());
    assert_eq!(results.len(), 1);
    let overlap = results[0].spatial_overlap.unwrap();
    assert!((overlap - 1.0).abs() < 1e-9, "got {overlap}");
}

#[test]
fn clustering_groups_the_twin_conflicts() {
    let report = InterferenceAnalyzer::default().analyze(&mesh_snapshot());
    // Two near-identical issues collapse into a single cluster.
    assert_eq!(report.summary.clusters, 1);
    assert_eq!(report.clusters.len(), 1);
    let cluster = &report.clusters[0];
    assert_eq!(cluster.size, 2);
    assert_eq!(cluster.members, vec![0, 1]);
    // "Leaf Node" appears in both issues.
    assert_eq!(cluster.top_devices[0].name, "Leaf Node");
    assert_eq!(cluster.top_devices[0].count, 2);
}

#[test]
fn single_issue_means_no_clusters() {
    let report = InterferenceAnalyzer::default().analyze(&facing_snapshot());
    assert_eq!(report.summary.total_interference_issues, 1);
    assert_eq!(report.summary.clusters, 0);
    assert!(report.clusters.is_empty());
}

#[test]
fn severity_bands_follow_configured_thresholds() {
    let config = AnalyzerConfig {
        thresholds: meshrf_core::SeverityThresholds {
            high: 200.0,
            medium: 100.0,
            action: 20.0,
        },
        ..AnalyzerConfig::default()
    };
    let report = InterferenceAnalyzer::new(config).unwrap().analyze(&mesh_snapshot());
    // ~70.3 scores fall below the raised medium bar.
    assert_eq!(report.summary.high_severity_issues, 0);
    assert_eq!(report.summary.medium_severity_issues, 0);
    assert_eq!(report.summary.low_severity_issues, 2);
    // The default bands would have called the same scores High.
    let default_thresholds = meshrf_core::SeverityThresholds::default();
    assert_eq!(Severity::classify(70.34, &default_thresholds), Severity::High);
}

// ── Determinism ─────────────────────────────────────────────────────

#[test]
fn reruns_on_an_unchanged_snapshot_are_byte_identical() {
    let snapshot = mesh_snapshot();
    let engine = InterferenceAnalyzer::default();

    let first = serde_json::to_string(&engine.analyze(&snapshot)).unwrap();
    let second = serde_json::to_string(&engine.analyze(&snapshot)).unwrap();
    assert_eq!(first, second);

    // A fresh engine over a re-parsed snapshot changes nothing either.
    let third = serde_json::to_string(
        &InterferenceAnalyzer::new(AnalyzerConfig::default())
            .unwrap()
            .analyze(&mesh_snapshot()),
    )
    .unwrap();
    assert_eq!(first, third);
}
