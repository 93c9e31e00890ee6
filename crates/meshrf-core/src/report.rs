// ── Report assembly ──
//
// Pure aggregation of the analysis outputs into one serializable tree.
// Field names are stable across runs and the report carries no
// timestamps, so rerunning the engine on an unchanged snapshot yields a
// byte-identical document.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::AnalyzerConfig;
use crate::model::{Cluster, ConflictResult, Device, EntityId, Severity};

/// How many issues the `top_issues` list carries, at most.
const TOP_ISSUES: usize = 10;

/// The identity and radio fields of one device, as embedded in an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceBrief {
    pub id: EntityId,
    pub name: String,
    pub frequency_mhz: Option<f64>,
    pub channel_width_mhz: Option<f64>,
}

impl From<&Arc<Device>> for DeviceBrief {
    fn from(device: &Arc<Device>) -> Self {
        Self {
            id: device.id.clone(),
            name: device.name.clone(),
            frequency_mhz: device.frequency_mhz,
            channel_width_mhz: device.channel_width_mhz,
        }
    }
}

/// One interference issue, flattened for consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub device_a: DeviceBrief,
    pub device_b: DeviceBrief,
    pub frequency_overlap_mhz: f64,
    pub distance_m: Option<f64>,
    pub interference_score: f64,
    pub recommendation: String,
}

impl From<&Arc<ConflictResult>> for IssueSummary {
    fn from(result: &Arc<ConflictResult>) -> Self {
        Self {
            device_a: DeviceBrief::from(&result.device_a),
            device_b: DeviceBrief::from(&result.device_b),
            frequency_overlap_mhz: result.overlap_mhz,
            distance_m: result.distance_m,
            interference_score: result.score,
            recommendation: result.recommendation.clone(),
        }
    }
}

/// An issue with its 1-based rank in the score ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedIssue {
    pub rank: usize,
    #[serde(flatten)]
    pub issue: IssueSummary,
}

/// Aggregate counts over the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_devices: usize,
    pub devices_with_frequency: usize,
    pub total_interference_issues: usize,
    pub high_severity_issues: usize,
    pub medium_severity_issues: usize,
    pub low_severity_issues: usize,
    pub clusters: usize,
}

/// The full analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterferenceReport {
    pub summary: ReportSummary,
    /// The highest-scoring issues, at most 10, ranked from 1. Preserves
    /// the result set's descending score order.
    pub top_issues: Vec<RankedIssue>,
    pub clusters: Vec<Cluster>,
    pub all_issues: Vec<IssueSummary>,
}

/// Assemble the report. Performs no independent analysis.
pub fn assemble(
    devices: &[Arc<Device>],
    results: &[Arc<ConflictResult>],
    clusters: Vec<Cluster>,
    config: &AnalyzerConfig,
) -> InterferenceReport {
    let severity_count = |severity: Severity| {
        results
            .iter()
            .filter(|r| r.severity(&config.thresholds) == severity)
            .count()
    };

    let summary = ReportSummary {
        total_devices: devices.len(),
        devices_with_frequency: devices.iter().filter(|d| d.frequency_mhz.is_some()).count(),
        total_interference_issues: results.len(),
        high_severity_issues: severity_count(Severity::High),
        medium_severity_issues: severity_count(Severity::Medium),
        low_severity_issues: severity_count(Severity::Low),
        clusters: clusters.len(),
    };

    let top_issues = results
        .iter()
        .take(TOP_ISSUES)
        .enumerate()
        .map(|(index, result)| RankedIssue {
            rank: index + 1,
            issue: IssueSummary::from(result),
        })
        .collect();

    let all_issues = results.iter().map(IssueSummary::from).collect();

    InterferenceReport {
        summary,
        top_issues,
        clusters,
        all_issues,
    }
}
