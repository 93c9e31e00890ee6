// ── Analysis engine facade ──
//
// Single entry point wiring the pipeline together:
// registry -> analyzer -> clustering -> report. One synchronous pass
// over a static snapshot; nothing here is long-lived state.

use tracing::info;

use crate::analyzer;
use crate::clustering;
use crate::config::AnalyzerConfig;
use crate::error::CoreError;
use crate::records::Snapshot;
use crate::registry;
use crate::report::{self, InterferenceReport};

/// The interference analysis engine.
///
/// Construction validates the configuration; a constructed engine cannot
/// fail at analysis time. Reruns over an unchanged snapshot produce
/// byte-identical reports.
#[derive(Debug, Clone)]
pub struct InterferenceAnalyzer {
    config: AnalyzerConfig,
}

impl InterferenceAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run the full analysis over one snapshot.
    pub fn analyze(&self, snapshot: &Snapshot) -> InterferenceReport {
        let devices = registry::build(snapshot);
        let results = analyzer::detect(&devices, &self.config);
        let clusters = clustering::cluster(&results, &self.config);
        let report = report::assemble(&devices, &results, clusters, &self.config);
        info!(
            devices = report.summary.total_devices,
            issues = report.summary.total_interference_issues,
            clusters = report.summary.clusters,
            "analysis complete"
        );
        report
    }
}

impl Default for InterferenceAnalyzer {
    /// Engine with default tunables. The defaults always validate.
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
        }
    }
}
