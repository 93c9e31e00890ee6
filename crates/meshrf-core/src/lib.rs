//! RF interference analysis engine for wireless mesh device inventories.
//!
//! This crate owns the analysis pipeline between a raw inventory snapshot
//! (devices, sites, radio configurations, fetched upstream by an external
//! collection layer) and the serializable interference report consumed by
//! report writers and dashboards:
//!
//! - **[`registry`]** — Normalizes raw [`records`] into canonical
//!   [`model::Device`] values: site/radio joins, frequency bounds, and the
//!   name-based antenna-facing heuristic.
//!
//! - **[`analyzer`]** — Evaluates every unordered device pair for
//!   frequency-range overlap, great-circle distance, and directional
//!   (spatial) overlap, scoring and annotating each conflict. Co-located
//!   pairs are excluded by design.
//!
//! - **[`score`]** — The four-factor severity model: frequency overlap,
//!   distance, spatial facing, and transmit power, multiplied together.
//!
//! - **[`recommend`]** — Mitigation text per conflict: alternative center
//!   frequency, power reduction, antenna re-aim, or a band change.
//!
//! - **[`clustering`]** — DBSCAN over z-score normalized
//!   (frequency, frequency, score) features, surfacing systemic patterns.
//!
//! - **[`report`]** — Aggregates everything into an
//!   [`InterferenceReport`]; deterministic, timestamp-free, stable field
//!   names.
//!
//! The engine is a single-pass synchronous batch: construct an
//! [`InterferenceAnalyzer`] (validating the [`AnalyzerConfig`] tunables),
//! hand it a [`Snapshot`], get a report.
//!
//! ```
//! use meshrf_core::{AnalyzerConfig, InterferenceAnalyzer, Snapshot};
//!
//! # fn main() -> Result<(), meshrf_core::CoreError> {
//! let engine = InterferenceAnalyzer::new(AnalyzerConfig::default())?;
//! let report = engine.analyze(&Snapshot::default());
//! assert_eq!(report.summary.total_interference_issues, 0);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod clustering;
pub mod config;
pub mod engine;
pub mod error;
pub mod geo;
pub mod model;
pub mod records;
pub mod recommend;
pub mod registry;
pub mod report;
pub mod score;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{AnalyzerConfig, DEFAULT_CANDIDATE_FREQUENCIES, SeverityThresholds};
pub use engine::InterferenceAnalyzer;
pub use error::CoreError;
pub use records::{DeviceRecord, RadioRecord, SiteRecord, Snapshot};
pub use report::{DeviceBrief, InterferenceReport, IssueSummary, RankedIssue, ReportSummary};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Cluster,
    ConflictResult,
    Device,
    DeviceCount,
    Direction,
    EntityId,
    Facing,
    FrequencyCount,
    FrequencyRange,
    Severity,
};
