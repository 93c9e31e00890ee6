// ── Cluster domain types ──

use serde::{Deserialize, Serialize};

/// How often a device name appears across the members of a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCount {
    pub name: String,
    pub count: usize,
}

/// How often a center frequency appears across the members of a cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyCount {
    pub frequency_mhz: f64,
    pub count: usize,
}

/// A density-connected group of conflict results sharing similar
/// frequency/score characteristics.
///
/// Clusters are recomputed fully on each analysis run; ids are assigned
/// in discovery order and carry no identity across runs. `members` are
/// indices into the score-sorted issue list of the same run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: usize,
    pub size: usize,
    pub mean_score: f64,
    /// Up to 3 most frequent device names, counted across both slots of
    /// each member. Ties break by first appearance.
    pub top_devices: Vec<DeviceCount>,
    /// Up to 3 most frequent center frequencies. Ties break by first
    /// appearance.
    pub top_frequencies: Vec<FrequencyCount>,
    pub members: Vec<usize>,
}
