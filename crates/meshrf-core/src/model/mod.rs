// ── Unified domain model ──
//
// Every type in this module is the canonical in-memory representation of
// an inventory entity. The registry builds them from raw snapshot records;
// everything downstream (analyzer, scorer, clustering, report) consumes
// them as immutable values.

pub mod cluster;
pub mod conflict;
pub mod device;
pub mod entity_id;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use meshrf_core::model::*` gives you everything.

// Core identity
pub use entity_id::EntityId;

// Device
pub use device::{Device, Direction, Facing, FrequencyRange};

// Conflicts
pub use conflict::{ConflictResult, Severity};

// Clusters
pub use cluster::{Cluster, DeviceCount, FrequencyCount};
