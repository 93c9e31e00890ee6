// ── Device domain types ──

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;
use crate::geo::GeoPoint;

/// Cardinal direction an antenna is pointed, as inferred from the device
/// name. The variant order matters nowhere; the inference priority order
/// lives in the registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Compass bearing of the direction in degrees (north = 0, east = 90).
    pub fn bearing_deg(self) -> f64 {
        match self {
            Self::North => 0.0,
            Self::East => 90.0,
            Self::South => 180.0,
            Self::West => 270.0,
        }
    }
}

/// Heuristic antenna facing: a cardinal direction plus a beam width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Facing {
    pub direction: Direction,
    pub beam_width_deg: f64,
}

impl Facing {
    pub fn half_beam_deg(&self) -> f64 {
        self.beam_width_deg / 2.0
    }
}

/// Inclusive frequency range occupied by a radio, in MHz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRange {
    pub min_mhz: f64,
    pub max_mhz: f64,
}

impl FrequencyRange {
    /// Two ranges overlap iff `min1 <= max2 && max1 >= min2`. Touching
    /// ranges count as overlapping with width zero.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min_mhz <= other.max_mhz && self.max_mhz >= other.min_mhz
    }

    /// Overlap width in MHz. Always >= 0 when [`Self::overlaps`] holds.
    pub fn overlap_width(&self, other: &Self) -> f64 {
        self.max_mhz.min(other.max_mhz) - self.min_mhz.max(other.min_mhz)
    }
}

/// The canonical device type. One per physical radio, built by the
/// registry from device + site + radio records and immutable afterwards.
/// Carries no references to other entities, only values and the id of
/// its owning site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: EntityId,
    pub name: String,
    pub model: String,
    pub device_type: String,
    pub site_id: Option<EntityId>,

    // Geolocation of the owning site
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    // Radio parameters
    pub frequency_mhz: Option<f64>,
    pub channel_width_mhz: Option<f64>,
    pub tx_power_dbm: Option<f64>,

    // Inferred from the device name; heuristic, not measured
    pub facing: Option<Facing>,
}

impl Device {
    /// Frequency bounds `frequency ± channel_width/2`, present only when
    /// both frequency and channel width are known. Devices without bounds
    /// are excluded from frequency-overlap analysis.
    pub fn frequency_range(&self) -> Option<FrequencyRange> {
        let frequency = self.frequency_mhz?;
        let width = self.channel_width_mhz?;
        Some(FrequencyRange {
            min_mhz: frequency - width / 2.0,
            max_mhz: frequency + width / 2.0,
        })
    }

    /// Site coordinates, present only when both latitude and longitude
    /// are known. Validity (range, finiteness) is checked in [`crate::geo`].
    pub fn location(&self) -> Option<GeoPoint> {
        Some(GeoPoint {
            latitude: self.latitude?,
            longitude: self.longitude?,
        })
    }
}
