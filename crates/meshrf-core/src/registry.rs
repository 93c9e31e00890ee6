// ── Record-to-domain normalization ──
//
// Bridges raw snapshot records into canonical `model::Device` values.
// Each device record is joined with its site (by site id) and its radio
// configuration (by device id); missing lookups leave the dependent
// fields absent. Sensible defaults fill missing display strings.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::model::{Device, Direction, EntityId, Facing};
use crate::records::{RadioRecord, SiteRecord, Snapshot};

/// Beam width assumed for every name-inferred facing, in degrees.
const INFERRED_BEAM_WIDTH_DEG: f64 = 90.0;

/// Build the ordered device registry from a snapshot.
///
/// Records without an id are skipped. Output order follows the input
/// record order, which keeps downstream results deterministic.
pub fn build(snapshot: &Snapshot) -> Vec<Arc<Device>> {
    let site_map: HashMap<&str, &SiteRecord> = snapshot
        .sites
        .iter()
        .filter_map(|s| s.id.as_deref().map(|id| (id, s)))
        .collect();

    let radio_map: HashMap<&str, &RadioRecord> = snapshot
        .radios
        .iter()
        .filter_map(|r| r.device_id.as_deref().map(|id| (id, r)))
        .collect();

    let mut devices = Vec::with_capacity(snapshot.devices.len());
    for record in &snapshot.devices {
        let Some(id) = record.id.as_deref() else {
            continue;
        };

        let site = record.site_id.as_deref().and_then(|s| site_map.get(s));
        let radio = radio_map.get(id);

        let name = record.name.clone().unwrap_or_else(|| "Unknown".into());
        let facing = infer_facing(&name);

        devices.push(Arc::new(Device {
            id: EntityId::from(id),
            name,
            model: record.model.clone().unwrap_or_else(|| "Unknown".into()),
            device_type: record
                .device_type
                .clone()
                .unwrap_or_else(|| "Unknown".into()),
            site_id: record.site_id.as_deref().map(EntityId::from),
            latitude: site.and_then(|s| s.latitude),
            longitude: site.and_then(|s| s.longitude),
            frequency_mhz: radio.and_then(|r| r.frequency),
            channel_width_mhz: radio.and_then(|r| r.channel_width),
            tx_power_dbm: radio.and_then(|r| r.tx_power),
            facing,
        }));
    }

    info!(devices = devices.len(), "built device registry from snapshot");
    devices
}

/// Infer an antenna facing from a free-text device name.
///
/// Heuristic substring match, lower-cased, tested in the fixed priority
/// order north, east, south, west; the first match wins. Isolated here so
/// it can be replaced by structured metadata without touching any scoring
/// logic.
pub fn infer_facing(name: &str) -> Option<Facing> {
    let lower = name.to_lowercase();
    let direction = if lower.contains("north") {
        Direction::North
    } else if lower.contains("east") {
        Direction::East
    } else if lower.contains("south") {
        Direction::South
    } else if lower.contains("west") {
        Direction::West
    } else {
        return None;
    };
    Some(Facing {
        direction,
        beam_width_deg: INFERRED_BEAM_WIDTH_DEG,
    })
}
