// ── Raw snapshot records ──
//
// Wire-shaped input types at the boundary with the (external) collection
// layer. Field names mirror the management API's camelCase JSON. The
// registry normalizes these into canonical `model::Device` values; nothing
// downstream ever touches a record again.

use serde::{Deserialize, Serialize};

/// One device as reported by the inventory endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    /// Records without an id are dropped by the registry.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, rename = "type")]
    pub device_type: Option<String>,
    #[serde(default)]
    pub site_id: Option<String>,
}

/// One site (physical install location) with optional geolocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub elevation: Option<f64>,
}

/// Wireless configuration for one device.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioRecord {
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub ssid: Option<String>,
    /// Center frequency in MHz.
    #[serde(default)]
    pub frequency: Option<f64>,
    /// Channel width in MHz.
    #[serde(default)]
    pub channel_width: Option<f64>,
    /// Transmit power in dBm.
    #[serde(default)]
    pub tx_power: Option<f64>,
}

/// A static snapshot of device state, fetched upstream strictly before the
/// engine runs. The engine never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub devices: Vec<DeviceRecord>,
    #[serde(default)]
    pub sites: Vec<SiteRecord>,
    #[serde(default)]
    pub radios: Vec<RadioRecord>,
}
