// ── Great-circle geometry ──
//
// Haversine distance and initial-bearing math over WGS-ish spherical
// coordinates. Everything here is fallible on bad input: callers catch
// `GeoError`, log it, and degrade to "unknown" rather than aborting the
// analysis.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("bearing is undefined for coincident points")]
    CoincidentPoints,
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Reject non-finite or out-of-range coordinates.
    pub fn validate(&self) -> Result<(), GeoError> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lon_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(GeoError::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// Haversine great-circle distance between two points, in meters.
pub fn distance_m(from: GeoPoint, to: GeoPoint) -> Result<f64, GeoError> {
    from.validate()?;
    to.validate()?;

    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    Ok(EARTH_RADIUS_M * c)
}

/// Initial compass bearing from `from` toward `to`, in degrees [0, 360).
///
/// North is 0, east is 90. Undefined when the points coincide.
pub fn initial_bearing_deg(from: GeoPoint, to: GeoPoint) -> Result<f64, GeoError> {
    from.validate()?;
    to.validate()?;
    if from == to {
        return Err(GeoError::CoincidentPoints);
    }

    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    Ok(y.atan2(x).to_degrees().rem_euclid(360.0))
}

/// The bearing looking back along a path: `bearing + 180`, wrapped.
pub fn reciprocal_bearing_deg(bearing_deg: f64) -> f64 {
    (bearing_deg + 180.0).rem_euclid(360.0)
}

/// Absolute angular difference between two bearings, normalized into
/// [0, 180] degrees.
pub fn angular_deviation_deg(a_deg: f64, b_deg: f64) -> f64 {
    ((a_deg - b_deg + 180.0).rem_euclid(360.0) - 180.0).abs()
}
