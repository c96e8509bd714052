//! Coordinate math for the stamp map.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
///
/// Used both for catalog places and for the user's current position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }
}

/// Great-circle distance between two points in kilometers.
///
/// Haversine in the atan2 form. Inputs are not range-checked here; the CLI
/// parse edge rejects malformed coordinates before they reach the math.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

impl FromStr for GeoPoint {
    type Err = String;

    /// Parses `"lat,lng"`, e.g. `"36.3504,127.3845"`. This is the one place
    /// coordinate ranges are enforced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(2, ',').collect();
        if parts.len() != 2 {
            return Err(format!("expected \"lat,lng\", got '{s}'"));
        }

        let lat: f64 = parts[0]
            .trim()
            .parse()
            .map_err(|_| format!("latitude '{}' is not a number", parts[0].trim()))?;
        let lng: f64 = parts[1]
            .trim()
            .parse()
            .map_err(|_| format!("longitude '{}' is not a number", parts[1].trim()))?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!("latitude {lat} is outside [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!("longitude {lng} is outside [-180, 180]"));
        }

        Ok(GeoPoint { lat, lng })
    }
}
