//! Named locations and their wire format
//!
//! The remote list looks like:
//!
//! ```json
//! { "locations": [ { "name": "Amsterdam", "lat": 52.3547498, "long": 4.8339215 } ] }
//! ```
//!
//! `name` is optional and stays `None` after decoding; the placeholder is
//! chosen when the location is displayed.

use crate::error::Result;
use crate::model::Coordinates;
use serde::{Deserialize, Serialize};

/// A named geographic location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LocationWire", into = "LocationWire")]
pub struct Location {
    pub name: Option<String>,
    pub coordinates: Coordinates,
}

/// On-the-wire shape of a location
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LocationWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    lat: f64,
    long: f64,
}

impl From<LocationWire> for Location {
    fn from(wire: LocationWire) -> Self {
        Self {
            name: wire.name,
            coordinates: Coordinates::new(wire.lat, wire.long),
        }
    }
}

impl From<Location> for LocationWire {
    fn from(location: Location) -> Self {
        Self {
            name: location.name,
            lat: location.coordinates.latitude,
            long: location.coordinates.longitude,
        }
    }
}

impl Location {
    /// Create a location
    pub fn new(name: Option<String>, coordinates: Coordinates) -> Self {
        Self { name, coordinates }
    }

    /// Create a location with a known name
    pub fn named(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self::new(Some(name.into()), Coordinates::new(latitude, longitude))
    }
}

/// Envelope returned by the locations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<Location>,
}

/// Decode a response body into locations, in source order
///
/// A single malformed entry fails the whole body.
pub fn decode_locations(body: &[u8]) -> Result<Vec<Location>> {
    let response: LocationsResponse = serde_json::from_slice(body)?;
    Ok(response.locations)
}
