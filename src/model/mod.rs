//! Location value types
//!
//! Coordinates, named locations and the JSON envelope they arrive in.

pub mod location;

pub use location::{decode_locations, Location, LocationsResponse};

use crate::constants::wikipedia::PLACE_WITH_COORDINATES;
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// A geographic coordinate
///
/// No range validation is applied; out-of-range values pass through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Deep link into the Wikipedia app's "places near" view
    ///
    /// `None` if the coordinates don't produce a parseable URL.
    pub fn wikipedia_deeplink(&self) -> Option<Url> {
        Url::parse(&format!(
            "wikipedia://{}?latitude={}&longitude={}",
            PLACE_WITH_COORDINATES, self.latitude, self.longitude
        ))
        .ok()
    }
}
