//! Display state consumed by the presentation layer

use crate::model::{Coordinates, Location};
use serde::{Deserialize, Serialize};

/// What the location list shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum State {
    Loading,
    Data { locations: Vec<LocationItem> },
    Error,
}

impl State {
    /// Build the data state from decoded locations
    pub fn data(locations: Vec<Location>, unknown_name: &str) -> Self {
        Self::Data {
            locations: locations
                .into_iter()
                .map(|l| LocationItem::from_location(l, unknown_name))
                .collect(),
        }
    }

    /// Items on screen, empty unless in the data state
    pub fn locations(&self) -> &[LocationItem] {
        match self {
            Self::Data { locations } => locations,
            Self::Loading | Self::Error => &[],
        }
    }
}

/// One row of the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationItem {
    pub name: String,
    pub coordinates: Coordinates,
}

impl LocationItem {
    /// Create an item, using `unknown_name` when the location has no name
    pub fn new(name: Option<String>, coordinates: Coordinates, unknown_name: &str) -> Self {
        Self {
            name: name.unwrap_or_else(|| unknown_name.to_string()),
            coordinates,
        }
    }

    pub fn from_location(location: Location, unknown_name: &str) -> Self {
        Self::new(location.name, location.coordinates, unknown_name)
    }

    /// Stable identity derived from the coordinates
    pub fn id(&self) -> String {
        format!("{}-{}", self.coordinates.latitude, self.coordinates.longitude)
    }
}
