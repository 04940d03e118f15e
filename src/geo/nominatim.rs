//! Nominatim geocoding backend (OpenStreetMap)
//!
//! Uses the free Nominatim API for search.
//! Rate limit: 1 request per second (enforced by User-Agent requirement)

use crate::constants::api::USER_AGENT;
use crate::error::{Error, Result};
use crate::geo::SearchLocations;
use crate::model::{Coordinates, Location};
use serde::Deserialize;
use tracing::debug;

/// Nominatim search backend
#[derive(Debug, Clone)]
pub struct NominatimSearch {
    client: reqwest::Client,
    base_url: String,
    limit: usize,
}

/// Nominatim search response item
///
/// Every field is optional so one odd candidate doesn't sink the batch.
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: Option<String>,
    lon: Option<String>,
    display_name: Option<String>,
}

impl NominatimSearch {
    /// Create a new Nominatim backend against `base_url`
    pub fn new(base_url: impl Into<String>, limit: usize) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Geocoding(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            limit,
        })
    }

    /// Parse lat/lng strings to f64
    fn parse_coords(lat: &str, lng: &str) -> Option<Coordinates> {
        let lat: f64 = lat.parse().ok()?;
        let lng: f64 = lng.parse().ok()?;
        Some(Coordinates::new(lat, lng))
    }

    /// Turn a candidate into a location, if it has a name and a coordinate
    fn to_location(result: NominatimResult) -> Option<Location> {
        let name = result.display_name.filter(|n| !n.is_empty())?;
        let coordinates = Self::parse_coords(result.lat.as_deref()?, result.lon.as_deref()?)?;
        Some(Location::new(Some(name), coordinates))
    }
}

impl SearchLocations for NominatimSearch {
    async fn search(&self, text: &str) -> Result<Vec<Location>> {
        let url = format!(
            "{}/search?q={}&format=json&limit={}",
            self.base_url,
            urlencoding::encode(text),
            self.limit
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Geocoding(format!("Nominatim request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Geocoding(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| Error::Geocoding(format!("Failed to parse Nominatim response: {}", e)))?;

        let candidates = results.len();
        let locations: Vec<Location> = results.into_iter().filter_map(Self::to_location).collect();
        debug!(
            "Nominatim resolved '{}' to {} of {} candidates",
            text,
            locations.len(),
            candidates
        );

        Ok(locations)
    }
}
