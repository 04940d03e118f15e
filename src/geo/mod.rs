//! Geocoding search
//!
//! Resolves free text to candidate locations.

pub mod nominatim;

use crate::config::Config;
use crate::error::Result;
use crate::model::Location;

pub use nominatim::NominatimSearch;

/// Trait for geocoding search backends
pub trait SearchLocations: Send + Sync {
    /// Resolve free text to locations
    ///
    /// Candidates without both a name and a coordinate are dropped. Ordering
    /// is whatever the backend returns.
    fn search(&self, text: &str) -> impl std::future::Future<Output = Result<Vec<Location>>> + Send;
}

/// Get the geocoder configured for this installation
pub fn get_geocoder(config: &Config) -> Result<NominatimSearch> {
    NominatimSearch::new(&config.search.geocoder_url, config.search.limit)
}
