//! Full location list fetching
//!
//! One network call, decoded into a list of locations. No retry, no caching.

pub mod remote;

use crate::config::Config;
use crate::error::Result;
use crate::model::Location;

pub use remote::RemoteLocationsService;

/// Trait for sources of the full location list
pub trait FetchLocations: Send + Sync {
    /// Fetch every location, in source order
    fn fetch(&self) -> impl std::future::Future<Output = Result<Vec<Location>>> + Send;
}

/// Get the remote fetcher configured for this installation
pub fn get_fetcher(config: &Config) -> Result<RemoteLocationsService> {
    RemoteLocationsService::new(&config.source.url)
}
