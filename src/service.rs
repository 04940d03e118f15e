//! Locations aggregator
//!
//! Decides, per request, whether to fetch the full list, serve the last
//! fetched list, or ask the geocoder.

use crate::error::Result;
use crate::fetch::FetchLocations;
use crate::geo::SearchLocations;
use crate::model::Location;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Composes the full-list fetcher and the search backend
pub struct LocationsService<F, S> {
    fetcher: F,
    searcher: S,
    /// Locations from the most recent successful full fetch
    fetched: RwLock<Vec<Location>>,
}

impl<F, S> LocationsService<F, S>
where
    F: FetchLocations,
    S: SearchLocations,
{
    pub fn new(fetcher: F, searcher: S) -> Self {
        Self {
            fetcher,
            searcher,
            fetched: RwLock::new(Vec::new()),
        }
    }

    /// Resolve locations for the given search text
    ///
    /// - `None`: full fetch, replacing the cached list. Errors propagate.
    /// - `Some("")`: the cached list, without any network call.
    /// - `Some(text)`: geocoder results; a failed search yields no results.
    pub async fn fetch_locations(&self, search_text: Option<&str>) -> Result<Vec<Location>> {
        let Some(text) = search_text else {
            let locations = self.fetcher.fetch().await?;
            *self.fetched.write().await = locations.clone();
            return Ok(locations);
        };

        if text.is_empty() {
            let cached = self.fetched.read().await.clone();
            debug!("Serving {} cached locations", cached.len());
            return Ok(cached);
        }

        match self.searcher.search(text).await {
            Ok(locations) => Ok(locations),
            Err(e) => {
                warn!("Search for '{}' failed, showing no results: {}", text, e);
                Ok(Vec::new())
            }
        }
    }

    /// Snapshot of the cached full list
    pub async fn cached(&self) -> Vec<Location> {
        self.fetched.read().await.clone()
    }
}
