//! Remote JSON location list
//!
//! Fetches `{ "locations": [...] }` from a fixed URL.

use crate::constants::api::USER_AGENT;
use crate::error::{Error, Result};
use crate::fetch::FetchLocations;
use crate::model::{decode_locations, Location};
use reqwest::Url;
use tracing::debug;

/// Fetches the location list over HTTP
#[derive(Debug, Clone)]
pub struct RemoteLocationsService {
    client: reqwest::Client,
    url: String,
}

impl RemoteLocationsService {
    /// Create a fetcher for the given URL
    ///
    /// The URL is only validated when fetching, so a bad URL surfaces as a
    /// failed load rather than a startup error.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, url))
    }

    /// Create a fetcher sharing an existing HTTP client
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// The configured URL, as given
    pub fn url(&self) -> &str {
        &self.url
    }

    fn parse_url(&self) -> Result<Url> {
        Url::parse(&self.url).map_err(|e| Error::InvalidUrl(format!("{}: {}", self.url, e)))
    }
}

impl FetchLocations for RemoteLocationsService {
    async fn fetch(&self) -> Result<Vec<Location>> {
        let url = self.parse_url()?;
        debug!("Fetching locations from {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        let locations = decode_locations(&body)?;

        debug!("Fetched {} locations", locations.len());
        Ok(locations)
    }
}
