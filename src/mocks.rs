//! In-memory collaborators for unit tests

use crate::coordinator::{Coordinator, Route};
use crate::error::{Error, Result};
use crate::fetch::FetchLocations;
use crate::geo::SearchLocations;
use crate::model::Location;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn transport_error() -> Error {
    Error::Io(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "mock transport failure",
    ))
}

#[derive(Default)]
struct FetchState {
    locations: Vec<Location>,
    fail: bool,
    calls: usize,
}

/// Fetcher returning a fixed list; clones share state
#[derive(Clone, Default)]
pub struct FetchLocationsMock {
    state: Arc<Mutex<FetchState>>,
}

impl FetchLocationsMock {
    pub fn returning(locations: Vec<Location>) -> Self {
        let mock = Self::default();
        mock.set_locations(locations);
        mock
    }

    pub fn failing() -> Self {
        let mock = Self::default();
        mock.state.lock().unwrap().fail = true;
        mock
    }

    pub fn set_locations(&self, locations: Vec<Location>) {
        self.state.lock().unwrap().locations = locations;
    }

    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }
}

impl FetchLocations for FetchLocationsMock {
    async fn fetch(&self) -> Result<Vec<Location>> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if state.fail {
            return Err(transport_error());
        }
        Ok(state.locations.clone())
    }
}

#[derive(Default)]
struct SearchState {
    results: Vec<Location>,
    fail: bool,
    delays: HashMap<String, Duration>,
    received: Vec<String>,
}

/// Search backend recording every query; clones share state
#[derive(Clone, Default)]
pub struct SearchLocationsMock {
    state: Arc<Mutex<SearchState>>,
}

impl SearchLocationsMock {
    pub fn returning(results: Vec<Location>) -> Self {
        let mock = Self::default();
        mock.state.lock().unwrap().results = results;
        mock
    }

    pub fn failing() -> Self {
        let mock = Self::default();
        mock.state.lock().unwrap().fail = true;
        mock
    }

    /// Make queries for `text` take `delay` before answering
    pub fn delay(&self, text: &str, delay: Duration) {
        self.state.lock().unwrap().delays.insert(text.to_string(), delay);
    }

    pub fn received(&self) -> Vec<String> {
        self.state.lock().unwrap().received.clone()
    }
}

impl SearchLocations for SearchLocationsMock {
    async fn search(&self, text: &str) -> Result<Vec<Location>> {
        let delay = {
            let mut state = self.state.lock().unwrap();
            state.received.push(text.to_string());
            state.delays.get(text).copied()
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let state = self.state.lock().unwrap();
        if state.fail {
            return Err(Error::Geocoding("mock geocoder failure".to_string()));
        }
        Ok(state.results.clone())
    }
}

/// Coordinator recording the routes it was asked to follow
#[derive(Clone, Default)]
pub struct CoordinatorMock {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl CoordinatorMock {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Coordinator for CoordinatorMock {
    fn coordinate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

pub fn amsterdam() -> Location {
    Location::named("Amsterdam", 52.3547498, 4.8339215)
}

pub fn mumbai() -> Location {
    Location::named("Mumbai", 19.0823998, 72.8111468)
}

pub fn unknown() -> Location {
    Location::new(None, crate::model::Coordinates::new(40.4380638, -3.7495758))
}
