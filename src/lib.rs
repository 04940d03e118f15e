//! locations: Named Location Browser
//!
//! A library and CLI tool that fetches a list of named places, lets the user
//! narrow it down with free-text geocoding search, and deep links a chosen
//! place into the Wikipedia app.
//!
//! ## Features
//!
//! - Remote JSON location list with strict decoding
//! - Nominatim-backed search, debounced while typing
//! - Loading / data / error display state with ordered change notifications
//! - Wikipedia deep links, with a not-installed alert when no handler exists
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use locations::coordinator::{CommandOpener, DeeplinkCoordinator};
//! use locations::fetch::RemoteLocationsService;
//! use locations::geo::NominatimSearch;
//! use locations::service::LocationsService;
//! use locations::viewmodel::{LocationsViewModel, ViewModelOptions};
//!
//! # async fn example() -> locations::Result<()> {
//! let service = LocationsService::new(
//!     RemoteLocationsService::new(locations::constants::api::LOCATIONS_URL)?,
//!     NominatimSearch::new(locations::constants::api::NOMINATIM_URL, 10)?,
//! );
//! let opener = CommandOpener::new("xdg-open", vec!["wikipedia".to_string()]);
//! let view_model = LocationsViewModel::new(
//!     service,
//!     Arc::new(DeeplinkCoordinator::new(opener)),
//!     |_scheme: &str| true,
//!     ViewModelOptions::default(),
//! );
//!
//! view_model.on_load().await;
//! if let Some(item) = view_model.state().locations().first() {
//!     view_model.on_tap_location(item);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coordinator;
pub mod error;
pub mod fetch;
pub mod format;
pub mod geo;
pub mod model;
pub mod service;
pub mod viewmodel;

#[cfg(test)]
mod mocks;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use model::{Coordinates, Location};
pub use viewmodel::{LocationItem, LocationsViewModel, State};
