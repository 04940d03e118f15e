//! Centralized constants for the locations crate
//!
//! Values shared by more than one module live here.

/// External API endpoints
pub mod api {
    /// Remote list of named locations
    pub const LOCATIONS_URL: &str =
        "https://raw.githubusercontent.com/abnamrocoesd/assignment-ios/main/locations.json";

    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// User agent sent with every request (Nominatim rejects anonymous clients)
    pub const USER_AGENT: &str = concat!("locations/", env!("CARGO_PKG_VERSION"));
}

/// Wikipedia app deep links
pub mod wikipedia {
    /// Scheme checked before tapping through to the app
    pub const SCHEME: &str = "wikipedia://";

    /// Host of the "place with coordinates" deep link
    pub const PLACE_WITH_COORDINATES: &str = "placeWithCoordinates";
}
