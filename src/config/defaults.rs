//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::api::{LOCATIONS_URL, NOMINATIM_URL};

/// Default locations endpoint
pub const DEFAULT_SOURCE_URL: &str = LOCATIONS_URL;

/// Default geocoder base URL
pub const DEFAULT_GEOCODER_URL: &str = NOMINATIM_URL;

/// Default maximum number of geocoder candidates
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Default quiescence period before search text is dispatched
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Placeholder shown for locations without a name
pub const DEFAULT_UNKNOWN_NAME: &str = "Unknown location";

/// Default program used to open deep links
#[cfg(target_os = "macos")]
pub const DEFAULT_OPENER: &str = "open";
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_OPENER: &str = "xdg-open";

/// URL schemes the opener is known to handle
pub const DEFAULT_SCHEMES: &[&str] = &["wikipedia"];

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "locations";
