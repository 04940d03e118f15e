//! Navigation out of the app
//!
//! The only route is a deep link into another application. Opening is
//! fire-and-forget: an unresolvable URL is ignored, a failed launch is logged.

use reqwest::Url;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Where a tap can take the user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Hand the URL to whichever application handles its scheme
    Deeplink(Url),
}

/// Follows routes requested by the view model
pub trait Coordinator: Send + Sync {
    fn coordinate(&self, route: Route);
}

/// Platform hook for resolving and launching URLs
pub trait UrlOpener: Send + Sync {
    /// Whether some installed application handles this URL
    fn can_open(&self, url: &Url) -> bool;

    /// Launch the URL, best effort
    fn open(&self, url: &Url);
}

/// Opens deep links through a [`UrlOpener`] when they can be resolved
#[derive(Debug, Clone)]
pub struct DeeplinkCoordinator<O> {
    opener: O,
}

impl<O: UrlOpener> DeeplinkCoordinator<O> {
    pub fn new(opener: O) -> Self {
        Self { opener }
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }
}

impl<O: UrlOpener> Coordinator for DeeplinkCoordinator<O> {
    fn coordinate(&self, route: Route) {
        match route {
            Route::Deeplink(url) => {
                if self.opener.can_open(&url) {
                    self.opener.open(&url);
                } else {
                    debug!("No handler for {}, ignoring deep link", url);
                }
            }
        }
    }
}

/// Launches URLs with an external program such as `xdg-open`
#[derive(Debug, Clone)]
pub struct CommandOpener {
    program: String,
    schemes: Vec<String>,
}

impl CommandOpener {
    /// Opener running `program <url>` for the given URL schemes
    pub fn new(program: impl Into<String>, schemes: Vec<String>) -> Self {
        Self {
            program: program.into(),
            schemes: schemes
                .into_iter()
                .map(|s| normalize_scheme(&s).to_string())
                .collect(),
        }
    }

    /// Whether `scheme` (with or without a trailing `://`) has a handler
    pub fn is_scheme_installed(&self, scheme: &str) -> bool {
        let scheme = normalize_scheme(scheme);
        self.schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme))
    }
}

fn normalize_scheme(scheme: &str) -> &str {
    scheme.trim().trim_end_matches("://").trim_end_matches(':')
}

impl UrlOpener for CommandOpener {
    fn can_open(&self, url: &Url) -> bool {
        self.is_scheme_installed(url.scheme())
    }

    fn open(&self, url: &Url) {
        let spawned = Command::new(&self.program)
            .arg(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(_) => info!("Opened {} with {}", url, self.program),
            Err(e) => warn!("Failed to run {} for {}: {}", self.program, url, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct RecordingOpener {
        installed: bool,
        opened: Arc<Mutex<Vec<String>>>,
    }

    impl UrlOpener for RecordingOpener {
        fn can_open(&self, _url: &Url) -> bool {
            self.installed
        }

        fn open(&self, url: &Url) {
            self.opened.lock().unwrap().push(url.to_string());
        }
    }

    fn wikipedia_url() -> Url {
        Url::parse("wikipedia://placeWithCoordinates?latitude=1&longitude=2").unwrap()
    }

    #[test]
    fn test_opens_resolvable_url() {
        let opener = RecordingOpener {
            installed: true,
            ..Default::default()
        };
        let coordinator = DeeplinkCoordinator::new(opener.clone());

        coordinator.coordinate(Route::Deeplink(wikipedia_url()));
        assert_eq!(opener.opened.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_ignores_unresolvable_url() {
        let opener = RecordingOpener::default();
        let coordinator = DeeplinkCoordinator::new(opener.clone());

        coordinator.coordinate(Route::Deeplink(wikipedia_url()));
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn test_scheme_matching() {
        let opener = CommandOpener::new("xdg-open", vec!["wikipedia://".to_string()]);

        assert!(opener.is_scheme_installed("wikipedia://"));
        assert!(opener.is_scheme_installed("wikipedia"));
        assert!(opener.is_scheme_installed("Wikipedia:"));
        assert!(!opener.is_scheme_installed("maps://"));
        assert!(opener.can_open(&wikipedia_url()));
        assert!(!opener.can_open(&Url::parse("https://example.com").unwrap()));
    }

    #[test]
    fn test_missing_program_is_not_fatal() {
        let opener = CommandOpener::new(
            "definitely-not-an-installed-opener",
            vec!["wikipedia".to_string()],
        );
        opener.open(&wikipedia_url());
    }
}
