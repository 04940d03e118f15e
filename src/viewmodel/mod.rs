//! Locations view model
//!
//! Owns the display state and reacts to the three things the presentation
//! layer can report: the list appeared, the search text changed, an item was
//! tapped.
//!
//! Every load or search takes a new generation number. A result is only
//! applied if no newer request has started since, so a slow response can
//! never overwrite a fresher one.

pub mod debounce;
pub mod state;

pub use debounce::{spawn_debouncer, Debounce, Phase};
pub use state::{LocationItem, State};

use crate::config::Config;
use crate::config::defaults::{DEFAULT_DEBOUNCE_MS, DEFAULT_UNKNOWN_NAME};
use crate::constants::wikipedia::SCHEME as WIKIPEDIA_SCHEME;
use crate::coordinator::{Coordinator, Route};
use crate::error::Result;
use crate::fetch::FetchLocations;
use crate::geo::SearchLocations;
use crate::model::Location;
use crate::service::LocationsService;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Buffered state transitions per subscriber before it starts lagging
const STATE_CHANNEL_CAPACITY: usize = 64;

/// Predicate telling whether an app handling the given URL scheme is installed
pub type AppInstalledChecker = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Tunables for the view model
#[derive(Debug, Clone)]
pub struct ViewModelOptions {
    /// Quiescence period before search text is dispatched
    pub debounce: Duration,
    /// Name shown for locations without one
    pub unknown_name: String,
}

impl Default for ViewModelOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            unknown_name: DEFAULT_UNKNOWN_NAME.to_string(),
        }
    }
}

impl ViewModelOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            debounce: config.debounce(),
            unknown_name: config.display.unknown_name.clone(),
        }
    }
}

struct Shared {
    state: State,
    generation: u64,
}

/// The part of the view model that outlives a single call
struct Inner<F, S> {
    service: LocationsService<F, S>,
    unknown_name: String,
    shared: Mutex<Shared>,
    states: broadcast::Sender<State>,
}

impl<F, S> Inner<F, S>
where
    F: FetchLocations,
    S: SearchLocations,
{
    fn lock(&self) -> std::sync::MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Start a new request generation, optionally publishing `Loading`
    fn begin(&self, loading: bool) -> u64 {
        let mut shared = self.lock();
        shared.generation += 1;
        if loading {
            shared.state = State::Loading;
            let _ = self.states.send(State::Loading);
        }
        shared.generation
    }

    /// Publish `state` unless a newer request has started
    fn apply(&self, generation: u64, state: State) {
        let mut shared = self.lock();
        if shared.generation != generation {
            debug!(
                "Discarding result of request {} superseded by {}",
                generation, shared.generation
            );
            return;
        }
        shared.state = state.clone();
        let _ = self.states.send(state);
    }

    fn to_state(&self, result: Result<Vec<Location>>) -> State {
        match result {
            Ok(locations) => State::data(locations, &self.unknown_name),
            Err(e) => {
                info!("Loading locations failed: {}", e);
                State::Error
            }
        }
    }

    async fn load(&self) {
        let generation = self.begin(true);
        let result = self.service.fetch_locations(None).await;
        self.apply(generation, self.to_state(result));
    }

    async fn search(&self, text: &str) {
        let generation = self.begin(false);
        debug!("Searching locations for '{}'", text);
        let result = self.service.fetch_locations(Some(text)).await;
        self.apply(generation, self.to_state(result));
    }
}

/// View model behind the location list
pub struct LocationsViewModel<F, S> {
    inner: Arc<Inner<F, S>>,
    coordinator: Arc<dyn Coordinator>,
    app_installed: AppInstalledChecker,
    alert_shown: AtomicBool,
    search_text: mpsc::UnboundedSender<String>,
    debouncer: JoinHandle<()>,
}

impl<F, S> LocationsViewModel<F, S>
where
    F: FetchLocations + 'static,
    S: SearchLocations + 'static,
{
    /// Create the view model and start its search debouncer
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(
        service: LocationsService<F, S>,
        coordinator: Arc<dyn Coordinator>,
        app_installed: impl Fn(&str) -> bool + Send + Sync + 'static,
        options: ViewModelOptions,
    ) -> Self {
        let (states, _) = broadcast::channel(STATE_CHANNEL_CAPACITY);
        let inner = Arc::new(Inner {
            service,
            unknown_name: options.unknown_name,
            shared: Mutex::new(Shared {
                state: State::Loading,
                generation: 0,
            }),
            states,
        });

        let (search_text, search_rx) = mpsc::unbounded_channel();
        let dispatcher = Arc::clone(&inner);
        let debouncer = spawn_debouncer(
            Debounce::new(options.debounce, String::new()),
            search_rx,
            move |text: String| {
                let inner = Arc::clone(&dispatcher);
                tokio::spawn(async move { inner.search(&text).await });
            },
        );

        Self {
            inner,
            coordinator,
            app_installed: Box::new(app_installed),
            alert_shown: AtomicBool::new(false),
            search_text,
            debouncer,
        }
    }

    /// Load the full list: `Loading`, then `Data` or `Error`
    pub async fn on_load(&self) {
        self.inner.load().await;
    }

    /// Report the current search text; dispatched once typing settles
    pub fn on_search_text_changed(&self, text: impl Into<String>) {
        // only fails once the debouncer is gone, i.e. during teardown
        let _ = self.search_text.send(text.into());
    }

    /// Search immediately, bypassing the debounce
    ///
    /// Empty text restores the last fetched list. Never yields `Error`.
    pub async fn on_search(&self, text: &str) {
        self.inner.search(text).await;
    }

    /// Open the tapped location in Wikipedia, or raise the not-installed alert
    pub fn on_tap_location(&self, item: &LocationItem) {
        if !(self.app_installed)(WIKIPEDIA_SCHEME) {
            self.alert_shown.store(true, Ordering::SeqCst);
            return;
        }
        let Some(url) = item.coordinates.wikipedia_deeplink() else {
            return;
        };
        self.coordinator.coordinate(Route::Deeplink(url));
    }

    pub fn hide_wikipedia_not_installed_alert(&self) {
        self.alert_shown.store(false, Ordering::SeqCst);
    }

    pub fn is_wikipedia_not_installed_alert_shown(&self) -> bool {
        self.alert_shown.load(Ordering::SeqCst)
    }

    /// Current display state
    pub fn state(&self) -> State {
        self.inner.lock().state.clone()
    }

    /// Receive every state transition from now on, in order
    pub fn subscribe(&self) -> broadcast::Receiver<State> {
        self.inner.states.subscribe()
    }

    pub fn service(&self) -> &LocationsService<F, S> {
        &self.inner.service
    }
}

impl<F, S> Drop for LocationsViewModel<F, S> {
    fn drop(&mut self) {
        self.debouncer.abort();
    }
}
