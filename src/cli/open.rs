//! Open command handler
//!
//! Taps a listed location, which deep links into the Wikipedia app.

use crate::cli::build_view_model;
use crate::config::Config;
use crate::error::Result;
use crate::format::text::FETCH_FAILED_MESSAGE;
use crate::viewmodel::State;
use clap::Args;

/// Open command arguments
#[derive(Args)]
pub struct OpenArgs {
    /// Position in `locations list`
    pub index: usize,

    /// Pick from search results instead of the full list
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

/// Run the open command
pub async fn run(args: OpenArgs) -> Result<()> {
    let config = Config::load()?;
    let view_model = build_view_model(&config)?;

    view_model.on_load().await;
    if let Some(text) = &args.search {
        view_model.on_search(text.trim()).await;
    }

    let state = view_model.state();
    if state == State::Error {
        eprintln!("{}", FETCH_FAILED_MESSAGE);
        std::process::exit(1);
    }

    let Some(item) = state.locations().get(args.index) else {
        eprintln!(
            "Error: No location at index {} ({} listed)",
            args.index,
            state.locations().len()
        );
        std::process::exit(1);
    };

    view_model.on_tap_location(item);

    if view_model.is_wikipedia_not_installed_alert_shown() {
        eprintln!("The Wikipedia app is not installed");
        eprintln!("Register its handler with: locations config deeplink.schemes wikipedia");
        view_model.hide_wikipedia_not_installed_alert();
        std::process::exit(1);
    }

    println!("Opening {} ({})", item.name, item.id());
    Ok(())
}
