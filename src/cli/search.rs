//! Search command handler
//!
//! Loads the list, then resolves the query right away (no debounce).

use crate::cli::{build_view_model, resolve_formatter};
use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Free text to geocode; empty shows the full list
    pub text: String,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,
}

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    let formatter = resolve_formatter(&args.format)?;
    let config = Config::load()?;
    let view_model = build_view_model(&config)?;

    // an empty query falls back to the fetched list, so load it first
    view_model.on_load().await;
    view_model.on_search(args.text.trim()).await;

    println!("{}", formatter.format(&view_model.state())?);
    Ok(())
}
