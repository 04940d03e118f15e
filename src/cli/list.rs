//! List command handler
//!
//! Loads the full location list and prints it.

use crate::cli::{build_view_model, resolve_formatter};
use crate::config::Config;
use crate::error::Result;
use crate::viewmodel::State;
use clap::Args;

/// List command arguments
#[derive(Args)]
pub struct ListArgs {
    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,
}

/// Run the list command
pub async fn run(args: ListArgs) -> Result<()> {
    let formatter = resolve_formatter(&args.format)?;
    let config = Config::load()?;
    let view_model = build_view_model(&config)?;

    view_model.on_load().await;
    let state = view_model.state();
    println!("{}", formatter.format(&state)?);

    if state == State::Error {
        std::process::exit(1);
    }
    Ok(())
}
