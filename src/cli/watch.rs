//! Watch command handler
//!
//! Feeds stdin lines through the debounced search pipeline and prints every
//! state transition as it happens.

use crate::cli::{build_view_model, resolve_formatter};
use crate::config::Config;
use crate::error::Result;
use clap::Args;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;

/// Extra wait after stdin closes for the last query to be dispatched
const SETTLE_GRACE: Duration = Duration::from_millis(100);

/// Watch command arguments
#[derive(Args)]
pub struct WatchArgs {
    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,
}

/// Run the watch command
pub async fn run(args: WatchArgs) -> Result<()> {
    let formatter = resolve_formatter(&args.format)?;
    let config = Config::load()?;
    let view_model = build_view_model(&config)?;

    let mut states = view_model.subscribe();
    let printer = tokio::spawn(async move {
        loop {
            match states.recv().await {
                Ok(state) => match formatter.format(&state) {
                    Ok(output) => println!("{}\n", output),
                    Err(e) => warn!("Failed to format state: {}", e),
                },
                Err(RecvError::Lagged(skipped)) => warn!("Skipped {} state updates", skipped),
                Err(RecvError::Closed) => break,
            }
        }
    });

    view_model.on_load().await;
    eprintln!("Type a query per line; an empty line shows all locations. Ctrl-D quits.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        view_model.on_search_text_changed(line.trim());
    }

    tokio::time::sleep(config.debounce() + SETTLE_GRACE).await;
    drop(view_model);
    let _ = printer.await;
    Ok(())
}
