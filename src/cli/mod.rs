//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions. This module is
//! also where the collaborators are wired into a view model.

pub mod config;
pub mod list;
pub mod open;
pub mod search;
pub mod watch;

use crate::config::Config;
use crate::coordinator::{CommandOpener, DeeplinkCoordinator};
use crate::error::{Error, Result};
use crate::fetch::{get_fetcher, RemoteLocationsService};
use crate::format::{available_formats, get_formatter, OutputFormatter};
use crate::geo::{get_geocoder, NominatimSearch};
use crate::service::LocationsService;
use crate::viewmodel::{LocationsViewModel, ViewModelOptions};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Browse named locations and open them in Wikipedia
#[derive(Parser)]
#[command(name = "locations")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log progress to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and list all locations
    List(list::ListArgs),

    /// Search locations by name
    Search(search::SearchArgs),

    /// Open a listed location in the Wikipedia app
    Open(open::OpenArgs),

    /// Search interactively, one query per line on stdin
    Watch(watch::WatchArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// View model wired to the real network collaborators
pub type AppViewModel = LocationsViewModel<RemoteLocationsService, NominatimSearch>;

/// Build the view model from configuration
pub fn build_view_model(config: &Config) -> Result<AppViewModel> {
    let service = LocationsService::new(get_fetcher(config)?, get_geocoder(config)?);

    let opener = CommandOpener::new(&config.deeplink.opener, config.deeplink.schemes.clone());
    let checker = opener.clone();
    let coordinator = Arc::new(DeeplinkCoordinator::new(opener));

    Ok(LocationsViewModel::new(
        service,
        coordinator,
        move |scheme: &str| checker.is_scheme_installed(scheme),
        ViewModelOptions::from_config(config),
    ))
}

/// Look up an output formatter, listing the valid names on failure
pub fn resolve_formatter(name: &str) -> Result<Box<dyn OutputFormatter>> {
    get_formatter(name).ok_or_else(|| {
        let known: Vec<String> = available_formats().into_iter().map(|f| f.name).collect();
        Error::Config(format!(
            "Unknown format: {} (available: {})",
            name,
            known.join(", ")
        ))
    })
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List(args) => list::run(args).await,
        Commands::Search(args) => search::run(args).await,
        Commands::Open(args) => open::run(args).await,
        Commands::Watch(args) => watch::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}
