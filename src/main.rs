//! locations CLI entry point
//!
//! Named location browser - list, search, open in Wikipedia

use locations::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
