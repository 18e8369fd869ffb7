//! Cineshelf CLI binary.
//!
//! Interactive menu over a flat-file movie catalog:
//! - List, add, delete, and update movies
//! - Fill in records from the OMDb API
//! - Render the catalog as a static web page

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, run_menu};

    // Load .env before anything reads OMDB_API_KEY
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr so they never interleave with menu prompts
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    run_menu(&cli)
}
