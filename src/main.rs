//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `post_fetch` library that handles:
//! - Command-line argument parsing (logging options only)
//! - Logger initialization
//! - Writing the fetch outcome to stdout
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use log::warn;

use post_fetch::initialization::{init_client, init_logger_with};
use post_fetch::{fetch_and_print, Config, ParsedArgs, TARGET_URL};

// Single-threaded: one request, nothing to run alongside it
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let (config, ignored) = match Config::parse_lenient(std::env::args_os()) {
        ParsedArgs::Run(config, ignored) => (config, ignored),
        ParsedArgs::Exit(e) => e.exit(),
    };

    init_logger_with(config.log_level.into()).context("Failed to initialize logger")?;

    if let Some(e) = ignored {
        warn!(
            "Ignoring command-line arguments: {}",
            e.to_string().lines().next().unwrap_or_default()
        );
    }

    let client = init_client().context("Failed to initialize HTTP client")?;

    // A failed fetch is reported on stdout and still exits 0
    let mut stdout = std::io::stdout().lock();
    fetch_and_print(&client, TARGET_URL, &mut stdout)
        .await
        .context("Failed to write to stdout")?;

    Ok(())
}
