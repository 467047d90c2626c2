//! post_fetch library: fetch one document over HTTP and print it.
//!
//! The program sends a single GET to [`TARGET_URL`], reads the whole body and
//! prints the status line and body text. Failures are printed as a single
//! diagnostic line; nothing is retried.
//!
//! # Example
//!
//! ```no_run
//! use post_fetch::{fetch_and_print, init_client, TARGET_URL};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = init_client()?;
//! let mut stdout = std::io::stdout().lock();
//! fetch_and_print(&client, TARGET_URL, &mut stdout).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;

// Re-export public API
pub use config::{Config, LogLevel, ParsedArgs, TARGET_URL};
pub use error_handling::{
    categorize_reqwest_error, describe, ErrorType, FetchError, InitializationError,
};
pub use fetch::{fetch, fetch_and_print, status_line, write_outcome, FetchedResponse};
pub use initialization::{init_client, init_logger_with};
