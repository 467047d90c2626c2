//! Application initialization.
//!
//! Sets up the logger and the HTTP client before the fetch runs. Both return
//! `InitializationError` on failure.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
