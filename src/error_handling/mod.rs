//! Error handling.
//!
//! This module provides:
//! - Error type definitions for start-up and for the fetch itself
//! - Categorization of `reqwest` errors for diagnostic logging
//!
//! A fetch fails in exactly one of two ways: no response was obtained
//! (`FetchError::Transport`) or the body could not be read
//! (`FetchError::BodyRead`).

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{describe, ErrorType, FetchError, InitializationError};
