//! Application configuration and constants.
//!
//! This module provides:
//! - The fixed request target and console output labels
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogLevel, ParsedArgs};
