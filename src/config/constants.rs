//! Configuration constants.
//!
//! The request is fixed at compile time: target, method and client settings
//! never change between runs.

use crate::config::LogLevel;

/// The one endpoint this program ever requests.
pub const TARGET_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";

// Console output labels
/// Label of the status line on success.
pub const STATUS_PREFIX: &str = "Response Status:";
/// Label of the body line on success.
pub const BODY_PREFIX: &str = "Response Body:";
/// Label of the diagnostic when no response was received.
pub const TRANSPORT_ERROR_PREFIX: &str = "Error:";
/// Label of the diagnostic when the body could not be read.
pub const READ_ERROR_PREFIX: &str = "Error reading response body:";

/// Log level used when `--log-level` is not given.
///
/// Kept at `Warn` so a normal run prints nothing but the response on the console.
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Warn;
