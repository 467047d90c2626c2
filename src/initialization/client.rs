//! HTTP client initialization.

use log::debug;
use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the HTTP client with default settings.
///
/// No timeout, headers, redirect policy or TLS options are set: the client
/// uses `reqwest`'s defaults (no overall timeout, up to 10 redirects, system
/// trust store).
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend cannot
/// be initialized.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new().build()?;
    debug!("HTTP client initialized with default settings");
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_succeeds() {
        assert!(init_client().is_ok());
    }
}
