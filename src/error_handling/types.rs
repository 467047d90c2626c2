//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use std::error::Error as StdError;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::config::{READ_ERROR_PREFIX, TRANSPORT_ERROR_PREFIX};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure of a single fetch.
///
/// The `Display` output is the exact diagnostic line printed to the console.
#[derive(Error, Debug)]
pub enum FetchError {
    /// No response was obtained (DNS, connect, TLS, timeout, ...).
    #[error("{} {}", TRANSPORT_ERROR_PREFIX, describe(.0))]
    Transport(#[source] ReqwestError),

    /// A response arrived but its body could not be drained.
    #[error("{} {}", READ_ERROR_PREFIX, describe(.0))]
    BodyRead(#[source] ReqwestError),
}

impl FetchError {
    /// The underlying `reqwest` error.
    pub fn inner(&self) -> &ReqwestError {
        match self {
            FetchError::Transport(e) | FetchError::BodyRead(e) => e,
        }
    }
}

/// Renders an error followed by its source chain, joined with `": "`.
///
/// `reqwest` keeps the interesting part (connection refused, unexpected EOF)
/// in the sources, so the top-level message alone is not enough.
pub fn describe(error: &dyn StdError) -> String {
    let mut description = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        // hyper and reqwest sometimes repeat the inner message verbatim
        if !description.ends_with(&cause_text) {
            description.push_str(": ");
            description.push_str(&cause_text);
        }
        source = cause.source();
    }
    description
}

/// Types of fetch failures, used for diagnostic logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ErrorType {
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestRequestError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable name used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
        }
    }
}
