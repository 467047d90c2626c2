//! Fully-read HTTP responses.

use hyper::ext::ReasonPhrase;
use reqwest::StatusCode;

/// A response whose body has been drained into memory.
///
/// The network stream is gone by the time one of these exists; only the
/// status line and the raw body bytes are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResponse {
    /// Status line, e.g. `200 OK`
    pub status_line: String,
    /// Raw body bytes, unparsed
    pub body: Vec<u8>,
}

impl FetchedResponse {
    /// Body decoded as UTF-8, with invalid sequences replaced by U+FFFD.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Formats a status as `"<code> <reason>"`.
///
/// `reason` is the phrase the server sent when it differs from the canonical
/// one; hyper only records it in that case. Otherwise the canonical phrase is
/// used, and codes without one render as the bare code.
pub fn status_line(status: StatusCode, reason: Option<&ReasonPhrase>) -> String {
    let reason = match reason {
        Some(phrase) => Some(String::from_utf8_lossy(phrase.as_bytes()).into_owned()),
        None => status.canonical_reason().map(str::to_string),
    };
    match reason {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
