//! The fetcher: one GET, full body read, console report.
//!
//! The response is owned by [`fetch`] from the moment it arrives until the
//! body has been drained. Reading consumes it, and an early return drops it,
//! so the connection is released on every path.

mod output;
mod response;


use std::io::{self, Write};

use hyper::ext::ReasonPhrase;
use log::debug;

use crate::error_handling::{categorize_reqwest_error, FetchError};

pub use output::write_outcome;
pub use response::{status_line, FetchedResponse};

/// Issues a single GET to `url` and reads the whole body into memory.
///
/// # Errors
///
/// - `FetchError::Transport` if no response was received
/// - `FetchError::BodyRead` if the body stream broke off; bytes read so far
///   are discarded
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<FetchedResponse, FetchError> {
    debug!("Sending GET {}", url);
    let response = client.get(url).send().await.map_err(|e| {
        debug!("Request failed ({})", categorize_reqwest_error(&e));
        FetchError::Transport(e)
    })?;

    // The server's own reason phrase lives in the response extensions, which
    // are gone once the body is consumed
    let status = status_line(
        response.status(),
        response.extensions().get::<ReasonPhrase>(),
    );
    debug!("Received {} from {}", status, response.url());

    let body = response.bytes().await.map_err(|e| {
        debug!("Body read failed ({})", categorize_reqwest_error(&e));
        FetchError::BodyRead(e)
    })?;
    debug!("Read {} body bytes", body.len());

    Ok(FetchedResponse {
        status_line: status,
        body: body.to_vec(),
    })
}

/// Fetches `url` and writes the outcome to `out`.
///
/// Fetch failures are reported on `out` and are not errors of this function;
/// only a failure to write the report is.
pub async fn fetch_and_print<W: Write>(
    client: &reqwest::Client,
    url: &str,
    out: &mut W,
) -> io::Result<()> {
    let outcome = fetch(client, url).await;
    write_outcome(&outcome, out)
}
