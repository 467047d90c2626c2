//! Console rendering of a fetch outcome.

use std::io::{self, Write};

use crate::config::{BODY_PREFIX, STATUS_PREFIX};
use crate::error_handling::FetchError;
use crate::fetch::response::FetchedResponse;

/// Writes the outcome of a fetch in its console form.
///
/// Success is two lines (status, then body). Either failure is a single
/// diagnostic line.
pub fn write_outcome<W: Write>(
    outcome: &Result<FetchedResponse, FetchError>,
    out: &mut W,
) -> io::Result<()> {
    match outcome {
        Ok(response) => {
            writeln!(out, "{} {}", STATUS_PREFIX, response.status_line)?;
            writeln!(out, "{} {}", BODY_PREFIX, response.body_text())?;
        }
        Err(e) => writeln!(out, "{}", e)?,
    }
    out.flush()
}
