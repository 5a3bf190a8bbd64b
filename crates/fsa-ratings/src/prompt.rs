use std::io::{BufRead, Write};

use tracing::warn;

use crate::{constants::POSTCODE_PROMPT, error::RenderError};

/// Prompt for a postcode and read it from `input`.
///
/// Only the first whitespace-delimited token of the line is kept. A failed
/// or empty read yields an empty postcode rather than an error; only failing
/// to write the prompt is reported.
pub fn read_postcode<R: BufRead, W: Write>(
    mut input: R,
    mut prompt: W,
) -> Result<String, RenderError> {
    write!(prompt, "{}", POSTCODE_PROMPT)?;
    prompt.flush()?;

    let mut line = String::new();
    if let Err(e) = input.read_line(&mut line) {
        warn!(error = %e, "failed to read postcode from input");
        return Ok(String::new());
    }
    Ok(line
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string())
}
