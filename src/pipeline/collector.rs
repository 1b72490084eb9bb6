use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

use crate::util::strip_line_ending;

pub const PRODUCT_PROMPT: &str = "Enter the product name: ";

/// Ask the operator for a product name.
///
/// Writes the prompt, reads a single line and strips its line terminator.
/// Anything else the operator typed is kept as-is. End of input before any
/// line is an error.
pub fn read_product_name<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<String> {
    write!(output, "{}", PRODUCT_PROMPT).context("failed to write prompt")?;
    output.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read product name")?;
    if read == 0 {
        bail!("no product name given (end of input)");
    }

    Ok(strip_line_ending(&line).to_string())
}
