//! Input text: the positional argument, or stdin.

use anyhow::{Context, Result};
use std::io::{self, Read};

/// Returns `text` if given, else all of `reader` minus one trailing newline.
pub fn resolve<R: Read>(text: Option<String>, reader: R) -> Result<String> {
    if let Some(t) = text {
        return Ok(t);
    }
    let mut data = io::read_to_string(reader).context("read input from stdin")?;
    if data.ends_with('\n') {
        data.pop();
        if data.ends_with('\r') {
            data.pop();
        }
    }
    Ok(data)
}

pub fn resolve_stdin(text: Option<String>) -> Result<String> {
    resolve(text, io::stdin().lock())
}
