//! `clipkit sanitize` – print the filename form of the input.

use anyhow::Result;

use crate::cli::input;

pub fn run_sanitize(text: Option<String>) -> Result<()> {
    let text = input::resolve_stdin(text)?;
    println!("{}", clipkit_core::sanitize(&text));
    Ok(())
}
