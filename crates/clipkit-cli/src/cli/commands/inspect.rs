//! `clipkit inspect` – filename and links for the same input, side by side.

use anyhow::Result;
use clipkit_core::config::ClipkitConfig;
use clipkit_core::{recognize_all, sanitize};

use super::links::{render_text, report_errors};
use crate::cli::input;

pub fn run_inspect(cfg: &ClipkitConfig, text: Option<String>) -> Result<()> {
    let text = input::resolve_stdin(text)?;
    let host = cfg.course_host()?;

    println!("{:<11} {}", "Filename", sanitize(&text));

    let found = recognize_all(&text, &host);
    report_errors(&found);
    let rendered = render_text(&found);
    if rendered.is_empty() {
        println!("{:<11} -", "Links");
    } else {
        print!("{}", rendered);
    }
    Ok(())
}
