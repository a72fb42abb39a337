//! Filename sanitization.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters removed outright from a filename.
pub const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '\'', '/', '\\', '|', '?', '*'];

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex should compile"));
static SLASH_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/+").expect("slash regex should compile"));

/// Rewrites `text` into a filename.
///
/// Applied in order, each step on the output of the previous one:
/// - every run of whitespace becomes a single `_`
/// - every run of `/` becomes a single `-`
/// - every character in [`FORBIDDEN_CHARS`] is deleted
///
/// # Examples
///
/// - `sanitize("My File (final)?.docx")` → `"My_File_(final).docx"`
/// - `sanitize("a///b")` → `"a-b"`
pub fn sanitize(text: &str) -> String {
    let underscored = WHITESPACE_RUN.replace_all(text, "_");
    let hyphenated = SLASH_RUN.replace_all(&underscored, "-");
    hyphenated
        .chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .collect()
}
