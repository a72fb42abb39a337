//! Filename derivation from pasted text.
//!
//! Rewrites arbitrary clipboard text into something usable as a filename on
//! common desktop filesystems.

mod sanitize;

pub use sanitize::{sanitize, FORBIDDEN_CHARS};
