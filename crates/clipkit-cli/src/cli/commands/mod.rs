//! CLI command handlers. Each command is in its own file.

mod code;
mod docs;
mod inspect;
mod links;
mod sanitize;

pub use code::run_code;
pub use docs::{run_completions, run_man};
pub use inspect::run_inspect;
pub use links::run_links;
pub use sanitize::run_sanitize;
