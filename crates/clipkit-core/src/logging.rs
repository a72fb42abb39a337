//! Logging init: file under XDG state dir, or fallback to stderr.
//!
//! `RUST_LOG` wins when set; otherwise the level comes from the CLI's
//! `--verbose` flag.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const QUIET_DIRECTIVES: &str = "warn,clipkit_core=info,clipkit_cli=info";
const VERBOSE_DIRECTIVES: &str = "info,clipkit_core=debug,clipkit_cli=debug";

/// Log sink: the log file, or stderr when the file handle can't be cloned.
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVES
    } else {
        QUIET_DIRECTIVES
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Path of the log file: `~/.local/state/clipkit/clipkit.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("clipkit")?;
    Ok(xdg_dirs.get_state_home().join("clipkit").join("clipkit.log"))
}

/// Initialize structured logging to the XDG state log file and return its path.
/// On failure (e.g. log dir unwritable) returns Err so the caller can fall back
/// to [`init_logging_stderr`].
pub fn init_logging(verbose: bool) -> Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    let writer = BoxMakeWriter::new(FileMakeWriter(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    tracing::debug!("clipkit logging initialized at {}", path.display());
    Ok(path)
}

/// Initialize logging to stderr only.
pub fn init_logging_stderr(verbose: bool) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
    if let Err(err) = result {
        eprintln!("clipkit: stderr logging not initialized: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directives(verbose)).is_ok());
        }
    }

    #[test]
    fn verbose_enables_debug_for_our_crates() {
        assert!(default_directives(true).contains("clipkit_core=debug"));
        assert!(!default_directives(false).contains("debug"));
    }

    #[test]
    fn stderr_init_twice_reports_instead_of_panicking() {
        init_logging_stderr(false);
        init_logging_stderr(true);
    }

    #[test]
    fn log_file_under_clipkit_dir() {
        let path = log_file_path().unwrap();
        assert!(path.ends_with("clipkit/clipkit.log"));
    }
}
