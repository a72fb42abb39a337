//! CLI for clipkit.

mod commands;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use clipkit_core::config;

use commands::{run_code, run_completions, run_inspect, run_links, run_man, run_sanitize};

/// Top-level CLI for clipkit.
#[derive(Debug, Parser)]
#[command(name = "clipkit")]
#[command(about = "clipkit: filenames, direct links and access codes from pasted text", long_about = None)]
pub struct Cli {
    /// Log debug output (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rewrite text into a filename.
    Sanitize {
        /// Text to rewrite; read from stdin when omitted.
        text: Option<String>,
    },

    /// Print direct links derived from a share link.
    Links {
        /// Share link; read from stdin when omitted.
        text: Option<String>,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the filename and every recognized link for the text.
    Inspect {
        /// Text to inspect; read from stdin when omitted.
        text: Option<String>,
    },

    /// Generate access codes (4 letters + 4 digits).
    Code {
        /// Number of codes (defaults to access_code_count from config).
        #[arg(short = 'n', long, value_name = "N")]
        count: Option<usize>,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page.
    Man,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Sanitize { text } => run_sanitize(text)?,
            CliCommand::Links { text, json } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_links(&cfg, text, json)?;
            }
            CliCommand::Inspect { text } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_inspect(&cfg, text)?;
            }
            CliCommand::Code { count } => {
                let cfg = config::load_or_init()?;
                run_code(count.unwrap_or(cfg.access_code_count))?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
