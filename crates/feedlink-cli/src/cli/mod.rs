//! CLI for the feedlink feed-source resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use feedlink_core::config;
use feedlink_core::link::LinkResolver;
use std::path::Path;

use commands::{run_check, run_completions, run_man, run_resolve};

/// Top-level CLI for the feedlink feed-source resolver.
#[derive(Debug, Parser)]
#[command(name = "feedlink")]
#[command(about = "Classify YouTube/Vimeo feed-source URLs into provider, kind, and id", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a single feed-source URL.
    Resolve {
        /// HTTP/HTTPS URL of a playlist, channel, user, handle, or group page.
        url: String,

        /// Print the result as a JSON object instead of plain text.
        #[arg(long)]
        json: bool,
    },

    /// Classify every URL in a file, one per line.
    Check {
        /// Path to the URL list. Blank lines and `#` comments are skipped.
        path: String,
    },

    /// Generate shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Render the man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let resolver = LinkResolver::with_config(&cfg);

        match cli.command {
            CliCommand::Resolve { url, json } => run_resolve(&resolver, &url, json)?,
            CliCommand::Check { path } => run_check(&resolver, Path::new(&path))?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
