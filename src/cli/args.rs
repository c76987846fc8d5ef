//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--locale <TAG>`: Display locale for notices (overrides config)
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--no-clipboard`: Disable the clipboard collaborator

use std::io::IsTerminal;

use clap::{Parser, Subcommand};

/// Rowforge - build JSON arrays from keyed rows
#[derive(Parser, Debug)]
#[command(name = "rowforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Display locale for notices (en, ko); overrides config
    #[arg(long, global = true, value_name = "TAG")]
    pub locale: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable clipboard writes (the copy command becomes a no-op)
    #[arg(long, global = true)]
    pub no_clipboard: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if the session should run interactively.
    ///
    /// Interactive mode prints a prompt and a welcome line; piped input
    /// gets neither, keeping the output scriptable.
    pub fn interactive(&self) -> bool {
        !self.quiet && std::io::stdin().is_terminal()
    }
}

/// Available commands.
///
/// With no subcommand, rowforge opens an interactive table session.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
