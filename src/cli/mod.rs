//! cli
//!
//! Command-line interface layer for Rowforge.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration (flags take precedence over the config file)
//! - Run the interactive session or a subcommand
//! - Does NOT mutate table state directly; all edits flow through the
//!   [`crate::core::model::TableModel`] operations
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, resolves the
//! locale and clipboard settings, and hands off to the session.

pub mod args;
pub mod completion;
pub mod session;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};

use crate::core::config::GlobalConfig;
use crate::i18n::Locale;
use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Some(args::Command::Completion { shell }) => completion::completion(shell),
        None => {
            let config = GlobalConfig::load().context("failed to load configuration")?;
            let ctx = session::SessionContext {
                locale: resolve_locale(cli.locale.as_deref(), &config)?,
                verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
                interactive: cli.interactive(),
                clipboard: !cli.no_clipboard && config.clipboard.unwrap_or(true),
            };
            session::run(&ctx)
        }
    }
}

/// Resolve the display locale: CLI flag, then config file, then English.
fn resolve_locale(flag: Option<&str>, config: &GlobalConfig) -> Result<Locale> {
    match flag {
        Some(tag) => tag
            .parse::<Locale>()
            .with_context(|| format!("invalid --locale '{}'", tag)),
        None => Ok(config.resolved_locale()),
    }
}
