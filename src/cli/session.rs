//! cli::session
//!
//! The interactive table session.
//!
//! # Architecture
//!
//! The session is the presentation layer: it reads line commands, forwards
//! each intent into the table model, and displays whatever notices come
//! back, rendered through the localization catalog. It holds no table
//! state of its own and never mutates the model except through its
//! operations.
//!
//! Input is read until EOF, so the binary works both interactively and
//! with piped scripts:
//!
//! ```text
//! key add id
//! key add name
//! pk id
//! set 0 id 1
//! set 0 name Ada
//! gen
//! ```

use std::io::{BufRead, Write as _};

use anyhow::{Context as _, Result};
use thiserror::Error;

use crate::clipboard::{Clipboard as _, Osc52Clipboard};
use crate::core::model::{GenerateResult, TableModel};
use crate::core::notice::Notice;
use crate::i18n::{Catalog, Locale};
use crate::ui::output::{self, Verbosity};

/// Settings for one session, resolved from CLI flags and config.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Display locale for notices.
    pub locale: Locale,
    /// Output verbosity.
    pub verbosity: Verbosity,
    /// Whether to print a prompt and welcome line.
    pub interactive: bool,
    /// Whether the copy command may write to the clipboard.
    pub clipboard: bool,
}

/// Errors from session command parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{0}' is not an index")]
    BadIndex(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}

/// One parsed line command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// `key add <name>`
    KeyAdd(String),
    /// `key rm <index>`
    KeyRemove(usize),
    /// `row add`
    RowAdd,
    /// `row rm <index>`
    RowRemove(usize),
    /// `set <row> <key> <value...>`
    Set {
        row: usize,
        key: String,
        value: String,
    },
    /// `pk <key>` or `pk none`
    PrimaryKey(Option<String>),
    /// `show`
    Show,
    /// `gen`
    Generate,
    /// `copy`
    Copy,
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

/// Parse one input line.
///
/// Blank lines parse to `None`. Key names and cell values may contain
/// spaces; they extend to the end of the line.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, CommandParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    let command = match tokens.as_slice() {
        ["key", "add"] => return Err(CommandParseError::MissingArgument("key name")),
        ["key", "add", rest @ ..] => SessionCommand::KeyAdd(rest.join(" ")),
        ["key", "rm", index] => SessionCommand::KeyRemove(parse_index(index)?),
        ["key", "rm"] => return Err(CommandParseError::MissingArgument("key index")),
        ["row", "add"] => SessionCommand::RowAdd,
        ["row", "rm", index] => SessionCommand::RowRemove(parse_index(index)?),
        ["row", "rm"] => return Err(CommandParseError::MissingArgument("row index")),
        ["set", row, key] => SessionCommand::Set {
            row: parse_index(row)?,
            key: (*key).to_string(),
            value: String::new(),
        },
        ["set", row, key, rest @ ..] => SessionCommand::Set {
            row: parse_index(row)?,
            key: (*key).to_string(),
            value: rest.join(" "),
        },
        ["set", ..] => return Err(CommandParseError::MissingArgument("row, key, value")),
        ["pk", "none"] => SessionCommand::PrimaryKey(None),
        ["pk", name] => SessionCommand::PrimaryKey(Some((*name).to_string())),
        ["pk"] => return Err(CommandParseError::MissingArgument("key name or 'none'")),
        ["show"] => SessionCommand::Show,
        ["gen"] => SessionCommand::Generate,
        ["copy"] => SessionCommand::Copy,
        ["help"] => SessionCommand::Help,
        ["quit"] | ["exit"] => SessionCommand::Quit,
        _ => return Err(CommandParseError::UnknownCommand(trimmed.to_string())),
    };
    Ok(Some(command))
}

fn parse_index(token: &str) -> Result<usize, CommandParseError> {
    token
        .parse()
        .map_err(|_| CommandParseError::BadIndex(token.to_string()))
}

/// One interactive session over a table model.
pub struct Session {
    model: TableModel,
    catalog: Catalog,
    verbosity: Verbosity,
    clipboard: bool,
}

impl Session {
    /// Create a session with an empty table.
    pub fn new(ctx: &SessionContext) -> Self {
        let mut model = TableModel::new();
        let verbosity = ctx.verbosity;
        model.subscribe(move || output::debug("table changed", verbosity));
        Self {
            model,
            catalog: Catalog::new(ctx.locale),
            verbosity: ctx.verbosity,
            clipboard: ctx.clipboard,
        }
    }

    /// The underlying model (for inspection in tests).
    pub fn model(&self) -> &TableModel {
        &self.model
    }

    /// Execute one parsed command against the model and display results.
    pub fn execute(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::KeyAdd(name) => {
                self.model.set_pending_key(name);
                if !self.model.add_pending_key() {
                    output::debug("key not added (blank or duplicate)", self.verbosity);
                }
            }
            SessionCommand::KeyRemove(index) => {
                if let Err(err) = self.model.remove_key(index) {
                    output::error(err);
                }
            }
            SessionCommand::RowAdd => self.model.add_row(),
            SessionCommand::RowRemove(index) => match self.model.remove_row(index) {
                Ok(notice) => self.report(notice),
                Err(err) => output::error(err),
            },
            SessionCommand::Set { row, key, value } => {
                match self.model.set_value(row, &key, &value) {
                    Ok(notice) => self.report(notice),
                    Err(err) => output::error(err),
                }
            }
            SessionCommand::PrimaryKey(name) => {
                match self.model.set_primary_key(name.as_deref()) {
                    Ok(notice) => self.report(notice),
                    Err(err) => output::error(err),
                }
            }
            SessionCommand::Show => println!("{}", render_table(&self.model)),
            SessionCommand::Generate => match self.model.generate_output() {
                GenerateResult::Ready(json) => println!("{}", json),
                GenerateResult::Refused(notice) => self.report(Some(notice)),
            },
            SessionCommand::Copy => self.copy_output(),
            SessionCommand::Help => println!("{}", HELP),
            // Quit is handled by the session loop.
            SessionCommand::Quit => {}
        }
    }

    /// Send the current output to the clipboard and report the outcome.
    ///
    /// With no generated output this is a silent no-op, matching the
    /// generate-then-copy flow. The write never affects table state.
    fn copy_output(&mut self) {
        let Some(text) = self.model.output().map(str::to_string) else {
            output::debug("nothing to copy; run gen first", self.verbosity);
            return;
        };
        if !self.clipboard {
            output::debug("clipboard disabled", self.verbosity);
            return;
        }
        let notice = match Osc52Clipboard::new(std::io::stdout()).copy(&text) {
            Ok(()) => Notice::Copied,
            Err(err) => Notice::CopyFailed {
                reason: err.to_string(),
            },
        };
        self.report(Some(notice));
    }

    fn report(&self, notice: Option<Notice>) {
        if let Some(notice) = notice {
            output::print(self.catalog.render_notice(&notice), self.verbosity);
        }
    }
}

/// Render the current table for the `show` command.
pub(crate) fn render_table(model: &TableModel) -> String {
    if model.keys().is_empty() {
        return "no keys defined".to_string();
    }
    let header = model
        .keys()
        .iter()
        .map(|key| {
            if model.primary_key() == Some(key) {
                format!("{} (pk)", key)
            } else {
                key.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = format!("keys: {}", header);
    if model.rows().is_empty() {
        out.push_str("\n(no rows)");
        return out;
    }
    for (index, row) in model.rows().iter().enumerate() {
        let cells = row
            .iter()
            .map(|(key, value)| format!("{}=\"{}\"", key, value))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("\n{}: {}", index, cells));
    }
    out
}

const HELP: &str = "\
commands:
  key add <name>           add a column key
  key rm <index>           remove the key at index (cascades to rows)
  row add                  add a blank row
  row rm <index>           remove the row at index
  set <row> <key> <value>  set one cell (value may be empty)
  pk <key> | pk none       designate or clear the unique key
  show                     print the current table
  gen                      generate JSON for non-empty rows
  copy                     copy the generated JSON to the clipboard
  help                     show this help
  quit                     exit";

/// Run the session loop: read commands until EOF or `quit`.
pub fn run(ctx: &SessionContext) -> Result<()> {
    let mut session = Session::new(ctx);
    if ctx.interactive {
        println!(
            "rowforge {} - type 'help' for commands",
            env!("CARGO_PKG_VERSION")
        );
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if ctx.interactive {
            print!("> ");
            std::io::stdout().flush().context("failed to flush prompt")?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;
        match parse_command(&line) {
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => session.execute(command),
            Ok(None) => {}
            Err(err) => output::error(err),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> Session {
        Session::new(&SessionContext {
            locale: Locale::En,
            verbosity: Verbosity::Quiet,
            interactive: false,
            clipboard: false,
        })
    }

    mod parsing {
        use super::*;

        #[test]
        fn blank_lines_are_ignored() {
            assert_eq!(parse_command("").unwrap(), None);
            assert_eq!(parse_command("   ").unwrap(), None);
        }

        #[test]
        fn key_add_takes_rest_of_line() {
            assert_eq!(
                parse_command("key add user name").unwrap(),
                Some(SessionCommand::KeyAdd("user name".to_string()))
            );
        }

        #[test]
        fn key_add_requires_name() {
            assert_eq!(
                parse_command("key add").unwrap_err(),
                CommandParseError::MissingArgument("key name")
            );
        }

        #[test]
        fn indices_must_be_numeric() {
            assert_eq!(
                parse_command("key rm x").unwrap_err(),
                CommandParseError::BadIndex("x".to_string())
            );
            assert_eq!(
                parse_command("row rm 3").unwrap(),
                Some(SessionCommand::RowRemove(3))
            );
        }

        #[test]
        fn set_allows_empty_value() {
            assert_eq!(
                parse_command("set 0 id").unwrap(),
                Some(SessionCommand::Set {
                    row: 0,
                    key: "id".to_string(),
                    value: String::new(),
                })
            );
        }

        #[test]
        fn set_value_takes_rest_of_line() {
            assert_eq!(
                parse_command("set 1 name Ada Lovelace").unwrap(),
                Some(SessionCommand::Set {
                    row: 1,
                    key: "name".to_string(),
                    value: "Ada Lovelace".to_string(),
                })
            );
        }

        #[test]
        fn pk_none_clears() {
            assert_eq!(
                parse_command("pk none").unwrap(),
                Some(SessionCommand::PrimaryKey(None))
            );
            assert_eq!(
                parse_command("pk id").unwrap(),
                Some(SessionCommand::PrimaryKey(Some("id".to_string())))
            );
        }

        #[test]
        fn quit_and_exit_are_synonyms() {
            assert_eq!(parse_command("quit").unwrap(), Some(SessionCommand::Quit));
            assert_eq!(parse_command("exit").unwrap(), Some(SessionCommand::Quit));
        }

        #[test]
        fn unknown_commands_are_rejected() {
            assert!(matches!(
                parse_command("frobnicate").unwrap_err(),
                CommandParseError::UnknownCommand(_)
            ));
        }
    }

    mod execution {
        use super::*;

        #[test]
        fn commands_drive_the_model() {
            let mut session = test_session();
            session.execute(SessionCommand::KeyAdd("id".to_string()));
            session.execute(SessionCommand::KeyAdd("name".to_string()));
            session.execute(SessionCommand::PrimaryKey(Some("id".to_string())));
            session.execute(SessionCommand::Set {
                row: 0,
                key: "id".to_string(),
                value: "1".to_string(),
            });

            let model = session.model();
            assert_eq!(model.keys().len(), 2);
            assert_eq!(model.primary_key().map(|k| k.as_str()), Some("id"));
            assert_eq!(model.rows().len(), 1);
        }

        #[test]
        fn out_of_bounds_does_not_panic_or_mutate() {
            let mut session = test_session();
            session.execute(SessionCommand::KeyAdd("id".to_string()));
            session.execute(SessionCommand::RowRemove(99));
            session.execute(SessionCommand::KeyRemove(99));
            assert_eq!(session.model().keys().len(), 1);
            assert_eq!(session.model().rows().len(), 1);
        }

        #[test]
        fn copy_without_output_is_a_noop() {
            let mut session = test_session();
            session.execute(SessionCommand::Copy);
            assert_eq!(session.model().output(), None);
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn empty_table() {
            let session = test_session();
            assert_eq!(render_table(session.model()), "no keys defined");
        }

        #[test]
        fn marks_primary_key_and_lists_rows() {
            let mut session = test_session();
            session.execute(SessionCommand::KeyAdd("id".to_string()));
            session.execute(SessionCommand::KeyAdd("name".to_string()));
            session.execute(SessionCommand::PrimaryKey(Some("id".to_string())));
            session.execute(SessionCommand::Set {
                row: 0,
                key: "name".to_string(),
                value: "Ada".to_string(),
            });

            let rendered = render_table(session.model());
            assert_eq!(rendered, "keys: id (pk), name\n0: id=\"\", name=\"Ada\"");
        }
    }
}
