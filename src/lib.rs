//! Rowforge - build JSON arrays from keyed rows
//!
//! Rowforge is a single-binary tool for assembling a JSON array of flat
//! objects from tabular input: define an ordered set of column keys,
//! optionally mark one key as a uniqueness constraint, fill in rows of
//! string values, and export the result as pretty-printed JSON.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, runs the session)
//! - [`core`] - Domain types, the table model, validation, and config
//! - [`i18n`] - Localization catalogs and message interpolation
//! - [`clipboard`] - Clipboard collaborator (OSC 52)
//! - [`ui`] - User interaction utilities
//!
//! # Correctness Invariants
//!
//! Rowforge maintains the following invariants:
//!
//! 1. Every row holds exactly the current key set (structural invariant)
//! 2. All table mutations flow through the model's operations
//! 3. Validation failures surface as notices, never as panics or corruption
//! 4. The model never renders or prints; display is the session's job

pub mod cli;
pub mod clipboard;
pub mod core;
pub mod i18n;
pub mod ui;
