//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware output formatting

pub mod output;

pub use output::Verbosity;
