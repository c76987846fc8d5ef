//! core
//!
//! Core domain types and operations for Rowforge.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Key
//! - [`row`] - Ordered key-to-value row mapping
//! - [`model`] - The table model: keys, rows, primary key, validation
//! - [`notice`] - User-facing notices (message id + substitutions)
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at construction time
//! - The model is pure and synchronous; it never prints or blocks
//! - All verification is deterministic

pub mod config;
pub mod model;
pub mod notice;
pub mod row;
pub mod types;

pub use model::{ModelError, TableModel};
pub use notice::Notice;
pub use row::Row;
pub use types::{Key, TypeError};
