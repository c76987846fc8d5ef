//! core::model
//!
//! The table model: keys, rows, primary key, and validation.
//!
//! # Architecture
//!
//! [`TableModel`] owns the entire table state and is the only place it is
//! mutated. Every operation runs to completion synchronously, keeps the
//! structural invariant (each row holds exactly the current key set), and
//! reports user-facing conditions as [`Notice`] values rather than printing
//! or interrupting anything.
//!
//! # Invariants
//!
//! 1. For every row, the row's key set equals the model's key list
//! 2. Among rows whose primary-key cell is non-empty, values are pairwise
//!    distinct - checked at validation points; transient violations between
//!    edits are allowed and never corrupt state
//! 3. Out-of-bounds indices are rejected with a structured error, never a
//!    panic
//!
//! # Change Notification
//!
//! A presentation layer can [`subscribe`](TableModel::subscribe) to be
//! called after each completed mutation. The model itself never renders.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::core::notice::Notice;
use crate::core::row::Row;
use crate::core::types::Key;

/// Errors from table model operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A key index was past the end of the key list.
    #[error("key index {index} out of bounds ({len} keys)")]
    KeyIndexOutOfBounds { index: usize, len: usize },

    /// A row index was past the end of the row list.
    #[error("row index {index} out of bounds ({len} rows)")]
    RowIndexOutOfBounds { index: usize, len: usize },

    /// A key name did not match any current key.
    #[error("unknown key '{name}'")]
    UnknownKey { name: String },
}

/// Result of a generation attempt.
///
/// Generation either produces output or refuses with a notice; a refusal
/// leaves any previously generated output in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateResult {
    /// Output was produced and stored as the current output.
    Ready(String),
    /// Generation was refused; the notice says why.
    Refused(Notice),
}

/// Callback invoked after each completed mutation.
pub type ChangeListener = Box<dyn FnMut()>;

/// The table model: an ordered key list, rows keyed by those columns, and
/// an optional primary key whose values must stay unique.
///
/// # Example
///
/// ```
/// use rowforge::core::model::{GenerateResult, TableModel};
///
/// let mut model = TableModel::new();
/// model.add_key("id");
/// model.add_key("name");
///
/// // Adding the first key bootstrapped one blank row.
/// model.set_value(0, "id", "1").unwrap();
/// model.set_value(0, "name", "Ada").unwrap();
///
/// match model.generate_output() {
///     GenerateResult::Ready(json) => assert!(json.contains("\"id\": \"1\"")),
///     GenerateResult::Refused(notice) => panic!("unexpected refusal: {notice}"),
/// }
/// ```
#[derive(Default)]
pub struct TableModel {
    keys: Vec<Key>,
    rows: Vec<Row>,
    primary_key: Option<Key>,
    pending_key: String,
    output: Option<String>,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for TableModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableModel")
            .field("keys", &self.keys)
            .field("rows", &self.rows)
            .field("primary_key", &self.primary_key)
            .field("pending_key", &self.pending_key)
            .field("output", &self.output)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TableModel {
    /// Create an empty model: no keys, no rows, no primary key.
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Accessors ==========

    /// The ordered key list.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// The current rows, in insertion order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The designated primary key, if any.
    pub fn primary_key(&self) -> Option<&Key> {
        self.primary_key.as_ref()
    }

    /// The pending key-input buffer.
    pub fn pending_key(&self) -> &str {
        &self.pending_key
    }

    /// The most recently generated output, if any.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    // ========== Change notification ==========

    /// Subscribe to change notifications.
    ///
    /// The listener is called after each completed mutation (key, row,
    /// value, or primary-key change). Read operations never notify.
    pub fn subscribe<F: FnMut() + 'static>(&mut self, listener: F) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener();
        }
    }

    // ========== Key operations ==========

    /// Stage text in the pending key-input buffer.
    pub fn set_pending_key(&mut self, text: impl Into<String>) {
        self.pending_key = text.into();
    }

    /// Commit the pending key-input buffer as a new key.
    ///
    /// Equivalent to [`add_key`](Self::add_key) with the buffer contents;
    /// the buffer is cleared only when a key is actually added.
    pub fn add_pending_key(&mut self) -> bool {
        let name = self.pending_key.clone();
        self.add_key(&name)
    }

    /// Append a key to the key list.
    ///
    /// The name is trimmed first. A blank result or an exact (case
    /// sensitive) duplicate of an existing key is a no-op. On success the
    /// pending key-input buffer is cleared and the key-set reaction runs:
    /// every existing row gains a blank cell for the new key, and if no
    /// rows exist one blank row is created so the table is immediately
    /// editable.
    ///
    /// Returns true iff a key was added.
    pub fn add_key(&mut self, name: &str) -> bool {
        let key = match Key::new(name) {
            Ok(key) => key,
            Err(_) => return false,
        };
        if self.keys.contains(&key) {
            return false;
        }
        let old_keys = self.keys.clone();
        self.keys.push(key);
        self.pending_key.clear();
        self.react_to_key_change(&old_keys);
        self.notify();
        true
    }

    /// Remove the key at `index`.
    ///
    /// Clears the primary key iff it named the removed key, then cascades:
    /// the column is deleted from every row in the same synchronous update,
    /// so no partial state is ever observable.
    pub fn remove_key(&mut self, index: usize) -> Result<(), ModelError> {
        if index >= self.keys.len() {
            return Err(ModelError::KeyIndexOutOfBounds {
                index,
                len: self.keys.len(),
            });
        }
        let old_keys = self.keys.clone();
        let removed = self.keys.remove(index);
        if self.primary_key.as_ref() == Some(&removed) {
            self.primary_key = None;
        }
        self.react_to_key_change(&old_keys);
        self.notify();
        Ok(())
    }

    /// Reconcile rows after the key list changed.
    ///
    /// Newly present keys become blank cells on every row; newly absent
    /// keys are deleted from every row. If the row list is empty while at
    /// least one key exists, one blank row is appended so the user always
    /// has an editable row as soon as a column exists.
    fn react_to_key_change(&mut self, old_keys: &[Key]) {
        let added: Vec<Key> = self
            .keys
            .iter()
            .filter(|key| !old_keys.contains(key))
            .cloned()
            .collect();
        let removed: Vec<Key> = old_keys
            .iter()
            .filter(|key| !self.keys.contains(key))
            .cloned()
            .collect();

        for row in &mut self.rows {
            for key in &added {
                row.insert_blank(key);
            }
            for key in &removed {
                row.remove(key);
            }
        }

        if self.rows.is_empty() && !self.keys.is_empty() {
            self.rows.push(Row::blank(&self.keys));
        }
    }

    // ========== Row operations ==========

    /// Append a row with an empty string for every current key.
    pub fn add_row(&mut self) {
        self.rows.push(Row::blank(&self.keys));
        self.notify();
    }

    /// Remove the row at `index`, then re-validate uniqueness.
    ///
    /// Validation runs regardless of outcome: removing a duplicate may
    /// resolve a prior violation, or surface one that remains.
    pub fn remove_row(&mut self, index: usize) -> Result<Option<Notice>, ModelError> {
        if index >= self.rows.len() {
            return Err(ModelError::RowIndexOutOfBounds {
                index,
                len: self.rows.len(),
            });
        }
        self.rows.remove(index);
        let notice = self.validate_uniqueness(None);
        self.notify();
        Ok(notice)
    }

    /// Set one cell, then validate if the edited column is the primary key.
    pub fn set_value(
        &mut self,
        row_index: usize,
        key_name: &str,
        value: &str,
    ) -> Result<Option<Notice>, ModelError> {
        let key = self.find_key(key_name)?;
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(row_index)
            .ok_or(ModelError::RowIndexOutOfBounds {
                index: row_index,
                len,
            })?;
        row.set(&key, value);
        let notice = self.validate_uniqueness(Some(&key));
        self.notify();
        Ok(notice)
    }

    // ========== Primary key ==========

    /// Change the primary key.
    ///
    /// Passing `None` clears the designation. Setting a key validates
    /// uniqueness immediately against the current rows.
    pub fn set_primary_key(&mut self, name: Option<&str>) -> Result<Option<Notice>, ModelError> {
        let notice = match name {
            Some(name) => {
                let key = self.find_key(name)?;
                self.primary_key = Some(key);
                self.validate_uniqueness(None)
            }
            None => {
                self.primary_key = None;
                None
            }
        };
        self.notify();
        Ok(notice)
    }

    // ========== Validation ==========

    /// Check that primary-key values are unique among non-empty cells.
    ///
    /// When `changed_key` is given and differs from the primary key the
    /// check is skipped: only primary-key-column edits can introduce a
    /// violation. Empty cells are filtered out first, so any number of rows
    /// may share an empty primary-key cell.
    ///
    /// Scans in row order and reports the first value seen twice. Never
    /// blocks further editing.
    pub fn validate_uniqueness(&self, changed_key: Option<&Key>) -> Option<Notice> {
        let primary = self.primary_key.as_ref()?;
        if let Some(changed) = changed_key {
            if changed != primary {
                return None;
            }
        }
        Self::first_duplicate(self.rows.iter(), primary).map(|value| Notice::DuplicateValue {
            key: primary.to_string(),
            value: value.to_string(),
        })
    }

    /// First-seen-wins duplicate scan over non-empty primary-key cells.
    fn first_duplicate<'a>(
        rows: impl Iterator<Item = &'a Row>,
        primary: &Key,
    ) -> Option<&'a str> {
        let mut seen = HashSet::new();
        for row in rows {
            match row.get(primary) {
                Some(value) if !value.is_empty() => {
                    if !seen.insert(value) {
                        return Some(value);
                    }
                }
                _ => {}
            }
        }
        None
    }

    // ========== Generation ==========

    /// Generate the JSON output for all non-empty rows.
    ///
    /// A row is non-empty when any cell holds a non-empty value. With no
    /// non-empty rows, generation refuses with [`Notice::NoData`]. With a
    /// duplicate in the primary-key column of the filtered rows, it refuses
    /// with [`Notice::CannotGenerate`]. Either refusal leaves any previous
    /// output untouched.
    ///
    /// On success the filtered rows are serialized as a JSON array of flat
    /// key-to-value objects, pretty-printed with 2-space indentation, and
    /// stored as the current output.
    pub fn generate_output(&mut self) -> GenerateResult {
        let non_empty: Vec<&Row> = self.rows.iter().filter(|row| row.has_value()).collect();
        if non_empty.is_empty() {
            return GenerateResult::Refused(Notice::NoData);
        }

        if let Some(primary) = &self.primary_key {
            if Self::first_duplicate(non_empty.iter().copied(), primary).is_some() {
                return GenerateResult::Refused(Notice::CannotGenerate {
                    key: primary.to_string(),
                });
            }
        }

        // Rows are flat string-to-string maps; serialization is infallible.
        let text = serde_json::to_string_pretty(&non_empty)
            .expect("string rows always serialize");
        self.output = Some(text.clone());
        self.notify();
        GenerateResult::Ready(text)
    }

    // ========== Helpers ==========

    fn find_key(&self, name: &str) -> Result<Key, ModelError> {
        let key = Key::new(name).map_err(|_| ModelError::UnknownKey {
            name: name.to_string(),
        })?;
        if !self.keys.contains(&key) {
            return Err(ModelError::UnknownKey {
                name: name.to_string(),
            });
        }
        Ok(key)
    }
}
