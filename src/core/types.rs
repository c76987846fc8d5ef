//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Key`] - Validated column name
//!
//! # Validation
//!
//! Types enforce validity at construction time. Invalid values cannot be
//! represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use rowforge::core::types::Key;
//!
//! // Surrounding whitespace is trimmed at construction
//! let key = Key::new("  name  ").unwrap();
//! assert_eq!(key.as_str(), "name");
//!
//! // Blank names fail at creation time
//! assert!(Key::new("   ").is_err());
//! assert!(Key::new("").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid key: {0}")]
    InvalidKey(String),
}

/// A validated column key.
///
/// Keys name one column of the generated JSON objects. They are:
/// - Trimmed of surrounding whitespace at construction
/// - Never empty after trimming
/// - Compared case-sensitively (exact match)
///
/// # Example
///
/// ```
/// use rowforge::core::types::Key;
///
/// let key = Key::new("id").unwrap();
/// assert_eq!(key.as_str(), "id");
///
/// // Case matters: "Id" and "id" are distinct keys
/// assert_ne!(Key::new("Id").unwrap(), key);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Key(String);

impl Key {
    /// Create a new validated key.
    ///
    /// The name is trimmed of surrounding whitespace before validation.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidKey` if the trimmed name is empty.
    pub fn new(name: impl AsRef<str>) -> Result<Self, TypeError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TypeError::InvalidKey("key cannot be blank".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Key {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.0
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
