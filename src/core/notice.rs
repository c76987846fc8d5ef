//! core::notice
//!
//! User-facing notices raised by table operations.
//!
//! # Architecture
//!
//! A notice is a non-fatal, user-facing condition: a stable message id plus
//! named substitution values. The model and session emit notices; the
//! localization catalog turns them into display text. Notices never carry
//! final display strings, so the model stays independent of any locale or
//! display mechanism.

use thiserror::Error;

/// A non-fatal, user-facing condition.
///
/// Each variant maps to a stable message id understood by the localization
/// catalog, plus the substitution values the catalog template needs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Notice {
    /// A primary-key value appears in more than one row.
    #[error("value '{value}' for key '{key}' is duplicated")]
    DuplicateValue {
        /// The primary key being checked.
        key: String,
        /// The first value seen twice, in row order.
        value: String,
    },

    /// Generation aborted because the primary-key column has duplicates.
    #[error("primary key '{key}' has duplicate values; cannot generate")]
    CannotGenerate {
        /// The primary key being checked.
        key: String,
    },

    /// Generation found no rows with any non-empty cell.
    #[error("no values have been entered")]
    NoData,

    /// The clipboard write succeeded.
    #[error("output copied to clipboard")]
    Copied,

    /// The clipboard write was rejected.
    #[error("clipboard copy failed: {reason}")]
    CopyFailed {
        /// Why the clipboard rejected the write.
        reason: String,
    },
}

impl Notice {
    /// Stable message id for catalog lookup.
    ///
    /// Ids are deterministic and stable across releases so translations
    /// can be keyed on them.
    pub fn message_id(&self) -> &'static str {
        match self {
            Notice::DuplicateValue { .. } => "duplicate-value",
            Notice::CannotGenerate { .. } => "cannot-generate",
            Notice::NoData => "no-data",
            Notice::Copied => "copied",
            Notice::CopyFailed { .. } => "copy-failed",
        }
    }

    /// Named substitution values for catalog interpolation.
    pub fn args(&self) -> Vec<(&'static str, String)> {
        match self {
            Notice::DuplicateValue { key, value } => {
                vec![("key", key.clone()), ("value", value.clone())]
            }
            Notice::CannotGenerate { key } => vec![("key", key.clone())],
            Notice::NoData => Vec::new(),
            Notice::Copied => Vec::new(),
            Notice::CopyFailed { reason } => vec![("reason", reason.clone())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_value_id_and_args() {
        let notice = Notice::DuplicateValue {
            key: "id".to_string(),
            value: "1".to_string(),
        };
        assert_eq!(notice.message_id(), "duplicate-value");
        assert_eq!(
            notice.args(),
            vec![("key", "id".to_string()), ("value", "1".to_string())]
        );
    }

    #[test]
    fn cannot_generate_id_and_args() {
        let notice = Notice::CannotGenerate {
            key: "id".to_string(),
        };
        assert_eq!(notice.message_id(), "cannot-generate");
        assert_eq!(notice.args(), vec![("key", "id".to_string())]);
    }

    #[test]
    fn no_data_has_no_args() {
        assert_eq!(Notice::NoData.message_id(), "no-data");
        assert!(Notice::NoData.args().is_empty());
    }

    #[test]
    fn copy_failed_carries_reason() {
        let notice = Notice::CopyFailed {
            reason: "payload too large".to_string(),
        };
        assert_eq!(notice.message_id(), "copy-failed");
        assert_eq!(
            notice.args(),
            vec![("reason", "payload too large".to_string())]
        );
    }

    #[test]
    fn display_formatting() {
        let notice = Notice::DuplicateValue {
            key: "id".to_string(),
            value: "1".to_string(),
        };
        assert!(notice.to_string().contains("'1'"));
        assert!(notice.to_string().contains("'id'"));
    }
}
