//! i18n
//!
//! Localization catalogs and message interpolation.
//!
//! # Design
//!
//! The model emits notices as a stable message id plus named substitution
//! values; this module turns them into display text. The active locale is
//! an explicit constructor argument - nothing here reads the ambient
//! environment, which keeps rendering deterministic and testable.
//!
//! Catalogs are static tables. Lookups for ids missing from a non-English
//! catalog fall back to English; a lookup for an unknown id falls back to
//! the id itself so a missing translation is visible but never fatal.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::notice::Notice;

/// Errors from locale parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("unknown locale '{0}', must be one of: en, ko")]
    Unknown(String),
}

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// English (fallback for every other locale).
    #[default]
    En,
    /// Korean.
    Ko,
}

impl Locale {
    /// All supported locale tags.
    pub const ALL: &'static [&'static str] = &["en", "ko"];

    /// The locale's tag ("en", "ko").
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ko" => Ok(Locale::Ko),
            other => Err(LocaleError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A static message catalog for one locale.
///
/// # Example
///
/// ```
/// use rowforge::core::notice::Notice;
/// use rowforge::i18n::{Catalog, Locale};
///
/// let catalog = Catalog::new(Locale::En);
/// let notice = Notice::NoData;
/// assert_eq!(catalog.render_notice(&notice), "No values have been entered.");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    /// Create a catalog for an explicitly chosen locale.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// The catalog's locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Render a message id with named substitutions.
    ///
    /// Unknown ids render as the id itself. Placeholders without a matching
    /// substitution are left verbatim.
    pub fn render(&self, id: &str, args: &[(&str, String)]) -> String {
        let template = lookup(self.locale, id)
            .or_else(|| lookup(Locale::En, id))
            .unwrap_or(id);
        interpolate(template, args)
    }

    /// Render a notice through its message id and substitutions.
    pub fn render_notice(&self, notice: &Notice) -> String {
        self.render(notice.message_id(), &notice.args())
    }
}

/// Look up the raw template for an id in one locale's table.
fn lookup(locale: Locale, id: &str) -> Option<&'static str> {
    match locale {
        Locale::En => match id {
            "duplicate-value" => {
                Some("Value '{value}' for key '{key}' is duplicated. Please fix it.")
            }
            "cannot-generate" => {
                Some("Primary key '{key}' has duplicate values. Cannot generate JSON.")
            }
            "no-data" => Some("No values have been entered."),
            "copied" => Some("JSON copied to clipboard."),
            "copy-failed" => Some("Failed to copy to clipboard: {reason}"),
            _ => None,
        },
        Locale::Ko => match id {
            "duplicate-value" => {
                Some("'{key}' 키의 값 '{value}'가 중복되었습니다. 수정해주세요.")
            }
            "cannot-generate" => {
                Some("고유 키 '{key}'에 중복된 값이 있습니다. JSON을 생성할 수 없습니다.")
            }
            "no-data" => Some("입력된 값이 없습니다."),
            "copied" => Some("JSON이 클립보드에 복사되었습니다."),
            "copy-failed" => Some("클립보드 복사에 실패했습니다: {reason}"),
            _ => None,
        },
    }
}

/// Replace `{name}` placeholders with their substitution values.
///
/// Placeholders with no matching substitution are left verbatim.
fn interpolate(template: &str, args: &[(&str, String)]) -> String {
    let mut text = template.to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}
