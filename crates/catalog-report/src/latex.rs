//! Shared LaTeX helpers: escaping, field rules and document options.
//!
//! Each layout declares its own table of [`FieldRule`]s. The layouts look
//! alike but differ in which fields get defaults, when a default applies and
//! which characters are escaped, so nothing here is shared between them
//! beyond the mechanics.

use std::borrow::Cow;

use catalog_model::Record;

/// Default document title.
pub const DEFAULT_TITLE: &str = "LEGO Catalog";

/// Author line of every LaTeX preamble.
pub const DEFAULT_AUTHOR: &str = "LEGO Collection Catalog";

/// `&`, `%` and `#`.
pub const TEXT_ESCAPES: &[char] = &['&', '%', '#'];

/// `&` and `%`.
pub const AMPERSAND_PERCENT_ESCAPES: &[char] = &['&', '%'];

/// `&` only.
pub const AMPERSAND_ESCAPES: &[char] = &['&'];

pub const NO_ESCAPES: &[char] = &[];

/// Closing line of every LaTeX document.
pub const END_DOCUMENT: &str = "\\end{document}\n";

/// Prefix each character of `special` with a backslash.
///
/// Single pass, so an inserted backslash is never escaped again.
pub fn escape_latex(value: &str, special: &[char]) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if special.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// How one field is read from a record into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub default: &'static str,
    pub escapes: &'static [char],
}

impl FieldRule {
    pub const fn new(field: &'static str, default: &'static str, escapes: &'static [char]) -> Self {
        Self {
            field,
            default,
            escapes,
        }
    }

    /// Trimmed value; the default replaces an absent or blank field.
    pub fn trimmed(&self, record: &Record) -> String {
        let value = record.text(self.field);
        let value = value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(self.default);
        escape_latex(value, self.escapes)
    }

    /// Untouched value; the default replaces an absent field only.
    pub fn raw(&self, record: &Record) -> String {
        let value = record
            .text(self.field)
            .unwrap_or(Cow::Borrowed(self.default));
        escape_latex(&value, self.escapes)
    }
}

/// Trimmed text of a field, empty when absent.
pub fn trimmed_text(record: &Record, field: &str) -> String {
    record
        .text(field)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Options shared by the LaTeX layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    pub title: String,
    pub author: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

impl DocumentOptions {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub(crate) fn escaped_title(&self) -> String {
        escape_latex(&self.title, TEXT_ESCAPES)
    }

    pub(crate) fn escaped_author(&self) -> String {
        escape_latex(&self.author, TEXT_ESCAPES)
    }
}

/// A rendered document and the number of entries it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub text: String,
    pub entries: usize,
}
