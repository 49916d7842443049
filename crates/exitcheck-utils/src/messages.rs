//! Exit code → message lookup.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Placeholder used when a code has no entry in the table.
///
/// The two flavours match the two places a message is needed: the
/// `[RESULT]` log line names the code, while entries inside a result document
/// already carry the code next to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `Unknown error code: {code}`
    WithCode,
    /// `Unknown error`
    Generic,
}

impl Placeholder {
    fn render(self, code: i32) -> String {
        match self {
            Self::WithCode => format!("Unknown error code: {code}"),
            Self::Generic => "Unknown error".to_string(),
        }
    }
}

/// Immutable mapping from check exit code to human-readable message.
///
/// The caller builds it once before any reporting and passes it by reference
/// into every lookup. Codes need not be contiguous.
///
/// ```rust
/// use exitcheck_utils::messages::{ErrorMessageTable, Placeholder};
///
/// let table = ErrorMessageTable::from_iter([(4, "bad input"), (7, "timeout")]);
/// assert_eq!(table.lookup_message(4, Placeholder::WithCode), "bad input");
/// assert_eq!(table.lookup_message(9, Placeholder::WithCode), "Unknown error code: 9");
/// assert_eq!(table.lookup_message(9, Placeholder::Generic), "Unknown error");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMessageTable {
    entries: BTreeMap<i32, String>,
}

impl ErrorMessageTable {
    #[must_use]
    pub fn new(entries: BTreeMap<i32, String>) -> Self {
        Self { entries }
    }

    /// Message stored for `code`, if any.
    #[must_use]
    pub fn get(&self, code: i32) -> Option<&str> {
        self.entries.get(&code).map(String::as_str)
    }

    /// Message for `code`, or the placeholder. Never fails.
    #[must_use]
    pub fn lookup_message(&self, code: i32, placeholder: Placeholder) -> Cow<'_, str> {
        match self.get(code) {
            Some(message) => Cow::Borrowed(message),
            None => {
                tracing::debug!(exit_code = code, "no message registered for exit code");
                Cow::Owned(placeholder.render(code))
            }
        }
    }

    /// Returns a new table with `other`'s entries layered over this one.
    #[must_use]
    pub fn merged_with(&self, other: &ErrorMessageTable) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(other.entries.iter().map(|(k, v)| (*k, v.clone())));
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &str)> {
        self.entries.iter().map(|(code, msg)| (*code, msg.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(i32, S)> for ErrorMessageTable {
    fn from_iter<I: IntoIterator<Item = (i32, S)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}
