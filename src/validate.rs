//! Pre-write validation gates for the catalog.
//!
//! # Responsibility
//! - Reject duplicate books and duplicate author names before the write
//!   paths run, echoing the offending values back in the message.
//!
//! # Invariants
//! - Gates are pure: the caller reads current store state and passes the
//!   facts in, so the check itself never touches the store.
//! - There is no isolation between a gate and the write that follows;
//!   concurrent callers can still race a duplicate through. Accepted.
//! - The author-name gate guards the explicit create path only. The
//!   implicit resolve-or-create path is duplicate-tolerant on purpose.

use crate::model::author::Author;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Recoverable validation failure keyed by field name.
///
/// The boundary layer serializes this map directly into a 400-style
/// response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    messages: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    /// Creates a failure with a single message under one field key.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut messages = BTreeMap::new();
        messages.insert(field.into(), vec![message.into()]);
        Self { messages }
    }

    /// Field-keyed message lists, ready for serialization.
    pub fn messages(&self) -> &BTreeMap<String, Vec<String>> {
        &self.messages
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.messages {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// Rejects a (title, author) pair that already exists in the catalog.
///
/// `already_exists` is the current result of a `book_exists` read. Applies
/// to both book create and book update.
pub fn check_book_unique(
    already_exists: bool,
    title: &str,
    author_name: &str,
) -> Result<(), ValidationError> {
    if already_exists {
        return Err(ValidationError::single(
            "error",
            format!(
                "Book with title \"{title}\" and author \"{author_name}\" already exists, \
                 please use a different title or author."
            ),
        ));
    }
    Ok(())
}

/// Rejects an author name that is already taken.
///
/// `existing` is the current result of a `get_author_by_name` read. Applies
/// to the explicit author create path only.
pub fn check_author_name_free(
    existing: Option<&Author>,
    name: &str,
) -> Result<(), ValidationError> {
    if existing.is_some() {
        return Err(ValidationError::single(
            "name",
            format!("Author with name \"{name}\" already exists, please use a different name."),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_author_name_free, check_book_unique};
    use crate::model::author::Author;

    #[test]
    fn book_gate_passes_when_pair_is_new() {
        assert!(check_book_unique(false, "Walden", "Thoreau").is_ok());
    }

    #[test]
    fn book_gate_echoes_title_and_author() {
        let err = check_book_unique(true, "Walden", "Thoreau").unwrap_err();
        let messages = err.messages().get("error").expect("error field");
        assert!(messages[0].contains("\"Walden\""));
        assert!(messages[0].contains("\"Thoreau\""));
    }

    #[test]
    fn author_gate_passes_when_name_is_free() {
        assert!(check_author_name_free(None, "Thoreau").is_ok());
    }

    #[test]
    fn author_gate_echoes_taken_name_under_name_field() {
        let existing = Author::new(7, "Thoreau");
        let err = check_author_name_free(Some(&existing), "Thoreau").unwrap_err();
        let messages = err.messages().get("name").expect("name field");
        assert!(messages[0].contains("\"Thoreau\""));
    }
}
