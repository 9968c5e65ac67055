//! Book domain model.

use serde::{Deserialize, Serialize};

/// Stable store-assigned book identity.
pub type BookId = i64;

/// One book row, optionally joined to its author's name.
///
/// `author` carries the joined author name on the read paths that
/// reconstruct it. It is `None` on per-author listings (the caller already
/// knows the author) and on the defensive left-join read of a book whose
/// author reference no longer resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: Option<String>,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, author: Option<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author,
        }
    }
}
