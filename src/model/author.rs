//! Author domain model.

use serde::{Deserialize, Serialize};

/// Stable store-assigned author identity.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AuthorId = i64;

/// One author row.
///
/// `id` is assigned by the store on insert and immutable afterwards.
/// `name` is unique across all authors; duplicate-name rejection happens in
/// the validation layer before the explicit create path, while the implicit
/// resolve-or-create path reuses the existing row instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

impl Author {
    pub fn new(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
