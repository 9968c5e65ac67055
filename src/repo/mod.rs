//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define data access contracts for the catalog.
//! - Isolate SQL details from service/validation orchestration.
//!
//! # Invariants
//! - Each operation is a single self-contained statement scope; no
//!   operation wraps multiple statements in one transaction.
//! - Repository reads return `Option` for absence; not-found signaling is
//!   the service layer's concern.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author_repo;
pub mod book_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence-layer failure surfaced by repository operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
