//! Boundary-facing use-case services.
//!
//! # Responsibility
//! - Orchestrate repository reads, validation gates and writes into the
//!   operations the HTTP boundary maps to routes.
//! - Carry the error taxonomy the boundary translates to status codes:
//!   validation failures to 400-style bodies, not-found to 404, repository
//!   failures propagate as fatal.
//!
//! # Invariants
//! - Mutating single-entity operations pre-check existence and surface a
//!   distinct not-found signal before touching the store.
//! - Services never bypass the validation gates on the guarded paths.

use crate::repo::RepoError;
use crate::validate::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author_service;
pub mod book_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Entity discriminator carried by not-found signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Book,
    Author,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Book => write!(f, "Book"),
            Self::Author => write!(f, "Author"),
        }
    }
}

/// Service-level error taxonomy for boundary callers.
#[derive(Debug)]
pub enum ServiceError {
    /// Recoverable, field-keyed; maps to a 400-style response.
    Validation(ValidationError),
    /// Recoverable; maps to a 404-style response.
    NotFound { kind: EntityKind, id: i64 },
    /// Unexpected store failure; propagates as fatal.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} with id={id} doesn't exist"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
