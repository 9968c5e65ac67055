//! Author use-case service.
//!
//! # Responsibility
//! - Provide the author operations the boundary layer maps to the authors
//!   collection and single-author routes.
//! - Gate explicit author creation behind the duplicate-name check.
//!
//! # Invariants
//! - Only this explicit create path rejects duplicate names; the implicit
//!   resolve-or-create used by book writes stays duplicate-tolerant.
//! - `delete_author` pre-checks existence, then removes the author with
//!   cascade enforcement scoped to that delete, taking the author's books
//!   with it.

use crate::model::author::{Author, AuthorId};
use crate::model::book::Book;
use crate::repo::author_repo::AuthorRepository;
use crate::repo::book_repo::BookRepository;
use crate::service::{EntityKind, ServiceError, ServiceResult};
use crate::validate::check_author_name_free;
use log::info;

/// Use-case facade over author persistence.
pub struct AuthorService<A: AuthorRepository, B: BookRepository> {
    authors: A,
    books: B,
}

impl<A: AuthorRepository, B: BookRepository> AuthorService<A, B> {
    /// Creates a service using the provided repository implementations.
    pub fn new(authors: A, books: B) -> Self {
        Self { authors, books }
    }

    /// Lists all authors.
    pub fn list_authors(&self) -> ServiceResult<Vec<Author>> {
        Ok(self.authors.list_authors()?)
    }

    /// Creates an author after the duplicate-name gate passes.
    pub fn create_author(&self, name: &str) -> ServiceResult<Author> {
        let existing = self.authors.get_author_by_name(name)?;
        check_author_name_free(existing.as_ref(), name)?;

        let author = self.authors.create_author(name)?;
        info!(
            "event=author_create module=service status=ok author_id={}",
            author.id
        );
        Ok(author)
    }

    /// Gets one author by id, signaling not-found on a miss.
    pub fn get_author(&self, id: AuthorId) -> ServiceResult<Author> {
        self.authors.get_author(id)?.ok_or(ServiceError::NotFound {
            kind: EntityKind::Author,
            id,
        })
    }

    /// Lists an existing author's books as raw rows (no name join).
    pub fn list_author_books(&self, id: AuthorId) -> ServiceResult<Vec<Book>> {
        self.get_author(id)?;
        Ok(self.books.list_books_by_author(id)?)
    }

    /// Deletes one author and, by scoped cascade, every book referencing
    /// them. Signals not-found on a miss.
    pub fn delete_author(&self, id: AuthorId) -> ServiceResult<()> {
        self.get_author(id)?;
        self.authors.delete_author(id)?;
        info!("event=author_delete module=service status=ok author_id={id}");
        Ok(())
    }
}
