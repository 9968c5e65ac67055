//! Book use-case service.
//!
//! # Responsibility
//! - Provide the book operations the boundary layer maps to the books
//!   collection and single-book routes.
//! - Gate create and update behind the duplicate-book check.
//!
//! # Invariants
//! - `update_book` and `delete_book` pre-check existence; the repository's
//!   silent-no-op behavior is never relied on by boundary callers.
//! - The duplicate check reads current store state; no isolation exists
//!   between the check and the write that follows.

use crate::model::book::{Book, BookId};
use crate::repo::book_repo::BookRepository;
use crate::service::{EntityKind, ServiceError, ServiceResult};
use crate::validate::check_book_unique;
use log::info;

/// Use-case facade over book persistence.
pub struct BookService<B: BookRepository> {
    books: B,
}

impl<B: BookRepository> BookService<B> {
    /// Creates a service using the provided repository implementation.
    pub fn new(books: B) -> Self {
        Self { books }
    }

    /// Lists all books with author names joined in.
    pub fn list_books(&self) -> ServiceResult<Vec<Book>> {
        Ok(self.books.list_books()?)
    }

    /// Creates a book after the duplicate-pair gate passes.
    ///
    /// Resolves or creates the named author as a side effect of the write
    /// path; a brand-new author name never fails this operation.
    pub fn create_book(&self, title: &str, author_name: &str) -> ServiceResult<Book> {
        let exists = self.books.book_exists(title, author_name)?;
        check_book_unique(exists, title, author_name)?;

        let book = self.books.create_book(title, author_name)?;
        info!("event=book_create module=service status=ok book_id={}", book.id);
        Ok(book)
    }

    /// Gets one book by id, signaling not-found on a miss.
    pub fn get_book(&self, id: BookId) -> ServiceResult<Book> {
        self.books.get_book(id)?.ok_or(ServiceError::NotFound {
            kind: EntityKind::Book,
            id,
        })
    }

    /// Overwrites title and author for an existing book.
    ///
    /// Pre-checks existence, then the duplicate-pair gate, then writes.
    /// The author is re-resolved or created as needed; an old author row
    /// left unreferenced is NOT cleaned up.
    pub fn update_book(&self, id: BookId, title: &str, author_name: &str) -> ServiceResult<()> {
        self.get_book(id)?;

        let exists = self.books.book_exists(title, author_name)?;
        check_book_unique(exists, title, author_name)?;

        self.books.update_book(id, title, author_name)?;
        info!("event=book_update module=service status=ok book_id={id}");
        Ok(())
    }

    /// Deletes one book by id, signaling not-found on a miss.
    ///
    /// Book deletion never cascades outward.
    pub fn delete_book(&self, id: BookId) -> ServiceResult<()> {
        self.get_book(id)?;
        self.books.delete_book(id)?;
        info!("event=book_delete module=service status=ok book_id={id}");
        Ok(())
    }
}
