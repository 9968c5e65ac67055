//! Book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the books table, joining author names back in
//!   on the read paths that need them.
//! - Resolve-or-create the author before every book write.
//!
//! # Invariants
//! - `create_book` and `update_book` are two separate writes (author
//!   resolution, then the book statement), deliberately not wrapped in one
//!   transaction; a crash in between can leave an orphan author row.
//! - `update_book` and `delete_book` are silent no-ops on absent ids;
//!   existence pre-checks belong to the service layer.

use crate::config::{AUTHORS_TABLE, BOOKS_TABLE};
use crate::model::author::AuthorId;
use crate::model::book::{Book, BookId};
use crate::repo::author_repo::resolve_or_create_author;
use crate::repo::RepoResult;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Repository interface for book persistence.
pub trait BookRepository {
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    fn create_book(&self, title: &str, author_name: &str) -> RepoResult<Book>;
    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
    fn update_book(&self, id: BookId, title: &str, author_name: &str) -> RepoResult<()>;
    fn delete_book(&self, id: BookId) -> RepoResult<()>;
    fn list_books_by_author(&self, author_id: AuthorId) -> RepoResult<Vec<Book>>;
    fn book_exists(&self, title: &str, author_name: &str) -> RepoResult<bool>;
}

/// SQLite-backed book repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn list_books(&self) -> RepoResult<Vec<Book>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT b.id, b.title, a.name
             FROM {BOOKS_TABLE} b
             INNER JOIN {AUTHORS_TABLE} a ON b.id_author = a.id;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut books = Vec::new();

        while let Some(row) = rows.next()? {
            books.push(parse_joined_book_row(row)?);
        }

        Ok(books)
    }

    fn create_book(&self, title: &str, author_name: &str) -> RepoResult<Book> {
        let author_id = resolve_or_create_author(self.conn, author_name)?;

        self.conn.execute(
            &format!("INSERT INTO {BOOKS_TABLE} (title, id_author) VALUES (?1, ?2);"),
            params![title, author_id],
        )?;

        Ok(Book::new(
            self.conn.last_insert_rowid(),
            title,
            Some(author_name.to_string()),
        ))
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        // Left join: a dangling author reference still resolves with an
        // absent author name instead of dropping the row.
        let book = self
            .conn
            .query_row(
                &format!(
                    "SELECT b.id, b.title, a.name
                     FROM {BOOKS_TABLE} b
                     LEFT JOIN {AUTHORS_TABLE} a ON b.id_author = a.id
                     WHERE b.id = ?1;"
                ),
                [id],
                |row| {
                    Ok(Book {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        author: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(book)
    }

    fn update_book(&self, id: BookId, title: &str, author_name: &str) -> RepoResult<()> {
        let author_id = resolve_or_create_author(self.conn, author_name)?;

        self.conn.execute(
            &format!(
                "UPDATE {BOOKS_TABLE}
                 SET title = ?1, id_author = ?2
                 WHERE id = ?3;"
            ),
            params![title, author_id, id],
        )?;
        Ok(())
    }

    fn delete_book(&self, id: BookId) -> RepoResult<()> {
        self.conn.execute(
            &format!("DELETE FROM {BOOKS_TABLE} WHERE id = ?1;"),
            [id],
        )?;
        Ok(())
    }

    fn list_books_by_author(&self, author_id: AuthorId) -> RepoResult<Vec<Book>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, title FROM {BOOKS_TABLE} WHERE id_author = ?1;"
        ))?;
        let mut rows = stmt.query([author_id])?;
        let mut books = Vec::new();

        // Raw rows; the caller already knows the author, so the name is
        // not joined back in.
        while let Some(row) = rows.next()? {
            books.push(Book {
                id: row.get(0)?,
                title: row.get(1)?,
                author: None,
            });
        }

        Ok(books)
    }

    fn book_exists(&self, title: &str, author_name: &str) -> RepoResult<bool> {
        let found: Option<BookId> = self
            .conn
            .query_row(
                &format!(
                    "SELECT b.id
                     FROM {BOOKS_TABLE} b
                     JOIN {AUTHORS_TABLE} a ON b.id_author = a.id
                     WHERE b.title = ?1 AND a.name = ?2;"
                ),
                params![title, author_name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }
}

fn parse_joined_book_row(row: &Row<'_>) -> RepoResult<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
    })
}
