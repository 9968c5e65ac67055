//! Author repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and name-resolution APIs over the authors table.
//! - Keep cascade-delete enforcement scoped to the author delete path.
//!
//! # Invariants
//! - `create_author` is an unconditional insert; duplicate-name rejection
//!   belongs to the validation layer guarding the explicit entry point.
//! - `resolve_or_create` is duplicate-tolerant by design: it reuses an
//!   existing row on exact name match and inserts only on a miss.

use crate::config::AUTHORS_TABLE;
use crate::model::author::{Author, AuthorId};
use crate::repo::RepoResult;
use rusqlite::{Connection, OptionalExtension, Row};

/// Repository interface for author persistence.
pub trait AuthorRepository {
    fn list_authors(&self) -> RepoResult<Vec<Author>>;
    fn create_author(&self, name: &str) -> RepoResult<Author>;
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    fn get_author_by_name(&self, name: &str) -> RepoResult<Option<Author>>;
    fn delete_author(&self, id: AuthorId) -> RepoResult<()>;
    fn resolve_or_create(&self, name: &str) -> RepoResult<AuthorId>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn list_authors(&self) -> RepoResult<Vec<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT id, name FROM {AUTHORS_TABLE};"))?;
        let mut rows = stmt.query([])?;
        let mut authors = Vec::new();

        while let Some(row) = rows.next()? {
            authors.push(parse_author_row(row)?);
        }

        Ok(authors)
    }

    fn create_author(&self, name: &str) -> RepoResult<Author> {
        self.conn.execute(
            &format!("INSERT INTO {AUTHORS_TABLE} (name) VALUES (?1);"),
            [name],
        )?;
        Ok(Author::new(self.conn.last_insert_rowid(), name))
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let author = self
            .conn
            .query_row(
                &format!("SELECT id, name FROM {AUTHORS_TABLE} WHERE id = ?1;"),
                [id],
                |row| {
                    Ok(Author {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(author)
    }

    fn get_author_by_name(&self, name: &str) -> RepoResult<Option<Author>> {
        let author = self
            .conn
            .query_row(
                &format!("SELECT id, name FROM {AUTHORS_TABLE} WHERE name = ?1;"),
                [name],
                |row| {
                    Ok(Author {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(author)
    }

    fn delete_author(&self, id: AuthorId) -> RepoResult<()> {
        // Cascade enforcement is scoped to this operation only. It is
        // switched on for the delete and restored on every exit path, so
        // other delete paths keep the store's default non-enforcing mode.
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let deleted = self.conn.execute(
            &format!("DELETE FROM {AUTHORS_TABLE} WHERE id = ?1;"),
            [id],
        );
        let restored = self.conn.execute_batch("PRAGMA foreign_keys = OFF;");
        deleted?;
        restored?;
        Ok(())
    }

    fn resolve_or_create(&self, name: &str) -> RepoResult<AuthorId> {
        resolve_or_create_author(self.conn, name)
    }
}

/// Looks up an author by exact name, inserting one on a miss.
///
/// Returns a stable id either way; an existing row is never mutated.
/// Shared by the book create/update paths, which resolve the author as a
/// separate write before touching the book row.
pub fn resolve_or_create_author(conn: &Connection, name: &str) -> RepoResult<AuthorId> {
    let existing: Option<AuthorId> = conn
        .query_row(
            &format!("SELECT id FROM {AUTHORS_TABLE} WHERE name = ?1;"),
            [name],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(id) = existing {
        return Ok(id);
    }

    conn.execute(
        &format!("INSERT INTO {AUTHORS_TABLE} (name) VALUES (?1);"),
        [name],
    )?;
    Ok(conn.last_insert_rowid())
}

fn parse_author_row(row: &Row<'_>) -> RepoResult<Author> {
    Ok(Author {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
