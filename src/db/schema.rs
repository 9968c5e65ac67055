//! First-run schema bootstrap for the catalog tables.
//!
//! # Responsibility
//! - Create the authors/books tables when the store is brand new.
//! - Insert the seed dataset exactly once, preserving seed author ids.
//!
//! # Invariants
//! - Presence of the authors table is the only first-run marker; when it
//!   exists the bootstrap is a strict no-op (no re-seeding, no diffing).
//! - Seeded author rows keep their caller-supplied ids so seeded book rows
//!   reference the right author.

use super::DbResult;
use crate::config::{StoreConfig, AUTHORS_TABLE, BOOKS_TABLE};
use log::info;
use rusqlite::{params, Connection, OptionalExtension};

/// Ensures the catalog schema exists, seeding it on first run.
///
/// Idempotent: a second call against the same store changes nothing.
pub fn ensure_schema(conn: &Connection, config: &StoreConfig) -> DbResult<()> {
    if authors_table_exists(conn)? {
        info!("event=schema_bootstrap module=db status=skipped reason=already_initialized");
        return Ok(());
    }

    conn.execute_batch(&format!(
        "CREATE TABLE {AUTHORS_TABLE} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name
        );
        CREATE TABLE {BOOKS_TABLE} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title,
            id_author INTEGER NOT NULL REFERENCES {AUTHORS_TABLE}(id) ON DELETE CASCADE
        );"
    ))?;

    for record in &config.seed {
        conn.execute(
            &format!("INSERT INTO {AUTHORS_TABLE} (id, name) VALUES (?1, ?2);"),
            params![record.author_id, record.author.as_str()],
        )?;
        conn.execute(
            &format!("INSERT INTO {BOOKS_TABLE} (title, id_author) VALUES (?1, ?2);"),
            params![record.title.as_str(), record.author_id],
        )?;
    }

    info!(
        "event=schema_bootstrap module=db status=ok seeded_records={}",
        config.seed.len()
    );
    Ok(())
}

fn authors_table_exists(conn: &Connection) -> DbResult<bool> {
    let found: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [AUTHORS_TABLE],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}
