//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Trigger first-run schema bootstrap before returning a usable
//!   connection.
//!
//! # Invariants
//! - Returned connections have the catalog schema in place.
//! - Returned connections do NOT have `foreign_keys=ON`; cascade delete is
//!   scoped to the author delete operation.

use super::schema::ensure_schema;
use super::DbResult;
use crate::config::StoreConfig;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a SQLite database file and runs first-run bootstrap if needed.
///
/// # Side effects
/// - May create and seed the catalog tables.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>, config: &StoreConfig) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            log_open_error("file", started_at, "db_open_failed", &err.to_string());
            return Err(err.into());
        }
    };

    finish_open(conn, config, "file", started_at)
}

/// Opens an in-memory SQLite database and runs first-run bootstrap.
///
/// # Side effects
/// - Creates and seeds the catalog tables (a fresh in-memory store is
///   always a first run).
/// - Emits `db_open` logging events with duration and status.
pub fn open_db_in_memory(config: &StoreConfig) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            log_open_error("memory", started_at, "db_open_failed", &err.to_string());
            return Err(err.into());
        }
    };

    finish_open(conn, config, "memory", started_at)
}

fn finish_open(
    conn: Connection,
    config: &StoreConfig,
    mode: &str,
    started_at: Instant,
) -> DbResult<Connection> {
    if let Err(err) = bootstrap_connection(&conn, config) {
        log_open_error(mode, started_at, "db_bootstrap_failed", &err.to_string());
        return Err(err);
    }

    info!(
        "event=db_open module=db status=ok mode={} duration_ms={}",
        mode,
        started_at.elapsed().as_millis()
    );
    Ok(conn)
}

fn bootstrap_connection(conn: &Connection, config: &StoreConfig) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    ensure_schema(conn, config)?;
    Ok(())
}

fn log_open_error(mode: &str, started_at: Instant, error_code: &str, error: &str) {
    error!(
        "event=db_open module=db status=error mode={} duration_ms={} error_code={} error={}",
        mode,
        started_at.elapsed().as_millis(),
        error_code,
        error
    );
}
