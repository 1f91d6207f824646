//! Schema migrations for the Saved.io SQLite database.
//!
//! A `schema_version` table records which migrations have been applied.
//! Each migration runs exactly once.

use rusqlite::Connection;
use tracing::info;

/// Current schema version. Bump this when adding a new migration.
pub const CURRENT_SCHEMA_VERSION: i32 = 2;

/// Returns the applied schema version (0 for a fresh database).
pub fn get_schema_version(conn: &Connection) -> i32 {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .unwrap_or(0)
}

/// Runs all pending migrations. Safe to call on every startup.
///
/// # Errors
/// Returns `rusqlite::Error` if any SQL statement fails.
pub fn run_all(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         CREATE TABLE IF NOT EXISTS schema_version (
             version INTEGER PRIMARY KEY,
             applied_at TEXT NOT NULL,
             description TEXT NOT NULL
         );",
    )?;

    let current = get_schema_version(conn);

    if current < 1 {
        migration_v1(conn)?;
        record_version(conn, 1, "Initial schema: bookmarks")?;
    }

    if current < 2 {
        migration_v2(conn)?;
        record_version(conn, 2, "Indexes for list filtering and ordering")?;
    }

    Ok(())
}

fn record_version(conn: &Connection, version: i32, description: &str) -> Result<(), rusqlite::Error> {
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at, description) VALUES (?1, ?2, ?3)",
        rusqlite::params![version, now, description],
    )?;
    info!(version, description, "applied schema migration");
    Ok(())
}

/// V1: bookmarks table. `date` holds a fixed-width UTC timestamp so that
/// ordering by the text column is chronological.
fn migration_v1(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS bookmarks (
            id TEXT PRIMARY KEY,
            url TEXT NOT NULL,
            title TEXT NOT NULL,
            note TEXT NOT NULL DEFAULT '',
            list_name TEXT,
            date TEXT NOT NULL,
            favorite INTEGER NOT NULL DEFAULT 0,
            click_counter INTEGER NOT NULL DEFAULT 0
        );
        ",
    )
}

/// V2: indexes used by list views.
fn migration_v2(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        CREATE INDEX IF NOT EXISTS idx_bookmarks_list_name ON bookmarks(list_name);
        CREATE INDEX IF NOT EXISTS idx_bookmarks_date ON bookmarks(date);
        ",
    )
}
