//! SQLite connection management for Saved.io.
//!
//! [`Database`] wraps a `rusqlite::Connection` and runs schema migrations
//! whenever a connection is opened.

use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

use super::migrations;

/// Owns the bookmark database connection.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) the database file at `path` and migrates it.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the connection cannot be established or migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        debug!(path = %path.as_ref().display(), "opening database");
        Self::with_connection(Connection::open(path)?)
    }

    /// Opens a migrated in-memory database, discarded on drop.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, rusqlite::Error> {
        migrations::run_all(&conn)?;
        Ok(Self { conn })
    }

    /// Returns the underlying connection for managers to query.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
