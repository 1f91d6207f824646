//! Unit tests for the Saved.io database layer (connection + migrations).

use savedio::database::migrations::{get_schema_version, CURRENT_SCHEMA_VERSION};
use savedio::database::Database;
use tempfile::TempDir;

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_bookmarks_table_and_indexes() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    for (kind, name) in [
        ("table", "bookmarks"),
        ("index", "idx_bookmarks_list_name"),
        ("index", "idx_bookmarks_date"),
    ] {
        let exists: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = ?1 AND name = ?2",
                [kind, name],
                |row| row.get(0),
            )
            .unwrap_or(false);
        assert!(exists, "{} '{}' should exist after migrations", kind, name);
    }
}

#[test]
fn test_schema_version_is_current() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_reopen_does_not_reapply_migrations() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("savedio.db");

    {
        let db = Database::open(&path).unwrap();
        db.connection()
            .execute(
                "INSERT INTO bookmarks (id, url, title, date) VALUES ('a', 'https://a.io', 'A', '2017-01-01T00:00:00.000Z')",
                [],
            )
            .unwrap();
    }

    let db = Database::open(&path).unwrap();
    let conn = db.connection();
    let migrations: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(migrations, CURRENT_SCHEMA_VERSION as i64);

    let bookmarks: i64 = conn
        .query_row("SELECT COUNT(*) FROM bookmarks", [], |row| row.get(0))
        .unwrap();
    assert_eq!(bookmarks, 1, "existing data must survive a reopen");
}
