//! Bookmark Manager for Saved.io.
//!
//! Implements `BookmarkManagerTrait`: CRUD for bookmarks, click counting,
//! favorites and list names, backed by SQLite via `rusqlite`. Listings are
//! ordered in Rust with the comparators from [`crate::services::ordering`].

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};
use uuid::Uuid;

use crate::services::bookmark_form::{infer_title_from_url, normalize_list_name, validate_list_name};
use crate::types::bookmark::Bookmark;
use crate::types::errors::BookmarkError;
use crate::types::form::AvailableLists;
use crate::types::settings::SortOrder;

const SELECT_COLUMNS: &str =
    "SELECT id, url, title, note, list_name, date, favorite, click_counter FROM bookmarks";

/// Fields to change on an existing bookmark. `None` leaves a field as is;
/// `list_name: Some(None)` removes the bookmark from its list.
#[derive(Debug, Clone, Default)]
pub struct BookmarkUpdate<'a> {
    pub url: Option<&'a str>,
    pub title: Option<&'a str>,
    pub note: Option<&'a str>,
    pub list_name: Option<Option<&'a str>>,
}

/// Trait defining bookmark management operations.
pub trait BookmarkManagerTrait {
    fn add_bookmark(
        &mut self,
        url: &str,
        title: Option<&str>,
        list_name: Option<&str>,
        note: &str,
    ) -> Result<Bookmark, BookmarkError>;
    /// Stores a bookmark as given, keeping its id, date and counters. Used to
    /// bring in bookmarks synced from elsewhere (`bookmark.import`).
    fn import_bookmark(&mut self, bookmark: &Bookmark) -> Result<(), BookmarkError>;
    fn get_bookmark(&self, id: &str) -> Result<Bookmark, BookmarkError>;
    fn update_bookmark(&mut self, id: &str, update: &BookmarkUpdate<'_>) -> Result<Bookmark, BookmarkError>;
    fn remove_bookmark(&mut self, id: &str) -> Result<(), BookmarkError>;
    fn list_bookmarks(&self, list_name: Option<&str>, order: SortOrder) -> Result<Vec<Bookmark>, BookmarkError>;
    fn favorites(&self, order: SortOrder) -> Result<Vec<Bookmark>, BookmarkError>;
    /// Counts one open of the bookmark. Returns the new counter value.
    fn record_click(&mut self, id: &str) -> Result<u32, BookmarkError>;
    fn set_favorite(&mut self, id: &str, favorite: bool) -> Result<(), BookmarkError>;
    fn list_names(&self) -> Result<AvailableLists, BookmarkError>;
}

/// Bookmark manager backed by a SQLite connection.
pub struct BookmarkManager<'a> {
    conn: &'a Connection,
}

impl<'a> BookmarkManager<'a> {
    /// Creates a new `BookmarkManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Current time in the stored date format.
    pub fn now() -> String {
        chrono::Utc::now()
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string()
    }

    /// Lowercases and validates an optional list name. Blank means no list.
    fn checked_list_name(list_name: Option<&str>) -> Result<Option<String>, BookmarkError> {
        match list_name {
            None => Ok(None),
            Some(raw) if raw.is_empty() => Ok(None),
            Some(raw) => {
                let name = normalize_list_name(raw);
                validate_list_name(&name)?;
                Ok(Some(name))
            }
        }
    }

    fn row_to_bookmark(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        Ok(Bookmark {
            id: row.get(0)?,
            url: row.get(1)?,
            title: row.get(2)?,
            note: row.get(3)?,
            list_name: row.get(4)?,
            date: row.get(5)?,
            favorite: row.get(6)?,
            click_counter: row.get(7)?,
        })
    }

    fn query_bookmarks<P: rusqlite::Params>(
        &self,
        sql: &str,
        params: P,
        order: SortOrder,
    ) -> Result<Vec<Bookmark>, BookmarkError> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        let mut results = stmt
            .query_map(params, Self::row_to_bookmark)
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        order.sort(&mut results);
        Ok(results)
    }

    fn insert(&self, bookmark: &Bookmark) -> Result<(), BookmarkError> {
        self.conn
            .execute(
                "INSERT INTO bookmarks (id, url, title, note, list_name, date, favorite, click_counter) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    bookmark.id,
                    bookmark.url,
                    bookmark.title,
                    bookmark.note,
                    bookmark.list_name,
                    bookmark.date,
                    bookmark.favorite,
                    bookmark.click_counter,
                ],
            )
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

impl<'a> BookmarkManagerTrait for BookmarkManager<'a> {
    /// Adds a bookmark dated now. A missing or blank title is inferred from
    /// the URL; a given list name is lowercased and validated.
    fn add_bookmark(
        &mut self,
        url: &str,
        title: Option<&str>,
        list_name: Option<&str>,
        note: &str,
    ) -> Result<Bookmark, BookmarkError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(BookmarkError::EmptyUrl);
        }

        let title = match title.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => infer_title_from_url(url),
        };

        let bookmark = Bookmark {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            title,
            note: note.to_string(),
            list_name: Self::checked_list_name(list_name)?,
            date: Self::now(),
            favorite: false,
            click_counter: 0,
        };

        self.insert(&bookmark)?;
        info!(id = %bookmark.id, list = ?bookmark.list_name, "added bookmark");
        Ok(bookmark)
    }

    fn import_bookmark(&mut self, bookmark: &Bookmark) -> Result<(), BookmarkError> {
        if bookmark.url.trim().is_empty() {
            return Err(BookmarkError::EmptyUrl);
        }
        if let Some(name) = &bookmark.list_name {
            validate_list_name(name)?;
        }
        self.insert(bookmark)?;
        debug!(id = %bookmark.id, "imported bookmark");
        Ok(())
    }

    fn get_bookmark(&self, id: &str) -> Result<Bookmark, BookmarkError> {
        self.conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                Self::row_to_bookmark,
            )
            .optional()
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?
            .ok_or_else(|| BookmarkError::NotFound(id.to_string()))
    }

    fn update_bookmark(&mut self, id: &str, update: &BookmarkUpdate<'_>) -> Result<Bookmark, BookmarkError> {
        let mut bookmark = self.get_bookmark(id)?;

        if let Some(url) = update.url {
            let url = url.trim();
            if url.is_empty() {
                return Err(BookmarkError::EmptyUrl);
            }
            bookmark.url = url.to_string();
        }
        if let Some(title) = update.title {
            bookmark.title = match title.trim() {
                "" => infer_title_from_url(&bookmark.url),
                t => t.to_string(),
            };
        }
        if let Some(note) = update.note {
            bookmark.note = note.to_string();
        }
        if let Some(list_name) = update.list_name {
            bookmark.list_name = Self::checked_list_name(list_name)?;
        }

        self.conn
            .execute(
                "UPDATE bookmarks SET url = ?1, title = ?2, note = ?3, list_name = ?4 WHERE id = ?5",
                params![bookmark.url, bookmark.title, bookmark.note, bookmark.list_name, id],
            )
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        debug!(id, "updated bookmark");
        Ok(bookmark)
    }

    fn remove_bookmark(&mut self, id: &str) -> Result<(), BookmarkError> {
        let affected = self
            .conn
            .execute("DELETE FROM bookmarks WHERE id = ?1", params![id])
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(BookmarkError::NotFound(id.to_string()));
        }
        info!(id, "removed bookmark");
        Ok(())
    }

    /// Lists bookmarks of one list, or all bookmarks when `list_name` is `None`.
    fn list_bookmarks(&self, list_name: Option<&str>, order: SortOrder) -> Result<Vec<Bookmark>, BookmarkError> {
        match list_name {
            Some(name) => self.query_bookmarks(
                &format!("{} WHERE list_name = ?1", SELECT_COLUMNS),
                params![name],
                order,
            ),
            None => self.query_bookmarks(SELECT_COLUMNS, [], order),
        }
    }

    fn favorites(&self, order: SortOrder) -> Result<Vec<Bookmark>, BookmarkError> {
        self.query_bookmarks(&format!("{} WHERE favorite = 1", SELECT_COLUMNS), [], order)
    }

    fn record_click(&mut self, id: &str) -> Result<u32, BookmarkError> {
        let affected = self
            .conn
            .execute(
                "UPDATE bookmarks SET click_counter = click_counter + 1 WHERE id = ?1",
                params![id],
            )
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(BookmarkError::NotFound(id.to_string()));
        }

        let clicks = self.get_bookmark(id)?.click_counter;
        debug!(id, clicks, "recorded bookmark click");
        Ok(clicks)
    }

    fn set_favorite(&mut self, id: &str, favorite: bool) -> Result<(), BookmarkError> {
        let affected = self
            .conn
            .execute(
                "UPDATE bookmarks SET favorite = ?1 WHERE id = ?2",
                params![favorite, id],
            )
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(BookmarkError::NotFound(id.to_string()));
        }
        debug!(id, favorite, "changed favorite flag");
        Ok(())
    }

    /// Distinct list names in use, ascending.
    fn list_names(&self) -> Result<AvailableLists, BookmarkError> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT list_name FROM bookmarks WHERE list_name IS NOT NULL")
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        Ok(AvailableLists::from(names))
    }
}
