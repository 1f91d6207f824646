use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// `date` is an RFC 3339 UTC timestamp with fixed millisecond precision
/// (`2017-05-01T10:20:30.000Z`), so plain string comparison matches
/// chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub title: String,
    pub note: String,
    pub list_name: Option<String>,
    pub date: String,
    pub favorite: bool,
    pub click_counter: u32,
}

impl Bookmark {
    pub fn click_counter(&self) -> u32 {
        self.click_counter
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }
}
