use serde::{Deserialize, Serialize};

/// Order applied to bookmark listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Favorites first, then newest first.
    #[default]
    DateLast,
    /// Most opened first.
    Clicks,
}

/// Top-level user settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub bookmarks: BookmarkSettings,
}

/// Settings for bookmark listings and the bookmark form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookmarkSettings {
    pub sort_order: SortOrder,
    /// List assigned to new bookmarks added without one. Always a valid,
    /// lowercase list name.
    pub default_list: Option<String>,
}
