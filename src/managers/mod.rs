// Saved.io state managers
// Managers handle storage-backed operations on bookmarks.

pub mod bookmark_manager;
