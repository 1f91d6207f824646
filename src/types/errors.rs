use std::fmt;

use super::form::MessageId;

// === ListNameError ===

/// Reasons a candidate list name is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListNameError {
    /// The name is empty.
    Empty,
    /// The name contains a character outside `a-z`, `0-9` and `-`.
    InvalidCharacters,
    /// The name starts or ends with a hyphen, or contains `--`.
    InvalidHyphens,
}

impl ListNameError {
    /// Short reason code shown next to the rejected input.
    pub fn reason(&self) -> &'static str {
        match self {
            ListNameError::Empty => "empty",
            ListNameError::InvalidCharacters => "invalid characters",
            ListNameError::InvalidHyphens => "invalid hyphen placement",
        }
    }

    /// Message the error prompt displays for this rejection.
    pub fn message_id(&self) -> MessageId {
        match self {
            ListNameError::Empty => MessageId::CreateListErrorEmpty,
            ListNameError::InvalidCharacters => MessageId::CreateListErrorChars,
            ListNameError::InvalidHyphens => MessageId::CreateListErrorHyphens,
        }
    }
}

impl fmt::Display for ListNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid list name: {}", self.reason())
    }
}

impl std::error::Error for ListNameError {}

// === BookmarkError ===

/// Errors related to bookmark storage operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// Bookmark with the given ID was not found.
    NotFound(String),
    /// The bookmark URL is empty.
    EmptyUrl,
    /// The list name assigned to the bookmark was rejected.
    InvalidList(ListNameError),
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            BookmarkError::EmptyUrl => write!(f, "Bookmark URL cannot be empty"),
            BookmarkError::InvalidList(err) => write!(f, "{}", err),
            BookmarkError::DatabaseError(msg) => {
                write!(f, "Bookmark database error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BookmarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BookmarkError::InvalidList(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ListNameError> for BookmarkError {
    fn from(err: ListNameError) -> Self {
        BookmarkError::InvalidList(err)
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
