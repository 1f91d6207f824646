//! Types shared between the bookmark form logic and the UI shell that
//! renders its prompts.

use serde::{Deserialize, Serialize};

/// Identifies a user-facing string the form asks the UI to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageId {
    SelectListTitle,
    AddListTitle,
    CreateListErrorEmpty,
    CreateListErrorChars,
    CreateListErrorHyphens,
}

impl MessageId {
    /// Stable resource key the UI shell uses for localized lookup.
    pub fn key(&self) -> &'static str {
        match self {
            MessageId::SelectListTitle => "bookmark_form_dialog_select_list_title",
            MessageId::AddListTitle => "bookmark_form_dialog_add_list_title",
            MessageId::CreateListErrorEmpty => "bookmark_form_create_list_error_empty",
            MessageId::CreateListErrorChars => "bookmark_form_create_list_error_chars",
            MessageId::CreateListErrorHyphens => "bookmark_form_create_list_error_hyphens",
        }
    }

    /// English fallback text.
    pub fn default_text(&self) -> &'static str {
        match self {
            MessageId::SelectListTitle => "Select list",
            MessageId::AddListTitle => "New list",
            MessageId::CreateListErrorEmpty => "The list name cannot be empty.",
            MessageId::CreateListErrorChars => {
                "The list name may only contain lowercase letters, digits and hyphens."
            }
            MessageId::CreateListErrorHyphens => {
                "The list name cannot start or end with a hyphen or contain two in a row."
            }
        }
    }
}

/// Sorted, duplicate-free collection of list names offered to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AvailableLists {
    names: Vec<String>,
}

impl AvailableLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Index of `name` in the collection.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).ok()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Inserts `name` at its sorted position. Returns `false` if it was
    /// already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        match self.names.binary_search(&name) {
            Ok(_) => false,
            Err(pos) => {
                self.names.insert(pos, name);
                true
            }
        }
    }
}

impl From<Vec<String>> for AvailableLists {
    fn from(mut names: Vec<String>) -> Self {
        names.sort();
        names.dedup();
        Self { names }
    }
}

impl From<AvailableLists> for Vec<String> {
    fn from(lists: AvailableLists) -> Self {
        lists.names
    }
}
