//! Bookmark form logic.
//!
//! The form offers list selection, list creation, a title suggestion derived
//! from the URL, and enables its submit control only while the URL field has
//! content. Dialogs are reached through the prompt traits below, so the same
//! flows run against a real UI shell, the RPC layer or a scripted test double.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use tracing::{debug, info, warn};
use url::{Host, Url};

use crate::types::errors::ListNameError;
use crate::types::form::{AvailableLists, MessageId};

const DEFAULT_SCHEME: &str = "http://";
const TITLE_SEPARATOR: &str = " > ";

/// Single-choice dialog.
pub trait ChoicePrompt {
    /// Shows `options` with `preselected` checked. Returns the chosen index,
    /// or `None` if the dialog was cancelled.
    fn show(&mut self, title: MessageId, options: &[String], preselected: Option<usize>)
        -> Option<usize>;
}

/// Text-input dialog.
pub trait TextInputPrompt {
    /// Returns the entered text when confirmed, `None` when cancelled.
    fn show(&mut self, title: MessageId, initial_text: &str) -> Option<String>;
}

/// Fire-and-forget error dialog.
pub trait ErrorPrompt {
    fn show(&mut self, message: MessageId);
}

/// Control whose enabled state the form drives.
pub trait EnabledSink {
    fn set_enabled(&mut self, enabled: bool);
}

impl EnabledSink for bool {
    fn set_enabled(&mut self, enabled: bool) {
        *self = enabled;
    }
}

/// Result of the "add list" flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddListOutcome {
    /// The user dismissed the dialog; nothing changed.
    Cancelled,
    /// The entered name was rejected and the error prompt was shown.
    Rejected(ListNameError),
    /// The name was accepted and selected. `created` is false when the list
    /// already existed.
    Accepted { name: String, created: bool },
}

/// Derives a readable title from a URL: the host followed by every non-empty
/// path segment, joined with `" > "`.
///
/// Inputs without a scheme are parsed as `http://`. Anything that still fails
/// to parse is returned unchanged.
pub fn infer_title_from_url(input: &str) -> String {
    let candidate: Cow<'_, str> = if input.contains("://") {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(format!("{}{}", DEFAULT_SCHEME, input))
    };

    let url = match Url::parse(&candidate) {
        Ok(url) => url,
        Err(e) => {
            debug!(input, error = %e, "title inference fell back to raw input");
            return input.to_string();
        }
    };

    let parts: Vec<Cow<'_, str>> = readable_host(&url)
        .into_iter()
        .chain(
            url.path()
                .split('/')
                .map(|segment| percent_decode_str(segment).decode_utf8_lossy()),
        )
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        input.to_string()
    } else {
        parts.join(TITLE_SEPARATOR)
    }
}

/// Host as a person would type it: IDN domains are converted back from
/// punycode. IP addresses are kept as parsed.
fn readable_host(url: &Url) -> Option<Cow<'_, str>> {
    match url.host()? {
        Host::Domain(domain) => {
            let (unicode, result) = idna::domain_to_unicode(domain);
            match result {
                Ok(()) => Some(Cow::Owned(unicode)),
                Err(_) => Some(Cow::Borrowed(domain)),
            }
        }
        _ => url.host_str().map(Cow::Borrowed),
    }
}

/// Checks a list name. The first failing rule wins: emptiness, then the
/// character set, then hyphen placement.
pub fn validate_list_name(name: &str) -> Result<(), ListNameError> {
    if name.is_empty() {
        return Err(ListNameError::Empty);
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ListNameError::InvalidCharacters);
    }
    if name.starts_with('-') || name.ends_with('-') || name.contains("--") {
        return Err(ListNameError::InvalidHyphens);
    }
    Ok(())
}

/// Normalizes user input before validation.
pub fn normalize_list_name(input: &str) -> String {
    input.to_lowercase()
}

/// Position of the displayed selection inside `lists`, if any.
pub fn selected_list_position(lists: &AvailableLists, selection: &str) -> Option<usize> {
    if selection.is_empty() {
        return None;
    }
    lists.position(selection)
}

/// Lets the user pick one of `lists` and writes the choice into `selection`.
///
/// Returns `true` when `selection` changed. Cancelling or confirming the
/// already-selected entry leaves it untouched.
pub fn on_change_selected_list_click<P>(
    prompt: &mut P,
    lists: &AvailableLists,
    selection: &mut String,
) -> bool
where
    P: ChoicePrompt + ?Sized,
{
    let current = selected_list_position(lists, selection);
    let Some(chosen) = prompt.show(MessageId::SelectListTitle, lists.as_slice(), current) else {
        return false;
    };
    if Some(chosen) == current {
        return false;
    }
    match lists.get(chosen) {
        Some(name) => {
            debug!(list = name, "selected list changed");
            *selection = name.to_string();
            true
        }
        None => {
            warn!(index = chosen, len = lists.len(), "choice prompt returned out-of-range index");
            false
        }
    }
}

/// Asks for a new list name, validates it and selects it.
///
/// The entered text is lowercased first. On rejection the matching error
/// message is shown and nothing else changes. An accepted name is inserted
/// into `lists` unless already present, then becomes the selection.
pub fn on_add_list_click<P, E>(
    prompt: &mut P,
    errors: &mut E,
    lists: &mut AvailableLists,
    selection: &mut String,
) -> AddListOutcome
where
    P: TextInputPrompt + ?Sized,
    E: ErrorPrompt + ?Sized,
{
    let Some(entered) = prompt.show(MessageId::AddListTitle, "") else {
        return AddListOutcome::Cancelled;
    };

    let name = normalize_list_name(&entered);
    if let Err(reason) = validate_list_name(&name) {
        debug!(name = %name, reason = reason.reason(), "list name rejected");
        errors.show(reason.message_id());
        return AddListOutcome::Rejected(reason);
    }

    let created = lists.insert(name.clone());
    if created {
        info!(list = %name, "created list");
    }
    *selection = name.clone();
    AddListOutcome::Accepted { name, created }
}

/// Enables a control while the observed text is non-empty.
pub struct EnablementWatcher<S: EnabledSink> {
    target: S,
}

impl<S: EnabledSink> EnablementWatcher<S> {
    pub fn new(target: S) -> Self {
        Self { target }
    }

    /// Called on every content change of the observed input.
    pub fn on_text_changed(&mut self, text: &str) {
        self.target.set_enabled(!text.is_empty());
    }

    pub fn target(&self) -> &S {
        &self.target
    }

    pub fn into_target(self) -> S {
        self.target
    }
}
