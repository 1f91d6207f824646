use savedio::types::errors::*;
use savedio::types::form::MessageId;

// === ListNameError Tests ===

#[test]
fn list_name_error_reason_codes() {
    assert_eq!(ListNameError::Empty.reason(), "empty");
    assert_eq!(ListNameError::InvalidCharacters.reason(), "invalid characters");
    assert_eq!(ListNameError::InvalidHyphens.reason(), "invalid hyphen placement");
}

#[test]
fn list_name_error_display() {
    assert_eq!(
        ListNameError::InvalidHyphens.to_string(),
        "Invalid list name: invalid hyphen placement"
    );
}

#[test]
fn list_name_error_message_ids() {
    assert_eq!(ListNameError::Empty.message_id(), MessageId::CreateListErrorEmpty);
    assert_eq!(
        ListNameError::InvalidCharacters.message_id(),
        MessageId::CreateListErrorChars
    );
    assert_eq!(
        ListNameError::InvalidHyphens.message_id(),
        MessageId::CreateListErrorHyphens
    );
}

// === BookmarkError Tests ===

#[test]
fn bookmark_error_display_variants() {
    assert_eq!(
        BookmarkError::NotFound("bm-1".to_string()).to_string(),
        "Bookmark not found: bm-1"
    );
    assert_eq!(BookmarkError::EmptyUrl.to_string(), "Bookmark URL cannot be empty");
    assert_eq!(
        BookmarkError::InvalidList(ListNameError::Empty).to_string(),
        "Invalid list name: empty"
    );
    assert_eq!(
        BookmarkError::DatabaseError("locked".to_string()).to_string(),
        "Bookmark database error: locked"
    );
}

#[test]
fn bookmark_error_exposes_list_name_source() {
    let err: Box<dyn std::error::Error> =
        Box::new(BookmarkError::from(ListNameError::InvalidCharacters));
    let source = err.source().expect("invalid list error should have a source");
    assert_eq!(source.to_string(), "Invalid list name: invalid characters");

    let err: Box<dyn std::error::Error> = Box::new(BookmarkError::EmptyUrl);
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("x.y".to_string()).to_string(),
        "Invalid settings key: x.y"
    );
    assert_eq!(
        SettingsError::InvalidValue("nope".to_string()).to_string(),
        "Invalid settings value: nope"
    );
}
