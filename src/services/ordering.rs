//! Bookmark orderings used by the list views.
//!
//! Both comparators are total for well-formed data. Dates are compared as
//! plain strings; the stored format sorts the same way chronological order
//! does, so no date parsing is needed.

use std::cmp::Ordering;

use crate::types::bookmark::Bookmark;
use crate::types::settings::SortOrder;

/// Orders from more clicks to fewer.
pub fn by_clicks(a: &Bookmark, b: &Bookmark) -> Ordering {
    b.click_counter().cmp(&a.click_counter())
}

/// Orders favorites before the rest, and newest to oldest inside each group.
pub fn by_date_last(a: &Bookmark, b: &Bookmark) -> Ordering {
    match (a.is_favorite(), b.is_favorite()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => b.date().cmp(a.date()),
    }
}

impl SortOrder {
    /// Comparator backing this order.
    pub fn comparator(self) -> fn(&Bookmark, &Bookmark) -> Ordering {
        match self {
            SortOrder::DateLast => by_date_last,
            SortOrder::Clicks => by_clicks,
        }
    }

    /// Sorts `bookmarks` in place. Equal elements keep their relative order.
    pub fn sort(self, bookmarks: &mut [Bookmark]) {
        bookmarks.sort_by(self.comparator());
    }
}
