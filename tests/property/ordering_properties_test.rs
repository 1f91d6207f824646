//! Property-based tests for the bookmark comparators.
//!
//! For arbitrary bookmark pairs:
//! - the click comparator orders opposite to `clicks_a - clicks_b`;
//! - a lone favorite always sorts first under the date comparator;
//! - otherwise the date comparator is descending string order of dates.

use std::cmp::Ordering;

use proptest::prelude::*;
use savedio::services::ordering::{by_clicks, by_date_last};
use savedio::types::bookmark::Bookmark;
use savedio::types::settings::SortOrder;

/// Strategy for fixed-width UTC timestamps.
fn arb_date() -> impl Strategy<Value = String> {
    (2000u32..2030, 1u32..13, 1u32..29, 0u32..24, 0u32..60, 0u32..1000).prop_map(
        |(y, mo, d, h, mi, ms)| format!("{:04}-{:02}-{:02}T{:02}:{:02}:00.{:03}Z", y, mo, d, h, mi, ms),
    )
}

fn arb_bookmark() -> impl Strategy<Value = Bookmark> {
    ("[a-z]{1,8}", arb_date(), any::<bool>(), 0u32..10_000).prop_map(|(id, date, favorite, clicks)| {
        Bookmark {
            url: format!("https://{}.io", id),
            title: id.clone(),
            id,
            note: String::new(),
            list_name: None,
            date,
            favorite,
            click_counter: clicks,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn click_order_is_opposite_of_difference(a in arb_bookmark(), b in arb_bookmark()) {
        let diff = a.click_counter as i64 - b.click_counter as i64;
        prop_assert_eq!(by_clicks(&a, &b), 0.cmp(&diff));
    }

    #[test]
    fn lone_favorite_sorts_first(mut a in arb_bookmark(), mut b in arb_bookmark()) {
        a.favorite = true;
        b.favorite = false;
        prop_assert_eq!(by_date_last(&a, &b), Ordering::Less);
        prop_assert_eq!(by_date_last(&b, &a), Ordering::Greater);
    }

    #[test]
    fn same_group_orders_by_descending_date(
        a in arb_bookmark(),
        mut b in arb_bookmark(),
    ) {
        b.favorite = a.favorite;
        prop_assert_eq!(by_date_last(&a, &b), b.date.cmp(&a.date));
    }

    #[test]
    fn sorted_date_last_list_is_grouped_and_descending(mut items in prop::collection::vec(arb_bookmark(), 0..30)) {
        SortOrder::DateLast.sort(&mut items);
        for pair in items.windows(2) {
            let (x, y) = (&pair[0], &pair[1]);
            prop_assert!(x.favorite || !y.favorite, "non-favorite before favorite");
            if x.favorite == y.favorite {
                prop_assert!(x.date >= y.date);
            }
        }
    }

    #[test]
    fn sorted_clicks_list_is_descending(mut items in prop::collection::vec(arb_bookmark(), 0..30)) {
        SortOrder::Clicks.sort(&mut items);
        for pair in items.windows(2) {
            prop_assert!(pair[0].click_counter >= pair[1].click_counter);
        }
    }
}
