//! Property-based tests for settings persistence: any value written through
//! `set_value` is read back by a fresh engine.

use proptest::prelude::*;
use savedio::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use savedio::types::settings::SortOrder;
use tempfile::TempDir;

fn arb_sort_order() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::DateLast), Just(SortOrder::Clicks)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn settings_survive_reload(
        order in arb_sort_order(),
        default_list in proptest::option::of("[a-z]{1,10}"),
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json").to_string_lossy().to_string();

        let mut engine = SettingsEngine::new(Some(path.clone()));
        engine.load().unwrap();
        engine
            .set_value("bookmarks.sort_order", serde_json::to_value(order).unwrap())
            .unwrap();
        engine
            .set_value("bookmarks.default_list", serde_json::to_value(&default_list).unwrap())
            .unwrap();

        let mut reloaded = SettingsEngine::new(Some(path));
        let settings = reloaded.load().unwrap();
        prop_assert_eq!(settings.bookmarks.sort_order, order);
        prop_assert_eq!(settings.bookmarks.default_list, default_list);
    }
}
