//! Properties of route resolution and the shared stores.

use proptest::prelude::*;
use scatterscope::{CounterStore, DetailDataStore, Props, Record, RouteTable, ViewKind};
use serde_json::json;

fn records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        prop_oneof![
            any::<i64>().prop_map(|n| json!(n)),
            ".*".prop_map(|s| json!({ "genre": s })),
            Just(json!(null)),
        ],
        0..16,
    )
}

proptest! {
    #[test]
    fn genre_is_bound_verbatim(genre in ".*") {
        let table = RouteTable::default_routes();
        let matched = table.resolve(&format!("/details/{genre}")).unwrap();

        prop_assert_eq!(matched.view, ViewKind::Detail);
        prop_assert_eq!(matched.props.get("genre"), Some(genre.as_str()));
        prop_assert_eq!(matched.props.len(), 1);
    }

    #[test]
    fn root_never_carries_props(_seed in any::<u8>()) {
        let matched = RouteTable::default_routes().resolve("/").unwrap();
        prop_assert_eq!(matched.view, ViewKind::Overview);
        prop_assert!(matched.props.is_empty());
    }

    #[test]
    fn reverse_then_resolve(genre in ".*") {
        let table = RouteTable::default_routes();
        let params: Props = [("genre", genre.as_str())].into_iter().collect();

        let path = table.reverse(RouteTable::DETAIL_PLOT, &params).unwrap();
        let matched = table.resolve(&path).unwrap();
        prop_assert_eq!(matched.props, params);
    }

    #[test]
    fn set_then_read_returns_input(before in records(), after in records()) {
        let store = DetailDataStore::new();
        store.set_detail_data(before);
        store.set_detail_data(after.clone());

        prop_assert_eq!(store.detail_data(), after);
    }

    #[test]
    fn increments_accumulate(start in 0u64..64, n in 0u64..64) {
        let counter = CounterStore::new();
        for _ in 0..start {
            counter.increment();
        }
        let c = counter.count();
        for _ in 0..n {
            counter.increment();
        }

        prop_assert_eq!(counter.count(), c + n);
        prop_assert_eq!(counter.name(), "depression");
    }
}
