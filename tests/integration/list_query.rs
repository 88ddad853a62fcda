//! List queries through the public API.

use travelkit::catalog::{Catalog, RoomKind, TheaterKind};
use travelkit::query::{
    apply, apply_by, apply_with, partition_by_category, FilterPredicate, FoldingStrategy,
    NamedRecord, Query, SortOrder,
};

fn named(name: &str) -> NamedRecord<(), i32> {
    NamedRecord::new(name, 0, ())
}

fn names<C, K>(records: &[NamedRecord<C, K>]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_all_without_order_is_unchanged() {
    let records = vec![named("c"), named("a"), named("b")];
    assert_eq!(apply(&records, &FilterPredicate::All, None), records);
}

#[test]
fn test_empty_search_equals_all() {
    let catalog = Catalog::sample();
    assert_eq!(
        apply(&catalog.chat_rooms, &FilterPredicate::ByNameSubstring(String::new()), None),
        apply(&catalog.chat_rooms, &FilterPredicate::All, None)
    );
}

#[test]
fn test_case_insensitive_search() {
    let records = vec![named("Alpha"), named("beta")];
    let result = apply(&records, &FilterPredicate::ByNameSubstring("A".to_string()), None);
    assert_eq!(names(&result), vec!["Alpha", "beta"]);
}

#[test]
fn test_by_category_subset() {
    let catalog = Catalog::sample();
    let megabox = apply(
        &catalog.theaters,
        &FilterPredicate::ByCategory(TheaterKind::Megabox),
        None,
    );
    let expected: Vec<_> = catalog
        .theaters
        .iter()
        .filter(|t| t.kind == TheaterKind::Megabox)
        .cloned()
        .collect();
    assert_eq!(megabox, expected);
}

#[test]
fn test_recency_descending_and_stable() {
    let records = vec![
        NamedRecord::new("first", 1, 'x'),
        NamedRecord::new("third", 3, 'x'),
        NamedRecord::new("second-a", 2, 'x'),
        NamedRecord::new("second-b", 2, 'y'),
    ];
    let sorted = apply(&records, &FilterPredicate::All, Some(SortOrder::Recency));
    let keys: Vec<i32> = sorted.iter().map(|r| r.sort_key).collect();
    assert_eq!(keys, vec![3, 2, 2, 1]);
    assert_eq!(names(&sorted), vec!["third", "second-a", "second-b", "first"]);
}

#[test]
fn test_idempotent_predicates() {
    let catalog = Catalog::sample();
    for predicate in [
        FilterPredicate::All,
        FilterPredicate::ByCategory(TheaterKind::Cgv),
        FilterPredicate::ByNameSubstring("cgv".to_string()),
    ] {
        let once = apply(&catalog.theaters, &predicate, None);
        let twice = apply(&once, &predicate, None);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_korean_search_on_rooms() {
    let catalog = Catalog::sample();
    let result = apply(
        &catalog.chat_rooms,
        &FilterPredicate::ByNameSubstring("메이트".to_string()),
        None,
    );
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].kind(), RoomKind::Group);
}

#[test]
fn test_folding_strategies_differ_on_full_width() {
    let records = vec![named("CGV 용산")];
    let predicate = FilterPredicate::ByNameSubstring("\u{FF43}\u{FF47}\u{FF56}".to_string());
    assert_eq!(
        apply_with(&records, &predicate, None, FoldingStrategy::Normalized).len(),
        1
    );
    assert!(apply_with(&records, &predicate, None, FoldingStrategy::Lowercase).is_empty());
}

#[test]
fn test_apply_by_comparator() {
    let catalog = Catalog::sample();
    let by_latitude = apply_by(&catalog.theaters, &FilterPredicate::All, |a, b| {
        b.latitude.total_cmp(&a.latitude)
    });
    assert!(by_latitude
        .windows(2)
        .all(|w| w[0].latitude >= w[1].latitude));
}

#[test]
fn test_query_builder_on_rooms() {
    let catalog = Catalog::sample();
    let query = Query::builder().by_name("e").recent().limit(3).build();
    let rooms = query.run(&catalog.chat_rooms);
    let ids: Vec<u32> = rooms.iter().map(|r| r.id).collect();
    // Only "Hue" and "Den" contain an e; "Den" has no chats so it sorts last.
    assert_eq!(ids, vec![1, 5]);
}

#[test]
fn test_partition_matches_category_filters() {
    let catalog = Catalog::sample();
    let buckets = partition_by_category(&catalog.theaters);
    for kind in TheaterKind::ALL {
        let filtered = apply(&catalog.theaters, &FilterPredicate::ByCategory(kind), None);
        assert_eq!(buckets[&kind], filtered);
    }
    let total: usize = buckets.values().map(Vec::len).sum();
    assert_eq!(total, catalog.theaters.len());
}
