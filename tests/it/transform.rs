use mixed_collection::{Collection, Comparison};

use crate::helpers::{entries, k, mixed};

#[test]
fn map_appends_suffix() {
    let c = Collection::from(vec!["item1", "item2"]);
    let results = c.map(|item| format!("{}s", item));
    assert_eq!(
        entries(&results),
        vec![(k(0), "item1s".to_string()), (k(1), "item2s".to_string())]
    );
    assert_eq!(entries(&c), vec![(k(0), "item1"), (k(1), "item2")]);
}

#[test]
fn map_preserves_string_keys() {
    let c = Collection::from_entries([("foo", "bar"), ("bar", "baz")]);
    let results = c.map(|v| format!("{}s", v));
    assert_eq!(
        entries(&results),
        vec![(k("foo"), "bars".to_string()), (k("bar"), "bazs".to_string())]
    );
}

#[test]
fn filter_keeps_original_key() {
    let c = Collection::from(vec!["item1", "item2"]);
    let results = c.filter(|item| *item == "item1");
    assert_eq!(entries(&results), vec![(k(0), "item1")]);
    assert_eq!(c.count(), 2);
}

#[test]
fn filter_leaves_gaps() {
    let c = Collection::from(vec![1, 2, 3, 4]);
    let evens = c.filter(|v| v % 2 == 0);
    assert_eq!(entries(&evens), vec![(k(1), 2), (k(3), 4)]);
}

#[test]
fn chain_map_then_filter() {
    let c = Collection::from_entries([("foo", "bar"), ("bar", "baz")]);
    let results = c.map(|v| format!("{}s", v)).filter(|v| v == "bars");
    assert_eq!(entries(&results), vec![(k("foo"), "bars".to_string())]);
    assert_eq!(entries(&c), vec![(k("foo"), "bar"), (k("bar"), "baz")]);
}

#[test]
fn slice_first_three_positions() {
    let c = mixed();
    let results = c.slice(0, Some(3));
    assert_eq!(
        entries(&results),
        vec![(k(0), "item1"), (k(1), "item2"), (k("foo"), "bar")]
    );
    assert_eq!(c.count(), 4);
}

#[test]
fn slice_out_of_range_is_empty() {
    let c = mixed();
    assert!(c.slice(4, None).is_empty());
    assert!(c.slice(100, Some(2)).is_empty());
    assert_eq!(c.slice(2, Some(100)).count(), 2);
}

#[test]
fn slice_negative_bounds() {
    let c = mixed();
    assert_eq!(entries(&c.slice(-2, None)), vec![(k("foo"), "bar"), (k(2), "item3")]);
    assert_eq!(entries(&c.slice(0, Some(-3))), vec![(k(0), "item1")]);
}

#[test]
fn contains_searches_values_not_keys() {
    let c = Collection::from_entries([(k(0), "item1"), (k("foo"), "bar")]);
    assert!(c.contains(&"bar"));
    assert!(!c.contains(&"baz"));
    assert!(!c.contains(&"foo"));
    assert!(c.contains_with(&"item1", Comparison::Strict));
}
