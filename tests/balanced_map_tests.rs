//! Integration tests for `BalancedMap`.
//!
//! Exercises the public surface only: construction, insertion semantics,
//! lookups, balance behavior observable through `height`, and the
//! diagnostic rendering.

use baltree::ordered::{BalancedMap, NotFoundError};
use rstest::rstest;
use std::collections::BTreeMap;
use std::error::Error;

/// Worst-case AVL height (in levels) for `count` entries.
fn avl_height_bound(count: usize) -> u32 {
    let entries = count as f64;
    (1.44 * (entries + 2.0).log2() - 0.328).ceil() as u32
}

/// Deterministic pseudo-random key stream, seeded per test.
fn scrambled_keys(seed: u64, count: usize) -> Vec<i64> {
    let mut state = seed | 1;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 33) as i64
        })
        .collect()
}

// =============================================================================
// Basic Construction Tests
// =============================================================================

#[rstest]
fn test_new_map_is_empty() {
    let map: BalancedMap<i32, String> = BalancedMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.height(), 0);
}

#[rstest]
fn test_default_map_is_empty() {
    let map: BalancedMap<i32, String> = BalancedMap::default();
    assert!(map.is_empty());
}

#[rstest]
fn test_insert_makes_map_non_empty() {
    let mut map = BalancedMap::new();
    assert!(map.insert(1, "one"));
    assert!(!map.is_empty());
    assert_eq!(map.len(), 1);
    assert_eq!(map.height(), 1);
}

// =============================================================================
// Insert Semantics Tests
// =============================================================================

#[rstest]
fn test_insert_reports_duplicates_without_overwriting() {
    let mut map = BalancedMap::new();
    assert!(map.insert(7, "kept"));
    assert!(!map.insert(7, "dropped"));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&7), Some(&"kept"));
}

#[rstest]
fn test_duplicate_insert_does_not_disturb_other_entries() {
    let mut map: BalancedMap<i32, i32> = (0..32).map(|key| (key, key * 3)).collect();
    assert!(!map.insert(16, -1));
    for key in 0..32 {
        assert_eq!(map.get(&key), Some(&(key * 3)));
    }
}

#[rstest]
fn test_from_iterator_keeps_first_occurrence_of_a_key() {
    let map: BalancedMap<&str, i32> = [("a", 1), ("b", 2), ("a", 99)].into_iter().collect();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("a"), Some(&1));
}

#[rstest]
fn test_extend_skips_existing_keys() {
    let mut map: BalancedMap<i32, &str> = [(1, "one")].into_iter().collect();
    map.extend([(1, "ONE"), (2, "two"), (3, "three")]);
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&1), Some(&"one"));
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[rstest]
fn test_round_trip_for_every_inserted_key() {
    let mut map = BalancedMap::new();
    for key in [50, 20, 70, 10, 30, 60, 80] {
        assert!(map.insert(key, key * 10));
    }
    for key in [50, 20, 70, 10, 30, 60, 80] {
        assert_eq!(map.get(&key), Some(&(key * 10)));
        assert_eq!(map.search(&key), Ok(&(key * 10)));
        assert!(map.contains_key(&key));
    }
}

#[rstest]
fn test_search_fails_with_not_found_on_empty_map() {
    let map: BalancedMap<i32, i32> = BalancedMap::new();
    assert_eq!(map.search(&1), Err(NotFoundError));
}

#[rstest]
fn test_search_fails_with_not_found_for_absent_key() {
    let mut map = BalancedMap::new();
    map.insert(1, "one");
    assert_eq!(map.search(&2), Err(NotFoundError));
}

#[rstest]
fn test_not_found_error_is_a_std_error() {
    let map: BalancedMap<i32, i32> = BalancedMap::new();
    let error = map.search(&1).expect_err("lookup on empty map fails");
    assert_eq!(error.to_string(), "key not found in map");
    assert!(error.source().is_none());
}

#[rstest]
fn test_lookup_with_borrowed_key_form() {
    let mut map = BalancedMap::new();
    map.insert("alpha".to_string(), 1);
    map.insert("beta".to_string(), 2);
    assert_eq!(map.get("alpha"), Some(&1));
    assert!(map.contains_key("beta"));
    assert_eq!(map.search("gamma"), Err(NotFoundError));
}

#[rstest]
fn test_get_mut_changes_only_the_payload() {
    let mut map = BalancedMap::new();
    map.insert(1, String::from("before"));
    if let Some(value) = map.get_mut(&1) {
        *value = String::from("after");
    }
    assert_eq!(map.get(&1).map(String::as_str), Some("after"));
    assert_eq!(map.len(), 1);
}

#[rstest]
fn test_indexing_reads_and_writes_existing_entries() {
    let mut map = BalancedMap::new();
    map.insert(1, 10);
    assert_eq!(map[&1], 10);
    map[&1] = 11;
    assert_eq!(map[&1], 11);
}

#[rstest]
#[should_panic(expected = "key not found in map")]
fn test_indexing_panics_for_absent_key() {
    let map: BalancedMap<i32, i32> = BalancedMap::new();
    let _ = map[&1];
}

// =============================================================================
// Balance Behavior Tests
// =============================================================================

#[rstest]
fn test_three_ascending_keys_settle_at_height_two() {
    let mut map = BalancedMap::new();
    for key in [10, 20, 30] {
        map.insert(key, ());
    }
    assert_eq!(map.height(), 2);
}

#[rstest]
fn test_left_right_and_right_left_cases_settle_at_height_two() {
    let left_right: BalancedMap<i32, ()> = [30, 10, 20].into_iter().map(|key| (key, ())).collect();
    let right_left: BalancedMap<i32, ()> = [10, 30, 20].into_iter().map(|key| (key, ())).collect();
    assert_eq!(left_right.height(), 2);
    assert_eq!(right_left.height(), 2);
    assert_eq!(left_right.render(), right_left.render());
}

#[rstest]
fn test_thousand_sequential_inserts_hold_the_height_bound() {
    let mut map = BalancedMap::new();
    for key in 0..1000_i64 {
        assert!(map.insert(key, key + 1));
    }

    assert_eq!(map.len(), 1000);
    assert!(
        map.height() <= avl_height_bound(1000),
        "height {} exceeds AVL bound {}",
        map.height(),
        avl_height_bound(1000)
    );

    for key in 0..1000_i64 {
        assert_eq!(map.search(&key), Ok(&(key + 1)));
    }
    assert_eq!(map.search(&-1), Err(NotFoundError));
    assert_eq!(map.search(&1000), Err(NotFoundError));
}

#[rstest]
fn test_reverse_sequential_inserts_hold_the_height_bound() {
    let mut map = BalancedMap::new();
    for key in (0..1000_i64).rev() {
        assert!(map.insert(key, key));
    }
    assert!(map.height() <= avl_height_bound(1000));
}

#[rstest]
#[case(0xDEAD_BEEF)]
#[case(0x0BAD_CAFE)]
#[case(42)]
fn test_scrambled_inserts_agree_with_reference_model(#[case] seed: u64) {
    let keys = scrambled_keys(seed, 500);
    let mut map = BalancedMap::new();
    let mut reference = BTreeMap::new();

    for (position, key) in keys.iter().enumerate() {
        let inserted = map.insert(*key, position);
        assert_eq!(inserted, !reference.contains_key(key));
        reference.entry(*key).or_insert(position);
    }

    assert_eq!(map.len(), reference.len());
    assert!(map.height() <= avl_height_bound(map.len()));
    for (key, value) in &reference {
        assert_eq!(map.get(key), Some(value));
    }
}

#[rstest]
fn test_clear_then_reuse() {
    let mut map: BalancedMap<i64, i64> = (0..256).map(|key| (key, key)).collect();
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.search(&0), Err(NotFoundError));

    for key in (0..256_i64).rev() {
        assert!(map.insert(key, -key));
    }
    assert_eq!(map.len(), 256);
    assert_eq!(map.get(&255), Some(&-255));
}

// =============================================================================
// Diagnostic Rendering Tests
// =============================================================================

#[rstest]
fn test_render_empty_map_is_empty_string() {
    let map: BalancedMap<i32, ()> = BalancedMap::new();
    assert_eq!(map.render(), "");
}

#[rstest]
fn test_render_puts_right_subtree_above_and_indents_by_depth() {
    let map: BalancedMap<i32, ()> = [2, 1, 3].into_iter().map(|key| (key, ())).collect();
    assert_eq!(map.render(), "  3\n2\n  1\n");
}

#[rstest]
fn test_render_lists_every_key_exactly_once() {
    let keys = scrambled_keys(7, 300);
    let map: BalancedMap<i64, ()> = keys.iter().map(|key| (*key, ())).collect();

    let rendered = map.render();
    assert_eq!(rendered.lines().count(), map.len());
    for key in &keys {
        assert!(rendered.lines().any(|line| line.trim() == key.to_string()));
    }
}

#[rstest]
fn test_display_is_the_diagnostic_rendering() {
    let map: BalancedMap<i32, ()> = [4, 2, 6].into_iter().map(|key| (key, ())).collect();
    assert_eq!(format!("{map}"), map.render());
}

// =============================================================================
// Equality and Debug Tests
// =============================================================================

#[rstest]
fn test_maps_with_same_entries_are_equal_regardless_of_order() {
    let ascending: BalancedMap<i32, i32> = (0..64).map(|key| (key, key)).collect();
    let descending: BalancedMap<i32, i32> = (0..64).rev().map(|key| (key, key)).collect();
    assert_eq!(ascending, descending);
}

#[rstest]
fn test_debug_output_is_sorted_by_key() {
    let map: BalancedMap<i32, &str> = [(2, "two"), (1, "one")].into_iter().collect();
    assert_eq!(format!("{map:?}"), r#"{1: "one", 2: "two"}"#);
}
