//! Integration tests for KeyPath.

use dohmane::foundation::KeyPath;

#[test]
fn construction_forms_agree() {
    let from_array = KeyPath::from(["a", "b"]);
    let from_new = KeyPath::new(["a", "b"]);
    assert_eq!(from_array, from_new);
}

#[test]
fn single_segment_from_str() {
    let path = KeyPath::from("account_id");
    assert_eq!(path.len(), 1);
    assert_eq!(path.to_string(), "account_id");
}

#[test]
fn display_joins_with_dots() {
    assert_eq!(KeyPath::from(["meta", "id"]).to_string(), "meta.id");
}

#[test]
fn paths_are_hashable_map_keys() {
    use std::collections::HashMap;

    let mut m = HashMap::new();
    m.insert(KeyPath::from(["id"]), 1);
    assert_eq!(m.get(&KeyPath::from(["id"])), Some(&1));
}
