//! Integration tests for persistent collections.

use dohmane::foundation::{DmMap, DmVec};

// =============================================================================
// DmMap
// =============================================================================

#[test]
fn map_mutations_return_new_values() {
    let m1: DmMap<&str, i32> = DmMap::new();
    let m2 = m1.insert("a", 1);
    let m3 = m2.remove("a");

    assert!(m1.is_empty());
    assert_eq!(m2.len(), 1);
    assert!(m3.is_empty());
}

#[test]
fn map_equality_ignores_insertion_order() {
    let m1 = DmMap::new().insert(1, "a").insert(2, "b").insert(3, "c");
    let m2 = DmMap::new().insert(3, "c").insert(1, "a").insert(2, "b");
    assert_eq!(m1, m2);
}

#[test]
fn map_iteration_covers_all_entries() {
    let m: DmMap<i32, i32> = (0..100).map(|n| (n, n * 2)).collect();
    assert_eq!(m.len(), 100);
    assert_eq!(m.values().count(), 100);
    for (k, v) in m.iter() {
        assert_eq!(*v, k * 2);
    }
}

// =============================================================================
// DmVec
// =============================================================================

#[test]
fn vec_push_is_persistent() {
    let v1: DmVec<i32> = DmVec::new();
    let v2 = v1.push_back(1);

    assert!(v1.is_empty());
    assert_eq!(v2.get(0), Some(&1));
}

#[test]
fn vec_preserves_order() {
    let v: DmVec<i32> = (0..10).collect();
    let items: Vec<_> = v.iter().copied().collect();
    assert_eq!(items, (0..10).collect::<Vec<_>>());
}
