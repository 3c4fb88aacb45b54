//! Integration tests for persistent collections
//!
//! Tests LtVec and LtMap with structural sharing and immutability.

use tessera_foundation::{LtMap, LtVec};

// =============================================================================
// LtVec
// =============================================================================

#[test]
fn vector_empty() {
    let v: LtVec<i64> = LtVec::new();
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
    assert!(v.first().is_none());
}

#[test]
fn vector_immutability() {
    let v1 = LtVec::new().push_back(1);
    let v2 = v1.push_back(2);

    // v1 is unchanged
    assert_eq!(v1.len(), 1);
    assert_eq!(v2.len(), 2);
}

#[test]
fn vector_large_clone_shares_structure() {
    let v: LtVec<i64> = (0..1000).collect();
    let v2 = v.clone();
    assert!(v.ptr_eq(&v2));

    let v3 = v2.push_back(1000);
    assert_eq!(v.len(), 1000);
    assert_eq!(v3.len(), 1001);
    assert_eq!(v3.last(), Some(&1000));
}

#[test]
fn vector_equality_is_positional() {
    let a: LtVec<i64> = vec![1, 2].into();
    let b: LtVec<i64> = vec![2, 1].into();
    assert_ne!(a, b);
    assert_eq!(a, LtVec::from(vec![1, 2]));
}

// =============================================================================
// LtMap
// =============================================================================

#[test]
fn map_insert_remove() {
    let m = LtMap::new().insert("a", 1).insert("b", 2);
    let m2 = m.remove("a");

    assert!(m.contains_key("a"));
    assert!(!m2.contains_key("a"));
    assert_eq!(m2.len(), 1);
}

#[test]
fn map_union_other_wins() {
    let a: LtMap<&str, i64> = [("x", 1), ("y", 2)].into_iter().collect();
    let b: LtMap<&str, i64> = [("y", 3)].into_iter().collect();
    let u = a.union(&b);
    assert_eq!(u.get("y"), Some(&3));
    assert_eq!(u.get("x"), Some(&1));
}

#[test]
fn map_equality_ignores_insertion_order() {
    let a = LtMap::new().insert("a", 1).insert("b", 2);
    let b = LtMap::new().insert("b", 2).insert("a", 1);
    assert_eq!(a, b);
}
