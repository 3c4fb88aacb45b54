//! Integration tests for struct elements
//!
//! Tests multi-map lookup and order-independent, multiset-exact equality.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tessera::{Element, StructField};

fn hash_of(e: &Element) -> u64 {
    let mut hasher = DefaultHasher::new();
    e.hash(&mut hasher);
    hasher.finish()
}

fn st(fields: &[(&str, i64)]) -> Element {
    Element::structure(fields.iter().map(|&(n, v)| StructField::new(n, v)))
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn repeated_fields_order_independent() {
    assert_eq!(st(&[("a", 1), ("a", 2)]), st(&[("a", 2), ("a", 1)]));
    assert_eq!(
        hash_of(&st(&[("a", 1), ("a", 2)])),
        hash_of(&st(&[("a", 2), ("a", 1)]))
    );
}

#[test]
fn repeated_fields_multiset_exact() {
    assert_ne!(st(&[("a", 1), ("a", 2)]), st(&[("a", 1), ("a", 1)]));
    assert_ne!(st(&[("a", 1), ("a", 2)]), st(&[("a", 1)]));
    assert_ne!(st(&[("a", 1)]), st(&[("a", 1), ("a", 2)]));
}

#[test]
fn distinct_fields_order_independent() {
    let a = st(&[("x", 1), ("y", 2), ("z", 3)]);
    let b = st(&[("z", 3), ("x", 1), ("y", 2)]);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn field_names_must_match() {
    assert_ne!(st(&[("x", 1)]), st(&[("y", 1)]));
    assert_ne!(st(&[("x", 1), ("x", 1)]), st(&[("x", 1), ("y", 1)]));
}

#[test]
fn empty_structs_equal() {
    assert_eq!(Element::structure([]), Element::structure([]));
    assert_ne!(Element::structure([]), st(&[("a", 1)]));
}

#[test]
fn nested_struct_values_compared_structurally() {
    let inner = |n: i64| Element::structure([StructField::new("n", n)]);
    let a = Element::structure([
        StructField::new("child", inner(1)),
        StructField::new("child", inner(2)),
    ]);
    let b = Element::structure([
        StructField::new("child", inner(2)),
        StructField::new("child", inner(1).with_meta("line", 4i64)),
    ]);
    assert_eq!(a, b);
}

#[test]
fn field_value_annotations_matter() {
    let a = Element::structure([StructField::new("a", Element::int(1).with_annotation("t"))]);
    let b = Element::structure([StructField::new("a", Element::int(1))]);
    assert_ne!(a, b);
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn get_returns_first_in_insertion_order() {
    let s = st(&[("a", 10), ("b", 20), ("a", 30)]);
    let fields = s.struct_fields().unwrap();
    assert_eq!(fields.get("a"), Some(&Element::int(10)));
    assert_eq!(
        fields.get_all("a").cloned().collect::<Vec<_>>(),
        vec![Element::int(10), Element::int(30)]
    );
    assert!(fields.contains_field("b"));
    assert!(!fields.contains_field("c"));
}

#[test]
fn field_names_are_distinct() {
    let s = st(&[("a", 1), ("b", 2), ("a", 3)]);
    let mut names: Vec<_> = s.struct_fields().unwrap().field_names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn values_in_insertion_order() {
    let s = st(&[("b", 2), ("a", 1)]);
    let values: Vec<_> = s.struct_fields().unwrap().values().cloned().collect();
    assert_eq!(values, vec![Element::int(2), Element::int(1)]);
}

#[test]
fn with_field_builds_new_struct() {
    let s = st(&[("a", 1)]);
    let fields = s.struct_fields().unwrap().with_field(StructField::new("b", 2i64));
    let t = Element::new(tessera::ElementValue::Struct(fields));

    assert_eq!(t, st(&[("a", 1), ("b", 2)]));
    assert_eq!(s.struct_fields().unwrap().len(), 1);
}

#[test]
fn struct_field_from_tuple() {
    let field: StructField = ("k", Element::bool(true)).into();
    assert_eq!(field.name(), "k");
    assert_eq!(field.value().as_bool(), Ok(true));
}
