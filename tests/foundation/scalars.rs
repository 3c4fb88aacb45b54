//! Integration tests for scalar domain types
//!
//! Tests Decimal and Timestamp identity semantics.

use std::collections::HashSet;

use tessera_foundation::{Decimal, Timestamp, TimestampPrecision};

// =============================================================================
// Decimal
// =============================================================================

#[test]
fn decimal_round_trips_through_display() {
    for text in ["123.45", "-0.005", "0.1", "42."] {
        let d: Decimal = text.parse().unwrap();
        assert_eq!(d.to_string(), text);
    }
}

#[test]
fn decimal_precision_distinguishes_hash_entries() {
    let set: HashSet<Decimal> = ["1.0", "1.00", "1.0"]
        .into_iter()
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn decimal_from_int() {
    assert_eq!(Decimal::from(7), Decimal::new(7, 0));
    assert!(Decimal::ZERO.is_zero());
}

// =============================================================================
// Timestamp
// =============================================================================

#[test]
fn timestamp_equal_requires_offset_and_precision() {
    let a = Timestamp::parse_rfc3339("2024-05-01T10:00:00Z").unwrap();
    let b = Timestamp::parse_rfc3339("2024-05-01T10:00:00Z").unwrap();
    let c = Timestamp::parse_rfc3339("2024-05-01T12:00:00+02:00").unwrap();
    let d = Timestamp::new(*a.datetime(), TimestampPrecision::Minute);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d);
}

#[test]
fn timestamp_hash_consistent() {
    let set: HashSet<Timestamp> = [
        "2024-05-01T10:00:00Z",
        "2024-05-01T10:00:00Z",
        "2024-05-01T12:00:00+02:00",
    ]
    .into_iter()
    .map(|s| Timestamp::parse_rfc3339(s).unwrap())
    .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn timestamp_offset_seconds() {
    let t = Timestamp::parse_rfc3339("2024-05-01T12:00:00+02:00").unwrap();
    assert_eq!(t.offset_seconds(), 7200);
}

#[test]
fn timestamp_invalid() {
    assert!(Timestamp::parse_rfc3339("yesterday").is_err());
}

#[test]
fn timestamp_fractional_digits_distinguish_hashes() {
    let set: HashSet<Timestamp> = ["2024-05-01T10:00:00.5Z", "2024-05-01T10:00:00.50Z"]
        .into_iter()
        .map(|s| Timestamp::parse_rfc3339(s).unwrap())
        .collect();
    assert_eq!(set.len(), 2);
}
