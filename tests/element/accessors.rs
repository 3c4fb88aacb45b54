//! Integration tests for typed accessors
//!
//! Tests payload extraction and wrong-variant failures.

use bytes::Bytes;
use chrono::{FixedOffset, TimeZone};
use tessera::element::{Decimal, ExpectedTypes, Timestamp, TimestampPrecision};
use tessera::{Element, ElementType, ErrorKind, StructField};

fn one_of_each() -> Vec<Element> {
    let instant = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2020, 1, 2, 3, 4, 5)
        .unwrap();
    vec![
        Element::null(),
        Element::bool(false),
        Element::int(7),
        Element::float(0.5),
        Element::decimal(Decimal::new(5, -1)),
        Element::timestamp(Timestamp::new(instant, TimestampPrecision::Second)),
        Element::symbol("sym"),
        Element::string("str"),
        Element::clob(Bytes::from_static(b"clob")),
        Element::blob(Bytes::from_static(b"\x00\x01")),
        Element::list([Element::int(1)]),
        Element::sexp([Element::symbol("f")]),
        Element::structure([StructField::new("a", 1i64)]),
    ]
}

// =============================================================================
// Matching Accessors
// =============================================================================

#[test]
fn one_element_per_type() {
    let types: Vec<_> = one_of_each().iter().map(Element::element_type).collect();
    assert_eq!(types, ElementType::ALL.to_vec());
}

#[test]
fn scalar_payloads() {
    let all = one_of_each();
    assert!(all[0].is_null());
    assert_eq!(all[1].as_bool(), Ok(false));
    assert_eq!(all[2].as_int(), Ok(7));
    assert_eq!(all[3].as_float(), Ok(0.5));
    assert_eq!(all[4].as_decimal(), Ok(Decimal::new(5, -1)));
    assert_eq!(
        all[5].as_timestamp().unwrap().precision(),
        TimestampPrecision::Second
    );
    assert_eq!(all[6].as_symbol(), Ok("sym"));
    assert_eq!(all[7].as_string(), Ok("str"));
    assert_eq!(all[8].as_clob().unwrap().as_ref(), b"clob");
    assert_eq!(all[9].as_blob().unwrap().len(), 2);
}

#[test]
fn family_accessors() {
    let all = one_of_each();
    assert_eq!(all[6].as_text(), Ok("sym"));
    assert_eq!(all[7].as_text(), Ok("str"));
    assert!(all[8].as_bytes().is_ok());
    assert!(all[9].as_bytes().is_ok());
    assert_eq!(all[10].seq_values().unwrap().len(), 1);
    assert_eq!(all[11].seq_values().unwrap().len(), 1);
    assert_eq!(all[12].struct_fields().unwrap().len(), 1);
}

// =============================================================================
// Wrong Variant Access
// =============================================================================

#[test]
fn seq_values_on_bool_fails() {
    let err = Element::bool(true).seq_values().unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::WrongVariantAccess {
            expected: ExpectedTypes::SEQ,
            actual: ElementType::Bool,
        }
    );
    assert_eq!(err.to_string(), "wrong element type: expected list or sexp, got bool");
}

#[test]
fn struct_is_not_a_sequence() {
    let err = Element::structure([]).seq_values().unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::WrongVariantAccess {
            actual: ElementType::Struct,
            ..
        }
    ));
}

#[test]
fn every_mismatch_reports_actual_type() {
    for e in one_of_each() {
        let actual = e.element_type();
        let results = [
            (ElementType::Bool, e.as_bool().err()),
            (ElementType::Int, e.as_int().err()),
            (ElementType::Float, e.as_float().err()),
            (ElementType::Decimal, e.as_decimal().err()),
            (ElementType::Timestamp, e.as_timestamp().err()),
            (ElementType::String, e.as_string().err()),
            (ElementType::Symbol, e.as_symbol().err()),
            (ElementType::Clob, e.as_clob().err()),
            (ElementType::Blob, e.as_blob().err()),
            (ElementType::List, e.list_values().err()),
            (ElementType::Sexp, e.sexp_values().err()),
            (ElementType::Struct, e.struct_fields().err()),
        ];
        for (accessor_type, err) in results {
            match err {
                None => assert_eq!(accessor_type, actual),
                Some(err) => match err.kind {
                    ErrorKind::WrongVariantAccess {
                        expected,
                        actual: reported,
                    } => {
                        assert_eq!(reported, actual);
                        assert!(expected.contains(accessor_type));
                        assert!(!expected.contains(actual));
                    }
                    other => panic!("unexpected error kind: {other:?}"),
                },
            }
        }
    }
}
