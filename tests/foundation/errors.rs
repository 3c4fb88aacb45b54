//! Integration tests for Error types
//!
//! Tests error construction, display and error kinds.

use tessera_foundation::{ElementType, Error, ErrorKind, ExpectedTypes, ExternalType};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_wrong_variant() {
    let err = Error::wrong_variant(ExpectedTypes::INT, ElementType::String);
    assert!(matches!(err.kind, ErrorKind::WrongVariantAccess { .. }));
}

#[test]
fn error_unsupported_external_type() {
    let err = Error::unsupported_external_type(ExternalType::Datagram);
    assert!(matches!(err.kind, ErrorKind::UnsupportedExternalType(_)));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_single_expected() {
    let err = Error::wrong_variant(ExpectedTypes::STRUCT, ElementType::List);
    assert_eq!(
        format!("{err}"),
        "wrong element type: expected struct, got list"
    );
}

#[test]
fn error_display_family_expected() {
    let err = Error::wrong_variant(ExpectedTypes::LOB, ElementType::Int);
    let msg = format!("{err}");
    assert!(msg.contains("clob or blob"));
    assert!(msg.contains("int"));
}

#[test]
fn error_display_datagram() {
    let err = Error::unsupported_external_type(ExternalType::Datagram);
    assert!(format!("{err}").contains("DATAGRAM"));
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::unsupported_external_type(ExternalType::Datagram));
}
