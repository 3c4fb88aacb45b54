//! Error types for the Tessera element model.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::element_type::ElementType;
use crate::external::ExternalType;

/// Result alias used throughout Tessera.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Tessera operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a wrong variant access error.
    #[must_use]
    pub fn wrong_variant(expected: ExpectedTypes, actual: ElementType) -> Self {
        tracing::debug!(%expected, %actual, "element accessor called on wrong variant");
        Self::new(ErrorKind::WrongVariantAccess { expected, actual })
    }

    /// Creates an unsupported external type error.
    #[must_use]
    pub fn unsupported_external_type(external: ExternalType) -> Self {
        tracing::debug!(%external, "external type has no element equivalent");
        Self::new(ErrorKind::UnsupportedExternalType(external))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A typed accessor was invoked on an element of another type.
    #[error("wrong element type: expected {expected}, got {actual}")]
    WrongVariantAccess {
        /// The types the accessor accepts.
        expected: ExpectedTypes,
        /// The type of the element it was invoked on.
        actual: ElementType,
    },

    /// An external type has no element equivalent.
    #[error("unsupported external type: {0} has no element type equivalent")]
    UnsupportedExternalType(ExternalType),
}

/// The set of element types an accessor accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExpectedTypes(&'static [ElementType]);

impl ExpectedTypes {
    /// Only bool.
    pub const BOOL: Self = Self(&[ElementType::Bool]);
    /// Only int.
    pub const INT: Self = Self(&[ElementType::Int]);
    /// Only float.
    pub const FLOAT: Self = Self(&[ElementType::Float]);
    /// Only decimal.
    pub const DECIMAL: Self = Self(&[ElementType::Decimal]);
    /// Only timestamp.
    pub const TIMESTAMP: Self = Self(&[ElementType::Timestamp]);
    /// Only symbol.
    pub const SYMBOL: Self = Self(&[ElementType::Symbol]);
    /// Only string.
    pub const STRING: Self = Self(&[ElementType::String]);
    /// Symbol or string.
    pub const TEXT: Self = Self(&[ElementType::Symbol, ElementType::String]);
    /// Only clob.
    pub const CLOB: Self = Self(&[ElementType::Clob]);
    /// Only blob.
    pub const BLOB: Self = Self(&[ElementType::Blob]);
    /// Clob or blob.
    pub const LOB: Self = Self(&[ElementType::Clob, ElementType::Blob]);
    /// Only list.
    pub const LIST: Self = Self(&[ElementType::List]);
    /// Only sexp.
    pub const SEXP: Self = Self(&[ElementType::Sexp]);
    /// List or sexp.
    pub const SEQ: Self = Self(&[ElementType::List, ElementType::Sexp]);
    /// Only struct.
    pub const STRUCT: Self = Self(&[ElementType::Struct]);

    /// Returns the accepted types.
    #[must_use]
    pub const fn types(self) -> &'static [ElementType] {
        self.0
    }

    /// Returns true if `element_type` is accepted.
    #[must_use]
    pub fn contains(self, element_type: ElementType) -> bool {
        self.0.contains(&element_type)
    }
}

impl fmt::Display for ExpectedTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, t) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " or ")?;
            }
            write!(f, "{t}")?;
        }
        Ok(())
    }
}
