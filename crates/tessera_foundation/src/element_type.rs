//! The closed set of element kinds.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::external::ExternalType;

/// Identifies which variant an element is.
///
/// Mirrors [`ExternalType`] minus [`ExternalType::Datagram`]: the element model
/// has no notion of datagrams.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementType {
    /// Untyped null.
    Null,
    /// Boolean.
    Bool,
    /// Signed integer.
    Int,
    /// Binary floating point.
    Float,
    /// Arbitrary-precision decimal.
    Decimal,
    /// Point in time with precision and offset.
    Timestamp,
    /// Symbolic text.
    Symbol,
    /// Unicode text.
    String,
    /// Character large object.
    Clob,
    /// Binary large object.
    Blob,
    /// Ordered sequence.
    List,
    /// S-expression.
    Sexp,
    /// Unordered named fields.
    Struct,
}

/// Row of the classification table: `(is_text, is_container, is_lob)`.
type Classification = (bool, bool, bool);

// Indexed by declaration order.
const CLASSIFICATIONS: [Classification; 13] = [
    (false, false, false), // Null
    (false, false, false), // Bool
    (false, false, false), // Int
    (false, false, false), // Float
    (false, false, false), // Decimal
    (false, false, false), // Timestamp
    (true, false, false),  // Symbol
    (true, false, false),  // String
    (false, false, true),  // Clob
    (false, false, true),  // Blob
    (false, true, false),  // List
    (false, true, false),  // Sexp
    // Struct is not classified as a container for now; the term may be widened later.
    (false, false, false), // Struct
];

impl ElementType {
    /// Every element type, in declaration order.
    pub const ALL: [ElementType; 13] = [
        Self::Null,
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::Decimal,
        Self::Timestamp,
        Self::Symbol,
        Self::String,
        Self::Clob,
        Self::Blob,
        Self::List,
        Self::Sexp,
        Self::Struct,
    ];

    const fn classification(self) -> Classification {
        CLASSIFICATIONS[self as usize]
    }

    /// Returns true for [`ElementType::Symbol`] and [`ElementType::String`].
    #[must_use]
    pub const fn is_text(self) -> bool {
        self.classification().0
    }

    /// Returns true for [`ElementType::List`] and [`ElementType::Sexp`].
    ///
    /// [`ElementType::Struct`] is not a container under this classification.
    #[must_use]
    pub const fn is_container(self) -> bool {
        self.classification().1
    }

    /// Returns true for [`ElementType::Clob`] and [`ElementType::Blob`].
    #[must_use]
    pub const fn is_lob(self) -> bool {
        self.classification().2
    }

    /// Converts to the corresponding external type. Always succeeds.
    #[must_use]
    pub const fn to_external(self) -> ExternalType {
        match self {
            Self::Null => ExternalType::Null,
            Self::Bool => ExternalType::Bool,
            Self::Int => ExternalType::Int,
            Self::Float => ExternalType::Float,
            Self::Decimal => ExternalType::Decimal,
            Self::Timestamp => ExternalType::Timestamp,
            Self::Symbol => ExternalType::Symbol,
            Self::String => ExternalType::String,
            Self::Clob => ExternalType::Clob,
            Self::Blob => ExternalType::Blob,
            Self::List => ExternalType::List,
            Self::Sexp => ExternalType::Sexp,
            Self::Struct => ExternalType::Struct,
        }
    }

    /// Returns the lower-case name of this type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Timestamp => "timestamp",
            Self::Symbol => "symbol",
            Self::String => "string",
            Self::Clob => "clob",
            Self::Blob => "blob",
            Self::List => "list",
            Self::Sexp => "sexp",
            Self::Struct => "struct",
        }
    }
}

impl TryFrom<ExternalType> for ElementType {
    type Error = Error;

    /// Fails with [`crate::ErrorKind::UnsupportedExternalType`] for
    /// [`ExternalType::Datagram`].
    fn try_from(external: ExternalType) -> Result<Self> {
        Ok(match external {
            ExternalType::Null => Self::Null,
            ExternalType::Bool => Self::Bool,
            ExternalType::Int => Self::Int,
            ExternalType::Float => Self::Float,
            ExternalType::Decimal => Self::Decimal,
            ExternalType::Timestamp => Self::Timestamp,
            ExternalType::Symbol => Self::Symbol,
            ExternalType::String => Self::String,
            ExternalType::Clob => Self::Clob,
            ExternalType::Blob => Self::Blob,
            ExternalType::List => Self::List,
            ExternalType::Sexp => Self::Sexp,
            ExternalType::Struct => Self::Struct,
            ExternalType::Datagram => return Err(Error::unsupported_external_type(external)),
        })
    }
}

impl From<ElementType> for ExternalType {
    fn from(element_type: ElementType) -> Self {
        element_type.to_external()
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
