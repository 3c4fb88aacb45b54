//! The host type-system enumeration that element types map onto.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type tag of the external reader/writer type system.
///
/// Carries one variant more than [`crate::ElementType`]: [`ExternalType::Datagram`],
/// the top-level stream of values, which has no element equivalent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExternalType {
    /// Null.
    Null,
    /// Boolean.
    Bool,
    /// Integer.
    Int,
    /// Float.
    Float,
    /// Decimal.
    Decimal,
    /// Timestamp.
    Timestamp,
    /// Symbol.
    Symbol,
    /// String.
    String,
    /// Clob.
    Clob,
    /// Blob.
    Blob,
    /// List.
    List,
    /// S-expression.
    Sexp,
    /// Struct.
    Struct,
    /// A top-level stream of values.
    Datagram,
}

impl ExternalType {
    /// Every external type, in declaration order.
    pub const ALL: [ExternalType; 14] = [
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
        Self::Datagram,
    ];
}

impl fmt::Display for ExternalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "NULL",
            Self::Bool => "BOOL",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Decimal => "DECIMAL",
            Self::Timestamp => "TIMESTAMP",
            Self::Symbol => "SYMBOL",
            Self::String => "STRING",
            Self::Clob => "CLOB",
            Self::Blob => "BLOB",
            Self::List => "LIST",
            Self::Sexp => "SEXP",
            Self::Struct => "STRUCT",
            Self::Datagram => "DATAGRAM",
        };
        f.write_str(name)
    }
}
