//! Type tags, errors, persistent collections, annotations and metadata for Tessera.
//!
//! This crate provides:
//! - [`ElementType`] - The closed set of element kinds and their classifications
//! - [`ExternalType`] - The host type-system enumeration and its mapping
//! - [`Error`] - Rich error types for accessor and conversion failures
//! - Persistent collections ([`LtVec`], [`LtMap`])
//! - [`Annotations`] and [`MetaContainer`] - The identity and side-channel planes
//! - Scalar domain types ([`Decimal`], [`Timestamp`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod annotations;
pub mod collections;
pub mod decimal;
pub mod element_type;
pub mod error;
pub mod external;
pub mod meta;
pub mod timestamp;

pub use annotations::Annotations;
pub use collections::{LtMap, LtVec};
pub use decimal::{Decimal, ParseDecimalError};
pub use element_type::ElementType;
pub use error::{Error, ErrorKind, ExpectedTypes, Result};
pub use external::ExternalType;
pub use meta::{MetaContainer, MetaValue};
pub use timestamp::{Timestamp, TimestampPrecision};
