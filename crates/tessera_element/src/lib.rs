//! Immutable element values with structural equality and copy-on-write updates.
//!
//! This crate provides:
//! - [`Element`] - An annotated, metadata-bearing value of one [`ElementType`]
//! - [`ElementValue`] - The closed set of payloads, one per type
//! - [`StructFields`] / [`StructField`] - Persistent multi-maps for struct payloads
//! - [`RenderConfig`] - Diagnostic text rendering
//!
//! Foundation types are re-exported for convenience.
//!
//! ```
//! use tessera_element::Element;
//!
//! let list = Element::list([Element::int(1), Element::int(2)])
//!     .with_annotations(["foo"])
//!     .with_meta("line", 5i64);
//! let moved = list.with_meta("line", 6i64);
//!
//! assert_eq!(list, moved);
//! assert!(list.shares_payload(&moved));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod element;
pub mod render;
pub mod structure;

pub use element::{Element, ElementValue};
pub use render::{RenderConfig, Rendered};
pub use structure::{StructField, StructFields};

pub use tessera_foundation::{
    Annotations, Decimal, ElementType, Error, ErrorKind, ExpectedTypes, ExternalType, LtMap,
    LtVec, MetaContainer, MetaValue, Result, Timestamp, TimestampPrecision,
};
