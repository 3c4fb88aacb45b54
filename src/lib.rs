//! Tessera - Immutable element model for a self-describing hierarchical data format
//!
//! This crate re-exports all layers of the Tessera system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: tessera_element    — Element, payload variants, equality, rendering
//! Layer 0: tessera_foundation — ElementType, errors, persistent collections,
//!                               annotations, metas, scalar domain types
//! ```

pub use tessera_element as element;
pub use tessera_foundation as foundation;

pub use tessera_element::{
    Element, ElementType, ElementValue, Error, ErrorKind, ExternalType, StructField,
    StructFields,
};
