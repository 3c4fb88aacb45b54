//! Integration tests for Layer 1: Element
//!
//! Tests for element construction, structural equality and hashing,
//! copy-on-write transformations, typed accessors and rendering.

mod accessors;
mod structs;
