//! The element value type.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use bytes::Bytes;
use tessera_foundation::{
    Annotations, Decimal, ElementType, Error, ExpectedTypes, LtVec, MetaContainer, MetaValue,
    Result, Timestamp,
};

use crate::structure::{StructField, StructFields};

/// The payload of an element, one variant per [`ElementType`].
#[derive(Clone)]
pub enum ElementValue {
    /// Untyped null.
    Null,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float, compared by bit pattern.
    Float(f64),
    /// Decimal with significant precision.
    Decimal(Decimal),
    /// Timestamp with offset and precision.
    Timestamp(Timestamp),
    /// Symbol text.
    Symbol(Arc<str>),
    /// String text.
    String(Arc<str>),
    /// Character large object.
    Clob(Bytes),
    /// Binary large object.
    Blob(Bytes),
    /// Persistent list of children.
    List(LtVec<Element>),
    /// Persistent s-expression of children.
    Sexp(LtVec<Element>),
    /// Persistent multi-map of named children.
    Struct(StructFields),
}

impl ElementValue {
    /// Returns the type tag of this payload.
    #[must_use]
    pub const fn element_type(&self) -> ElementType {
        match self {
            Self::Null => ElementType::Null,
            Self::Bool(_) => ElementType::Bool,
            Self::Int(_) => ElementType::Int,
            Self::Float(_) => ElementType::Float,
            Self::Decimal(_) => ElementType::Decimal,
            Self::Timestamp(_) => ElementType::Timestamp,
            Self::Symbol(_) => ElementType::Symbol,
            Self::String(_) => ElementType::String,
            Self::Clob(_) => ElementType::Clob,
            Self::Blob(_) => ElementType::Blob,
            Self::List(_) => ElementType::List,
            Self::Sexp(_) => ElementType::Sexp,
            Self::Struct(_) => ElementType::Struct,
        }
    }
}

// Implement PartialEq manually to handle float comparison
impl PartialEq for ElementValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Decimal(a), Self::Decimal(b)) => a == b,
            (Self::Timestamp(a), Self::Timestamp(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) | (Self::String(a), Self::String(b)) => a == b,
            (Self::Clob(a), Self::Clob(b)) | (Self::Blob(a), Self::Blob(b)) => a == b,
            (Self::List(a), Self::List(b)) | (Self::Sexp(a), Self::Sexp(b)) => a == b,
            (Self::Struct(a), Self::Struct(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ElementValue {}

impl Hash for ElementValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::Decimal(d) => d.hash(state),
            Self::Timestamp(t) => t.hash(state),
            Self::Symbol(s) | Self::String(s) => s.hash(state),
            Self::Clob(b) | Self::Blob(b) => b.hash(state),
            Self::List(v) | Self::Sexp(v) => v.hash(state),
            Self::Struct(s) => s.hash(state),
        }
    }
}

/// An immutable, annotated, metadata-bearing value.
///
/// Cloning is O(1): the payload is shared, and annotations and metas are
/// persistent collections. Every `with_*` operation returns a new element
/// sharing the payload of the original, which stays valid and unchanged.
///
/// Equality and hashing cover the type, the annotations (in order) and the
/// payload. Metas are never consulted.
#[derive(Clone)]
pub struct Element {
    annotations: Annotations,
    metas: MetaContainer,
    value: Arc<ElementValue>,
}

impl Element {
    /// Creates an element with no annotations and no metas.
    #[must_use]
    pub fn new(value: ElementValue) -> Self {
        Self {
            annotations: Annotations::new(),
            metas: MetaContainer::new(),
            value: Arc::new(value),
        }
    }

    /// Creates a null element.
    #[must_use]
    pub fn null() -> Self {
        Self::new(ElementValue::Null)
    }

    /// Creates a bool element.
    #[must_use]
    pub fn bool(value: bool) -> Self {
        Self::new(ElementValue::Bool(value))
    }

    /// Creates an int element.
    #[must_use]
    pub fn int(value: i64) -> Self {
        Self::new(ElementValue::Int(value))
    }

    /// Creates a float element.
    #[must_use]
    pub fn float(value: f64) -> Self {
        Self::new(ElementValue::Float(value))
    }

    /// Creates a decimal element.
    #[must_use]
    pub fn decimal(value: Decimal) -> Self {
        Self::new(ElementValue::Decimal(value))
    }

    /// Creates a timestamp element.
    #[must_use]
    pub fn timestamp(value: Timestamp) -> Self {
        Self::new(ElementValue::Timestamp(value))
    }

    /// Creates a symbol element.
    #[must_use]
    pub fn symbol(text: impl Into<Arc<str>>) -> Self {
        Self::new(ElementValue::Symbol(text.into()))
    }

    /// Creates a string element.
    #[must_use]
    pub fn string(text: impl Into<Arc<str>>) -> Self {
        Self::new(ElementValue::String(text.into()))
    }

    /// Creates a clob element.
    #[must_use]
    pub fn clob(bytes: impl Into<Bytes>) -> Self {
        Self::new(ElementValue::Clob(bytes.into()))
    }

    /// Creates a blob element.
    #[must_use]
    pub fn blob(bytes: impl Into<Bytes>) -> Self {
        Self::new(ElementValue::Blob(bytes.into()))
    }

    /// Creates a list element.
    #[must_use]
    pub fn list(values: impl IntoIterator<Item = Element>) -> Self {
        Self::new(ElementValue::List(values.into_iter().collect()))
    }

    /// Creates an s-expression element.
    #[must_use]
    pub fn sexp(values: impl IntoIterator<Item = Element>) -> Self {
        Self::new(ElementValue::Sexp(values.into_iter().collect()))
    }

    /// Creates a struct element.
    #[must_use]
    pub fn structure(fields: impl IntoIterator<Item = StructField>) -> Self {
        Self::new(ElementValue::Struct(fields.into_iter().collect()))
    }

    // =========================================================================
    // Common surface
    // =========================================================================

    /// Returns the type tag.
    #[must_use]
    pub fn element_type(&self) -> ElementType {
        self.value.element_type()
    }

    /// Returns the payload.
    #[must_use]
    pub fn value(&self) -> &ElementValue {
        &self.value
    }

    /// Returns the annotations.
    #[must_use]
    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    /// Returns the metas.
    #[must_use]
    pub fn metas(&self) -> &MetaContainer {
        &self.metas
    }

    /// Returns true for a null element.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(*self.value, ElementValue::Null)
    }

    /// Returns true if both elements share the same payload allocation.
    #[must_use]
    pub fn shares_payload(&self, other: &Element) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }

    // =========================================================================
    // Copy-on-write
    // =========================================================================

    /// Returns an element with the same payload and the given annotations and metas.
    #[must_use]
    pub fn copy(&self, annotations: Annotations, metas: MetaContainer) -> Self {
        Self {
            annotations,
            metas,
            value: Arc::clone(&self.value),
        }
    }

    /// Returns a copy with `extra` appended to the annotations.
    #[must_use]
    pub fn with_annotations<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        self.copy(self.annotations.with_annotations(extra), self.metas.clone())
    }

    /// Returns a copy with one annotation appended.
    #[must_use]
    pub fn with_annotation(&self, annotation: impl Into<Arc<str>>) -> Self {
        self.copy(self.annotations.with_annotation(annotation), self.metas.clone())
    }

    /// Returns a copy without annotations.
    #[must_use]
    pub fn without_annotations(&self) -> Self {
        self.copy(self.annotations.cleared(), self.metas.clone())
    }

    /// Returns a copy with `key` bound to `value` in the metas.
    #[must_use]
    pub fn with_meta(
        &self,
        key: impl Into<Arc<str>>,
        value: impl std::any::Any + Send + Sync,
    ) -> Self {
        self.copy(self.annotations.clone(), self.metas.with_meta(key, value))
    }

    /// Returns a copy with `key` bound to an already wrapped meta value.
    #[must_use]
    pub fn with_meta_value(&self, key: impl Into<Arc<str>>, value: MetaValue) -> Self {
        self.copy(
            self.annotations.clone(),
            self.metas.with_meta_value(key, value),
        )
    }

    /// Returns a copy whose metas are the union of its own and `extra`;
    /// `extra` wins on collision.
    #[must_use]
    pub fn with_metas(&self, extra: &MetaContainer) -> Self {
        self.copy(self.annotations.clone(), self.metas.with_metas(extra))
    }

    /// Returns a copy without metas.
    #[must_use]
    pub fn without_metas(&self) -> Self {
        self.copy(self.annotations.clone(), self.metas.cleared())
    }

    // =========================================================================
    // Typed accessors
    // =========================================================================

    fn wrong_type(&self, expected: ExpectedTypes) -> Error {
        Error::wrong_variant(expected, self.element_type())
    }

    /// Returns the bool payload.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is a bool.
    pub fn as_bool(&self) -> Result<bool> {
        match *self.value {
            ElementValue::Bool(b) => Ok(b),
            _ => Err(self.wrong_type(ExpectedTypes::BOOL)),
        }
    }

    /// Returns the int payload.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is an int.
    pub fn as_int(&self) -> Result<i64> {
        match *self.value {
            ElementValue::Int(n) => Ok(n),
            _ => Err(self.wrong_type(ExpectedTypes::INT)),
        }
    }

    /// Returns the float payload.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is a float.
    pub fn as_float(&self) -> Result<f64> {
        match *self.value {
            ElementValue::Float(n) => Ok(n),
            _ => Err(self.wrong_type(ExpectedTypes::FLOAT)),
        }
    }

    /// Returns the decimal payload.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is a decimal.
    pub fn as_decimal(&self) -> Result<Decimal> {
        match *self.value {
            ElementValue::Decimal(d) => Ok(d),
            _ => Err(self.wrong_type(ExpectedTypes::DECIMAL)),
        }
    }

    /// Returns the timestamp payload.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is a timestamp.
    pub fn as_timestamp(&self) -> Result<&Timestamp> {
        match &*self.value {
            ElementValue::Timestamp(t) => Ok(t),
            _ => Err(self.wrong_type(ExpectedTypes::TIMESTAMP)),
        }
    }

    /// Returns the text of a symbol or string.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is a symbol or string.
    pub fn as_text(&self) -> Result<&str> {
        match &*self.value {
            ElementValue::Symbol(s) | ElementValue::String(s) => Ok(s),
            _ => Err(self.wrong_type(ExpectedTypes::TEXT)),
        }
    }

    /// Returns the text of a string.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is a string.
    pub fn as_string(&self) -> Result<&str> {
        match &*self.value {
            ElementValue::String(s) => Ok(s),
            _ => Err(self.wrong_type(ExpectedTypes::STRING)),
        }
    }

    /// Returns the text of a symbol.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is a symbol.
    pub fn as_symbol(&self) -> Result<&str> {
        match &*self.value {
            ElementValue::Symbol(s) => Ok(s),
            _ => Err(self.wrong_type(ExpectedTypes::SYMBOL)),
        }
    }

    /// Returns the bytes of a clob or blob.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is a clob or blob.
    pub fn as_bytes(&self) -> Result<&Bytes> {
        match &*self.value {
            ElementValue::Clob(b) | ElementValue::Blob(b) => Ok(b),
            _ => Err(self.wrong_type(ExpectedTypes::LOB)),
        }
    }

    /// Returns the bytes of a clob.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is a clob.
    pub fn as_clob(&self) -> Result<&Bytes> {
        match &*self.value {
            ElementValue::Clob(b) => Ok(b),
            _ => Err(self.wrong_type(ExpectedTypes::CLOB)),
        }
    }

    /// Returns the bytes of a blob.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is a blob.
    pub fn as_blob(&self) -> Result<&Bytes> {
        match &*self.value {
            ElementValue::Blob(b) => Ok(b),
            _ => Err(self.wrong_type(ExpectedTypes::BLOB)),
        }
    }

    /// Returns the children of a list or s-expression.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is a list or sexp.
    pub fn seq_values(&self) -> Result<&LtVec<Element>> {
        match &*self.value {
            ElementValue::List(v) | ElementValue::Sexp(v) => Ok(v),
            _ => Err(self.wrong_type(ExpectedTypes::SEQ)),
        }
    }

    /// Returns the children of a list.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is a list.
    pub fn list_values(&self) -> Result<&LtVec<Element>> {
        match &*self.value {
            ElementValue::List(v) => Ok(v),
            _ => Err(self.wrong_type(ExpectedTypes::LIST)),
        }
    }

    /// Returns the children of an s-expression.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is a sexp.
    pub fn sexp_values(&self) -> Result<&LtVec<Element>> {
        match &*self.value {
            ElementValue::Sexp(v) => Ok(v),
            _ => Err(self.wrong_type(ExpectedTypes::SEXP)),
        }
    }

    /// Returns the fields of a struct.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is a struct.
    pub fn struct_fields(&self) -> Result<&StructFields> {
        match &*self.value {
            ElementValue::Struct(fields) => Ok(fields),
            _ => Err(self.wrong_type(ExpectedTypes::STRUCT)),
        }
    }

    /// Returns the first value of the struct field `name`, if present.
    ///
    /// # Errors
    ///
    /// Fails with `WrongVariantAccess` unless this is a struct.
    pub fn field(&self, name: &str) -> Result<Option<&Element>> {
        Ok(self.struct_fields()?.get(name))
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        // Note: metas intentionally omitted.
        self.annotations == other.annotations
            && (Arc::ptr_eq(&self.value, &other.value) || self.value == other.value)
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Note: metas intentionally omitted.
        self.value.hash(state);
        self.annotations.hash(state);
    }
}

// Convenience From implementations

impl From<ElementValue> for Element {
    fn from(value: ElementValue) -> Self {
        Self::new(value)
    }
}

impl From<bool> for Element {
    fn from(b: bool) -> Self {
        Self::bool(b)
    }
}

impl From<i64> for Element {
    fn from(n: i64) -> Self {
        Self::int(n)
    }
}

impl From<i32> for Element {
    fn from(n: i32) -> Self {
        Self::int(i64::from(n))
    }
}

impl From<f64> for Element {
    fn from(n: f64) -> Self {
        Self::float(n)
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Self::string(s)
    }
}

impl From<Decimal> for Element {
    fn from(d: Decimal) -> Self {
        Self::decimal(d)
    }
}

impl From<Timestamp> for Element {
    fn from(t: Timestamp) -> Self {
        Self::timestamp(t)
    }
}

impl<T: Into<Element>> From<Vec<T>> for Element {
    fn from(v: Vec<T>) -> Self {
        Self::list(v.into_iter().map(Into::into))
    }
}
