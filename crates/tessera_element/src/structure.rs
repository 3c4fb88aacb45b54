//! Struct payloads: unordered multi-maps from field name to element.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tessera_foundation::{LtMap, LtVec};

use crate::element::Element;

/// A single named field of a struct.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StructField {
    name: Arc<str>,
    value: Element,
}

impl StructField {
    /// Creates a field.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, value: impl Into<Element>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field value.
    #[must_use]
    pub fn value(&self) -> &Element {
        &self.value
    }
}

impl<N: Into<Arc<str>>, V: Into<Element>> From<(N, V)> for StructField {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

impl fmt::Debug for StructField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.name, self.value)
    }
}

/// The fields of a struct element.
///
/// Field names may repeat. Fields are kept in insertion order for iteration
/// and indexed by name for lookup; neither order affects equality or hashing.
#[derive(Clone, Default)]
pub struct StructFields {
    fields: LtVec<StructField>,
    by_name: LtMap<Arc<str>, LtVec<Element>>,
}

impl StructFields {
    /// Creates an empty set of fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of fields, counting repeated names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the first value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Element> {
        self.by_name.get(name).and_then(LtVec::first)
    }

    /// Returns every value stored under `name`, in insertion order.
    pub fn get_all(&self, name: &str) -> impl Iterator<Item = &Element> {
        self.by_name.get(name).into_iter().flat_map(LtVec::iter)
    }

    /// Returns true if at least one field is called `name`.
    #[must_use]
    pub fn contains_field(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterates the distinct field names in unspecified order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(|k| &**k)
    }

    /// Iterates the fields in insertion order.
    pub fn iter(&self) -> im::vector::Iter<'_, StructField> {
        self.fields.iter()
    }

    /// Iterates the field values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Element> {
        self.fields.iter().map(StructField::value)
    }

    /// Returns a new set of fields with `field` added.
    #[must_use]
    pub fn with_field(&self, field: StructField) -> Self {
        let bucket = self
            .by_name
            .get(&field.name)
            .cloned()
            .unwrap_or_default()
            .push_back(field.value.clone());
        Self {
            by_name: self.by_name.insert(Arc::clone(&field.name), bucket),
            fields: self.fields.push_back(field),
        }
    }
}

impl FromIterator<StructField> for StructFields {
    fn from_iter<I: IntoIterator<Item = StructField>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |fields, field| fields.with_field(field))
    }
}

impl<'a> IntoIterator for &'a StructFields {
    type Item = &'a StructField;
    type IntoIter = im::vector::Iter<'a, StructField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Returns true if `a` and `b` hold the same elements with the same counts.
fn same_multiset(a: &LtVec<Element>, b: &LtVec<Element>) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.len() == 1 {
        return a.first() == b.first();
    }
    let mut counts: HashMap<&Element, usize> = HashMap::with_capacity(a.len());
    for e in a {
        *counts.entry(e).or_default() += 1;
    }
    for e in b {
        match counts.get_mut(e) {
            Some(n) if *n > 0 => *n -= 1,
            _ => return false,
        }
    }
    true
}

impl PartialEq for StructFields {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() || self.by_name.len() != other.by_name.len() {
            return false;
        }
        self.by_name
            .iter()
            .all(|(name, values)| match other.by_name.get(name) {
                Some(others) => same_multiset(values, others),
                None => false,
            })
    }
}

impl Eq for StructFields {}

impl Hash for StructFields {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Sum of per-field hashes, independent of field order.
        let combined = self.fields.iter().fold(0u64, |acc, field| {
            let mut hasher = DefaultHasher::new();
            field.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });
        self.len().hash(state);
        combined.hash(state);
    }
}

impl fmt::Debug for StructFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
