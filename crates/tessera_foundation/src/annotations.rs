//! Ordered annotation lists.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::collections::LtVec;

/// An immutable, ordered list of annotation strings.
///
/// Duplicates are permitted and order is significant: `[a, b] != [b, a]`.
/// Annotations are part of an element's identity.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Annotations(LtVec<Arc<str>>);

impl Annotations {
    /// Creates an empty annotation list.
    #[must_use]
    pub fn new() -> Self {
        Self(LtVec::new())
    }

    /// Returns the number of annotations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no annotations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an annotation by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(|a| &**a)
    }

    /// Returns the first annotation, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(|a| &**a)
    }

    /// Returns true if `annotation` appears anywhere in the list.
    #[must_use]
    pub fn contains(&self, annotation: &str) -> bool {
        self.0.iter().any(|a| &**a == annotation)
    }

    /// Iterates the annotations in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|a| &**a)
    }

    /// Returns a new list with `extra` appended after the existing annotations.
    #[must_use]
    pub fn with_annotations<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let extra: LtVec<Arc<str>> = extra.into_iter().map(Into::into).collect();
        Self(self.0.concat(&extra))
    }

    /// Returns a new list with a single annotation appended.
    #[must_use]
    pub fn with_annotation(&self, annotation: impl Into<Arc<str>>) -> Self {
        Self(self.0.push_back(annotation.into()))
    }

    /// Returns an empty list.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::new()
    }
}

impl Hash for Annotations {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<S: Into<Arc<str>>> FromIterator<S> for Annotations {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Debug for Annotations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
