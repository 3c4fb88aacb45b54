//! Out-of-band metadata attached to elements.
//!
//! Metadata carries information such as source locations. It is never part of
//! an element's identity: equality and hashing ignore it entirely.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::collections::LtMap;

/// An arbitrary, shareable host value stored in a [`MetaContainer`].
///
/// Cloning shares the underlying value.
#[derive(Clone)]
pub struct MetaValue(Arc<dyn Any + Send + Sync>);

impl MetaValue {
    /// Wraps a host value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Returns the wrapped value if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns true if the wrapped value is a `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    /// Returns true if both handles point at the same value.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = self.downcast_ref::<String>() {
            write!(f, "{s:?}")
        } else if let Some(s) = self.downcast_ref::<&'static str>() {
            write!(f, "{s:?}")
        } else if let Some(n) = self.downcast_ref::<i64>() {
            write!(f, "{n}")
        } else if let Some(n) = self.downcast_ref::<i32>() {
            write!(f, "{n}")
        } else if let Some(n) = self.downcast_ref::<u64>() {
            write!(f, "{n}")
        } else if let Some(n) = self.downcast_ref::<usize>() {
            write!(f, "{n}")
        } else if let Some(b) = self.downcast_ref::<bool>() {
            write!(f, "{b}")
        } else {
            write!(f, "<opaque>")
        }
    }
}

/// Immutable map from string keys to [`MetaValue`]s.
#[derive(Clone, Default)]
pub struct MetaContainer(LtMap<Arc<str>, MetaValue>);

impl MetaContainer {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self(LtMap::new())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.0.get(key)
    }

    /// Gets the value stored under `key` if it is a `T`.
    #[must_use]
    pub fn get_as<T: Any>(&self, key: &str) -> Option<&T> {
        self.get(key).and_then(MetaValue::downcast_ref::<T>)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaValue)> {
        self.0.iter().map(|(k, v)| (&**k, v))
    }

    /// Iterates keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| &**k)
    }

    /// Returns a new container with `key` bound to `value`, replacing any
    /// existing binding.
    #[must_use]
    pub fn with_meta(&self, key: impl Into<Arc<str>>, value: impl Any + Send + Sync) -> Self {
        Self(self.0.insert(key.into(), MetaValue::new(value)))
    }

    /// Returns a new container with `key` bound to an already wrapped value.
    #[must_use]
    pub fn with_meta_value(&self, key: impl Into<Arc<str>>, value: MetaValue) -> Self {
        Self(self.0.insert(key.into(), value))
    }

    /// Returns the union of this container and `other`; `other` wins on collision.
    #[must_use]
    pub fn with_metas(&self, other: &MetaContainer) -> Self {
        Self(self.0.union(&other.0))
    }

    /// Returns a new container without `key`.
    #[must_use]
    pub fn without_meta(&self, key: &str) -> Self {
        Self(self.0.remove(key))
    }

    /// Returns an empty container.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::new()
    }
}

impl<K: Into<Arc<str>>> FromIterator<(K, MetaValue)> for MetaContainer {
    fn from_iter<I: IntoIterator<Item = (K, MetaValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl fmt::Debug for MetaContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
