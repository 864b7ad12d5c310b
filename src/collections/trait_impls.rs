// ============================================================================
// mixed-collection - Standard Trait Implementations
// Iteration, construction and extension protocols for Collection
// ============================================================================

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter, IterMut};

use crate::collections::Collection;
use crate::core::key::Key;

// =============================================================================
// ITERATION
// =============================================================================

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut Collection<V> {
    type Item = (&'a Key, &'a mut V);
    type IntoIter = IterMut<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = (Key, V);
    type IntoIter = IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl<V> From<Vec<V>> for Collection<V> {
    /// List-like collection: values get keys `0..n`.
    fn from(values: Vec<V>) -> Self {
        values.into_iter().collect()
    }
}

impl<V, const N: usize> From<[V; N]> for Collection<V> {
    /// List-like collection: values get keys `0..n`.
    fn from(values: [V; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<V> FromIterator<V> for Collection<V> {
    /// Appends every value, so keys run `0..n`.
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut collection = Collection::new();
        collection.extend(iter);
        collection
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for Collection<V> {
    /// Same as [`Collection::from_entries`].
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Collection::from_entries(iter)
    }
}

impl<V> From<Collection<V>> for IndexMap<Key, V> {
    fn from(collection: Collection<V>) -> Self {
        collection.into_inner()
    }
}

// =============================================================================
// EXTENSION
// =============================================================================

impl<V> Extend<V> for Collection<V> {
    /// Appends every value under the next integer key. Values past an
    /// exhausted key space are dropped.
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        for value in iter {
            if !self.add(value) {
                break;
            }
        }
    }
}

impl<K: Into<Key>, V> Extend<(K, V)> for Collection<V> {
    /// [`Collection::set`]s every pair.
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
