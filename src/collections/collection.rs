// ============================================================================
// mixed-collection - Collection
// An ordered store addressed by integer positions and string names alike
// ============================================================================

use indexmap::IndexMap;
use tracing::{trace, warn};

use crate::core::key::Key;
use crate::equality::{Comparison, LooseEq};

// =============================================================================
// COLLECTION
// =============================================================================

/// An ordered associative collection.
///
/// Entries keep the order they were inserted in. Keys are either integers or
/// strings ([`Key`]), and both kinds can be mixed freely:
///
/// 1. Appending with [`add`](Self::add) allocates the next integer key: one past
///    the largest integer key the collection has held, never reusing gaps
/// 2. Setting an existing key overwrites it in place; a new key goes to the end
/// 3. Removing a key never renumbers the others
///
/// Transformations ([`map`](Self::map), [`filter`](Self::filter),
/// [`slice`](Self::slice)) return a new collection and keep the original keys.
///
/// # Example
///
/// ```
/// use mixed_collection::{Collection, Key};
///
/// let mut items = Collection::from(vec!["item1", "item2"]);
/// items.set("foo", "bar");
/// items.add("item3");
///
/// assert_eq!(items.get(2), Some(&"item3"));
/// assert_eq!(items.get("foo"), Some(&"bar"));
///
/// // Removing doesn't shift anything
/// assert_eq!(items.remove(0), Some("item1"));
/// assert_eq!(items.get(1), Some(&"item2"));
/// assert!(!items.contains_key(0));
///
/// // Transformations keep keys
/// let upper = items.map(|v| v.to_uppercase());
/// let keys: Vec<_> = upper.keys().cloned().collect();
/// assert_eq!(keys, vec![Key::Index(1), Key::from("foo"), Key::Index(2)]);
/// ```
#[derive(Clone)]
pub struct Collection<V> {
    /// Entries in insertion order
    items: IndexMap<Key, V>,

    /// Largest integer key held since construction or the last clear.
    /// Survives removals so gaps are never reused.
    highest_index: Option<i64>,
}

impl<V> Collection<V> {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            highest_index: None,
        }
    }

    /// Create an empty collection with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: IndexMap::with_capacity(capacity),
            highest_index: None,
        }
    }

    /// Create a collection from ordered `(key, value)` pairs.
    ///
    /// Entries are taken verbatim, in order. A repeated key overwrites the
    /// earlier value without moving it.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = entries.into_iter();
        let mut collection = Self::with_capacity(entries.size_hint().0);
        for (key, value) in entries {
            collection.insert_entry(key_of(key), value);
        }
        collection
    }

    /// Record an integer key for next-index allocation.
    fn note_key(&mut self, key: &Key) {
        if let Key::Index(index) = key {
            self.highest_index = Some(self.highest_index.map_or(*index, |h| h.max(*index)));
        }
    }

    /// Insert without logging; shared by construction paths. `key` must
    /// already be normalized.
    fn insert_entry(&mut self, key: Key, value: V) -> Option<V> {
        self.note_key(&key);
        self.items.insert(key, value)
    }

    // =========================================================================
    // SIZE
    // =========================================================================

    /// Returns the number of entries.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Same as [`count`](Self::count).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when the keys are exactly `0, 1, .., n-1` in that order.
    pub fn is_list(&self) -> bool {
        self.items
            .keys()
            .enumerate()
            .all(|(position, key)| i64::try_from(position).is_ok_and(|p| *key == Key::Index(p)))
    }

    /// The integer key the next [`add`](Self::add) would use, or `None` once
    /// the integer key space is exhausted.
    pub fn next_index(&self) -> Option<i64> {
        match self.highest_index {
            None => Some(0),
            Some(highest) => highest.checked_add(1),
        }
    }

    // =========================================================================
    // INDEXED ACCESS
    // =========================================================================

    /// Returns a reference to the value stored under `key`, or `None` if the
    /// key is absent.
    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&V> {
        self.items.get(&key_of(key))
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<K: Into<Key>>(&mut self, key: K) -> Option<&mut V> {
        self.items.get_mut(&key_of(key))
    }

    /// Returns true if an entry exists under `key`, whatever its value.
    pub fn contains_key<K: Into<Key>>(&self, key: K) -> bool {
        self.items.contains_key(&key_of(key))
    }

    /// Stores `value` under `key`.
    ///
    /// An existing key is overwritten in place and its previous value returned.
    /// A new key is appended to the end.
    pub fn set<K: Into<Key>>(&mut self, key: K, value: V) -> Option<V> {
        let key = key_of(key);
        trace!(key = %key, "set");
        self.insert_entry(key, value)
    }

    /// Indexed write with an optional key: `Some(key)` behaves as
    /// [`set`](Self::set), `None` as [`add`](Self::add).
    pub fn put(&mut self, key: Option<Key>, value: V) -> bool {
        match key {
            Some(key) => {
                self.set(key, value);
                true
            }
            None => self.add(value),
        }
    }

    // =========================================================================
    // APPEND
    // =========================================================================

    /// Appends `value` under the next integer key and returns that key.
    ///
    /// Returns `None` (and leaves the collection untouched) only when the
    /// largest integer key already is `i64::MAX`.
    pub fn push(&mut self, value: V) -> Option<i64> {
        let Some(index) = self.next_index() else {
            warn!(
                highest_index = ?self.highest_index,
                "integer key space exhausted, value not appended"
            );
            return None;
        };
        trace!(index, "add");
        self.insert_entry(Key::Index(index), value);
        Some(index)
    }

    /// Appends `value` under the next integer key.
    ///
    /// Always returns `true` unless the integer key space is exhausted; see
    /// [`push`](Self::push) to get the assigned key back.
    pub fn add(&mut self, value: V) -> bool {
        self.push(value).is_some()
    }

    // =========================================================================
    // REMOVE
    // =========================================================================

    /// Removes the entry under `key`, returning its value.
    ///
    /// Other keys keep their values and positions; nothing is renumbered.
    /// A missing key returns `None` and changes nothing.
    pub fn remove<K: Into<Key>>(&mut self, key: K) -> Option<V> {
        let key = key_of(key);
        let removed = self.items.shift_remove(&key);
        trace!(key = %key, found = removed.is_some(), "remove");
        removed
    }

    /// Removes the entry under `key`, discarding its value.
    pub fn unset<K: Into<Key>>(&mut self, key: K) {
        self.remove(key);
    }

    /// Removes every entry. Integer allocation starts again from `0`.
    pub fn clear(&mut self) {
        trace!(count = self.items.len(), "clear");
        self.items.clear();
        self.highest_index = None;
    }

    // =========================================================================
    // TRANSFORMATIONS
    // =========================================================================

    /// Returns a new collection with `f` applied to every value.
    ///
    /// Keys and order are unchanged.
    pub fn map<U, F>(&self, mut f: F) -> Collection<U>
    where
        F: FnMut(&V) -> U,
    {
        self.items
            .iter()
            .map(|(key, value)| (key.clone(), f(value)))
            .collect::<IndexMap<_, _>>()
            .into()
    }

    /// Returns a new collection holding only the entries whose value matches
    /// `predicate`.
    ///
    /// Kept entries retain their original keys and relative order, so integer
    /// keys may be left with gaps.
    pub fn filter<F>(&self, mut predicate: F) -> Collection<V>
    where
        V: Clone,
        F: FnMut(&V) -> bool,
    {
        self.items
            .iter()
            .filter(|(_, value)| predicate(*value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect::<IndexMap<_, _>>()
            .into()
    }

    /// Returns a new collection with a run of entries selected by position.
    ///
    /// Positions follow iteration order and ignore key values. Original keys
    /// are kept.
    ///
    /// - `offset < 0` counts from the end
    /// - `length == None` runs to the end
    /// - `length < 0` stops that many entries before the end
    ///
    /// Out-of-range bounds give an empty or truncated result.
    ///
    /// ```
    /// use mixed_collection::Collection;
    ///
    /// let items = Collection::from(vec![1, 2, 3, 4, 5]);
    /// let values = |c: &Collection<i32>| c.values().copied().collect::<Vec<_>>();
    ///
    /// assert_eq!(values(&items.slice(1, Some(2))), vec![2, 3]);
    /// assert_eq!(values(&items.slice(-2, None)), vec![4, 5]);
    /// assert_eq!(values(&items.slice(1, Some(-1))), vec![2, 3, 4]);
    /// assert!(items.slice(10, None).is_empty());
    /// ```
    pub fn slice(&self, offset: isize, length: Option<isize>) -> Collection<V>
    where
        V: Clone,
    {
        let (start, end) = slice_bounds(self.items.len(), offset, length);
        self.items
            .iter()
            .skip(start)
            .take(end - start)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect::<IndexMap<_, _>>()
            .into()
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Returns true if any value loosely equals `value`.
    pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool
    where
        V: LooseEq<Q>,
    {
        self.items.values().any(|v| v.loose_eq(value))
    }

    /// Returns true if any value is exactly equal (`PartialEq`) to `value`.
    pub fn contains_strict<Q: ?Sized>(&self, value: &Q) -> bool
    where
        V: PartialEq<Q>,
    {
        self.items.values().any(|v| v == value)
    }

    /// [`contains`](Self::contains) or [`contains_strict`](Self::contains_strict),
    /// chosen by `comparison`.
    pub fn contains_with<Q: ?Sized>(&self, value: &Q, comparison: Comparison) -> bool
    where
        V: PartialEq<Q> + LooseEq<Q>,
    {
        match comparison {
            Comparison::Loose => self.contains(value),
            Comparison::Strict => self.contains_strict(value),
        }
    }

    // =========================================================================
    // EXPORT
    // =========================================================================

    /// Returns every entry, keys and order exactly as stored.
    pub fn to_array(&self) -> IndexMap<Key, V>
    where
        V: Clone,
    {
        self.items.clone()
    }

    /// Consumes the collection, returning the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<Key, V> {
        self.items
    }

    /// Read-only view of the underlying ordered map.
    pub fn as_map(&self) -> &IndexMap<Key, V> {
        &self.items
    }

    // =========================================================================
    // ITERATION
    // =========================================================================

    /// Iterates `(key, value)` pairs in insertion order.
    ///
    /// Each call starts from the beginning and sees the current contents.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, V> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, Key, V> {
        self.items.iter_mut()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, V> {
        self.items.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, Key, V> {
        self.items.values()
    }

    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, Key, V> {
        self.items.values_mut()
    }
}

/// Resolves slice arguments against `len` into a `start..end` position range.
/// Every key entering the store or used to look one up goes through here, so
/// `Key::Name("1")` and `Key::Index(1)` address the same entry.
fn key_of<K: Into<Key>>(key: K) -> Key {
    key.into().normalize()
}

fn slice_bounds(len: usize, offset: isize, length: Option<isize>) -> (usize, usize) {
    let start = if offset < 0 {
        len.saturating_sub(offset.unsigned_abs())
    } else {
        offset.unsigned_abs().min(len)
    };
    let end = match length {
        None => len,
        Some(length) if length < 0 => len.saturating_sub(length.unsigned_abs()),
        Some(length) => start.saturating_add(length.unsigned_abs()).min(len),
    };
    (start, end.max(start))
}

impl<V> From<IndexMap<Key, V>> for Collection<V> {
    /// Wraps an ordered map, keeping its order. The next index follows the
    /// largest integer key present.
    ///
    /// A `Key::Name` spelling a canonical integer is folded into its
    /// `Key::Index`; if both were present the later entry's value wins, at the
    /// earlier entry's position.
    fn from(items: IndexMap<Key, V>) -> Self {
        if items.keys().all(Key::is_normalized) {
            let highest_index = items.keys().filter_map(Key::as_index).max();
            return Self {
                items,
                highest_index,
            };
        }
        Self::from_entries(items)
    }
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for Collection<V> {
    /// Two collections are equal when they hold the same entries in the same
    /// order.
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len() && self.items.iter().eq(other.items.iter())
    }
}

impl<V: Eq> Eq for Collection<V> {}

impl<V: std::fmt::Debug> std::fmt::Debug for Collection<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("items", &self.items)
            .field("next_index", &self.next_index())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
