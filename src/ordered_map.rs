//! A map which remembers the order its keys were first stored in.

use crate::abstract_map::PrimitiveMap;
use crate::linked_list::{LinkedList, NodeHandle};
use std::{
    collections::{hash_map::RandomState, HashMap},
    fmt,
    hash::{BuildHasher, Hash},
    iter::FromIterator,
};

/// A key and its value, as they sit in the ordered list.
#[derive(Clone, Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A layer on top of [`HashMap`] which links every pair into a list so they
/// can be visited in insertion order.
///
/// The hash index maps each key to a handle on its node in the list, so
/// `store`, `load` and `delete` stay O(1). Storing over an existing key
/// replaces the value where it sits; only new keys go on the end. Deleting a
/// key and storing it again counts as a new key.
///
/// [`range`](PrimitiveMap::range) borrows the map, so it cannot be changed
/// from inside a visitor. Collect the keys first and delete afterwards, the
/// way [`clear`](crate::AbstractMap::clear) does.
#[derive(Clone)]
pub struct OrderedMap<K, V, S = RandomState> {
    index: HashMap<K, NodeHandle, S>,
    entries: LinkedList<Entry<K, V>>,
}

impl<K, V> OrderedMap<K, V, RandomState> {
    /// Makes a new, empty OrderedMap.
    pub fn new() -> Self {
        OrderedMap::with_capacity(0)
    }

    /// Makes a new OrderedMap with room for `capacity` pairs before it has to
    /// reallocate.
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMap::with_capacity_and_hash_builder(capacity, Default::default())
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    /// Makes a new OrderedMap with a specified capacity and hasher.
    pub fn with_capacity_and_hash_builder(capacity: usize, hash_builder: S) -> Self {
        Self {
            index: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            entries: LinkedList::with_capacity(capacity),
        }
    }

    /// Iterates over the pairs, oldest key first.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|e| (&e.key, &e.value))
    }

    /// The pair whose key has been in the map the longest.
    pub fn front(&self) -> Option<(&K, &V)> {
        self.entries.front().map(|e| (&e.key, &e.value))
    }

    /// The pair whose key was added most recently.
    pub fn back(&self) -> Option<(&K, &V)> {
        self.entries.back().map(|e| (&e.key, &e.value))
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[cfg(test)]
    fn continuity_test(&self) {
        assert_eq!(self.index.len(), self.entries.len());

        // every node in the list has to be the one its key points at
        let mut count = 0;
        for entry in self.entries.iter() {
            count += 1;
            let indexed = self
                .index
                .get(&entry.key)
                .and_then(|node| self.entries.get(*node));
            assert!(matches!(indexed, Some(e) if std::ptr::eq(e, entry)));
        }

        assert_eq!(self.index.len(), count);
    }
}

impl<K, V, S> PrimitiveMap<K, V> for OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn load(&self, key: &K) -> Option<&V> {
        self.index
            .get(key)
            .and_then(|node| self.entries.get(*node))
            .map(|e| &e.value)
    }

    fn store(&mut self, key: K, value: V) {
        if let Some(&node) = self.index.get(&key) {
            // update in place, the position doesn't change
            if let Some(entry) = self.entries.get_mut(node) {
                entry.value = value;
            }
        } else {
            let node = self.entries.push_back(Entry {
                key: key.clone(),
                value,
            });
            self.index.insert(key, node);
        }

        #[cfg(test)]
        self.continuity_test();
    }

    fn delete(&mut self, key: &K) {
        if let Some(node) = self.index.remove(key) {
            self.entries.remove_node(node);
        }

        #[cfg(test)]
        self.continuity_test();
    }

    fn range(&self, visit: &mut dyn FnMut(&K, &V) -> bool) {
        for entry in self.entries.iter() {
            if !visit(&entry.key, &entry.value) {
                break;
            }
        }
    }

    fn len(&self) -> usize {
        debug_assert_eq!(self.index.len(), self.entries.len());
        self.index.len()
    }
}

impl<K, V, S> Default for OrderedMap<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        OrderedMap::with_capacity_and_hash_builder(0, S::default())
    }
}

impl<K, V, S> fmt::Debug for OrderedMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.store(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for OrderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::default();
        map.extend(iter);
        map
    }
}
