use crate::abstract_map::PrimitiveMap;
use std::{
    collections::{hash_map::RandomState, HashMap},
    fmt,
    hash::{BuildHasher, Hash},
    iter::FromIterator,
};

/// A plain [`HashMap`] behind the map interface.
///
/// [`range`](PrimitiveMap::range) visits pairs in no particular order. Two
/// maps holding the same pairs, or one map visited twice with a store in
/// between, can hand them out in different orders; don't lean on it. The
/// visitor borrows the map, so it can't be modified mid-traversal.
#[derive(Clone)]
pub struct UnorderedMap<K, V, S = RandomState> {
    storage: HashMap<K, V, S>,
}

impl<K, V> UnorderedMap<K, V, RandomState> {
    /// Makes a new, empty UnorderedMap.
    pub fn new() -> Self {
        UnorderedMap::with_capacity(0)
    }

    /// Makes a new UnorderedMap with room for `capacity` pairs.
    pub fn with_capacity(capacity: usize) -> Self {
        UnorderedMap::with_capacity_and_hash_builder(capacity, Default::default())
    }
}

impl<K, V, S> UnorderedMap<K, V, S> {
    /// Makes a new UnorderedMap with a specified capacity and hasher.
    pub fn with_capacity_and_hash_builder(capacity: usize, hash_builder: S) -> Self {
        Self {
            storage: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.storage.iter()
    }
}

impl<K, V, S> PrimitiveMap<K, V> for UnorderedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn load(&self, key: &K) -> Option<&V> {
        self.storage.get(key)
    }

    fn store(&mut self, key: K, value: V) {
        self.storage.insert(key, value);
    }

    fn delete(&mut self, key: &K) {
        self.storage.remove(key);
    }

    fn range(&self, visit: &mut dyn FnMut(&K, &V) -> bool) {
        for (k, v) in self.storage.iter() {
            if !visit(k, v) {
                break;
            }
        }
    }

    fn len(&self) -> usize {
        self.storage.len()
    }
}

impl<K, V, S> Default for UnorderedMap<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        UnorderedMap::with_capacity_and_hash_builder(0, S::default())
    }
}

impl<K, V, S> fmt::Debug for UnorderedMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.storage.iter()).finish()
    }
}

impl<K, V, S> Extend<(K, V)> for UnorderedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.storage.extend(iter)
    }
}

impl<K, V, S> FromIterator<(K, V)> for UnorderedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            storage: HashMap::from_iter(iter),
        }
    }
}
