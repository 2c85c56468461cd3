use parking_lot::RwLock;
use std::{marker::PhantomData, sync::Arc};

use crate::abstract_map::{AbstractMap, PrimitiveMap};

/// Wrapper for a map which is shareable across thread boundaries. Every call
/// takes the one lock around the map, reads under the read lock and anything
/// that might write under the write lock, so each call is atomic with respect
/// to the others.
pub struct SharedMap<M, K, V>(Arc<RwLock<M>>, PhantomData<K>, PhantomData<V>)
where
    M: AbstractMap<K, V>,
    K: Clone,
    V: Clone;

impl<M, K, V> SharedMap<M, K, V>
where
    M: AbstractMap<K, V>,
    K: Clone,
    V: Clone,
{
    /// Wraps a map into a shared map accessor, making it safe to move across
    /// thread boundaries. Values come back out as clones so the lock is only
    /// held for the duration of the call.
    pub fn with_map(map: M) -> Self {
        Self(Arc::from(RwLock::from(map)), PhantomData, PhantomData)
    }

    pub fn load(&self, key: &K) -> Option<V> {
        self.0.read().load(key).cloned()
    }

    pub fn store(&self, key: K, value: V) {
        self.0.write().store(key, value)
    }

    pub fn delete(&self, key: &K) {
        self.0.write().delete(key)
    }

    /// Visits every pair while holding the read lock. Calling back into this
    /// map from the visitor to write will deadlock.
    pub fn range(&self, visit: &mut dyn FnMut(&K, &V) -> bool) {
        self.0.read().range(visit)
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    pub fn clear(&self) {
        self.0.write().clear()
    }

    pub fn load_and_delete(&self, key: &K) -> Option<V> {
        self.0.write().load_and_delete(key)
    }

    pub fn load_or_store(&self, key: K, value: V) -> (V, bool) {
        self.0.write().load_or_store(key, value)
    }

    pub fn swap(&self, key: K, value: V) -> Option<V> {
        self.0.write().swap(key, value)
    }

    pub fn compare_and_swap(&self, key: K, old: &V, new: V) -> bool
    where
        V: PartialEq,
    {
        self.0.write().compare_and_swap(key, old, new)
    }

    pub fn compare_and_delete(&self, key: &K, old: &V) -> bool
    where
        V: PartialEq,
    {
        self.0.write().compare_and_delete(key, old)
    }

    pub fn keys(&self, visit: &mut dyn FnMut(&K) -> bool) {
        self.0.read().keys(visit)
    }

    pub fn values(&self, visit: &mut dyn FnMut(&V) -> bool) {
        self.0.read().values(visit)
    }
}

impl<M, K, V> Clone for SharedMap<M, K, V>
where
    M: AbstractMap<K, V>,
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        SharedMap(self.0.clone(), PhantomData, PhantomData)
    }
}
