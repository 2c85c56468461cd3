//! Derives the full map surface from the four primitives of any backend.

use crate::abstract_map::PrimitiveMap;

/// A decorator around some backend's primitives which supplies everything
/// else a map needs. Every derived operation goes through `load`, `store`,
/// `delete` and `range` on the wrapped map and nothing more, so any backend
/// can borrow it.
///
/// This is what the blanket [`AbstractMap`](crate::AbstractMap) impl uses
/// under the hood; it can also be wrapped around a backend directly.
pub struct DefaultAbstractMap<'m, K, V> {
    inner: &'m mut dyn PrimitiveMap<K, V>,
}

impl<'m, K, V> DefaultAbstractMap<'m, K, V>
where
    K: Clone,
    V: Clone,
{
    pub fn new(inner: &'m mut dyn PrimitiveMap<K, V>) -> Self {
        Self { inner }
    }

    /// Counts by walking the whole map.
    pub fn len(&self) -> usize {
        let mut len = 0;
        self.inner.range(&mut |_, _| {
            len += 1;
            true
        });
        len
    }

    pub fn is_empty(&self) -> bool {
        let mut empty = true;
        self.inner.range(&mut |_, _| {
            empty = false;
            false
        });
        empty
    }

    /// Removes everything. The keys are collected in one pass and deleted
    /// afterwards so the traversal never sees the map change underneath it.
    pub fn clear(&mut self) {
        let mut keys = Vec::new();
        self.inner.range(&mut |k, _| {
            keys.push(k.clone());
            true
        });

        log::trace!("clearing {} keys", keys.len());

        for key in keys.iter() {
            self.inner.delete(key);
        }
    }

    pub fn load_and_delete(&mut self, key: &K) -> Option<V> {
        let value = self.inner.load(key).cloned()?;
        self.inner.delete(key);
        Some(value)
    }

    pub fn load_or_store(&mut self, key: K, value: V) -> (V, bool) {
        if let Some(actual) = self.inner.load(&key) {
            return (actual.clone(), true);
        }

        self.inner.store(key, value.clone());
        (value, false)
    }

    pub fn swap(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.inner.load(&key).cloned();
        self.inner.store(key, value);
        previous
    }

    pub fn compare_and_swap(&mut self, key: K, old: &V, new: V) -> bool
    where
        V: PartialEq,
    {
        match self.inner.load(&key) {
            Some(current) if current == old => {
                self.inner.store(key, new);
                true
            }
            _ => false,
        }
    }

    pub fn compare_and_delete(&mut self, key: &K, old: &V) -> bool
    where
        V: PartialEq,
    {
        match self.inner.load(key) {
            Some(current) if current == old => {
                self.inner.delete(key);
                true
            }
            _ => false,
        }
    }

    pub fn keys(&self, visit: &mut dyn FnMut(&K) -> bool) {
        self.inner.range(&mut |k, _| visit(k))
    }

    pub fn values(&self, visit: &mut dyn FnMut(&V) -> bool) {
        self.inner.range(&mut |_, v| visit(v))
    }
}

impl<'m, K, V> PrimitiveMap<K, V> for DefaultAbstractMap<'m, K, V>
where
    K: Clone,
    V: Clone,
{
    fn load(&self, key: &K) -> Option<&V> {
        self.inner.load(key)
    }

    fn store(&mut self, key: K, value: V) {
        self.inner.store(key, value)
    }

    fn delete(&mut self, key: &K) {
        self.inner.delete(key)
    }

    fn range(&self, visit: &mut dyn FnMut(&K, &V) -> bool) {
        self.inner.range(visit)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::DefaultAbstractMap;
    use crate::abstract_map::PrimitiveMap;
    use std::cell::Cell;

    /// Just the primitives, kept in insertion order so assertions are
    /// deterministic. Counts how many times `range` gets called.
    #[derive(Default)]
    struct Pairs {
        pairs: Vec<(&'static str, i32)>,
        ranges: Cell<usize>,
    }

    impl PrimitiveMap<&'static str, i32> for Pairs {
        fn load(&self, key: &&'static str) -> Option<&i32> {
            self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
        }

        fn store(&mut self, key: &'static str, value: i32) {
            match self.pairs.iter_mut().find(|(k, _)| *k == key) {
                Some(pair) => pair.1 = value,
                None => self.pairs.push((key, value)),
            }
        }

        fn delete(&mut self, key: &&'static str) {
            self.pairs.retain(|(k, _)| k != key);
        }

        fn range(&self, visit: &mut dyn FnMut(&&'static str, &i32) -> bool) {
            self.ranges.set(self.ranges.get() + 1);
            for (k, v) in self.pairs.iter() {
                if !visit(k, v) {
                    break;
                }
            }
        }
    }

    fn filled() -> Pairs {
        let mut pairs = Pairs::default();
        pairs.store("a", 1);
        pairs.store("b", 2);
        pairs.store("c", 3);
        pairs
    }

    #[test]
    fn len_drains_range() {
        let mut pairs = filled();
        let map = DefaultAbstractMap::new(&mut pairs);
        assert_eq!(3, map.len());
        assert!(!map.is_empty());
        drop(map);
        assert_eq!(2, pairs.ranges.get());
    }

    #[test]
    fn clear_collects_then_deletes() {
        let mut pairs = filled();
        let mut map = DefaultAbstractMap::new(&mut pairs);
        map.clear();
        assert_eq!(0, map.len());
        assert!(map.is_empty());

        let mut visits = 0;
        map.keys(&mut |_| {
            visits += 1;
            true
        });
        map.values(&mut |_| {
            visits += 1;
            true
        });
        assert_eq!(0, visits);
    }

    #[test]
    fn clear_on_empty() {
        let mut pairs = Pairs::default();
        DefaultAbstractMap::new(&mut pairs).clear();
        assert!(pairs.pairs.is_empty());
    }

    #[test]
    fn load_and_delete() {
        let mut pairs = filled();
        let mut map = DefaultAbstractMap::new(&mut pairs);
        assert_eq!(Some(2), map.load_and_delete(&"b"));
        assert_eq!(None, map.load(&"b"));
        assert_eq!(None, map.load_and_delete(&"b"));
        assert_eq!(2, map.len());
    }

    #[test]
    fn load_or_store_keeps_the_first_value() {
        let mut pairs = Pairs::default();
        let mut map = DefaultAbstractMap::new(&mut pairs);
        assert_eq!((7, false), map.load_or_store("x", 7));
        assert_eq!((7, true), map.load_or_store("x", 8));
        assert_eq!(Some(&7), map.load(&"x"));
    }

    #[test]
    fn swap_reports_previous() {
        let mut pairs = Pairs::default();
        let mut map = DefaultAbstractMap::new(&mut pairs);
        assert_eq!(None, map.swap("x", 1));
        assert_eq!(Some(&1), map.load(&"x"));
        assert_eq!(Some(1), map.swap("x", 2));
        assert_eq!(Some(&2), map.load(&"x"));
    }

    #[test]
    fn swap_distinguishes_default_from_absent() {
        let mut pairs = Pairs::default();
        let mut map = DefaultAbstractMap::new(&mut pairs);
        map.store("zero", 0);
        assert_eq!(Some(0), map.swap("zero", 5));
        assert_eq!(None, map.swap("other", 5));
    }

    #[test]
    fn compare_and_swap() {
        let mut pairs = filled();
        let mut map = DefaultAbstractMap::new(&mut pairs);

        // absent keys never swap, even against the default value
        assert!(!map.compare_and_swap("z", &0, 9));
        assert_eq!(None, map.load(&"z"));

        assert!(!map.compare_and_swap("a", &100, 9));
        assert_eq!(Some(&1), map.load(&"a"));

        assert!(map.compare_and_swap("a", &1, 9));
        assert_eq!(Some(&9), map.load(&"a"));
    }

    #[test]
    fn compare_and_delete() {
        let mut pairs = filled();
        let mut map = DefaultAbstractMap::new(&mut pairs);

        assert!(!map.compare_and_delete(&"z", &0));
        assert!(!map.compare_and_delete(&"a", &2));
        assert_eq!(Some(&1), map.load(&"a"));

        assert!(map.compare_and_delete(&"a", &1));
        assert_eq!(None, map.load(&"a"));
        assert_eq!(2, map.len());
    }

    #[test]
    fn projections_stop_early() {
        let mut pairs = filled();
        let map = DefaultAbstractMap::new(&mut pairs);

        let mut keys = Vec::new();
        map.keys(&mut |k| {
            keys.push(*k);
            false
        });
        assert_eq!(vec!["a"], keys);

        let mut values = Vec::new();
        map.values(&mut |v| {
            values.push(*v);
            values.len() < 2
        });
        assert_eq!(vec![1, 2], values);
    }
}
