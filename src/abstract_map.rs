use crate::default_abstract_map::DefaultAbstractMap;

/// The four operations every map backend has to supply. Everything else a map
/// can do is derived from these by [`DefaultAbstractMap`].
pub trait PrimitiveMap<K, V> {
    /// Get the value stored at a key, or `None` if nothing is stored there.
    fn load(&self, key: &K) -> Option<&V>;

    /// Put a value into the map, overwriting whatever was at that key.
    fn store(&mut self, key: K, value: V);

    /// Remove a key from the map. Does nothing if the key isn't there.
    fn delete(&mut self, key: &K);

    /// Visit every pair in the map, stopping the first time `visit` returns
    /// false. The order is up to the backend.
    fn range(&self, visit: &mut dyn FnMut(&K, &V) -> bool);

    /// The number of pairs in the map. The provided version walks the whole
    /// map with [`range`](PrimitiveMap::range); backends which track their
    /// size should override it.
    fn len(&self) -> usize {
        let mut len = 0;
        self.range(&mut |_, _| {
            len += 1;
            true
        });
        len
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Describes what a map is: the primitives plus everything derived from them.
///
/// There is no need to implement this by hand. Anything implementing
/// [`PrimitiveMap`] gets it through a blanket impl which hands each call to a
/// [`DefaultAbstractMap`] wrapped around the backend.
pub trait AbstractMap<K, V>: PrimitiveMap<K, V>
where
    K: Clone,
    V: Clone,
{
    /// Removes every pair from the map.
    fn clear(&mut self);

    /// Removes a key, handing back the value that was there.
    fn load_and_delete(&mut self, key: &K) -> Option<V>;

    /// Returns the existing value and `true` if the key is present, otherwise
    /// stores `value` and returns it alongside `false`.
    fn load_or_store(&mut self, key: K, value: V) -> (V, bool);

    /// Stores `value` unconditionally, returning whatever was there before.
    fn swap(&mut self, key: K, value: V) -> Option<V>;

    /// Stores `new` only if the key is present and currently equal to `old`.
    fn compare_and_swap(&mut self, key: K, old: &V, new: V) -> bool
    where
        V: PartialEq;

    /// Deletes the key only if it is present and currently equal to `old`.
    fn compare_and_delete(&mut self, key: &K, old: &V) -> bool
    where
        V: PartialEq;

    /// Like [`range`](PrimitiveMap::range), keys only.
    fn keys(&self, visit: &mut dyn FnMut(&K) -> bool);

    /// Like [`range`](PrimitiveMap::range), values only.
    fn values(&self, visit: &mut dyn FnMut(&V) -> bool);
}

impl<K, V, M> AbstractMap<K, V> for M
where
    K: Clone,
    V: Clone,
    M: PrimitiveMap<K, V>,
{
    fn clear(&mut self) {
        DefaultAbstractMap::new(self).clear()
    }

    fn load_and_delete(&mut self, key: &K) -> Option<V> {
        DefaultAbstractMap::new(self).load_and_delete(key)
    }

    fn load_or_store(&mut self, key: K, value: V) -> (V, bool) {
        DefaultAbstractMap::new(self).load_or_store(key, value)
    }

    fn swap(&mut self, key: K, value: V) -> Option<V> {
        DefaultAbstractMap::new(self).swap(key, value)
    }

    fn compare_and_swap(&mut self, key: K, old: &V, new: V) -> bool
    where
        V: PartialEq,
    {
        DefaultAbstractMap::new(self).compare_and_swap(key, old, new)
    }

    fn compare_and_delete(&mut self, key: &K, old: &V) -> bool
    where
        V: PartialEq,
    {
        DefaultAbstractMap::new(self).compare_and_delete(key, old)
    }

    fn keys(&self, visit: &mut dyn FnMut(&K) -> bool) {
        self.range(&mut |k, _| visit(k))
    }

    fn values(&self, visit: &mut dyn FnMut(&V) -> bool) {
        self.range(&mut |_, v| visit(v))
    }
}

#[cfg(test)]
mod tests {
    use super::{AbstractMap, PrimitiveMap};
    use crate::{OrderedMap, UnorderedMap};

    fn backends() -> Vec<Box<dyn AbstractMap<String, u32>>> {
        vec![
            Box::new(UnorderedMap::new()),
            Box::new(OrderedMap::new()),
        ]
    }

    #[test]
    fn works_through_trait_objects() {
        for mut map in backends() {
            assert_eq!((1, false), map.load_or_store("one".to_owned(), 1));
            assert_eq!((1, true), map.load_or_store("one".to_owned(), 10));
            assert_eq!(Some(1), map.swap("one".to_owned(), 2));
            assert!(map.compare_and_swap("one".to_owned(), &2, 3));
            assert_eq!(Some(&3), map.load(&"one".to_owned()));
            assert_eq!(1, map.len());

            map.clear();
            assert!(map.is_empty());
        }
    }

    #[test]
    fn default_len_counts_with_range() {
        // a backend that only has the four primitives
        struct Pairs(Vec<(u8, u8)>);

        impl PrimitiveMap<u8, u8> for Pairs {
            fn load(&self, key: &u8) -> Option<&u8> {
                self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
            }

            fn store(&mut self, key: u8, value: u8) {
                match self.0.iter_mut().find(|(k, _)| *k == key) {
                    Some(pair) => pair.1 = value,
                    None => self.0.push((key, value)),
                }
            }

            fn delete(&mut self, key: &u8) {
                self.0.retain(|(k, _)| k != key);
            }

            fn range(&self, visit: &mut dyn FnMut(&u8, &u8) -> bool) {
                for (k, v) in &self.0 {
                    if !visit(k, v) {
                        break;
                    }
                }
            }
        }

        let mut pairs = Pairs(Vec::new());
        assert!(pairs.is_empty());

        pairs.store(1, 1);
        pairs.store(2, 2);
        pairs.store(1, 3);
        assert_eq!(2, pairs.len());

        assert_eq!(Some(3), pairs.load_and_delete(&1));
        assert_eq!(1, pairs.len());
    }
}
