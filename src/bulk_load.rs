//! Copying the contents of other maps into a map.
//!
//! Sources are applied in the order they're given and every pair is stored,
//! so when two sources share a key the later one wins. Storing can't fail, so
//! there is nothing to roll back.

use crate::abstract_map::PrimitiveMap;
use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash},
};

/// Stores every pair of every `source` into `dst`, returning `dst`.
pub fn from_hash_maps<'a, K, V, S, M, I>(dst: &mut M, sources: I) -> &mut M
where
    K: 'a + Eq + Hash + Clone,
    V: 'a + Clone,
    S: 'a + BuildHasher,
    M: PrimitiveMap<K, V> + ?Sized,
    I: IntoIterator<Item = &'a HashMap<K, V, S>>,
{
    let mut loaded = 0;

    for (n, source) in sources.into_iter().enumerate() {
        for (k, v) in source.iter() {
            dst.store(k.clone(), v.clone());
        }

        log::trace!("loaded {} pairs from source {}", source.len(), n);
        loaded += 1;
    }

    log::debug!("bulk loaded {} hash maps", loaded);

    dst
}

/// Stores every pair of every `source` into `dst`, returning `dst`. Sources
/// are walked with [`range`](PrimitiveMap::range), so they can be any map
/// backend, in any mix.
pub fn from_abstract_maps<'d, K, V, M>(
    dst: &'d mut M,
    sources: &[&dyn PrimitiveMap<K, V>],
) -> &'d mut M
where
    K: Clone,
    V: Clone,
    M: PrimitiveMap<K, V> + ?Sized,
{
    for (n, source) in sources.iter().enumerate() {
        let mut pairs = 0usize;
        source.range(&mut |k, v| {
            dst.store(k.clone(), v.clone());
            pairs += 1;
            true
        });

        log::trace!("loaded {} pairs from source {}", pairs, n);
    }

    log::debug!("bulk loaded {} maps", sources.len());

    dst
}
