//! A couple of maps sharing one interface: [`UnorderedMap`], which is a plain
//! hash map, and [`OrderedMap`], which remembers the order keys were first
//! stored in.
//!
//! Backends only have to implement the four operations of [`PrimitiveMap`]
//! (`load`, `store`, `delete` and `range`). Everything else in
//! [`AbstractMap`] (compare-and-swap, load-or-store, clear and friends) is
//! derived from those by [`DefaultAbstractMap`] and comes for free.
//!
//! ```
//! use abstract_maps::{AbstractMap, OrderedMap, PrimitiveMap};
//!
//! let mut map = OrderedMap::new();
//! map.store("charlie", 3);
//! map.store("alpha", 1);
//! map.store("alpha", 10);
//!
//! assert_eq!((3, true), map.load_or_store("charlie", 30));
//! assert!(map.compare_and_swap("alpha", &10, 11));
//!
//! let mut keys = Vec::new();
//! map.keys(&mut |k| {
//!     keys.push(*k);
//!     true
//! });
//! assert_eq!(vec!["charlie", "alpha"], keys);
//! ```
//!
//! None of the maps do any locking of their own. With the `shared_map`
//! feature (on by default) a map can be wrapped in a [`SharedMap`] to share
//! it between threads.

mod abstract_map;
mod bulk_load;
mod default_abstract_map;
mod linked_list;
mod ordered_map;
#[cfg(feature = "shared_map")]
mod shared_map;
mod unordered_map;

pub use crate::abstract_map::{AbstractMap, PrimitiveMap};
pub use crate::bulk_load::{from_abstract_maps, from_hash_maps};
pub use crate::default_abstract_map::DefaultAbstractMap;
pub use crate::ordered_map::OrderedMap;
#[cfg(feature = "shared_map")]
pub use crate::shared_map::SharedMap;
pub use crate::unordered_map::UnorderedMap;
