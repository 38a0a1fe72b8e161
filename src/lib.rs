//! An ordered multiset and an ordered map based on an unbalanced binary search tree.
//!
//! Both collections share one tree algorithm and differ only in the payload carried by each node
//! and in how they treat equal keys:
//!
//! - [`OrderedTree`](tree/struct.OrderedTree.html) stores bare items and keeps duplicates.
//! - [`OrderedMap`](map/struct.OrderedMap.html) stores a value per key and overwrites the value
//!   when a present key is inserted again.
//!
//! Lookups and removals of absent keys fail with [`Error::KeyNotFound`](enum.Error.html);
//! asking an empty collection for its minimum or maximum fails with `Error::EmptyStructure`.
//!
//! ```
//! use ordtree::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert(1, "one");
//! map.insert(2, "two");
//! map.insert(3, "three");
//! assert_eq!(map.len(), 3);
//!
//! map.remove(&2).unwrap();
//! assert_eq!(map.len(), 2);
//! assert!(!map.contains_key(&2));
//! assert_eq!(map.keys().collect::<Vec<_>>(), [&1, &3]);
//!
//! map.insert(1, "ONE");
//! assert_eq!(map.len(), 2);
//! assert_eq!(map[&1], "ONE");
//! assert_eq!(format!("{:?}", map), r#"{1: "ONE", 3: "three"}"#);
//! ```

#![warn(missing_docs)]

mod error;
mod node;

pub mod map;
pub mod tree;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use error::{Error, Result};
pub use map::OrderedMap;
pub use tree::OrderedTree;
