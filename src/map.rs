//! An ordered map based on an unbalanced binary search tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug};
use std::ops;
use tracing::trace;
use super::error::{Error, Result};
use super::node::{self, Dir, Left, Node, Right};

/// An ordered map based on an unbalanced binary search tree.
///
/// Inserting a key that is already present replaces its value in place, so every key appears at
/// most once. The tree is never rebalanced: inserting keys in sorted order produces a tree whose
/// depth equals its length.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
pub struct OrderedMap<K, V, C = Natural<K>> where C: Compare<K> {
    root: node::Link<K, V>,
    len: usize,
    cmp: C,
}

impl<K, V> OrderedMap<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::OrderedMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { OrderedMap::with_cmp(compare::natural()) }
}

impl<K, V, C> OrderedMap<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = ordtree::OrderedMap::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        OrderedMap { root: None, len: 0, cmp: cmp }
    }

    /// Checks if the map is empty.
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::OrderedMap::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(2, "b");
    /// map.insert(2, "B");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the map's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map.
    pub fn clear(&mut self) {
        node::clear(&mut self.root);
        self.len = 0;
    }

    /// Inserts an entry into the map, returning the previous value, if any, associated
    /// with the key.
    ///
    /// Re-inserting a present key overwrites its value and leaves the length unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::OrderedMap::new();
    /// assert_eq!(map.insert(1, "one"), None);
    /// assert_eq!(map.insert(1, "ONE"), Some("one"));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map[&1], "ONE");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old_value = node::insert(&mut self.root, &self.cmp, key, value);

        if old_value.is_none() {
            self.len += 1;
            trace!(len = self.len, "inserted entry");
        } else {
            trace!(len = self.len, "overwrote entry");
        }

        old_value
    }

    /// Removes and returns the entry whose key is equal to the given key.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if the map does not contain the key. The map is left
    /// unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Error, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    /// map.insert(3, "three");
    ///
    /// assert_eq!(map.remove(&2), Ok((2, "two")));
    /// assert_eq!(map.len(), 2);
    /// assert!(!map.contains_key(&2));
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&1, &3]);
    ///
    /// assert_eq!(map.remove(&2), Err(Error::KeyNotFound));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Result<(K, V)> where C: Compare<Q, K> {
        match node::remove(&mut self.root, &self.cmp, key) {
            None => {
                trace!(len = self.len, "key to remove not found");
                Err(Error::KeyNotFound)
            }
            Some(entry) => {
                self.len -= 1;
                trace!(len = self.len, "removed entry");
                Ok(entry)
            }
        }
    }

    /// Checks if the map contains the given key.
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).is_some()
    }

    /// Returns a reference to the value associated with the given key.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Error, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.get(&1), Err(Error::KeyNotFound));
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Ok(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Result<&V> where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key)
            .map(|node| node.key_value().1)
            .ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with the given key.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::OrderedMap::new();
    /// map.insert(1, "a");
    ///
    /// *map.get_mut(&1).unwrap() = "b";
    /// assert_eq!(map.get(&1), Ok(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Result<&mut V> where C: Compare<Q, K> {
        node::get_mut(&mut self.root, &self.cmp, key)
            .map(|node| node.key_value_mut().1)
            .ok_or(Error::KeyNotFound)
    }

    /// Returns the map's minimum key and its associated value.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStructure` if the map is empty.
    pub fn min(&self) -> Result<(&K, &V)> {
        Left::extremum(&self.root).map(Node::key_value).ok_or(Error::EmptyStructure)
    }

    /// Returns the map's maximum key and its associated value.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStructure` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Error, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.max(), Err(Error::EmptyStructure));
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.min(), Ok((&1, &"a")));
    /// assert_eq!(map.max(), Ok((&3, &"c")));
    /// ```
    pub fn max(&self) -> Result<(&K, &V)> {
        Right::extremum(&self.root).map(Node::key_value).ok_or(Error::EmptyStructure)
    }

    /// Returns the entry with the smallest key that is strictly greater than the given key, or
    /// `None` if the given key is greater than or equal to every key in the map.
    ///
    /// The given key need not itself be present in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::OrderedMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.succ(&0), Some((&1, &"a")));
    /// assert_eq!(map.succ(&2), Some((&3, &"c")));
    /// assert_eq!(map.succ(&3), None);
    /// ```
    pub fn succ<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)> where C: Compare<Q, K> {
        Right::closest(&self.root, &self.cmp, key).map(Node::key_value)
    }

    /// Returns the entry with the greatest key that is strictly less than the given key, or
    /// `None` if the given key is less than or equal to every key in the map.
    ///
    /// The given key need not itself be present in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::OrderedMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.pred(&1), None);
    /// assert_eq!(map.pred(&3), Some((&2, &"b")));
    /// assert_eq!(map.pred(&4), Some((&3, &"c")));
    /// ```
    pub fn pred<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)> where C: Compare<Q, K> {
        Left::closest(&self.root, &self.cmp, key).map(Node::key_value)
    }

    /// Returns an iterator over the map's keys in ascending order.
    ///
    /// Each step looks up the successor of the previous key from the root, so a full pass costs
    /// O(n · depth). Use [`iter`](#method.iter) for a linear walk over the entries.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::OrderedMap::new();
    ///
    /// map.insert(3, "three");
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    ///
    /// for key in map.keys() {
    ///     println!("{}: {}", key, map[key]);
    /// }
    ///
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V, C> {
        Keys(node::Cursor::new(&self.root, &self.cmp, self.len))
    }

    /// Returns an iterator over the map's values, ordered by key.
    pub fn values(&self) -> Values<'_, K, V> { Values(self.iter()) }

    /// Returns an iterator over the map's entries, ordered by key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::OrderedMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(node::Iter::new(self.root.as_deref(), self.len))
    }
}

impl<K, V, C> Clone for OrderedMap<K, V, C> where K: Clone, V: Clone, C: Compare<K> + Clone {
    fn clone(&self) -> Self {
        OrderedMap { root: node::clone(&self.root), len: self.len, cmp: self.cmp.clone() }
    }
}

impl<K, V, C> Drop for OrderedMap<K, V, C> where C: Compare<K> {
    fn drop(&mut self) { node::clear(&mut self.root); }
}

impl<K, V, C> Debug for OrderedMap<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;

        let mut it = self.iter();

        if let Some((k, v)) = it.next() {
            write!(f, "{:?}: {:?}", k, v)?;
            for (k, v) in it { write!(f, ", {:?}: {:?}", k, v)?; }
        }

        write!(f, "}}")
    }
}

impl<K, V, C> Default for OrderedMap<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { OrderedMap::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for OrderedMap<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> FromIterator<(K, V)> for OrderedMap<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut map = OrderedMap::default();
        map.extend(it);
        map
    }
}

impl<K, V, C> PartialEq for OrderedMap<K, V, C>
    where K: PartialEq, V: PartialEq, C: Compare<K> {

    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, C> Eq for OrderedMap<K, V, C> where K: Eq, V: Eq, C: Compare<K> {}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for OrderedMap<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;

    fn index(&self, key: &'a Q) -> &V {
        match self.get(key) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<K, V, C> IntoIterator for OrderedMap<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter(node::Iter::new(self.root.take(), self.len))
    }
}

/// An iterator that consumes the map, yielding its entries in ascending key order.
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut map = ordtree::OrderedMap::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
///
/// assert_eq!(map.into_iter().collect::<Vec<_>>(), [(1, "a"), (2, "b")]);
/// ```
pub struct IntoIter<K, V>(node::Iter<Box<Node<K, V>>>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

// Pending nodes still own their right subtrees, so draining is what keeps the drop flat.
impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) { self.for_each(drop); }
}

/// An iterator over the map's entries in ascending key order.
///
/// Acquire through [`OrderedMap::iter`](struct.OrderedMap.html#method.iter) or the
/// `IntoIterator` trait.
pub struct Iter<'a, K: 'a, V: 'a>(node::Iter<&'a Node<K, V>>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An iterator over the map's keys in ascending order.
///
/// Acquire through [`OrderedMap::keys`](struct.OrderedMap.html#method.keys).
pub struct Keys<'a, K: 'a, V: 'a, C: 'a>(node::Cursor<'a, K, V, C>);

impl<'a, K, V, C> Clone for Keys<'a, K, V, C> {
    fn clone(&self) -> Keys<'a, K, V, C> { Keys(self.0.clone()) }
}

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C> where C: Compare<K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> { self.0.next().map(Node::key) }

    // keys are unique, so the cursor visits every node
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.remaining(), Some(self.0.remaining()))
    }
}

impl<'a, K, V, C> ExactSizeIterator for Keys<'a, K, V, C> where C: Compare<K> {}

/// An iterator over the map's values, ordered by key.
///
/// Acquire through [`OrderedMap::values`](struct.OrderedMap.html#method.values).
pub struct Values<'a, K: 'a, V: 'a>(Iter<'a, K, V>);

impl<'a, K, V> Clone for Values<'a, K, V> {
    fn clone(&self) -> Values<'a, K, V> { Values(self.0.clone()) }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> { self.0.next().map(|e| e.1) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}
