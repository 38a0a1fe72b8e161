//! An ordered multiset based on an unbalanced binary search tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug};
use tracing::trace;
use super::error::{Error, Result};
use super::node::{self, Dir, Left, Node, Right};

/// An ordered multiset based on an unbalanced binary search tree.
///
/// Unlike [`OrderedMap`](crate::OrderedMap), inserting an item that compares equal
/// to one already present adds another copy: every insertion grows the tree by exactly one, and
/// iteration yields equal items next to each other with their full multiplicity.
///
/// The tree is never rebalanced, so its depth can reach its length.
///
/// # Examples
///
/// ```
/// let mut tree = ordtree::OrderedTree::new();
///
/// for item in [5, 3, 7, 2, 4, 6] { tree.insert(item); }
///
/// assert_eq!(tree.len(), 6);
/// assert_eq!(tree.iter().collect::<Vec<_>>(), [&2, &3, &4, &5, &6, &7]);
/// assert!(tree.contains(&7));
/// assert!(!tree.contains(&8));
///
/// tree.remove(&3).unwrap();
/// assert_eq!(tree.len(), 5);
/// assert_eq!(format!("{:?}", tree), "[2, 4, 5, 6, 7]");
/// ```
pub struct OrderedTree<T, C = Natural<T>> where C: Compare<T> {
    root: node::Link<T, ()>,
    len: usize,
    cmp: C,
}

impl<T> OrderedTree<T> where T: Ord {
    /// Creates an empty tree ordered according to the natural order of its items.
    pub fn new() -> Self { OrderedTree::with_cmp(compare::natural()) }
}

impl<T, C> OrderedTree<T, C> where C: Compare<T> {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut tree = ordtree::OrderedTree::with_cmp(natural().rev());
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { OrderedTree { root: None, len: 0, cmp: cmp } }

    /// Checks if the tree is empty.
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of items in the tree, counting every copy of a repeated item.
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all items from the tree.
    pub fn clear(&mut self) {
        node::clear(&mut self.root);
        self.len = 0;
    }

    /// Inserts an item into the tree.
    ///
    /// Items equal to one already present are kept as additional copies.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordtree::OrderedTree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.count(&1), 2);
    /// ```
    pub fn insert(&mut self, item: T) {
        node::insert_dup(&mut self.root, &self.cmp, item, ());
        self.len += 1;
        trace!(len = self.len, "inserted item");
    }

    /// Removes one copy of the given item from the tree and returns it.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if the tree does not contain the item. The tree is left
    /// unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Error, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> Result<T> where C: Compare<Q, T> {
        match node::remove(&mut self.root, &self.cmp, item) {
            None => {
                trace!(len = self.len, "item to remove not found");
                Err(Error::KeyNotFound)
            }
            Some((item, ())) => {
                self.len -= 1;
                trace!(len = self.len, "removed item");
                Ok(item)
            }
        }
    }

    /// Checks if the tree contains at least one copy of the given item.
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        node::get(&self.root, &self.cmp, item).is_some()
    }

    /// Returns the number of copies of the given item in the tree.
    pub fn count<Q: ?Sized>(&self, item: &Q) -> usize where C: Compare<Q, T> {
        node::count(&self.root, &self.cmp, item)
    }

    /// Returns the tree's minimum item.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStructure` if the tree is empty.
    pub fn min(&self) -> Result<&T> {
        Left::extremum(&self.root).map(Node::key).ok_or(Error::EmptyStructure)
    }

    /// Returns the tree's maximum item.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStructure` if the tree is empty.
    pub fn max(&self) -> Result<&T> {
        Right::extremum(&self.root).map(Node::key).ok_or(Error::EmptyStructure)
    }

    /// Returns the smallest item that is strictly greater than the given item, or `None` if
    /// there is no such item.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: ordtree::OrderedTree<_> = [2, 4, 5, 6, 7].iter().cloned().collect();
    ///
    /// assert_eq!(tree.succ(&4), Some(&5));
    /// assert_eq!(tree.succ(&7), None);
    /// ```
    pub fn succ<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        Right::closest(&self.root, &self.cmp, item).map(Node::key)
    }

    /// Returns the greatest item that is strictly less than the given item, or `None` if there
    /// is no such item.
    pub fn pred<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        Left::closest(&self.root, &self.cmp, item).map(Node::key)
    }

    /// Returns an iterator over the tree's items in ascending order, including every copy of a
    /// repeated item.
    pub fn iter(&self) -> Iter<'_, T> { Iter(node::Iter::new(self.root.as_deref(), self.len)) }

    /// Returns an iterator over the tree's distinct items in ascending order.
    ///
    /// Each step looks up the successor of the previous item from the root, so a full pass costs
    /// O(n · depth).
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: ordtree::OrderedTree<_> = [3, 1, 3, 2, 1].iter().cloned().collect();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &1, &2, &3, &3]);
    /// assert_eq!(tree.distinct().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn distinct(&self) -> Distinct<'_, T, C> {
        Distinct(node::Cursor::new(&self.root, &self.cmp, self.len))
    }
}

impl<T, C> Clone for OrderedTree<T, C> where T: Clone, C: Compare<T> + Clone {
    fn clone(&self) -> Self {
        OrderedTree { root: node::clone(&self.root), len: self.len, cmp: self.cmp.clone() }
    }
}

impl<T, C> Drop for OrderedTree<T, C> where C: Compare<T> {
    fn drop(&mut self) { node::clear(&mut self.root); }
}

impl<T, C> Debug for OrderedTree<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;

        let mut it = self.iter();

        if let Some(item) = it.next() {
            write!(f, "{:?}", item)?;
            for item in it { write!(f, ", {:?}", item)?; }
        }

        write!(f, "]")
    }
}

impl<T, C> Default for OrderedTree<T, C> where C: Compare<T> + Default {
    fn default() -> Self { OrderedTree::with_cmp(Default::default()) }
}

impl<T, C> Extend<T> for OrderedTree<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for item in it { self.insert(item); }
    }
}

impl<T, C> FromIterator<T> for OrderedTree<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut tree = OrderedTree::default();
        tree.extend(it);
        tree
    }
}

impl<T, C> PartialEq for OrderedTree<T, C> where T: PartialEq, C: Compare<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, C> Eq for OrderedTree<T, C> where T: Eq, C: Compare<T> {}

impl<'a, T, C> IntoIterator for &'a OrderedTree<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for OrderedTree<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter(node::Iter::new(self.root.take(), self.len))
    }
}

/// An iterator that consumes the tree, yielding its items in ascending order.
pub struct IntoIter<T>(node::Iter<Box<Node<T, ()>>>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) { self.for_each(drop); }
}

/// An iterator over the tree's items in ascending order.
///
/// Acquire through [`OrderedTree::iter`](struct.OrderedTree.html#method.iter) or the
/// `IntoIterator` trait.
pub struct Iter<'a, T: 'a>(node::Iter<&'a Node<T, ()>>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// An iterator over the tree's distinct items in ascending order.
///
/// Acquire through [`OrderedTree::distinct`](struct.OrderedTree.html#method.distinct).
pub struct Distinct<'a, T: 'a, C: 'a>(node::Cursor<'a, T, (), C>);

impl<'a, T, C> Clone for Distinct<'a, T, C> {
    fn clone(&self) -> Distinct<'a, T, C> { Distinct(self.0.clone()) }
}

impl<'a, T, C> Iterator for Distinct<'a, T, C> where C: Compare<T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next().map(Node::key) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}
