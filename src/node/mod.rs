mod iter;

#[cfg(test)]
mod test;

use compare::Compare;
use std::cmp::Ordering::*;
use std::mem::replace;

pub use self::iter::{Cursor, Iter};

pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// A tree node: a key, an opaque payload and two owned children.
///
/// `OrderedTree` stores its items as keys with a `()` payload.
pub struct Node<K, V> {
    left: Link<K, V>,
    right: Link<K, V>,
    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node { left: None, right: None, key: key, value: value }
    }

    pub fn key(&self) -> &K { &self.key }

    pub fn key_value(&self) -> (&K, &V) { (&self.key, &self.value) }

    pub fn key_value_mut(&mut self) -> (&K, &mut V) { (&self.key, &mut self.value) }

    fn into_key_value(self) -> (K, V) { (self.key, self.value) }
}

/// Inserts an entry, replacing the value of an equal key in place.
///
/// Returns the previous value if the key was already present, in which case no node is
/// created.
pub fn insert<K, V, C>(mut link: &mut Link<K, V>, cmp: &C, key: K, value: V) -> Option<V>
    where C: Compare<K> {

    while let Some(ref mut node) = *link {
        link = match cmp.compare(&key, &node.key) {
            Equal => return Some(replace(&mut node.value, value)),
            Less => &mut node.left,
            Greater => &mut node.right,
        };
    }

    *link = Some(Box::new(Node::new(key, value)));
    None
}

/// Inserts an entry without looking for an equal key.
///
/// Equal keys descend to the left, so the subtree always grows by exactly one node and
/// duplicates are kept. The new leaf is attached only after the descent, so a panicking
/// comparator leaves the subtree as it was.
pub fn insert_dup<K, V, C>(mut link: &mut Link<K, V>, cmp: &C, key: K, value: V)
    where C: Compare<K> {

    while let Some(ref mut node) = *link {
        link = match cmp.compare(&key, &node.key) {
            Greater => &mut node.right,
            _ => &mut node.left,
        };
    }

    *link = Some(Box::new(Node::new(key, value)));
}

/// Removes the first node whose key is equal to the given key, returning its entry.
///
/// The subtree is left untouched if no such node exists.
pub fn remove<K, V, C, Q: ?Sized>(mut link: &mut Link<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<Q, K> {

    loop {
        let order = cmp.compare(key, &link.as_ref()?.key);

        link = match order {
            Equal => return unlink(link),
            Less => &mut link.as_mut()?.left,
            Greater => &mut link.as_mut()?.right,
        };
    }
}

// Splices the node out of its slot. A node with two children takes over the entry of its
// in-order successor, whose own node is detached instead.
fn unlink<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    let node = link.as_mut()?;

    if node.left.is_some() {
        if let Some(succ) = take_min(&mut node.right) {
            let (key, value) = (*succ).into_key_value();
            return Some((replace(&mut node.key, key), replace(&mut node.value, value)));
        }
    }

    let mut node = link.take()?;
    *link = match node.left.take() {
        None => node.right.take(),
        left => left,
    };

    Some((*node).into_key_value())
}

// Detaches the minimum node of a subtree, splicing its right child into its slot.
fn take_min<K, V>(mut link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

pub fn get<'a, K, V, C, Q: ?Sized>(mut link: &'a Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a Node<K, V>> where C: Compare<Q, K> {

    while let Some(node) = link.as_deref() {
        match cmp.compare(key, &node.key) {
            Equal => return Some(node),
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    None
}

pub fn get_mut<'a, K, V, C, Q: ?Sized>(mut link: &'a mut Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a mut Node<K, V>> where C: Compare<Q, K> {

    while let Some(node) = link.as_deref_mut() {
        match cmp.compare(key, &node.key) {
            Equal => return Some(node),
            Less => link = &mut node.left,
            Greater => link = &mut node.right,
        }
    }

    None
}

/// Counts the nodes whose key is equal to the given key.
pub fn count<K, V, C, Q: ?Sized>(link: &Link<K, V>, cmp: &C, key: &Q) -> usize
    where C: Compare<Q, K> {

    let mut stack: Vec<&Node<K, V>> = link.as_deref().into_iter().collect();
    let mut count = 0;

    while let Some(node) = stack.pop() {
        match cmp.compare(key, &node.key) {
            // a successor splice can leave an equal key on either side
            Equal => {
                count += 1;
                stack.extend(node.left.as_deref());
                stack.extend(node.right.as_deref());
            }
            Less => stack.extend(node.left.as_deref()),
            Greater => stack.extend(node.right.as_deref()),
        }
    }

    count
}

/// Deep-copies a subtree.
///
/// Nodes are rebuilt in post-order on an explicit stack, so the copy never recurses no matter
/// how deep the tree is.
pub fn clone<K, V>(link: &Link<K, V>) -> Link<K, V> where K: Clone, V: Clone {
    let mut pending: Vec<(&Node<K, V>, bool)> = vec![];
    let mut built: Vec<Box<Node<K, V>>> = vec![];
    pending.extend(link.as_deref().map(|n| (n, false)));

    while let Some((node, children_built)) = pending.pop() {
        if children_built {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            let key = node.key.clone();
            let value = node.value.clone();
            built.push(Box::new(Node { left: left, right: right, key: key, value: value }));
        } else {
            pending.push((node, true));
            pending.extend(node.right.as_deref().map(|n| (n, false)));
            pending.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }

    built.pop()
}

/// Drops a subtree one node at a time.
///
/// Letting a `Box<Node>` fall out of scope would free its descendants recursively, which
/// overflows the stack on a degenerate tree.
pub fn clear<K, V>(link: &mut Link<K, V>) {
    let mut stack: Vec<Box<Node<K, V>>> = link.take().into_iter().collect();

    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite=Self>;

    fn left() -> bool;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V>;

    /// Returns the node furthest in this direction.
    fn extremum<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
        let mut node = link.as_deref()?;
        while let Some(next) = Self::forward(node).as_deref() { node = next; }
        Some(node)
    }

    /// Returns the closest node in this direction whose key is strictly beyond the given key.
    ///
    /// The key need not be present. Each step toward the opposite direction records the
    /// current node as a candidate; the last candidate recorded is the tightest one.
    fn closest<'a, K, V, C, Q: ?Sized>(mut link: &'a Link<K, V>, cmp: &C, key: &Q)
        -> Option<&'a Node<K, V>> where C: Compare<Q, K> {

        let behind = if Self::left() { Greater } else { Less };
        let mut candidate = None;

        while let Some(node) = link.as_deref() {
            link = if cmp.compare(key, &node.key) == behind {
                candidate = Some(node);
                Self::Opposite::forward(node)
            } else {
                Self::forward(node)
            };
        }

        candidate
    }
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn left() -> bool { true }

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn left() -> bool { false }

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.right }
}
