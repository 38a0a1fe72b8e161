use compare::Compare;
use super::{Dir, Left, Link, Node, Right};

pub trait NodeRef: Sized {
    type Item;
    fn item(self) -> Self::Item;
    fn left(&mut self) -> Option<Self>;
    fn right(&mut self) -> Option<Self>;
}

impl<'a, K, V> NodeRef for &'a Node<K, V> {
    type Item = (&'a K, &'a V);

    fn item(self) -> (&'a K, &'a V) { self.key_value() }

    fn left(&mut self) -> Option<&'a Node<K, V>> {
        let node: &'a Node<K, V> = *self;
        node.left.as_deref()
    }

    fn right(&mut self) -> Option<&'a Node<K, V>> {
        let node: &'a Node<K, V> = *self;
        node.right.as_deref()
    }
}

impl<K, V> NodeRef for Box<Node<K, V>> {
    type Item = (K, V);
    fn item(self) -> (K, V) { (*self).into_key_value() }
    fn left(&mut self) -> Link<K, V> { self.left.take() }
    fn right(&mut self) -> Link<K, V> { self.right.take() }
}

/// An in-order walk driven by an explicit stack of pending ancestors.
///
/// Visits every node exactly once in O(n) total, so duplicate keys come out with their full
/// multiplicity.
#[derive(Clone)]
pub struct Iter<N> where N: NodeRef {
    stack: Vec<N>,
    size: usize,
}

impl<N> Iter<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize) -> Iter<N> {
        let mut it = Iter { stack: vec![], size: size };
        it.descend(root);
        it
    }

    fn descend(&mut self, mut link: Option<N>) {
        while let Some(mut node) = link {
            link = node.left();
            self.stack.push(node);
        }
    }
}

impl<N> Iterator for Iter<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        let mut node = self.stack.pop()?;
        let right = node.right();
        self.descend(right);
        self.size -= 1;
        Some(node.item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

/// A forward cursor that re-derives each step from the root.
///
/// The cursor remembers only the node it will yield next; advancing searches the whole tree for
/// the successor of that node's key. This costs O(depth) per step and needs neither parent links
/// nor a stack, at the price of visiting each distinct key once.
pub struct Cursor<'a, K: 'a, V: 'a, C: 'a> {
    root: &'a Link<K, V>,
    cmp: &'a C,
    next: Option<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V, C> Cursor<'a, K, V, C> where C: Compare<K> {
    pub fn new(root: &'a Link<K, V>, cmp: &'a C, size: usize) -> Self {
        Cursor { root: root, cmp: cmp, next: Left::extremum(root), remaining: size }
    }

    /// Returns an upper bound on the number of nodes left to visit.
    pub fn remaining(&self) -> usize { self.remaining }
}

impl<'a, K, V, C> Clone for Cursor<'a, K, V, C> {
    fn clone(&self) -> Self {
        Cursor { root: self.root, cmp: self.cmp, next: self.next, remaining: self.remaining }
    }
}

impl<'a, K, V, C> Iterator for Cursor<'a, K, V, C> where C: Compare<K> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<&'a Node<K, V>> {
        let node = self.next.take()?;
        self.next = Right::closest(self.root, self.cmp, node.key());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.next.is_some() as usize, Some(self.remaining))
    }
}
