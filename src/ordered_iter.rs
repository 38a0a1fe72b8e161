use ordered_iter::{OrderedMapIterator, OrderedSetIterator};
use super::{map, tree};

impl<K, V> OrderedMapIterator for map::IntoIter<K, V> where K: Ord {
    type Key = K;
    type Val = V;
}

impl<'a, K, V> OrderedMapIterator for map::Iter<'a, K, V> where K: Ord {
    type Key = &'a K;
    type Val = &'a V;
}

impl<T> OrderedSetIterator for tree::IntoIter<T> where T: Ord {}

impl<'a, T> OrderedSetIterator for tree::Iter<'a, T> where T: Ord {}

impl<'a, K, V, C> OrderedSetIterator for map::Keys<'a, K, V, C>
    where K: Ord, C: compare::Compare<K> {}

impl<'a, T, C> OrderedSetIterator for tree::Distinct<'a, T, C>
    where T: Ord, C: compare::Compare<T> {}
