use compare::{natural, Natural};
use quickcheck::{quickcheck, Arbitrary, Gen, TestResult};
use super::{clear, clone, count, get, get_mut, insert, insert_dup, remove};
use super::{Dir, Left, Link, Node, Right};

/// An operation on a tree of keys.
#[derive(Clone, Debug)]
enum Op<K> {
    /// Insert a key into the tree.
    Insert(K),
    /// Remove the key at index `n % len` in sorted order from the tree.
    Remove(usize),
    /// Remove an arbitrary key, which may be absent.
    RemoveAny(K),
}

impl<K> Arbitrary for Op<K> where K: Arbitrary {
    fn arbitrary(g: &mut Gen) -> Op<K> {
        match *g.choose(&[0, 0, 1, 2]).unwrap_or(&0) {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Remove(usize::arbitrary(g)),
            _ => Op::RemoveAny(K::arbitrary(g)),
        }
    }
}

fn keys<K, V>(link: &Link<K, V>, out: &mut Vec<K>) where K: Clone {
    if let Some(ref node) = *link {
        keys(&node.left, out);
        out.push(node.key.clone());
        keys(&node.right, out);
    }
}

/// Checks the ordering invariant below `link` and returns the number of nodes.
///
/// With `strict`, every left key is less than its parent and every right key greater. Otherwise
/// equal keys are allowed on both sides.
fn assert_ordered<K, V>(link: &Link<K, V>, lo: Option<&K>, hi: Option<&K>, strict: bool)
    -> usize where K: Ord {

    match *link {
        None => 0,
        Some(ref node) => {
            if let Some(lo) = lo { assert!(if strict { *lo < node.key } else { *lo <= node.key }); }
            if let Some(hi) = hi { assert!(if strict { node.key < *hi } else { node.key <= *hi }); }

            1 + assert_ordered(&node.left, lo, Some(&node.key), strict)
              + assert_ordered(&node.right, Some(&node.key), hi, strict)
        }
    }
}

/// Applies the operations and returns the number of entries the tree should hold.
fn exec(ops: Vec<Op<u8>>, link: &mut Link<u8, ()>, dup: bool) -> usize {
    let cmp: Natural<u8> = natural();
    let mut len = 0;

    for op in ops {
        match op {
            Op::Insert(key) => if dup {
                insert_dup(link, &cmp, key, ());
                len += 1;
            } else if insert(link, &cmp, key, ()).is_none() {
                len += 1;
            },
            Op::Remove(index) => {
                let mut present = vec![];
                keys(link, &mut present);

                if !present.is_empty() {
                    let key = present[index % present.len()];
                    assert_eq!(remove(link, &cmp, &key).map(|e| e.0), Some(key));
                    len -= 1;
                }
            }
            Op::RemoveAny(key) => {
                let before = count(link, &cmp, &key);

                match remove(link, &cmp, &key) {
                    None => assert_eq!(before, 0),
                    Some(_) => {
                        assert_eq!(count(link, &cmp, &key), before - 1);
                        len -= 1;
                    }
                }
            }
        }
    }

    len
}

#[test]
fn unique_keys_stay_strictly_ordered() {
    fn check(ops: Vec<Op<u8>>) -> TestResult {
        let mut link = None;
        let len = exec(ops, &mut link, false);
        assert_eq!(assert_ordered(&link, None, None, true), len);
        TestResult::passed()
    }

    quickcheck(check as fn(_) -> _);
}

#[test]
fn duplicate_keys_stay_ordered() {
    fn check(ops: Vec<Op<u8>>) -> TestResult {
        let mut link = None;
        let len = exec(ops, &mut link, true);
        assert_eq!(assert_ordered(&link, None, None, false), len);

        let mut sorted = vec![];
        keys(&link, &mut sorted);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        TestResult::passed()
    }

    quickcheck(check as fn(_) -> _);
}

#[test]
fn closest_agrees_with_sorted_keys() {
    fn check(ops: Vec<Op<u8>>, key: u8) -> bool {
        let mut link = None;
        exec(ops, &mut link, true);

        let mut sorted = vec![];
        keys(&link, &mut sorted);

        let cmp: Natural<u8> = natural();
        Right::closest(&link, &cmp, &key).map(|n| n.key) == sorted.iter().cloned().find(|k| *k > key)
            && Left::closest(&link, &cmp, &key).map(|n| n.key)
                == sorted.iter().rev().cloned().find(|k| *k < key)
    }

    quickcheck(check as fn(_, _) -> _);
}

#[test]
fn remove_splices_successor_into_inner_node() {
    let cmp: Natural<u32> = natural();
    let mut link = None;
    for key in [5, 3, 8, 7, 9, 6] { insert(&mut link, &cmp, key, key * 10); }

    assert_eq!(remove(&mut link, &cmp, &5), Some((5, 50)));

    let root = link.as_ref().map(|node| (node.key, node.value));
    assert_eq!(root, Some((6, 60)));
    assert_eq!(assert_ordered(&link, None, None, true), 5);
    assert!(get(&link, &cmp, &5).is_none());
}

#[test]
fn remove_absent_key_leaves_tree_untouched() {
    let cmp: Natural<u32> = natural();
    let mut link = None;
    for key in [2, 1, 3] { insert(&mut link, &cmp, key, ()); }

    assert_eq!(remove(&mut link, &cmp, &4), None);

    let mut present = vec![];
    keys(&link, &mut present);
    assert_eq!(present, [1, 2, 3]);
    assert_eq!(link.as_ref().map(|node| node.key), Some(2));
}

#[test]
fn extremum_of_empty_link_is_none() {
    let link: Link<u32, ()> = None;
    assert!(Left::extremum(&link).is_none());
    assert!(Right::extremum(&link).is_none());
}

#[test]
fn clone_keeps_shape() {
    fn check(ops: Vec<Op<u8>>) -> bool {
        let mut link = None;
        exec(ops, &mut link, true);
        let copy = clone(&link);

        fn shape(link: &Link<u8, ()>, out: &mut Vec<Option<u8>>) {
            match *link {
                None => out.push(None),
                Some(ref node) => {
                    out.push(Some(node.key));
                    shape(&node.left, out);
                    shape(&node.right, out);
                }
            }
        }

        let (mut original, mut copied) = (vec![], vec![]);
        shape(&link, &mut original);
        shape(&copy, &mut copied);
        original == copied
    }

    quickcheck(check as fn(_) -> _);
}

#[test]
fn degenerate_chain_is_handled_without_recursion() {
    let cmp: Natural<u32> = natural();
    let n = 100_000;

    // every node is the left child of the next larger key
    let mut link: Link<u32, ()> = None;
    for key in 1..=n {
        link = Some(Box::new(Node { left: link, right: None, key: key, value: () }));
    }

    assert_eq!(Left::extremum(&link).map(|node| node.key), Some(1));
    assert_eq!(count(&link, &cmp, &1), 1);

    insert_dup(&mut link, &cmp, 1, ());
    assert_eq!(count(&link, &cmp, &1), 2);
    assert_eq!(insert(&mut link, &cmp, 0, ()), None);
    assert!(get_mut(&mut link, &cmp, &0).is_some());
    assert_eq!(remove(&mut link, &cmp, &0), Some((0, ())));

    let mut copy = clone(&link);
    assert_eq!(count(&copy, &cmp, &1), 2);
    assert_eq!(Right::extremum(&copy).map(|node| node.key), Some(n));

    clear(&mut copy);
    clear(&mut link);
    assert!(copy.is_none() && link.is_none());
}
