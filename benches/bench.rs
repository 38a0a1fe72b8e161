use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ordtree::{OrderedMap, OrderedTree};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

// Sequential keys degrade the tree to a list, so those benches stay small.
macro_rules! map_insert_rand_bench {
    ($c: expr, $name: expr, $n: expr) => {{
        let n: usize = $n;
        let mut map = OrderedMap::new();
        // setup
        let mut rng = StdRng::seed_from_u64(n as u64);

        for _ in 0..n {
            let i = rng.gen::<usize>() % n;
            map.insert(i, i);
        }

        // measure
        $c.bench_function($name, |b| b.iter(|| {
            let k = rng.gen::<usize>() % n;
            black_box(map.insert(k, k));
        }));
    }}
}

macro_rules! map_insert_seq_bench {
    ($c: expr, $name: expr, $n: expr) => {{
        let n: usize = $n;
        let mut map = OrderedMap::new();
        // setup
        for i in 0..n {
            map.insert(i * 2, i * 2);
        }

        // measure
        let mut i = 1;
        $c.bench_function($name, |b| b.iter(|| {
            black_box(map.insert(i, i));
            i = (i + 2) % n;
        }));
    }}
}

macro_rules! map_find_rand_bench {
    ($c: expr, $name: expr, $n: expr) => {{
        let n: usize = $n;
        let mut map = OrderedMap::new();

        // setup
        let mut rng = StdRng::seed_from_u64(n as u64);
        let mut keys: Vec<_> = (0..n).map(|_| rng.gen::<usize>() % n).collect();

        for &k in &keys {
            map.insert(k, k);
        }

        keys.shuffle(&mut rng);

        // measure
        let mut i = 0;
        $c.bench_function($name, |b| b.iter(|| {
            black_box(map.get(&keys[i]).ok());
            i = (i + 1) % n;
        }));
    }}
}

macro_rules! map_iter_bench {
    ($c: expr, $name: literal, $n: expr) => {{
        let n: usize = $n;
        let mut rng = StdRng::seed_from_u64(n as u64);
        let mut map = OrderedMap::<u32, u32>::new();

        for _ in 0..n {
            map.insert(rng.gen(), rng.gen());
        }

        $c.bench_function(concat!($name, "_iter"), |b| b.iter(|| {
            for entry in map.iter() {
                black_box(entry);
            }
        }));

        $c.bench_function(concat!($name, "_keys"), |b| b.iter(|| {
            for key in map.keys() {
                black_box(key);
            }
        }));
    }}
}

macro_rules! tree_remove_rand_bench {
    ($c: expr, $name: expr, $n: expr) => {{
        let n: usize = $n;
        let mut rng = StdRng::seed_from_u64(n as u64);
        let items: Vec<u32> = (0..n).map(|_| rng.gen::<u32>() % n as u32).collect();
        let tree: OrderedTree<u32> = items.iter().cloned().collect();

        $c.bench_function($name, |b| b.iter(|| {
            let mut tree = tree.clone();
            for item in &items {
                black_box(tree.remove(item).ok());
            }
        }));
    }}
}

fn insert(c: &mut Criterion) {
    map_insert_rand_bench!(c, "insert_rand_100", 100);
    map_insert_rand_bench!(c, "insert_rand_10_000", 10_000);

    map_insert_seq_bench!(c, "insert_seq_100", 100);
    map_insert_seq_bench!(c, "insert_seq_1000", 1000);
}

fn find(c: &mut Criterion) {
    map_find_rand_bench!(c, "find_rand_100", 100);
    map_find_rand_bench!(c, "find_rand_10_000", 10_000);
}

fn iter(c: &mut Criterion) {
    map_iter_bench!(c, "map_100", 100);
    map_iter_bench!(c, "map_1000", 1000);
    map_iter_bench!(c, "map_100_000", 100_000);
}

fn remove(c: &mut Criterion) {
    tree_remove_rand_bench!(c, "tree_remove_rand_1000", 1000);
}

criterion_group!(benches, insert, find, iter, remove);
criterion_main!(benches);
