use avl_collections::avl_tree::AvlMap;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 100;

fn keys() -> Vec<(u32, u32)> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..NUM_OF_OPERATIONS)
        .map(|_| (rng.gen::<u32>(), rng.gen::<u32>()))
        .collect()
}

fn bench_btreemap_insert(c: &mut Criterion) {
    let pairs = keys();
    c.bench_function("bench btreemap insert", move |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for (key, val) in &pairs {
                map.insert(*key, *val);
            }
            map
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let pairs = keys();
    let map = pairs.iter().cloned().collect::<BTreeMap<u32, u32>>();

    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for (key, _) in &pairs {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_avlmap_insert(c: &mut Criterion) {
    let pairs = keys();
    c.bench_function("bench avl_tree insert", move |b| {
        b.iter(|| {
            let mut map = AvlMap::new();
            for (key, val) in &pairs {
                map.insert(*key, *val);
            }
            map
        })
    });
}

fn bench_avlmap_get(c: &mut Criterion) {
    let pairs = keys();
    let map = pairs.iter().cloned().collect::<AvlMap<u32, u32>>();

    c.bench_function("bench avl_tree get", move |b| {
        b.iter(|| {
            for (key, _) in &pairs {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_avlmap_remove(c: &mut Criterion) {
    let pairs = keys();
    let map = pairs.iter().cloned().collect::<AvlMap<u32, u32>>();

    c.bench_function("bench avl_tree remove", move |b| {
        b.iter(|| {
            let mut map = map.clone();
            for (key, _) in &pairs {
                black_box(map.remove(key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreemap_insert,
    bench_btreemap_get,
    bench_avlmap_insert,
    bench_avlmap_get,
    bench_avlmap_remove,
);
criterion_main!(benches);
