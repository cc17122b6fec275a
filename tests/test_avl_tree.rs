use avl_collections::avl_tree::{AvlMap, AvlSet};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::vec::Vec;

fn assert_height_bound(height: usize, len: usize) {
    let bound = 1.45 * ((len + 2) as f64).log2();
    assert!(
        height as f64 <= bound,
        "height {} exceeds bound {} for {} nodes",
        height,
        bound,
        len,
    );
}

#[test]
fn int_test_avlmap() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut map = AvlMap::new();
    let mut expected = Vec::new();
    for _ in 0..100_000 {
        let key = rng.gen::<u32>();
        let val = rng.gen::<u32>();

        map.insert(key, val);
        expected.push((key, val));
    }

    expected.reverse();
    expected.sort_by(|l, r| l.0.cmp(&r.0));
    expected.dedup_by_key(|pair| pair.0);

    assert_eq!(map.len(), expected.len());
    assert_eq!(map.check(), Ok(map.height()));
    assert_height_bound(map.height(), map.len());

    assert_eq!(map.min(), Some(&expected[0].0));
    assert_eq!(map.max(), Some(&expected[expected.len() - 1].0));

    for entry in &expected {
        assert!(map.contains_key(&entry.0));
        assert_eq!(map.get(&entry.0), Some(&entry.1));
    }

    for entry in &mut expected {
        let val_1 = rng.gen::<u32>();
        let val_2 = rng.gen::<u32>();

        let old_val = map.insert(entry.0, val_1);
        assert_eq!(old_val, Some(entry.1));
        {
            let old_val = map.get_mut(&entry.0);
            *old_val.unwrap() = val_2;
        }
        entry.1 = val_2;
        assert_eq!(map.get(&entry.0), Some(&val_2));
    }
    assert_eq!(map.len(), expected.len());

    expected.shuffle(&mut rng);

    let mut expected_len = expected.len();
    for entry in expected {
        let old_entry = map.remove(&entry.0);
        expected_len -= 1;
        assert_eq!(old_entry, Some((entry.0, entry.1)));
        assert_eq!(map.len(), expected_len);
    }
    assert_eq!(map.check(), Ok(0));
}

#[test]
fn int_test_avlmap_against_btreemap() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut map = AvlMap::new();
    let mut expected = BTreeMap::new();
    for step in 0..20_000 {
        let key = rng.gen_range(0..512u32);
        if rng.gen_bool(0.6) {
            let val = rng.gen::<u32>();
            assert_eq!(map.insert(key, val), expected.insert(key, val));
        } else {
            assert_eq!(map.remove(&key), expected.remove_entry(&key));
        }

        assert_eq!(map.len(), expected.len());
        if step % 97 == 0 {
            assert_eq!(map.check(), Ok(map.height()));
            assert_height_bound(map.height(), map.len());
            assert!(map.iter().eq(expected.iter()));
        }
    }

    assert!(map.iter().rev().eq(expected.iter().rev()));
    for probe in 0..520u32 {
        assert_eq!(map.floor(&probe), expected.range(..=probe).next_back().map(|e| e.0));
        assert_eq!(map.ceil(&probe), expected.range(probe..).next().map(|e| e.0));
    }
}

#[test]
fn int_test_avlmap_round_trip() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut keys = (0..2_000u32).collect::<Vec<u32>>();

    for _ in 0..5 {
        keys.shuffle(&mut rng);
        let mut map = AvlMap::new();
        for key in &keys {
            map.insert(*key, ());
        }
        assert_eq!(map.check(), Ok(map.height()));

        keys.shuffle(&mut rng);
        for key in &keys {
            assert_eq!(map.remove(key), Some((*key, ())));
            assert_eq!(map.remove(key), None);
        }
        assert!(map.is_empty());
        assert_eq!(map.root().map(|node| *node.key()), None);
        assert_eq!(map.check(), Ok(0));
    }
}

#[test]
fn int_test_avlmap_sorted_inserts() {
    let mut map = AvlMap::new();
    for key in 0..(1u32 << 12) - 1 {
        map.insert(key, key);
    }
    // Ascending inserts produce a perfect tree when the size is one less than a power of two.
    assert_eq!(map.height(), 12);
    assert_eq!(map.check(), Ok(12));

    for key in (0..(1u32 << 12) - 1).step_by(2) {
        map.remove(&key);
    }
    assert_eq!(map.check(), Ok(map.height()));
    assert!(map.keys().copied().eq((1..(1u32 << 12) - 1).step_by(2)));
}

#[test]
fn int_test_scenarios() {
    for order in &[[10, 20, 30], [30, 20, 10], [10, 30, 20]] {
        let mut map = AvlMap::new();
        for key in order {
            map.insert(*key, ());
        }
        let root = map.root().unwrap();
        assert_eq!(root.key(), &20);
        assert_eq!(root.balance(), 0);
        assert_eq!(root.left().map(|node| (*node.key(), node.balance())), Some((10, 0)));
        assert_eq!(root.right().map(|node| (*node.key(), node.balance())), Some((30, 0)));
    }

    let mut map = AvlMap::new();
    for key in 1..=7 {
        map.insert(key, ());
    }
    assert_eq!(map.root().map(|node| *node.key()), Some(4));
    assert_eq!(map.height(), 3);

    map.remove(&4);
    assert_eq!(map.root().map(|node| *node.key()), Some(3));
    assert!(map.keys().copied().eq(vec![1, 2, 3, 5, 6, 7]));
    assert!(map.height() <= 3);
    assert_eq!(map.check(), Ok(map.height()));
}

#[test]
fn int_test_avlset() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut set = AvlSet::new();
    let mut expected = Vec::new();
    for _ in 0..50_000 {
        let key = rng.gen::<u32>();

        set.insert(key);
        expected.push(key);
    }

    expected.sort();
    expected.dedup();

    assert_eq!(set.len(), expected.len());
    assert_eq!(set.check(), Ok(set.height()));
    assert!(set.iter().eq(expected.iter()));

    expected.shuffle(&mut rng);

    let mut expected_len = expected.len();
    for key in expected {
        assert_eq!(set.remove(&key), Some(key));
        expected_len -= 1;
        assert_eq!(set.len(), expected_len);
    }
}
