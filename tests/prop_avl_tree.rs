//! Property tests for the avl tree invariants under arbitrary insert and remove sequences.

use avl_collections::avl_tree::AvlMap;
use avl_collections::equal_paths;
use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(i16, u8),
    Remove(i16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<i16>(), any::<u8>()).prop_map(|(key, value)| Op::Insert(key, value)),
        2 => any::<i16>().prop_map(Op::Remove),
    ]
}

proptest! {
    /// Every sequence of updates leaves a well-formed tree that agrees with `BTreeMap`.
    #[test]
    fn prop_matches_btreemap(ops in prop::collection::vec(op(), 0..300)) {
        let mut map = AvlMap::new();
        let mut expected = BTreeMap::new();
        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    prop_assert_eq!(map.insert(key, value), expected.insert(key, value));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(map.remove(&key), expected.remove_entry(&key));
                }
            }
            prop_assert!(map.check().is_ok());
        }

        prop_assert_eq!(map.len(), expected.len());
        prop_assert!(map.iter().eq(expected.iter()));
    }

    /// The contents of the map do not depend on the order in which keys were inserted.
    #[test]
    fn prop_permutation_independent(
        keys in prop::collection::vec(any::<i32>(), 0..200).prop_shuffle()
    ) {
        let forward: AvlMap<i32, ()> = keys.iter().map(|key| (*key, ())).collect();
        let backward: AvlMap<i32, ()> = keys.iter().rev().map(|key| (*key, ())).collect();

        prop_assert_eq!(&forward, &backward);
        prop_assert!(forward.check().is_ok());
        prop_assert!(backward.check().is_ok());
    }

    /// Removing a key twice is the same as removing it once.
    #[test]
    fn prop_remove_idempotent(
        keys in prop::collection::btree_set(any::<u16>(), 1..200),
        index in any::<prop::sample::Index>()
    ) {
        let keys = keys.into_iter().collect::<Vec<u16>>();
        let target = *index.get(&keys);
        let mut map: AvlMap<u16, ()> = keys.iter().map(|key| (*key, ())).collect();

        prop_assert_eq!(map.remove(&target), Some((target, ())));
        let once = map.clone();
        prop_assert_eq!(map.remove(&target), None);
        prop_assert_eq!(&map, &once);
        prop_assert_eq!(map.len(), keys.len() - 1);
    }

    /// Full trees built from ascending keys have all leaves on the last level.
    #[test]
    fn prop_perfect_trees_have_equal_paths(levels in 1u32..10) {
        let map: AvlMap<u32, ()> = (0..(1u32 << levels) - 1).map(|key| (key, ())).collect();

        prop_assert_eq!(map.height(), levels as usize);
        prop_assert!(equal_paths(map.root()));
    }
}
