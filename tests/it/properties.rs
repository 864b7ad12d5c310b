//! Property-based checks of the key-allocation and purity invariants.

use mixed_collection::{Collection, Key};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Add(u8),
    Set(Key, u8),
    Remove(Key),
}

/// Small key space so sets and removes frequently hit existing entries.
fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        (0i64..8).prop_map(Key::Index),
        prop::sample::select(vec!["a", "b", "c"]).prop_map(|s| Key::from(s)),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::Add),
        (key_strategy(), any::<u8>()).prop_map(|(k, v)| Op::Set(k, v)),
        key_strategy().prop_map(Op::Remove),
    ]
}

fn build(ops: &[Op]) -> Collection<u8> {
    let mut c = Collection::new();
    for op in ops {
        match op {
            Op::Add(v) => {
                c.add(*v);
            }
            Op::Set(k, v) => {
                c.set(k, *v);
            }
            Op::Remove(k) => {
                c.remove(k);
            }
        }
    }
    c
}

fn snapshot(c: &Collection<u8>) -> Vec<(Key, u8)> {
    c.iter().map(|(k, v)| (k.clone(), *v)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn set_then_get(ops in prop::collection::vec(op_strategy(), 0..32), key in key_strategy(), v in any::<u8>()) {
        let mut c = build(&ops);
        c.set(&key, v);
        prop_assert!(c.contains_key(&key));
        prop_assert_eq!(c.get(&key), Some(&v));
    }

    #[test]
    fn keys_stay_unique(ops in prop::collection::vec(op_strategy(), 0..32)) {
        let c = build(&ops);
        let mut keys: Vec<_> = c.keys().cloned().collect();
        let before = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), before);
    }

    #[test]
    fn add_exceeds_every_integer_key(ops in prop::collection::vec(op_strategy(), 0..32), v in any::<u8>()) {
        let mut c = build(&ops);
        let max_present = c.keys().filter_map(Key::as_index).max();
        let assigned = c.push(v);
        prop_assert!(assigned.is_some());
        if let (Some(assigned), Some(max_present)) = (assigned, max_present) {
            prop_assert!(assigned > max_present);
        }
    }

    #[test]
    fn remove_keeps_other_entries(ops in prop::collection::vec(op_strategy(), 0..32), key in key_strategy()) {
        let mut c = build(&ops);
        let expected: Vec<_> = snapshot(&c).into_iter().filter(|(k, _)| *k != key).collect();
        c.remove(&key);
        prop_assert_eq!(snapshot(&c), expected);
    }

    #[test]
    fn transformations_are_pure(ops in prop::collection::vec(op_strategy(), 0..32), offset in -6isize..6, length in prop::option::of(-6isize..6)) {
        let c = build(&ops);
        let before = snapshot(&c);

        let mapped = c.map(|v| u16::from(*v) * 2);
        let filtered = c.filter(|v| v % 2 == 0);
        let sliced = c.slice(offset, length);

        prop_assert_eq!(snapshot(&c), before.clone());
        prop_assert_eq!(mapped.keys().collect::<Vec<_>>(), c.keys().collect::<Vec<_>>());

        let kept: Vec<_> = before.iter().filter(|(_, v)| v % 2 == 0).cloned().collect();
        prop_assert_eq!(snapshot(&filtered), kept);

        // Every sliced entry appears in the source, in the same relative order
        let positions: Vec<_> = sliced
            .keys()
            .map(|k| before.iter().position(|(bk, _)| bk == k))
            .collect();
        prop_assert!(positions.iter().all(Option::is_some));
        prop_assert!(positions.windows(2).all(|w| w[0].unwrap() + 1 == w[1].unwrap()));
    }

    #[test]
    fn clear_always_empties(ops in prop::collection::vec(op_strategy(), 0..32)) {
        let mut c = build(&ops);
        c.clear();
        prop_assert_eq!(c.count(), 0);
        prop_assert_eq!(c.next_index(), Some(0));
    }
}
