#![cfg(test)]

use std::hash::{BuildHasher, Hash};

use proptest::prelude::*;

use super::*;
use crate::util::hash::CollidingHasherBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Arrow {
    Iron,
    Wooden,
    Dwarvish,
    Magic,
    Silver,
}

fn quiver() -> CountedSet<Arrow> {
    CountedSet::from([
        Arrow::Iron,
        Arrow::Magic,
        Arrow::Iron,
        Arrow::Silver,
        Arrow::Iron,
        Arrow::Iron,
    ])
}

fn sorted<T: Hash + Ord + Clone, B: BuildHasher>(set: &CountedSet<T, B>) -> Vec<(T, usize)> {
    let mut entries = set.iter().map(|(item, count)| (item.clone(), count)).collect::<Vec<_>>();
    entries.sort();
    entries
}

#[test]
fn test_empty() {
    let set = CountedSet::<Arrow>::new();
    assert_eq!(set.count(&Arrow::Iron), 0, "Nothing has been inserted yet.");
    assert_eq!(set.unique_count(), 0);
    assert_eq!(set.total_count(), 0);
    assert!(set.is_empty());
    assert_eq!(set, CountedSet::default(), "New and default sets should be equal.");
}

#[test]
fn test_quiver_counts() {
    let set = quiver();
    assert_eq!(set.count(&Arrow::Iron), 4);
    assert_eq!(set.count(&Arrow::Magic), 1);
    assert_eq!(set.count(&Arrow::Silver), 1);
    assert_eq!(set.count(&Arrow::Dwarvish), 0);
    assert_eq!(
        set.unique_count(), 3,
        "Unique count should ignore how many times each arrow was inserted."
    );
    assert_eq!(set.total_count(), 6, "Total count should include every occurrence.");
    assert!(!set.is_empty());
}

#[test]
fn test_remove_until_gone() {
    let mut set = quiver();
    for _ in 0..3 {
        set.remove(&Arrow::Iron);
    }
    assert_eq!(set.count(&Arrow::Iron), 1);
    assert_eq!(set.unique_count(), 3);

    set.remove(&Arrow::Iron);
    assert_eq!(set.count(&Arrow::Iron), 0);
    assert!(!set.contains(&Arrow::Iron));
    assert_eq!(
        set.unique_count(), 2,
        "An element with no occurrences left shouldn't contribute to the unique count."
    );

    set.remove(&Arrow::Iron);
    assert_eq!(set.count(&Arrow::Iron), 0, "Removing past zero should do nothing.");
}

#[test]
fn test_remove_absent() {
    let mut set = quiver();
    let before = set.clone();

    set.remove(&Arrow::Dwarvish);
    assert_eq!(set, before, "Removing an element that was never inserted should change nothing.");

    let mut empty = CountedSet::<Arrow>::new();
    empty.remove(&Arrow::Wooden);
    assert!(empty.is_empty());
}

#[test]
fn test_insert_then_remove() {
    let mut set = quiver();
    let before = set.clone();

    set.insert(Arrow::Wooden);
    set.remove(&Arrow::Wooden);
    assert_eq!(set, before, "A new element should be fully removed again.");

    set.insert(Arrow::Magic);
    set.remove(&Arrow::Magic);
    assert_eq!(set, before, "An existing element should return to its previous count.");
}

#[test]
fn test_clones_are_independent() {
    let mut original = quiver();
    let copy = original.clone();

    original.remove(&Arrow::Silver);
    original.insert(Arrow::Wooden);

    assert_eq!(copy.count(&Arrow::Silver), 1, "Mutating the original shouldn't affect a copy.");
    assert_eq!(copy.count(&Arrow::Wooden), 0);
    assert_ne!(original, copy);
}

#[test]
fn test_borrowed_lookup() {
    let mut set = CountedSet::<String>::new();
    set.insert("iron".to_owned());
    set.insert("iron".to_owned());

    assert_eq!(set.count("iron"), 2, "Lookups should accept borrowed forms of the element.");
    assert!(set.contains("iron"));

    set.remove("iron");
    assert_eq!(set.count("iron"), 1);
    assert_eq!(set.remove_all("iron"), 1);
    assert!(set.is_empty());
}

#[test]
fn test_insert_many() {
    let mut set = quiver();
    assert_eq!(set.insert_many(Arrow::Iron, 3), Ok(7));
    assert_eq!(set.insert_many(Arrow::Wooden, 2), Ok(2));

    assert_eq!(set.insert_many(Arrow::Dwarvish, 0), Ok(0));
    assert!(
        !set.contains(&Arrow::Dwarvish),
        "Inserting zero occurrences shouldn't create an entry."
    );

    set.set_count(Arrow::Magic, usize::MAX);
    assert_eq!(
        set.insert_many(Arrow::Magic, 1),
        Err(CountOverflow { count: usize::MAX, additional: 1 })
    );
    assert_eq!(set.count(&Arrow::Magic), usize::MAX, "A failed insertion shouldn't change counts.");

    set.insert(Arrow::Magic);
    assert_eq!(set.count(&Arrow::Magic), usize::MAX, "Single insertions should saturate.");
    assert_eq!(set.total_count(), usize::MAX, "The total count should saturate.");
}

#[test]
fn test_remove_many() {
    let mut set = quiver();
    assert_eq!(
        set.remove_many(&Arrow::Iron, 5),
        Err(InsufficientCount { requested: 5, available: 4 })
    );
    assert_eq!(set.count(&Arrow::Iron), 4, "A failed removal shouldn't change counts.");

    assert_eq!(set.remove_many(&Arrow::Iron, 3), Ok(1));
    assert_eq!(set.remove_many(&Arrow::Iron, 1), Ok(0));
    assert!(!set.contains(&Arrow::Iron));

    assert_eq!(set.remove_many(&Arrow::Dwarvish, 0), Ok(0));
    assert_eq!(
        set.remove_many(&Arrow::Dwarvish, 1),
        Err(InsufficientCount { requested: 1, available: 0 })
    );
    assert_eq!(set.unique_count(), 2);
}

#[test]
fn test_set_count_and_remove_all() {
    let mut set = quiver();
    assert_eq!(set.set_count(Arrow::Iron, 2), 4, "The previous count should be returned.");
    assert_eq!(set.count(&Arrow::Iron), 2);

    assert_eq!(set.set_count(Arrow::Wooden, 5), 0);
    assert_eq!(set.set_count(Arrow::Magic, 0), 1);
    assert!(!set.contains(&Arrow::Magic), "Setting a count of zero should remove the element.");

    assert_eq!(set.remove_all(&Arrow::Wooden), 5);
    assert_eq!(set.remove_all(&Arrow::Wooden), 0);
    assert_eq!(sorted(&set), [(Arrow::Iron, 2), (Arrow::Silver, 1)]);

    set.clear();
    assert!(set.is_empty());
}

#[test]
fn test_adjust() {
    let mut set = quiver();
    assert_eq!(set.adjust(Arrow::Iron, 2), Ok(6));
    assert_eq!(set.adjust(Arrow::Iron, -5), Ok(1));
    assert_eq!(set.adjust(Arrow::Iron, 0), Ok(1));

    let error = set.adjust(Arrow::Silver, -2).expect_err("Only one silver arrow is present.");
    assert!(error.is_insufficient_count());
    let error: InsufficientCount = error.try_into().expect("Should be an InsufficientCount.");
    assert_eq!(error, InsufficientCount { requested: 2, available: 1 });

    set.set_count(Arrow::Magic, usize::MAX);
    assert!(set.adjust(Arrow::Magic, 1).is_err_and(|e| e.is_count_overflow()));
}

#[test]
fn test_errors_display() {
    assert_eq!(
        CountError::from(InsufficientCount { requested: 2, available: 1 }).to_string(),
        "Unable to remove 2 occurrences of an element with only 1!"
    );
    assert_eq!(
        CountError::from(CountOverflow { count: 1, additional: 2 }).to_string(),
        "Count overflow: can't add 2 occurrences to an element with 1!"
    );
}

#[test]
fn test_hash_collisions() {
    let mut set = CountedSet::<&str, _>::with_hasher(CollidingHasherBuilder::new(1));
    set.extend(["zero", "one", "two", "one", "three", "two", "one"]);

    assert_eq!(set.count("one"), 3, "Colliding elements should still be counted separately.");
    assert_eq!(set.count("two"), 2);
    assert_eq!(set.unique_count(), 4);

    set.remove("zero");
    set.remove("two");
    assert_eq!(
        sorted(&set),
        [("one", 3), ("three", 1), ("two", 1)],
        "Removing colliding elements shouldn't lose any other elements."
    );

    let mut set = CountedSet::<u32, _>::with_cap_and_hasher(2, CollidingHasherBuilder::new(3));
    for value in 0_u32..50 {
        set.insert_many(value, value as usize % 4).expect("Counts are small.");
    }
    for value in 0_u32..50 {
        assert_eq!(
            set.count(&value),
            value as usize % 4,
            "Counts should survive growth with only a few distinct hashes."
        );
    }
}

#[test]
fn test_iterators() {
    let set = quiver();

    let mut elements = set.elements().copied().collect::<Vec<_>>();
    elements.sort();
    assert_eq!(
        elements,
        [Arrow::Iron, Arrow::Iron, Arrow::Iron, Arrow::Iron, Arrow::Magic, Arrow::Silver],
        "Each element should be produced once per occurrence."
    );

    let mut distinct = set.distinct().copied().collect::<Vec<_>>();
    distinct.sort();
    assert_eq!(distinct, [Arrow::Iron, Arrow::Magic, Arrow::Silver]);
    assert_eq!(set.iter().len(), 3);

    let mut owned = set.into_iter().collect::<Vec<_>>();
    owned.sort();
    assert_eq!(owned, [(Arrow::Iron, 4), (Arrow::Magic, 1), (Arrow::Silver, 1)]);
}

#[test]
fn test_from_pairs() {
    let set: CountedSet<&str> = [("iron", 2_usize), ("magic", 0), ("iron", 1), ("silver", 1)]
        .into_iter()
        .collect();

    assert_eq!(set.count("iron"), 3, "Counts for repeated elements should be added.");
    assert!(!set.contains("magic"), "Zero counts shouldn't create entries.");
    assert_eq!(set.unique_count(), 2);
}

#[test]
fn test_operators() {
    let a = CountedSet::<&str>::from(["x", "x", "x", "y"]);
    let b = CountedSet::<&str>::from(["x", "z", "z"]);

    assert_eq!(sorted(&(&a + &b)), [("x", 4), ("y", 1), ("z", 2)]);
    assert_eq!(sorted(&(&a | &b)), [("x", 3), ("y", 1), ("z", 2)]);
    assert_eq!(sorted(&(&a & &b)), [("x", 1)]);
    assert_eq!(sorted(&(&a - &b)), [("x", 2), ("y", 1)]);
    assert_eq!(sorted(&(&b - &a)), [("z", 2)]);

    let mut c = a.clone();
    c += b.clone();
    assert_eq!(c, &a + &b, "AddAssign should match Add.");

    c -= b.clone();
    assert_eq!(c, a, "Subtracting what was added should restore the original.");

    let mut d = b.clone();
    d -= a.clone();
    assert_eq!(d, &b - &a, "SubAssign should match Sub.");
}

#[test]
fn test_formatting() {
    let set = CountedSet::<&str>::from(["iron", "iron"]);
    assert_eq!(set.to_string(), "#{iron: 2}");

    let debug = format!("{set:?}");
    assert!(debug.starts_with("CountedSet { entries: #{\"iron\": 2}, unique_count: 1"));
    assert!(debug.contains("total_count: 2"));

    assert_eq!(CountedSet::<&str>::new().to_string(), "#{}");
}

proptest! {
    #[test]
    fn prop_insert_n_times(item in any::<u8>(), n in 0_usize..64) {
        let mut set = CountedSet::<u8>::new();
        prop_assert_eq!(set.count(&item), 0);

        for _ in 0..n {
            set.insert(item);
        }
        prop_assert_eq!(set.count(&item), n);
        prop_assert_eq!(set.unique_count(), usize::from(n > 0));
    }

    #[test]
    fn prop_counts_match_occurrences(items in prop::collection::vec(0_u8..8, 0..64)) {
        let set: CountedSet<u8> = items.iter().copied().collect();

        for value in 0_u8..8 {
            prop_assert_eq!(set.count(&value), items.iter().filter(|i| **i == value).count());
        }

        let mut distinct = items.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(set.unique_count(), distinct.len());
        prop_assert_eq!(set.total_count(), items.len());
        prop_assert_eq!(set.is_empty(), set.unique_count() == 0);
    }

    #[test]
    fn prop_order_independent(mut items in prop::collection::vec(0_u8..8, 0..64)) {
        let forward: CountedSet<u8> = items.iter().copied().collect();
        items.reverse();
        let backward: CountedSet<u8> = items.iter().copied().collect();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_insert_then_remove(items in prop::collection::vec(0_u8..8, 0..32), extra in 0_u8..10) {
        let before: CountedSet<u8> = items.iter().copied().collect();
        let mut after = before.clone();

        after.insert(extra);
        after.remove(&extra);
        prop_assert_eq!(&after, &before);
        prop_assert_eq!(after.unique_count(), before.unique_count());
    }

    #[test]
    fn prop_remove_absent(items in prop::collection::vec(0_u8..8, 0..32), absent in 8_u8..=u8::MAX) {
        let mut set: CountedSet<u8> = items.iter().copied().collect();
        let before = set.clone();

        set.remove(&absent);
        prop_assert_eq!(set.count(&absent), 0);
        prop_assert_eq!(set, before);
    }
}
