use covey_collection::algorithm::binary_search;
use covey_collection::{Bag, Cursor, ListCursor, Sequence};
use covey_testkit::{AppendOnlyBag, ArraySequence, IndexedSet, LinkedSequence};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Next,
    Previous,
    Remove,
    Set(i32),
    Add(i32),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Next),
        Just(Step::Previous),
        Just(Step::Remove),
        any::<i32>().prop_map(Step::Set),
        any::<i32>().prop_map(Step::Add),
    ]
}

/// Drive one list cursor through `steps`, recording each outcome and the
/// cursor position after it.
fn walk<S>(sequence: &mut S, steps: &[Step]) -> Vec<(covey_collection::Result<Option<i32>>, usize)>
where
    S: Sequence<Item = i32>,
{
    let mut cursor = sequence.list_cursor();
    let mut outcomes = Vec::with_capacity(steps.len());
    for step in steps {
        let outcome = match step {
            Step::Next => cursor.next(&*sequence).map(|e| Some(*e)),
            Step::Previous => cursor.previous(&*sequence).map(|e| Some(*e)),
            Step::Remove => cursor.remove(sequence).map(|()| None),
            Step::Set(element) => cursor.set(sequence, *element).map(Some),
            Step::Add(element) => cursor.add(sequence, *element).map(|()| None),
        };
        outcomes.push((outcome, cursor.next_index()));
    }
    outcomes
}

fn multiset(elements: &[i16]) -> AppendOnlyBag<i16> {
    let mut bag = AppendOnlyBag::new();
    for element in elements {
        bag.add(*element).unwrap();
    }
    bag
}

proptest! {
    #[test]
    fn sequences_equal_across_implementations(elements in prop::collection::vec(any::<i32>(), 0..40)) {
        let array = ArraySequence::from(elements.clone());
        let linked: LinkedSequence<_> = elements.into_iter().collect();
        prop_assert!(array.contents_eq(&linked));
        prop_assert!(linked.contents_eq(&array));
        prop_assert_eq!(array.contents_hash(), linked.contents_hash());
    }

    #[test]
    fn linked_cursor_agrees_with_index_cursor(
        elements in prop::collection::vec(-50i32..50, 0..12),
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let mut array = ArraySequence::from(elements.clone());
        let mut linked: LinkedSequence<_> = elements.into_iter().collect();
        prop_assert_eq!(walk(&mut array, &steps), walk(&mut linked, &steps));
        prop_assert_eq!(array.to_vec(), linked.to_vec());
        prop_assert_eq!(linked.positional_accesses(), 0);
    }

    #[test]
    fn multiset_ignores_order(elements in prop::collection::vec(-5i16..5, 0..30)) {
        let mut reversed = elements.clone();
        reversed.reverse();
        let left = multiset(&elements);
        let right = multiset(&reversed);
        prop_assert!(left.contents_eq(&right));
        prop_assert_eq!(left.contents_hash(), right.contents_hash());
    }

    #[test]
    fn equal_sets_hash_equal(elements in prop::collection::vec(-20i32..20, 0..30)) {
        let forward: IndexedSet<_> = elements.iter().copied().collect();
        let backward: IndexedSet<_> = elements.iter().rev().copied().collect();
        prop_assert!(forward.contents_eq(&backward));
        prop_assert_eq!(forward.contents_hash(), backward.contents_hash());
    }

    #[test]
    fn sort_matches_std_stable_sort(pairs in prop::collection::vec((0u8..4, any::<u16>()), 0..60)) {
        let mut expected = pairs.clone();
        expected.sort_by_key(|(key, _)| *key);
        let mut array = ArraySequence::from(pairs.clone());
        array.sort_by_key(|(key, _)| *key).unwrap();
        prop_assert_eq!(array.to_vec(), expected.clone());
        let mut linked: LinkedSequence<_> = pairs.into_iter().collect();
        linked.sort_by_key(|(key, _)| *key).unwrap();
        prop_assert_eq!(linked.to_vec(), expected);
    }

    #[test]
    fn snapshot_round_trip(elements in prop::collection::vec(any::<i64>(), 0..40)) {
        let original = ArraySequence::from(elements);
        let copy = ArraySequence::from(original.to_array().into_vec());
        prop_assert_eq!(original, copy);
    }

    #[test]
    fn binary_search_finds_members(mut elements in prop::collection::vec(any::<i32>(), 0..60), needle in any::<i32>()) {
        elements.sort();
        elements.dedup();
        let sequence = ArraySequence::from(elements.clone());
        prop_assert_eq!(binary_search(&sequence, &needle), Ok(elements.binary_search(&needle)));
    }

    #[test]
    fn sub_sequence_matches_slice(elements in prop::collection::vec(any::<u8>(), 1..40), cut in any::<prop::sample::Index>()) {
        let sequence = ArraySequence::from(elements.clone());
        let from = cut.index(elements.len());
        let view = sequence.sub_sequence(from, elements.len()).unwrap();
        prop_assert_eq!(view.to_vec(), elements[from..].to_vec());
    }
}
