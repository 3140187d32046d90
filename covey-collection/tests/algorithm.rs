use covey_collection::algorithm::{binary_search, binary_search_by};
use covey_collection::{is_random_access, Sequence};
use covey_testkit::{ArraySequence, LinkedSequence};
use rstest::rstest;

#[rstest]
#[case(0, Ok(0))]
#[case(4000, Ok(2000))]
#[case(4001, Err(2001))]
#[case(-1, Err(0))]
#[case(9998, Ok(4999))]
#[case(10000, Err(5000))]
fn test_cursor_search(#[case] key: i32, #[case] expected: Result<usize, usize>) {
    // large enough to walk a cursor instead of probing by index
    let sequence: LinkedSequence<i32> = (0..10000).step_by(2).collect();
    assert!(!is_random_access::<LinkedSequence<i32>>());
    assert_eq!(binary_search(&sequence, &key), Ok(expected));
    assert_eq!(sequence.positional_accesses(), 0);
}

#[rstest]
#[case(3, Ok(1))]
#[case(4, Err(2))]
#[case(100, Err(5))]
fn test_indexed_search(#[case] key: i32, #[case] expected: Result<usize, usize>) {
    let sequence = ArraySequence::from(vec![1, 3, 5, 7, 9]);
    assert_eq!(binary_search(&sequence, &key), Ok(expected));
    let small: LinkedSequence<_> = [1, 3, 5, 7, 9].into_iter().collect();
    assert_eq!(binary_search(&small, &key), Ok(expected));
}

#[rstest]
fn test_search_by_key() {
    let sequence = ArraySequence::from(vec![(1, 'a'), (4, 'b'), (9, 'c')]);
    assert_eq!(
        binary_search_by(&sequence, |(key, _)| key.cmp(&4)),
        Ok(Ok(1))
    );
    let empty = ArraySequence::<(i32, char)>::new();
    assert_eq!(binary_search_by(&empty, |(key, _)| key.cmp(&4)), Ok(Err(0)));
}

#[rstest]
fn test_search_sub_sequence() {
    let sequence: ArraySequence<_> = (0..20).collect();
    let view = sequence.sub_sequence(10, 20).unwrap();
    assert_eq!(binary_search(&view, &15), Ok(Ok(5)));
    assert_eq!(binary_search(&view, &3), Ok(Err(0)));
}
