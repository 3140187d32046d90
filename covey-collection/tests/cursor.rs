use std::cell::Cell;

use covey_collection::error::{Operation, Violation};
use covey_collection::{
    Bag, Cursor, CursorSpliterator, Error, FailFast, Family, IndexCursor, ListCursor, Result,
    Sequence,
};
use covey_testkit::{AppendOnlyBag, ArraySequence, FrozenSequence, IndexedSet, LinkedSequence};
use insta::assert_debug_snapshot;
use rstest::{fixture, rstest};

/// A bag whose generation can move while it is shared.
struct Restless {
    elements: Vec<i32>,
    generation: Cell<u64>,
}

impl Restless {
    fn touch(&self) {
        self.generation.set(self.generation.get() + 1);
    }
}

struct RestlessCursor {
    next: usize,
    fail_fast: FailFast,
}

impl Cursor<Restless> for RestlessCursor {
    fn has_next(&self, source: &Restless) -> bool {
        self.next < source.elements.len()
    }

    fn next<'s>(&mut self, source: &'s Restless) -> Result<&'s i32> {
        self.fail_fast.check(source.generation())?;
        let element = source.elements.get(self.next).ok_or(Error::NoSuchElement)?;
        self.next += 1;
        Ok(element)
    }
}

impl Bag for Restless {
    type Item = i32;
    type Cursor = RestlessCursor;
    type Spliterator = CursorSpliterator<Self>;

    const FAMILY: Family = Family::Multiset;

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn generation(&self) -> u64 {
        self.generation.get()
    }

    fn cursor(&self) -> RestlessCursor {
        RestlessCursor {
            next: 0,
            fail_fast: FailFast::new(self.generation()),
        }
    }
}

#[fixture]
fn restless() -> Restless {
    Restless {
        elements: vec![1, 2, 3],
        generation: Cell::new(0),
    }
}

#[fixture]
fn tens() -> ArraySequence<i32> {
    ArraySequence::from(vec![10, 20, 30])
}

#[rstest]
fn test_fail_fast_after_external_add(mut tens: ArraySequence<i32>) {
    let mut cursor = tens.cursor();
    assert_eq!(cursor.next(&tens), Ok(&10));
    tens.add(40).unwrap();
    assert_eq!(cursor.next(&tens), Err(Error::ConcurrentModification));
    // stays invalidated
    assert_eq!(cursor.next(&tens), Err(Error::ConcurrentModification));
}

#[rstest]
fn test_fail_fast_ignores_set(mut tens: ArraySequence<i32>) {
    let mut cursor = tens.cursor();
    cursor.next(&tens).unwrap();
    tens.set(2, 99).unwrap();
    assert_eq!(cursor.next(&tens), Ok(&20));
    assert_eq!(cursor.next(&tens), Ok(&99));
}

#[rstest]
fn test_fail_fast_on_set_cursor() {
    let mut set: IndexedSet<_> = [1, 2].into_iter().collect();
    let mut cursor = set.cursor();
    cursor.next(&set).unwrap();
    set.remove(&2).unwrap();
    assert_eq!(cursor.next(&set), Err(Error::ConcurrentModification));
}

#[rstest]
fn test_fail_fast_on_removal_by_other_cursor(mut tens: ArraySequence<i32>) {
    let mut first = tens.list_cursor();
    let mut second = tens.list_cursor();
    first.next(&tens).unwrap();
    second.next(&tens).unwrap();
    first.remove(&mut tens).unwrap();
    assert_eq!(first.next(&tens), Ok(&20));
    assert_eq!(second.next(&tens), Err(Error::ConcurrentModification));
}

#[rstest]
fn test_exhausted(tens: ArraySequence<i32>) {
    let mut cursor = tens.cursor();
    while cursor.has_next(&tens) {
        cursor.next(&tens).unwrap();
    }
    assert_eq!(cursor.next(&tens), Err(Error::NoSuchElement));
    let mut backwards = tens.list_cursor();
    assert!(!backwards.has_previous());
    assert_eq!(backwards.previous(&tens), Err(Error::NoSuchElement));
}

#[rstest]
fn test_remove_requires_current_element(mut tens: ArraySequence<i32>) {
    let mut cursor = tens.list_cursor();
    let no_current = Err(Error::IllegalState(Violation::NoCurrentElement));
    assert_eq!(cursor.remove(&mut tens), no_current);
    cursor.next(&tens).unwrap();
    assert_eq!(cursor.remove(&mut tens), Ok(()));
    assert_eq!(cursor.remove(&mut tens), no_current);
    assert_eq!(tens.to_vec(), vec![20, 30]);
}

fn remove_after_set<S>(sequence: &mut S) -> Vec<i32>
where
    S: Sequence<Item = i32>,
{
    let mut cursor = sequence.list_cursor();
    assert_eq!(cursor.next(&*sequence), Ok(&10));
    assert_eq!(cursor.set(sequence, 11), Ok(10));
    assert_eq!(
        cursor.remove(sequence),
        Err(Error::IllegalState(Violation::ReplacedSinceMove))
    );
    assert_eq!(cursor.set(sequence, 12), Ok(11));
    assert_eq!(cursor.next(&*sequence), Ok(&20));
    assert_eq!(cursor.remove(sequence), Ok(()));
    sequence.to_vec()
}

#[rstest]
fn test_remove_after_set_refused(mut tens: ArraySequence<i32>) {
    assert_eq!(remove_after_set(&mut tens), vec![12, 30]);
    let mut linked: LinkedSequence<_> = [10, 20, 30].into_iter().collect();
    assert_eq!(remove_after_set(&mut linked), vec![12, 30]);
}

#[rstest]
fn test_set_repeatable_until_add(mut tens: ArraySequence<i32>) {
    let mut cursor = tens.list_cursor();
    cursor.next(&tens).unwrap();
    assert_eq!(cursor.set(&mut tens, 11), Ok(10));
    assert_eq!(cursor.set(&mut tens, 12), Ok(11));
    cursor.add(&mut tens, 15).unwrap();
    assert_eq!(
        cursor.set(&mut tens, 13),
        Err(Error::IllegalState(Violation::NoCurrentElement))
    );
    assert_eq!(cursor.next(&tens), Ok(&20));
    assert_eq!(tens.to_vec(), vec![12, 15, 20, 30]);
}

#[rstest]
fn test_bidirectional_walk(mut tens: ArraySequence<i32>) {
    let mut cursor = tens.list_cursor();
    assert_eq!(cursor.previous_index(), None);
    cursor.next(&tens).unwrap();
    cursor.next(&tens).unwrap();
    assert_eq!(cursor.next_index(), 2);
    assert_eq!(cursor.previous_index(), Some(1));
    assert_eq!(cursor.previous(&tens), Ok(&20));
    assert_eq!(cursor.next_index(), 1);
    // removing after previous leaves the cursor in place
    cursor.remove(&mut tens).unwrap();
    assert_eq!(cursor.next_index(), 1);
    assert_eq!(cursor.next(&tens), Ok(&30));
    assert_eq!(tens.to_vec(), vec![10, 30]);
}

#[rstest]
fn test_add_at_cursor() {
    let mut sequence: LinkedSequence<_> = ['a', 'c'].into_iter().collect();
    let mut cursor = sequence.list_cursor();
    cursor.next(&sequence).unwrap();
    cursor.add(&mut sequence, 'b').unwrap();
    assert_eq!(ListCursor::<LinkedSequence<char>>::next_index(&cursor), 2);
    assert_eq!(cursor.previous(&sequence), Ok(&'b'));
    cursor.add(&mut sequence, '_').unwrap();
    assert_eq!(sequence.to_vec(), vec!['a', '_', 'b', 'c']);
}

#[rstest]
fn test_remove_unsupported() {
    let mut bag = AppendOnlyBag::new();
    bag.add(1).unwrap();
    let mut cursor = bag.cursor();
    cursor.next(&bag).unwrap();
    assert_eq!(
        cursor.remove(&mut bag),
        Err(Error::Unsupported(Operation::Remove))
    );

    let mut frozen = FrozenSequence::from(vec![1]);
    let mut cursor = frozen.list_cursor();
    cursor.next(&frozen).unwrap();
    assert_eq!(
        cursor.remove(&mut frozen),
        Err(Error::Unsupported(Operation::RemoveAt))
    );
}

#[rstest]
fn test_iter(tens: ArraySequence<i32>) {
    let mut iter = tens.iter();
    assert_eq!(iter.size_hint(), (0, Some(3)));
    assert_eq!(iter.next(), Some(&10));
    assert_eq!(iter.by_ref().count(), 2);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.size_hint(), (0, Some(0)));
}

#[rstest]
fn test_debug(tens: ArraySequence<i32>) {
    let mut cursor: IndexCursor<_> = tens.list_cursor();
    cursor.next(&tens).unwrap();
    assert_debug_snapshot!(cursor, @r###"
    IndexCursor {
        cursor: 1,
        last: LastReturned {
            position: Some(
                0,
            ),
            replaced: false,
        },
        fail_fast: FailFast {
            expected: 0,
            tripped: false,
        },
    }
    "###);
}

#[rstest]
fn test_iter_keeps_error(restless: Restless) {
    let mut iter = restless.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.error(), None);
    restless.touch();
    assert_eq!(iter.next(), None);
    assert_eq!(iter.error(), Some(&Error::ConcurrentModification));
    assert_eq!(iter.next(), None);
}

#[rstest]
fn test_stream_keeps_error(restless: Restless) {
    let mut stream = restless.stream();
    assert_eq!(stream.next(), Some(&1));
    restless.touch();
    assert_eq!(stream.next(), None);
    assert_eq!(stream.error(), Some(&Error::ConcurrentModification));

    let complete = restless.stream();
    assert_eq!(complete.count(), 3);
    let mut drained = restless.stream();
    assert_eq!(drained.by_ref().count(), 3);
    assert_eq!(drained.error(), None);
}
