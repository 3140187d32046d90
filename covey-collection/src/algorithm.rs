//! Generic algorithms over the sequence contract.
use std::cmp::Ordering;

use crate::cursor::{Cursor, ListCursor};
use crate::error::Result;
use crate::sequence::{is_random_access, Sequence};

// below this size index probing is cheap whatever the access cost
const BINARY_SEARCH_THRESHOLD: usize = 5000;

/// Search a sorted sequence for `key`.
///
/// The inner result follows [`slice::binary_search`]: `Ok` with the
/// position of a matching element, or `Err` with the position where `key`
/// could be inserted keeping the order.
pub fn binary_search<S>(sequence: &S, key: &S::Item) -> Result<std::result::Result<usize, usize>>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    binary_search_by(sequence, |element| element.cmp(key))
}

/// Search a sorted sequence with a comparator reporting how an element
/// orders against the target.
///
/// Random access sequences, and small ones, are probed by index. Others
/// are probed through a single list cursor that moves back and forth, so
/// the whole search takes O(n) cursor steps and O(log n) comparisons.
pub fn binary_search_by<S, F>(
    sequence: &S,
    compare: F,
) -> Result<std::result::Result<usize, usize>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
{
    if is_random_access::<S>() || sequence.len() < BINARY_SEARCH_THRESHOLD {
        indexed_binary_search(sequence, compare)
    } else {
        cursor_binary_search(sequence, compare)
    }
}

fn indexed_binary_search<S, F>(
    sequence: &S,
    mut compare: F,
) -> Result<std::result::Result<usize, usize>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
{
    let mut low = 0;
    let mut high = sequence.len();
    while low < high {
        let middle = low + (high - low) / 2;
        match compare(sequence.get(middle)?) {
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle,
            Ordering::Equal => return Ok(Ok(middle)),
        }
    }
    Ok(Err(low))
}

fn cursor_binary_search<S, F>(
    sequence: &S,
    mut compare: F,
) -> Result<std::result::Result<usize, usize>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
{
    let mut low = 0;
    let mut high = sequence.len();
    let mut cursor = sequence.list_cursor();
    while low < high {
        let middle = low + (high - low) / 2;
        match compare(seek(&mut cursor, sequence, middle)?) {
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle,
            Ordering::Equal => return Ok(Ok(middle)),
        }
    }
    Ok(Err(low))
}

/// Move `cursor` to return the element at `index`, stepping forward or
/// backward from where it is.
fn seek<'s, S, C>(cursor: &mut C, sequence: &'s S, index: usize) -> Result<&'s S::Item>
where
    S: Sequence + ?Sized,
    C: ListCursor<S>,
{
    if cursor.next_index() <= index {
        loop {
            let position = cursor.next_index();
            let element = cursor.next(sequence)?;
            if position == index {
                return Ok(element);
            }
        }
    } else {
        loop {
            let element = cursor.previous(sequence)?;
            if cursor.next_index() == index {
                return Ok(element);
            }
        }
    }
}
