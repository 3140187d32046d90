//! Ordered sequences: bags with positions.
mod sort;
mod sub;

use std::cmp::Ordering;

use crate::bag::Bag;
use crate::cursor::{Cursor, ListCursor};
use crate::error::{self, Error, Operation, Result};

pub use sub::SubSequence;

/// The cost class of a sequence's positional access.
pub trait Access {
    const RANDOM: bool;
}

/// `get` runs in constant time.
#[derive(Debug)]
pub enum Random {}

/// `get` walks the sequence.
#[derive(Debug)]
pub enum Sequential {}

impl Access for Random {
    const RANDOM: bool = true;
}

impl Access for Sequential {
    const RANDOM: bool = false;
}

/// Sequences whose positional access is cheap.
///
/// Implemented for every sequence that declares `type Access = Random`,
/// so the bound and [`is_random_access`] always agree.
pub trait RandomAccess: Sequence {}

impl<S> RandomAccess for S where S: Sequence<Access = Random> + ?Sized {}

/// Whether `S` declares constant-time positional access.
pub fn is_random_access<S>() -> bool
where
    S: Sequence + ?Sized,
{
    <S::Access as Access>::RANDOM
}

/// An ordered sequence: a bag whose elements have positions
/// `0..len()`.
///
/// `get` is the only required primitive. `set`, `insert` and `remove_at`
/// are optional and refuse by default. Implementers pick their bag family
/// as [`Family::Sequence`](crate::Family::Sequence). Sequences with cheap
/// positional access use [`IndexCursor`](crate::IndexCursor) as their
/// list cursor; others bring a cursor that walks their own structure.
pub trait Sequence: Bag {
    /// [`Random`] or [`Sequential`].
    type Access: Access;

    type ListCursor: ListCursor<Self>;

    /// Get the element at `index`.
    fn get(&self, index: usize) -> Result<&Self::Item>;

    /// Replace the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, element: Self::Item) -> Result<Self::Item> {
        let _ = (index, element);
        Err(Error::Unsupported(Operation::Set))
    }

    /// Insert `element` at `index`, shifting later elements up.
    fn insert(&mut self, index: usize, element: Self::Item) -> Result<()> {
        let _ = (index, element);
        Err(Error::Unsupported(Operation::Insert))
    }

    /// Remove the element at `index`, shifting later elements down.
    fn remove_at(&mut self, index: usize) -> Result<Self::Item> {
        let _ = index;
        Err(Error::Unsupported(Operation::RemoveAt))
    }

    /// The position of the first element equal to `element`.
    fn index_of(&self, element: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.iter().position(|e| e == element)
    }

    /// The position of the last element equal to `element`.
    fn last_index_of(&self, element: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        let mut cursor = <Self::ListCursor as ListCursor<Self>>::at(self, self.len());
        while cursor.has_previous() {
            match cursor.previous(self) {
                Ok(e) if e == element => return Some(cursor.next_index()),
                Ok(_) => {}
                Err(_) => return None,
            }
        }
        None
    }

    fn list_cursor(&self) -> Self::ListCursor {
        <Self::ListCursor as ListCursor<Self>>::at(self, 0)
    }

    /// A list cursor whose first `next` returns the element at `index`.
    fn list_cursor_at(&self, index: usize) -> Result<Self::ListCursor> {
        error::check_position(index, self.len())?;
        Ok(<Self::ListCursor as ListCursor<Self>>::at(self, index))
    }

    /// Insert copies of `other`'s elements, in its cursor order, starting
    /// at `index`.
    fn insert_all<O>(&mut self, index: usize, other: &O) -> Result<bool>
    where
        O: Bag<Item = Self::Item> + ?Sized,
        Self::Item: Clone,
    {
        error::check_position(index, self.len())?;
        let mut at = index;
        for element in other.iter() {
            self.insert(at, element.clone())?;
            at += 1;
        }
        Ok(at != index)
    }

    /// A read-only view of `from..to`. Mutation through it is refused.
    fn sub_sequence(&self, from: usize, to: usize) -> Result<SubSequence<'_, Self>> {
        SubSequence::shared(self, from, to)
    }

    /// A view of `from..to` whose changes write through to this sequence.
    fn sub_sequence_mut(&mut self, from: usize, to: usize) -> Result<SubSequence<'_, Self>> {
        SubSequence::exclusive(self, from, to)
    }

    /// Replace every element with `transform` of it, in order.
    fn replace_all<F>(&mut self, mut transform: F) -> Result<()>
    where
        F: FnMut(&Self::Item) -> Self::Item,
    {
        self.try_replace_all(|e| Ok::<_, Error>(transform(e)))
    }

    /// Like [`Sequence::replace_all`] with a fallible transform.
    fn try_replace_all<F, X>(&mut self, mut transform: F) -> std::result::Result<(), X>
    where
        F: FnMut(&Self::Item) -> std::result::Result<Self::Item, X>,
        X: From<Error>,
    {
        let mut cursor = self.list_cursor();
        while cursor.has_next(self) {
            let replacement = transform(cursor.next(self)?)?;
            cursor.set(self, replacement)?;
        }
        Ok(())
    }

    /// Sort by the elements' natural order. The sort is stable.
    fn sort(&mut self) -> Result<()>
    where
        Self::Item: Ord + Clone,
    {
        self.sort_by(Ord::cmp)
    }

    /// Sort by the elements' partial order.
    ///
    /// Fails with [`Error::Incomparable`] when two elements have no order,
    /// such as a NaN against anything.
    fn sort_partial(&mut self) -> Result<()>
    where
        Self::Item: PartialOrd + Clone,
    {
        self.try_sort_by(|a, b| a.partial_cmp(b).ok_or(Error::Incomparable))
    }

    /// Sort with a comparator. The sort is stable.
    fn sort_by<F>(&mut self, mut compare: F) -> Result<()>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
        Self::Item: Clone,
    {
        self.try_sort_by(|a, b| Ok::<_, Error>(compare(a, b)))
    }

    fn sort_by_key<K, F>(&mut self, mut key: F) -> Result<()>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
        Self::Item: Clone,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)))
    }

    /// Sort with a fallible comparator. The sort is stable.
    ///
    /// The elements are snapshot, sorted, and written back through a list
    /// cursor in a single forward pass, so sequences with slow positional
    /// writes are not penalised. A comparator error aborts the sort before
    /// anything is written back.
    fn try_sort_by<F, X>(&mut self, compare: F) -> std::result::Result<(), X>
    where
        F: FnMut(&Self::Item, &Self::Item) -> std::result::Result<Ordering, X>,
        Self::Item: Clone,
        X: From<Error>,
    {
        let sorted = sort::stable_sorted(self.to_vec(), compare)?;
        let mut cursor = self.list_cursor();
        for element in sorted {
            cursor.next(self)?;
            cursor.set(self, element)?;
        }
        Ok(())
    }
}
