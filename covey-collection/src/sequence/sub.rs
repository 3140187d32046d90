use std::fmt;

use crate::bag::{Bag, Family};
use crate::cursor::IndexCursor;
use crate::error::{self, Error, Operation, Result};
use crate::view::SequenceSpliterator;

use super::Sequence;

enum Parent<'a, S>
where
    S: ?Sized,
{
    Shared(&'a S),
    Exclusive(&'a mut S),
}

/// A view of the range `offset..offset + len` of a parent sequence.
///
/// The view shares the parent's storage. Positions are relative to the
/// start of the range. Structural changes made through a mutable view
/// shift the rest of the parent and resize the view; a read-only view
/// refuses every mutation.
pub struct SubSequence<'a, S>
where
    S: ?Sized,
{
    parent: Parent<'a, S>,
    offset: usize,
    len: usize,
}

impl<'a, S> SubSequence<'a, S>
where
    S: Sequence + ?Sized,
{
    pub(crate) fn shared(parent: &'a S, from: usize, to: usize) -> Result<Self> {
        error::check_range(from, to, parent.len())?;
        Ok(Self {
            parent: Parent::Shared(parent),
            offset: from,
            len: to - from,
        })
    }

    pub(crate) fn exclusive(parent: &'a mut S, from: usize, to: usize) -> Result<Self> {
        error::check_range(from, to, parent.len())?;
        Ok(Self {
            parent: Parent::Exclusive(parent),
            offset: from,
            len: to - from,
        })
    }

    /// Whether changes through this view reach the parent.
    pub fn is_mutable(&self) -> bool {
        matches!(self.parent, Parent::Exclusive(_))
    }

    fn parent(&self) -> &S {
        match &self.parent {
            Parent::Shared(parent) => *parent,
            Parent::Exclusive(parent) => &**parent,
        }
    }

    fn parent_mut(&mut self, operation: Operation) -> Result<&mut S> {
        match &mut self.parent {
            Parent::Shared(_) => Err(Error::Unsupported(operation)),
            Parent::Exclusive(parent) => Ok(&mut **parent),
        }
    }
}

impl<S> Bag for SubSequence<'_, S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Cursor = IndexCursor<Self>;
    type Spliterator = SequenceSpliterator<Self>;

    const FAMILY: Family = Family::Sequence;

    fn len(&self) -> usize {
        self.len
    }

    fn generation(&self) -> u64 {
        self.parent().generation()
    }

    fn cursor(&self) -> Self::Cursor {
        IndexCursor::new(self)
    }

    fn add(&mut self, element: Self::Item) -> Result<bool> {
        self.insert(self.len, element)?;
        Ok(true)
    }
}

impl<S> Sequence for SubSequence<'_, S>
where
    S: Sequence + ?Sized,
{
    type Access = S::Access;
    type ListCursor = IndexCursor<Self>;

    fn get(&self, index: usize) -> Result<&Self::Item> {
        error::check_index(index, self.len)?;
        self.parent().get(self.offset + index)
    }

    fn set(&mut self, index: usize, element: Self::Item) -> Result<Self::Item> {
        error::check_index(index, self.len)?;
        let offset = self.offset;
        self.parent_mut(Operation::Set)?
            .set(offset + index, element)
    }

    fn insert(&mut self, index: usize, element: Self::Item) -> Result<()> {
        error::check_position(index, self.len)?;
        let offset = self.offset;
        self.parent_mut(Operation::Insert)?
            .insert(offset + index, element)?;
        self.len += 1;
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<Self::Item> {
        error::check_index(index, self.len)?;
        let offset = self.offset;
        let removed = self
            .parent_mut(Operation::RemoveAt)?
            .remove_at(offset + index)?;
        self.len -= 1;
        Ok(removed)
    }
}

impl<S> fmt::Debug for SubSequence<'_, S>
where
    S: Sequence + ?Sized,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<S> PartialEq for SubSequence<'_, S>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.contents_eq(other)
    }
}
