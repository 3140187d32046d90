use std::fmt;
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::modcount::FailFast;
use crate::sequence::Sequence;

use super::{Cursor, LastReturned};

/// A bidirectional cursor over a sequence.
///
/// The cursor sits between two elements: `next` returns the element after
/// it, `previous` the element before it. `remove` and `set` act on the
/// element most recently returned by either. `set` may repeat; `remove`
/// is refused once the element was replaced, and both are refused after a
/// `remove` or `add` until the cursor moves again.
pub trait ListCursor<S>: Cursor<S> + Sized
where
    S: Sequence + ?Sized,
{
    /// A cursor whose first `next` returns the element at `index`.
    ///
    /// Callers check `index <= source.len()` first.
    fn at(source: &S, index: usize) -> Self;

    fn has_previous(&self) -> bool;

    /// The index of the element a subsequent `next` would return.
    fn next_index(&self) -> usize;

    /// The index of the element a subsequent `previous` would return.
    fn previous_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    fn previous<'s>(&mut self, source: &'s S) -> Result<&'s S::Item>;

    /// Replace the element most recently returned, returning the old one.
    fn set(&mut self, source: &mut S, element: S::Item) -> Result<S::Item>;

    /// Insert before the element a subsequent `next` would return.
    fn add(&mut self, source: &mut S, element: S::Item) -> Result<()>;
}

/// A list cursor built on a sequence's positional primitives.
///
/// Every step is one `get`, `set`, `insert` or `remove_at`, so it suits
/// sequences whose positional access is cheap.
pub struct IndexCursor<S>
where
    S: ?Sized,
{
    cursor: usize,
    last: LastReturned<usize>,
    fail_fast: FailFast,
    source: PhantomData<fn(&S)>,
}

impl<S> IndexCursor<S>
where
    S: Sequence + ?Sized,
{
    /// A cursor before the first element.
    pub fn new(source: &S) -> Self {
        Self::at(source, 0)
    }
}

impl<S> Cursor<S> for IndexCursor<S>
where
    S: Sequence + ?Sized,
{
    fn has_next(&self, source: &S) -> bool {
        self.cursor < source.len()
    }

    fn next<'s>(&mut self, source: &'s S) -> Result<&'s S::Item> {
        self.fail_fast.check(source.generation())?;
        let index = self.cursor;
        if index >= source.len() {
            return Err(Error::NoSuchElement);
        }
        let element = source.get(index)?;
        self.cursor = index + 1;
        self.last.moved(index);
        Ok(element)
    }

    fn remove(&mut self, source: &mut S) -> Result<()> {
        let last = self.last.for_remove()?;
        self.fail_fast.check(source.generation())?;
        source.remove_at(last)?;
        if last < self.cursor {
            self.cursor -= 1;
        }
        self.last.clear();
        self.fail_fast.sync(source.generation());
        Ok(())
    }
}

impl<S> ListCursor<S> for IndexCursor<S>
where
    S: Sequence + ?Sized,
{
    fn at(source: &S, index: usize) -> Self {
        Self {
            cursor: index,
            last: LastReturned::new(),
            fail_fast: FailFast::new(source.generation()),
            source: PhantomData,
        }
    }

    fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    fn next_index(&self) -> usize {
        self.cursor
    }

    fn previous<'s>(&mut self, source: &'s S) -> Result<&'s S::Item> {
        self.fail_fast.check(source.generation())?;
        let index = self.cursor.checked_sub(1).ok_or(Error::NoSuchElement)?;
        let element = source.get(index)?;
        self.cursor = index;
        self.last.moved(index);
        Ok(element)
    }

    fn set(&mut self, source: &mut S, element: S::Item) -> Result<S::Item> {
        let last = self.last.for_set()?;
        self.fail_fast.check(source.generation())?;
        let previous = source.set(last, element)?;
        self.last.mark_replaced();
        self.fail_fast.sync(source.generation());
        Ok(previous)
    }

    fn add(&mut self, source: &mut S, element: S::Item) -> Result<()> {
        self.fail_fast.check(source.generation())?;
        source.insert(self.cursor, element)?;
        self.cursor += 1;
        self.last.clear();
        self.fail_fast.sync(source.generation());
        Ok(())
    }
}

impl<S> fmt::Debug for IndexCursor<S>
where
    S: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexCursor")
            .field("cursor", &self.cursor)
            .field("last", &self.last)
            .field("fail_fast", &self.fail_fast)
            .finish()
    }
}
