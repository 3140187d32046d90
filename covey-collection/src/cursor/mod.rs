//! The iterator protocol.
//!
//! A cursor is detached from its container: it holds a position, not a
//! borrow, and every step is handed the container. That makes it possible
//! to mutate the container between two steps, which the cursor then
//! detects and reports as [`Error::ConcurrentModification`].
mod list;

use crate::bag::Bag;
use crate::error::{Error, Operation, Result, Violation};

pub use list::{IndexCursor, ListCursor};

/// A single-pass cursor over the elements of `S`.
pub trait Cursor<S>
where
    S: Bag + ?Sized,
{
    /// Whether a further `next` would yield an element.
    fn has_next(&self, source: &S) -> bool;

    /// Advance and return the next element.
    fn next<'s>(&mut self, source: &'s S) -> Result<&'s S::Item>;

    /// Remove the element most recently returned by `next`.
    ///
    /// Optional: cursors that cannot remove refuse with
    /// [`Error::Unsupported`].
    fn remove(&mut self, source: &mut S) -> Result<()> {
        let _ = source;
        Err(Error::Unsupported(Operation::Remove))
    }
}

/// The element a cursor's `remove` and `set` act on.
///
/// A traversal step records the position `P` of the element it returned.
/// `set` needs such a position; `remove` also needs that no `set` came
/// after it. Cursors clear the record after `remove` and `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastReturned<P> {
    position: Option<P>,
    replaced: bool,
}

impl<P: Copy> LastReturned<P> {
    pub fn new() -> Self {
        Self {
            position: None,
            replaced: false,
        }
    }

    pub fn moved(&mut self, position: P) {
        self.position = Some(position);
        self.replaced = false;
    }

    pub fn for_set(&self) -> Result<P> {
        self.position
            .ok_or(Error::IllegalState(Violation::NoCurrentElement))
    }

    pub fn for_remove(&self) -> Result<P> {
        let position = self.for_set()?;
        if self.replaced {
            return Err(Error::IllegalState(Violation::ReplacedSinceMove));
        }
        Ok(position)
    }

    pub fn mark_replaced(&mut self) {
        self.replaced = true;
    }

    pub fn clear(&mut self) {
        self.position = None;
        self.replaced = false;
    }
}

impl<P: Copy> Default for LastReturned<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// A borrowing iterator over a container, driven by its cursor.
///
/// The shared borrow rules out structural modification through the
/// container's own API for as long as the iterator lives. A container
/// with interior mutability can still change under it; the cursor error
/// then ends the iteration and is kept in [`Iter::error`].
pub struct Iter<'a, S>
where
    S: Bag + ?Sized,
{
    source: &'a S,
    cursor: S::Cursor,
    done: bool,
    error: Option<Error>,
}

impl<'a, S> Iter<'a, S>
where
    S: Bag + ?Sized,
{
    pub(crate) fn new(source: &'a S) -> Self {
        Self {
            source,
            cursor: source.cursor(),
            done: false,
            error: None,
        }
    }

    /// The error that ended the iteration early, if any.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }
}

impl<'a, S> Iterator for Iter<'a, S>
where
    S: Bag + ?Sized,
{
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || !self.cursor.has_next(self.source) {
            self.done = true;
            return None;
        }
        match self.cursor.next(self.source) {
            Ok(element) => Some(element),
            Err(error) => {
                self.done = true;
                self.error = Some(error);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(self.source.len()))
        }
    }
}

impl<S> std::iter::FusedIterator for Iter<'_, S> where S: Bag + ?Sized {}
