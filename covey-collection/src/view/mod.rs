//! Lazy views: spliterators and the streams built on them.
//!
//! A spliterator is a detached traversal that may also split off part of
//! its range for another consumer. Streams are ordinary iterators (or,
//! with the `rayon` feature, parallel iterators) over a container that
//! bind their spliterator only when the first element is pulled.
#[cfg(feature = "rayon")]
mod parallel;
mod spliterator;
mod stream;

use std::ops::{BitOr, BitOrAssign};

use crate::bag::Bag;
use crate::error::Result;

#[cfg(feature = "rayon")]
pub use parallel::ParStream;
pub use spliterator::{CursorSpliterator, SequenceSpliterator};
pub use stream::Stream;

/// Properties a spliterator guarantees about the elements it yields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Characteristics(u16);

static_assertions::assert_eq_size!(Characteristics, u16);

impl Characteristics {
    /// No two elements are equal.
    pub const DISTINCT: Self = Self(0x0001);
    /// Elements come in a sorted order.
    pub const SORTED: Self = Self(0x0004);
    /// Elements come in a defined encounter order.
    pub const ORDERED: Self = Self(0x0010);
    /// The size estimate is exact.
    pub const SIZED: Self = Self(0x0040);
    /// The source cannot be structurally modified.
    pub const IMMUTABLE: Self = Self(0x0400);
    /// Every split-off part is also sized.
    pub const SUBSIZED: Self = Self(0x4000);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for Characteristics {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Characteristics {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

/// A splittable traversal over the elements of `S`.
///
/// Like a [`Cursor`](crate::cursor::Cursor), a spliterator is handed its
/// source at every step. When it reads the source's structure is up to
/// the implementation: at [`Spliterator::bind`] (early binding) or at the
/// first traversal, split or size request (late binding).
pub trait Spliterator<S>: Sized
where
    S: Bag + ?Sized,
{
    /// Create a spliterator over the whole of `source`.
    fn bind(source: &S) -> Self;

    /// Yield the next element, or `None` when the range is exhausted.
    fn try_advance<'s>(&mut self, source: &'s S) -> Result<Option<&'s S::Item>>;

    /// Feed every remaining element to `action`, in order.
    fn for_each_remaining<'s, F>(&mut self, source: &'s S, mut action: F) -> Result<()>
    where
        F: FnMut(&'s S::Item),
    {
        while let Some(element) = self.try_advance(source)? {
            action(element);
        }
        Ok(())
    }

    /// Split off a prefix of the remaining range.
    ///
    /// On success the returned spliterator covers the elements before the
    /// ones `self` still covers.
    fn try_split(&mut self, source: &S) -> Option<Self> {
        let _ = source;
        None
    }

    /// The number of remaining elements, or `usize::MAX` when unknown.
    fn estimate_size(&self, source: &S) -> usize;

    /// The number of remaining elements, if it is known exactly.
    fn exact_size(&self, source: &S) -> Option<usize> {
        if self.characteristics().contains(Characteristics::SIZED) {
            Some(self.estimate_size(source))
        } else {
            None
        }
    }

    fn characteristics(&self) -> Characteristics;
}
