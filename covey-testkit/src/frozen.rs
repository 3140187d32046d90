use std::fmt;

use covey_collection::error::Operation;
use covey_collection::{
    Bag, Error, Family, IndexCursor, Random, Result, Sequence, SequenceSpliterator,
};

/// An immutable sequence. Every mutating operation is refused.
#[derive(Clone)]
pub struct FrozenSequence<E> {
    elements: Box<[E]>,
}

impl<E> From<Vec<E>> for FrozenSequence<E> {
    fn from(elements: Vec<E>) -> Self {
        Self {
            elements: elements.into_boxed_slice(),
        }
    }
}

impl<E> FromIterator<E> for FrozenSequence<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<E> Bag for FrozenSequence<E> {
    type Item = E;
    type Cursor = IndexCursor<Self>;
    type Spliterator = SequenceSpliterator<Self>;

    const FAMILY: Family = Family::Sequence;

    fn len(&self) -> usize {
        self.elements.len()
    }

    // never changes
    fn generation(&self) -> u64 {
        0
    }

    fn cursor(&self) -> Self::Cursor {
        IndexCursor::new(self)
    }

    fn clear(&mut self) -> Result<()> {
        Err(Error::Unsupported(Operation::Clear))
    }
}

impl<E> Sequence for FrozenSequence<E> {
    type Access = Random;
    type ListCursor = IndexCursor<Self>;

    fn get(&self, index: usize) -> Result<&E> {
        self.elements.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.elements.len(),
        })
    }
}

impl<E: fmt::Debug> fmt::Debug for FrozenSequence<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<E: PartialEq> PartialEq for FrozenSequence<E> {
    fn eq(&self, other: &Self) -> bool {
        self.contents_eq(other)
    }
}
