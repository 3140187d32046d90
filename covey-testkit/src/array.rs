use std::fmt;
use std::hash::{Hash, Hasher};

use covey_collection::error::{self, Error};
use covey_collection::{
    Bag, ElementHash, Family, IndexCursor, ModCount, Random, Result, Sequence,
    SequenceSpliterator,
};

/// A growable sequence backed by a vector.
#[derive(Clone)]
pub struct ArraySequence<E> {
    elements: Vec<E>,
    mod_count: ModCount,
}

impl<E> ArraySequence<E> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            mod_count: ModCount::new(),
        }
    }

    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<E> {
        self.elements
    }
}

impl<E> Default for ArraySequence<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<Vec<E>> for ArraySequence<E> {
    fn from(elements: Vec<E>) -> Self {
        Self {
            elements,
            mod_count: ModCount::new(),
        }
    }
}

impl<E> FromIterator<E> for ArraySequence<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<E> Bag for ArraySequence<E> {
    type Item = E;
    type Cursor = IndexCursor<Self>;
    type Spliterator = SequenceSpliterator<Self>;

    const FAMILY: Family = Family::Sequence;

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn generation(&self) -> u64 {
        self.mod_count.get()
    }

    fn cursor(&self) -> Self::Cursor {
        IndexCursor::new(self)
    }

    fn add(&mut self, element: E) -> Result<bool> {
        self.elements.push(element);
        self.mod_count.bump();
        Ok(true)
    }

    fn clear(&mut self) -> Result<()> {
        self.elements.clear();
        self.mod_count.bump();
        Ok(())
    }

    fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.elements.clone()
    }
}

impl<E> Sequence for ArraySequence<E> {
    type Access = Random;
    type ListCursor = IndexCursor<Self>;

    fn get(&self, index: usize) -> Result<&E> {
        self.elements.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.elements.len(),
        })
    }

    fn set(&mut self, index: usize, element: E) -> Result<E> {
        error::check_index(index, self.elements.len())?;
        Ok(std::mem::replace(&mut self.elements[index], element))
    }

    fn insert(&mut self, index: usize, element: E) -> Result<()> {
        error::check_position(index, self.elements.len())?;
        self.elements.insert(index, element);
        self.mod_count.bump();
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<E> {
        error::check_index(index, self.elements.len())?;
        let removed = self.elements.remove(index);
        self.mod_count.bump();
        Ok(removed)
    }
}

impl<E: fmt::Debug> fmt::Debug for ArraySequence<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.elements).finish()
    }
}

impl<E: PartialEq> PartialEq for ArraySequence<E> {
    fn eq(&self, other: &Self) -> bool {
        self.contents_eq(other)
    }
}

impl<E: Eq> Eq for ArraySequence<E> {}

impl<E: ElementHash> Hash for ArraySequence<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.contents_hash());
    }
}
