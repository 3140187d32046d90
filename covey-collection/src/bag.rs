use strum_macros::Display;

use crate::cursor::{Cursor, Iter};
use crate::error::{Error, Operation, Result};
use crate::hash::{self, ElementHash};
use crate::view::{Spliterator, Stream};

/// The equality family a container belongs to.
///
/// Containers are only ever equal to containers of the same family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Family {
    /// Unordered, duplicates allowed. Equal when every element occurs
    /// equally often in both.
    Multiset,
    /// Unordered, no duplicates. Equal when both contain the same elements.
    Set,
    /// Ordered by position. Equal when pairwise equal in order.
    Sequence,
}

/// The core container interface: an unordered group of elements.
///
/// A container implements the primitives `len`, `generation` and `cursor`
/// and inherits everything else. Mutating operations are optional: the
/// defaults refuse with [`Error::Unsupported`], or build on the cursor's
/// removal primitive, which may itself be unsupported. Override any
/// default when the container can do better, as long as the observable
/// behavior stays the same.
pub trait Bag {
    type Item;

    /// The cursor the default operations traverse with.
    type Cursor: Cursor<Self>;

    /// The spliterator [`Bag::spliterator`] binds.
    ///
    /// [`CursorSpliterator`](crate::view::CursorSpliterator) is the
    /// weakest choice; sequences usually pick
    /// [`SequenceSpliterator`](crate::view::SequenceSpliterator).
    type Spliterator: Spliterator<Self>;

    const FAMILY: Family;

    /// The number of elements.
    fn len(&self) -> usize;

    /// The structural modification counter.
    ///
    /// It must change whenever the size or arrangement of the elements
    /// changes. Cursors compare it between steps to fail fast.
    fn generation(&self) -> u64;

    /// A cursor positioned before the first element.
    fn cursor(&self) -> Self::Cursor;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether some element equals `element`.
    fn contains(&self, element: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.iter().any(|e| e == element)
    }

    /// Ensure `element` is present.
    ///
    /// Returns whether the content changed. Containers may refuse with
    /// [`Error::Unsupported`], with [`Error::InvalidArgument`] for elements
    /// they do not admit, or with [`Error::IllegalState`] when they cannot
    /// take more elements right now.
    fn add(&mut self, element: Self::Item) -> Result<bool> {
        let _ = element;
        Err(Error::Unsupported(Operation::Add))
    }

    /// Remove one element equal to `element`, if there is one.
    fn remove(&mut self, element: &Self::Item) -> Result<bool>
    where
        Self::Item: PartialEq,
    {
        let mut cursor = self.cursor();
        while cursor.has_next(self) {
            if cursor.next(self)? == element {
                cursor.remove(self)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn contains_all<O>(&self, other: &O) -> bool
    where
        O: Bag<Item = Self::Item> + ?Sized,
        Self::Item: PartialEq,
    {
        other.iter().all(|e| self.contains(e))
    }

    /// Add a copy of every element of `other`.
    fn add_all<O>(&mut self, other: &O) -> Result<bool>
    where
        O: Bag<Item = Self::Item> + ?Sized,
        Self::Item: Clone,
    {
        let mut changed = false;
        for element in other.iter() {
            changed |= self.add(element.clone())?;
        }
        Ok(changed)
    }

    /// Remove every element that `other` contains.
    fn remove_all<O>(&mut self, other: &O) -> Result<bool>
    where
        O: Bag<Item = Self::Item> + ?Sized,
        Self::Item: PartialEq,
    {
        self.remove_if(|e| other.contains(e))
    }

    /// Remove every element that `other` does not contain.
    fn retain_all<O>(&mut self, other: &O) -> Result<bool>
    where
        O: Bag<Item = Self::Item> + ?Sized,
        Self::Item: PartialEq,
    {
        self.remove_if(|e| !other.contains(e))
    }

    /// Remove every element matching `predicate`.
    ///
    /// If the cursor cannot remove, this fails at the first match.
    fn remove_if<F>(&mut self, mut predicate: F) -> Result<bool>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.try_remove_if(|e| Ok::<_, Error>(predicate(e)))
    }

    /// Like [`Bag::remove_if`] with a fallible predicate.
    ///
    /// A predicate error aborts the traversal and is returned as is;
    /// elements removed before it stay removed.
    fn try_remove_if<F, X>(&mut self, mut predicate: F) -> std::result::Result<bool, X>
    where
        F: FnMut(&Self::Item) -> std::result::Result<bool, X>,
        X: From<Error>,
    {
        let mut removed = false;
        let mut cursor = self.cursor();
        while cursor.has_next(self) {
            let element = cursor.next(self)?;
            if predicate(element)? {
                cursor.remove(self)?;
                removed = true;
            }
        }
        Ok(removed)
    }

    /// Remove every element.
    fn clear(&mut self) -> Result<()> {
        let mut cursor = self.cursor();
        while cursor.has_next(self) {
            cursor.next(self)?;
            cursor.remove(self)?;
        }
        Ok(())
    }

    /// A borrowing iterator in cursor order.
    fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Self::Item),
    {
        self.iter().for_each(f)
    }

    /// A fixed-size snapshot, independent of the container.
    fn to_array(&self) -> Box<[Self::Item]>
    where
        Self::Item: Clone,
    {
        self.iter().cloned().collect()
    }

    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Compare contents under the container family's equality.
    fn contents_eq<O>(&self, other: &O) -> bool
    where
        O: Bag<Item = Self::Item> + ?Sized,
        Self::Item: PartialEq,
    {
        if Self::FAMILY != O::FAMILY || self.len() != other.len() {
            return false;
        }
        match Self::FAMILY {
            Family::Sequence => self.iter().eq(other.iter()),
            Family::Set => self.contains_all(other),
            Family::Multiset => self
                .iter()
                .all(|e| occurrences(self, e) == occurrences(other, e)),
        }
    }

    /// The hash consistent with [`Bag::contents_eq`].
    fn contents_hash(&self) -> i32
    where
        Self::Item: ElementHash,
    {
        match Self::FAMILY {
            Family::Sequence => hash::ordered_hash(self.iter()),
            Family::Set | Family::Multiset => hash::unordered_hash(self.iter()),
        }
    }

    fn spliterator(&self) -> Self::Spliterator {
        <Self::Spliterator as Spliterator<Self>>::bind(self)
    }

    /// A lazy sequential stream; the spliterator binds at the first pull.
    fn stream(&self) -> Stream<'_, Self> {
        Stream::new(self)
    }

    /// A lazy parallel stream driven by the container's spliterator.
    #[cfg(feature = "rayon")]
    fn par_stream(&self) -> crate::view::ParStream<'_, Self> {
        crate::view::ParStream::new(self)
    }
}

fn occurrences<B>(bag: &B, element: &B::Item) -> usize
where
    B: Bag + ?Sized,
    B::Item: PartialEq,
{
    bag.iter().filter(|e| *e == element).count()
}
