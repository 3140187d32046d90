use std::fmt;
use std::hash::Hash;

use indexmap::IndexSet;

use covey_collection::error::Violation;
use covey_collection::{
    Bag, Characteristics, Cursor, CursorSpliterator, Error, FailFast, Family, ModCount, Result,
};

type AIndexSet<T> = IndexSet<T, ahash::RandomState>;

/// A set remembering insertion order.
///
/// Equality is set equality: two sets are equal when they hold the same
/// elements, whatever the order they were added in.
#[derive(Clone)]
pub struct IndexedSet<E> {
    elements: AIndexSet<E>,
    mod_count: ModCount,
}

impl<E> IndexedSet<E>
where
    E: Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            elements: AIndexSet::default(),
            mod_count: ModCount::new(),
        }
    }
}

impl<E> Default for IndexedSet<E>
where
    E: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FromIterator<E> for IndexedSet<E>
where
    E: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut elements = AIndexSet::default();
        elements.extend(iter);
        Self {
            elements,
            mod_count: ModCount::new(),
        }
    }
}

impl<E> Bag for IndexedSet<E>
where
    E: Hash + Eq,
{
    type Item = E;
    type Cursor = SetCursor;
    type Spliterator = CursorSpliterator<Self>;

    const FAMILY: Family = Family::Set;

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn generation(&self) -> u64 {
        self.mod_count.get()
    }

    fn cursor(&self) -> SetCursor {
        SetCursor {
            next: 0,
            last: None,
            fail_fast: FailFast::new(self.generation()),
        }
    }

    fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.elements.contains(element)
    }

    fn add(&mut self, element: E) -> Result<bool> {
        let added = self.elements.insert(element);
        if added {
            self.mod_count.bump();
        }
        Ok(added)
    }

    fn remove(&mut self, element: &E) -> Result<bool>
    where
        E: PartialEq,
    {
        let removed = self.elements.shift_remove(element);
        if removed {
            self.mod_count.bump();
        }
        Ok(removed)
    }

    fn clear(&mut self) -> Result<()> {
        self.elements.clear();
        self.mod_count.bump();
        Ok(())
    }

    fn spliterator(&self) -> Self::Spliterator {
        CursorSpliterator::sized(self, Characteristics::DISTINCT)
    }
}

/// Cursor over an [`IndexedSet`] in insertion order.
#[derive(Debug)]
pub struct SetCursor {
    next: usize,
    last: Option<usize>,
    fail_fast: FailFast,
}

impl<E> Cursor<IndexedSet<E>> for SetCursor
where
    E: Hash + Eq,
{
    fn has_next(&self, source: &IndexedSet<E>) -> bool {
        self.next < source.elements.len()
    }

    fn next<'s>(&mut self, source: &'s IndexedSet<E>) -> Result<&'s E> {
        self.fail_fast.check(source.generation())?;
        let element = source
            .elements
            .get_index(self.next)
            .ok_or(Error::NoSuchElement)?;
        self.last = Some(self.next);
        self.next += 1;
        Ok(element)
    }

    fn remove(&mut self, source: &mut IndexedSet<E>) -> Result<()> {
        let last = self
            .last
            .take()
            .ok_or(Error::IllegalState(Violation::NoCurrentElement))?;
        self.fail_fast.check(source.generation())?;
        source.elements.shift_remove_index(last);
        source.mod_count.bump();
        self.next = last;
        self.fail_fast.sync(source.generation());
        Ok(())
    }
}

impl<E: fmt::Debug> fmt::Debug for IndexedSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<E> PartialEq for IndexedSet<E>
where
    E: Hash + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        self.contents_eq(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn test_add_is_idempotent() {
        let mut set = IndexedSet::new();
        assert_eq!(set.add(1), Ok(true));
        assert_eq!(set.add(1), Ok(false));
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn test_cursor_remove_keeps_order() {
        let mut set: IndexedSet<_> = [5, 1, 4, 2].into_iter().collect();
        let mut cursor = set.cursor();
        while cursor.has_next(&set) {
            if *cursor.next(&set).unwrap() % 2 == 0 {
                cursor.remove(&mut set).unwrap();
            }
        }
        assert_eq!(set.to_vec(), vec![5, 1]);
    }

    #[rstest]
    fn test_equal_regardless_of_order() {
        let left: IndexedSet<_> = [1, 2, 3].into_iter().collect();
        let right: IndexedSet<_> = [3, 1, 2].into_iter().collect();
        assert_eq!(left, right);
    }
}
