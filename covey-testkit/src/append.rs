use std::fmt;

use covey_collection::error::Violation;
use covey_collection::{
    Bag, Cursor, CursorSpliterator, ElementHash, Error, FailFast, Family, ModCount, Result,
};

/// A multiset that only grows.
///
/// Elements can be added but never removed. The bag may be bounded, in
/// which case adding to a full bag is an illegal state, and may restrict
/// the elements it admits, in which case adding any other element is an
/// invalid argument.
#[derive(Clone)]
pub struct AppendOnlyBag<E> {
    elements: Vec<E>,
    capacity: Option<usize>,
    admit: Option<fn(&E) -> bool>,
    mod_count: ModCount,
}

impl<E> AppendOnlyBag<E> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            capacity: None,
            admit: None,
            mod_count: ModCount::new(),
        }
    }

    /// Refuse additions once the bag holds `capacity` elements. A bag that
    /// already holds more keeps them and refuses every further addition.
    pub fn bounded(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Only admit elements for which `admit` holds.
    pub fn admitting(mut self, admit: fn(&E) -> bool) -> Self {
        self.admit = Some(admit);
        self
    }
}

impl<E> Default for AppendOnlyBag<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Bag for AppendOnlyBag<E> {
    type Item = E;
    type Cursor = AppendCursor;
    type Spliterator = CursorSpliterator<Self>;

    const FAMILY: Family = Family::Multiset;

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn generation(&self) -> u64 {
        self.mod_count.get()
    }

    fn cursor(&self) -> AppendCursor {
        AppendCursor {
            next: 0,
            fail_fast: FailFast::new(self.generation()),
        }
    }

    fn add(&mut self, element: E) -> Result<bool> {
        if let Some(admit) = self.admit {
            if !admit(&element) {
                return Err(Error::InvalidArgument("element not admitted".to_string()));
            }
        }
        if matches!(self.capacity, Some(capacity) if self.elements.len() >= capacity) {
            return Err(Error::IllegalState(Violation::CapacityReached));
        }
        self.elements.push(element);
        self.mod_count.bump();
        Ok(true)
    }
}

/// Cursor over an [`AppendOnlyBag`]. It cannot remove.
#[derive(Debug)]
pub struct AppendCursor {
    next: usize,
    fail_fast: FailFast,
}

impl<E> Cursor<AppendOnlyBag<E>> for AppendCursor {
    fn has_next(&self, source: &AppendOnlyBag<E>) -> bool {
        self.next < source.elements.len()
    }

    fn next<'s>(&mut self, source: &'s AppendOnlyBag<E>) -> Result<&'s E> {
        self.fail_fast.check(source.generation())?;
        let element = source
            .elements
            .get(self.next)
            .ok_or(Error::NoSuchElement)?;
        self.next += 1;
        Ok(element)
    }
}

impl<E: fmt::Debug> fmt::Debug for AppendOnlyBag<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.elements).finish()
    }
}

impl<E: PartialEq> PartialEq for AppendOnlyBag<E> {
    fn eq(&self, other: &Self) -> bool {
        self.contents_eq(other)
    }
}

impl<E: ElementHash> std::hash::Hash for AppendOnlyBag<E> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.contents_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use covey_collection::error::{Operation, Violation};
    use insta::assert_snapshot;

    #[test]
    fn test_capacity() {
        let mut bag = AppendOnlyBag::new().bounded(1);
        assert_eq!(bag.add('a'), Ok(true));
        assert_snapshot!(bag.add('b').unwrap_err().to_string(), @"illegal state: container is at capacity");
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn test_bounded_below_len() {
        let mut bag = AppendOnlyBag::new();
        bag.add(1).unwrap();
        bag.add(2).unwrap();
        let mut bag = bag.bounded(1);
        assert_eq!(
            bag.add(3),
            Err(Error::IllegalState(Violation::CapacityReached))
        );
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn test_admission() {
        let mut bag = AppendOnlyBag::new().admitting(|n: &i32| *n >= 0);
        assert_eq!(bag.add(3), Ok(true));
        assert_snapshot!(bag.add(-1).unwrap_err().to_string(), @"invalid argument: element not admitted");
    }

    #[test]
    fn test_removal_refused() {
        let mut bag = AppendOnlyBag::new();
        bag.add(1).unwrap();
        assert_eq!(bag.remove(&2), Ok(false));
        assert_eq!(bag.remove(&1), Err(Error::Unsupported(Operation::Remove)));
        assert_eq!(bag.clear(), Err(Error::Unsupported(Operation::Remove)));
    }
}
